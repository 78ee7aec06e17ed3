//! Neo4j connection client.

use grafton_cypher::Statement;
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::params::to_query;

/// Configuration for connecting to the graph store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "neo4j".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "neo4j".to_string(),
            database: default_database(),
        }
    }
}

/// Client for executing compiled statements against Neo4j.
///
/// Cheap to clone; every request executes as one atomic statement over the
/// shared connection pool.
#[derive(Clone)]
pub struct StoreClient {
    graph: Graph,
}

impl StoreClient {
    /// Create a new client from config.
    ///
    /// Note: neo4rs uses a lazy deadpool: `Graph::connect` only creates the
    /// pool object and does NOT establish a real bolt connection yet. We run
    /// a cheap `RETURN 1` ping immediately so that callers can wrap this in a
    /// timeout and get a fast failure when the store is unreachable instead
    /// of hanging silently.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.database.as_str())
            .max_connections(8)
            .fetch_size(200)
            .build()
            .map_err(StoreError::Config)?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(StoreError::Connect)?;

        // Ping to force an actual TCP+bolt handshake so the caller's timeout works.
        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .map_err(StoreError::Connect)?;

        Ok(Self { graph })
    }

    /// Execute a compiled statement and collect all result rows.
    pub async fn execute(&self, statement: &Statement) -> StoreResult<Vec<neo4rs::Row>> {
        tracing::debug!(query = %statement.text, "executing statement");
        self.raw(to_query(statement)).await
    }

    /// Execute a raw driver query. Reserved for the fixed analytical queries
    /// and health checks; everything request-driven goes through `execute`.
    pub(crate) async fn raw(&self, query: Query) -> StoreResult<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        // A mid-stream failure surfaces as an error, not as a short result.
        while let Some(row) = result.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Node and relationship totals for the health endpoint.
    pub async fn counts(&self) -> StoreResult<StoreCounts> {
        let nodes = self
            .scalar_i64(Query::new(
                "MATCH (n) RETURN count(n) AS count".to_string(),
            ))
            .await?;
        let relationships = self
            .scalar_i64(Query::new(
                "MATCH ()-[r]->() RETURN count(r) AS count".to_string(),
            ))
            .await?;
        Ok(StoreCounts {
            nodes,
            relationships,
        })
    }

    async fn scalar_i64(&self, query: Query) -> StoreResult<i64> {
        let rows = self.raw(query).await?;
        match rows.first() {
            Some(row) => column_i64(row, "count"),
            None => Ok(0),
        }
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone, Serialize)]
pub struct StoreCounts {
    pub nodes: i64,
    pub relationships: i64,
}

/// Pull one named column out of a row as JSON.
pub fn column_json(row: &neo4rs::Row, column: &str) -> StoreResult<Value> {
    row.get::<Value>(column)
        .map_err(|e| StoreError::Row(format!("column `{column}`: {e:?}")))
}

/// Pull one named column out of a row as an integer.
pub fn column_i64(row: &neo4rs::Row, column: &str) -> StoreResult<i64> {
    row.get::<i64>(column)
        .map_err(|e| StoreError::Row(format!("column `{column}`: {e:?}")))
}
