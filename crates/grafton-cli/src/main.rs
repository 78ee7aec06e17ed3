//! Grafton - graph CRUD over HTTP
//!
//! Binds the compiled-query CRUD endpoints to a Neo4j-compatible store.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grafton_store::{StoreClient, StoreConfig};

#[derive(Parser, Debug)]
#[command(name = "grafton", version, about = "CRUD HTTP service over a labeled-property graph store")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "API_PORT", default_value_t = 8080)]
    port: u16,

    /// Bolt URI of the graph store.
    #[arg(long, env = "DB_HOST", default_value = "bolt://localhost:7687")]
    db_uri: String,

    /// Store user.
    #[arg(long, env = "DB_USER", default_value = "neo4j")]
    db_user: String,

    /// Store password.
    #[arg(long, env = "DB_USER_PASSWORD", default_value = "neo4j")]
    db_password: String,

    /// Database name.
    #[arg(long, env = "DB_NAME", default_value = "neo4j")]
    db_name: String,

    /// Seconds to wait for the first store connection before giving up.
    #[arg(long, env = "DB_CONNECT_TIMEOUT", default_value_t = 10)]
    connect_timeout: u64,
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "grafton=info,tower_http=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = StoreConfig {
        uri: args.db_uri,
        user: args.db_user,
        password: args.db_password,
        database: args.db_name,
    };

    let store = tokio::time::timeout(
        Duration::from_secs(args.connect_timeout),
        StoreClient::connect(&config),
    )
    .await
    .map_err(|_| anyhow::anyhow!("timed out connecting to the graph store at {}", config.uri))??;

    tracing::info!(uri = %config.uri, database = %config.database, "connected to graph store");

    grafton_web::run_server(Arc::new(store), args.port).await
}
