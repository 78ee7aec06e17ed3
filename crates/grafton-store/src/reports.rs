//! Fixed analytical queries over the sample supply-chain graph.
//!
//! These are static Cypher with no compilation logic; they live here at the
//! store boundary, deliberately outside the compiler crate.

use neo4rs::Query;
use serde::Serialize;
use serde_json::Value;

use crate::client::{column_json, StoreClient};
use crate::error::StoreResult;

/// A product ranked by average consumer rating.
#[derive(Debug, Clone, Serialize)]
pub struct RatedProduct {
    pub name: String,
    pub average_rating: f64,
}

/// A provider ranked by how many retailers prefer it.
#[derive(Debug, Clone, Serialize)]
pub struct PopularProvider {
    pub name: String,
    pub popularity: i64,
}

/// A product ranked by purchase count.
#[derive(Debug, Clone, Serialize)]
pub struct PurchasedProduct {
    pub product_name: String,
    pub product_id: String,
    pub purchases: i64,
}

/// Aggregate statistics bundle returned by `/reports/statistics`.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub top_products: Vec<RatedProduct>,
    pub top_providers: Vec<PopularProvider>,
    pub top_purchases: Vec<PurchasedProduct>,
}

/// One step in a product's supply history: the producing provider and, when
/// the path runs through a material, that material.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub provider: Value,
    pub material: Option<Value>,
}

/// Top-rated products, most-preferred providers, most-purchased products.
pub async fn statistics(client: &StoreClient) -> StoreResult<Statistics> {
    let rated = client
        .raw(Query::new(
            "MATCH (c:Consumer)-[r:RATES]->(p:Product) \
             RETURN p.name AS name, avg(r.rating) AS average_rating \
             ORDER BY average_rating DESC LIMIT 3"
                .to_string(),
        ))
        .await?;

    let mut top_products = Vec::with_capacity(rated.len());
    for row in &rated {
        top_products.push(RatedProduct {
            name: row.get::<String>("name").unwrap_or_default(),
            average_rating: row.get::<f64>("average_rating").unwrap_or(0.0),
        });
    }

    let preferred = client
        .raw(Query::new(
            "MATCH (p:Provider)<-[r:PREFERS]-(c:Retailer) \
             RETURN p.name AS name, count(r) AS popularity \
             ORDER BY popularity DESC LIMIT 5"
                .to_string(),
        ))
        .await?;

    let mut top_providers = Vec::with_capacity(preferred.len());
    for row in &preferred {
        top_providers.push(PopularProvider {
            name: row.get::<String>("name").unwrap_or_default(),
            popularity: row.get::<i64>("popularity").unwrap_or(0),
        });
    }

    let purchased = client
        .raw(Query::new(
            "MATCH (c:Consumer)-[r:BUYS_FROM_RETAILER]->(retailer:Retailer), \
             (p:Product {id: r.productId}) \
             RETURN p.name AS product_name, r.productId AS product_id, \
             count(r) AS purchases ORDER BY purchases DESC LIMIT 10"
                .to_string(),
        ))
        .await?;

    let mut top_purchases = Vec::with_capacity(purchased.len());
    for row in &purchased {
        top_purchases.push(PurchasedProduct {
            product_name: row.get::<String>("product_name").unwrap_or_default(),
            product_id: row.get::<String>("product_id").unwrap_or_default(),
            purchases: row.get::<i64>("purchases").unwrap_or(0),
        });
    }

    Ok(Statistics {
        top_products,
        top_providers,
        top_purchases,
    })
}

/// Supply history of one product: providers producing it directly, plus
/// providers producing the materials it needs.
pub async fn product_history(
    client: &StoreClient,
    product_id: &str,
) -> StoreResult<Vec<HistoryEntry>> {
    let rows = client
        .raw(
            Query::new(
                "MATCH (pr:Provider)-[:PRODUCES]->(:Product {id: $id}) \
                 RETURN properties(pr) AS provider, NULL AS material \
                 UNION \
                 MATCH (pr:Provider)-[:PRODUCES]->(m:Material)<-[:NEEDS]-(:Product {id: $id}) \
                 RETURN properties(pr) AS provider, properties(m) AS material"
                    .to_string(),
            )
            .param("id", product_id.to_string()),
        )
        .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in &rows {
        let provider = column_json(row, "provider")?;
        let material = row.get::<Option<Value>>("material").unwrap_or(None);
        entries.push(HistoryEntry { provider, material });
    }
    Ok(entries)
}
