//! Grafton Web Server
//!
//! Axum-based HTTP surface for the graph CRUD endpoints and reports.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use grafton_store::StoreClient;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::check_health))
        // Nodes
        .route("/node", post(routes::nodes::create_node))
        .route("/node", get(routes::nodes::read_node))
        .route("/node", put(routes::nodes::update_node))
        .route("/node", delete(routes::nodes::delete_node))
        .route("/node/many", delete(routes::nodes::delete_many_nodes))
        // Relations
        .route("/relation", post(routes::relations::create_relation))
        .route("/relation", get(routes::relations::read_relation))
        .route("/relation", put(routes::relations::update_relation))
        .route("/relation", delete(routes::relations::delete_relation))
        .route(
            "/relation/many",
            delete(routes::relations::delete_many_relations),
        )
        // Bulk properties
        .route("/properties", put(routes::properties::update_properties))
        .route(
            "/properties",
            delete(routes::properties::remove_properties),
        )
        .route(
            "/properties/relation",
            put(routes::properties::update_relation_properties),
        )
        .route(
            "/properties/relation",
            delete(routes::properties::remove_relation_properties),
        )
        // Reports
        .route("/reports/statistics", get(routes::reports::statistics))
        .route("/reports/history", get(routes::reports::history))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(store: Arc<StoreClient>, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(store);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
