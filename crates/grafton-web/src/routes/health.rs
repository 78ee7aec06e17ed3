//! Health check.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::{self, ApiError};
use crate::state::AppState;

/// Liveness plus node/relationship totals, so the check also proves the
/// store round trip works.
pub async fn check_health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let counts = state.store.counts().await.map_err(error::store_error)?;
    Ok(Json(json!({
        "status": "ok",
        "nodes": counts.nodes,
        "relationships": counts.relationships,
    })))
}
