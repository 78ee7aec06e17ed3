//! Report handlers for the fixed analytical queries.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use grafton_store::reports::{self, HistoryEntry, Statistics};

use crate::error::{self, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "ProductId")]
    pub product_id: String,
}

pub async fn statistics(State(state): State<AppState>) -> Result<Json<Statistics>, ApiError> {
    let stats = reports::statistics(&state.store)
        .await
        .map_err(error::store_error)?;
    Ok(Json(stats))
}

pub async fn history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    if query.product_id.is_empty() {
        return Err(error::bad_request("`ProductId` must not be empty"));
    }

    let entries = reports::product_history(&state.store, &query.product_id)
        .await
        .map_err(error::store_error)?;
    Ok(Json(entries))
}
