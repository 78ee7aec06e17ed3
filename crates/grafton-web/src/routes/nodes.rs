//! Node CRUD handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use grafton_cypher::{compose, Entity, Properties, NODE};
use grafton_store::column_json;

use crate::error::{self, ApiError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReadNodeQuery {
    #[serde(rename = "Category")]
    pub category: String,
    /// JSON-encoded property map, as in the body shape.
    #[serde(rename = "Properties")]
    pub properties: Option<String>,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct UpdateNodeRequest {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Identifier", default)]
    pub identifier: Properties,
    #[serde(rename = "NewProperties", default)]
    pub new_properties: Properties,
}

#[derive(Deserialize)]
pub struct DeleteNodeRequest {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Properties", default)]
    pub properties: Properties,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

pub async fn create_node(
    State(state): State<AppState>,
    Json(node): Json<Entity>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let statement = compose::create_node(&node).map_err(error::compile_error)?;

    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    let row = rows
        .first()
        .ok_or_else(|| error::bad_request("node was not created"))?;
    let created = column_json(row, NODE).map_err(error::store_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn read_node(
    State(state): State<AppState>,
    Query(query): Query<ReadNodeQuery>,
) -> Result<Json<Value>, ApiError> {
    let properties: Properties = match query.properties.as_deref() {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| error::bad_request(format!("invalid `Properties` value: {e}")))?,
        None => Properties::new(),
    };
    let node = Entity::new(query.category, properties);

    let statement = compose::read_node(&node, query.limit).map_err(error::compile_error)?;
    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    let row = rows.first().ok_or_else(|| error::not_found("node"))?;
    let found = column_json(row, NODE).map_err(error::store_error)?;

    Ok(Json(found))
}

pub async fn update_node(
    State(state): State<AppState>,
    Json(req): Json<UpdateNodeRequest>,
) -> Result<Json<Value>, ApiError> {
    let node = Entity::new(req.category, req.identifier);

    let statement =
        compose::update_node(&node, &req.new_properties).map_err(error::compile_error)?;
    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    let row = rows.first().ok_or_else(|| error::not_found("node"))?;
    let before = column_json(row, "before").map_err(error::store_error)?;
    let after = column_json(row, "after").map_err(error::store_error)?;

    Ok(Json(json!({ "Before": before, "After": after })))
}

pub async fn delete_node(
    State(state): State<AppState>,
    Json(req): Json<DeleteNodeRequest>,
) -> Result<Json<Value>, ApiError> {
    let node = Entity::new(req.category, req.properties);

    let statement = compose::delete_node(&node, req.limit).map_err(error::compile_error)?;
    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    let row = rows.first().ok_or_else(|| error::not_found("node"))?;
    let deleted = column_json(row, NODE).map_err(error::store_error)?;

    Ok(Json(deleted))
}

pub async fn delete_many_nodes(
    State(state): State<AppState>,
    Json(req): Json<DeleteNodeRequest>,
) -> Result<Json<Value>, ApiError> {
    let node = Entity::new(req.category, req.properties);

    let statement = compose::delete_many_nodes(&node, req.limit).map_err(error::compile_error)?;
    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    Ok(Json(json!({ "DeletedCount": rows.len() })))
}
