//! Bulk property handlers: SET/REMOVE over every node matching a target
//! descriptor, or over every relationship matching a triple.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use grafton_cypher::{compose, Entity, Properties, NODE, RELATION};
use grafton_store::column_json;

use crate::error::{self, ApiError};
use crate::routes::relations::RelationTriple;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UpdatePropertiesRequest {
    #[serde(rename = "Target")]
    pub target: Entity,
    #[serde(rename = "NewProperties", default)]
    pub new_properties: Properties,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct RemovePropertiesRequest {
    #[serde(rename = "Target")]
    pub target: Entity,
    #[serde(rename = "RemoveProperties", default)]
    pub remove_properties: Vec<String>,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct UpdateRelationPropertiesRequest {
    #[serde(flatten)]
    pub triple: RelationTriple,
    #[serde(rename = "NewProperties", default)]
    pub new_properties: Properties,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct RemoveRelationPropertiesRequest {
    #[serde(flatten)]
    pub triple: RelationTriple,
    #[serde(rename = "RemoveProperties", default)]
    pub remove_properties: Vec<String>,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

async fn run_and_collect(
    state: &AppState,
    statement: &grafton_cypher::Statement,
    column: &str,
) -> Result<Vec<Value>, ApiError> {
    let rows = state
        .store
        .execute(statement)
        .await
        .map_err(error::store_error)?;

    let mut affected = Vec::with_capacity(rows.len());
    for row in &rows {
        affected.push(column_json(row, column).map_err(error::store_error)?);
    }
    Ok(affected)
}

pub async fn update_properties(
    State(state): State<AppState>,
    Json(req): Json<UpdatePropertiesRequest>,
) -> Result<Json<Value>, ApiError> {
    let statement = compose::set_properties(&req.target, &req.new_properties, req.limit)
        .map_err(error::compile_error)?;

    let affected = run_and_collect(&state, &statement, NODE).await?;
    if affected.is_empty() {
        return Err(error::not_found("target"));
    }

    Ok(Json(Value::Array(affected)))
}

pub async fn remove_properties(
    State(state): State<AppState>,
    Json(req): Json<RemovePropertiesRequest>,
) -> Result<Json<Value>, ApiError> {
    let statement = compose::remove_properties(&req.target, &req.remove_properties, req.limit)
        .map_err(error::compile_error)?;

    let affected = run_and_collect(&state, &statement, NODE).await?;
    if affected.is_empty() {
        return Err(error::not_found("target"));
    }

    Ok(Json(Value::Array(affected)))
}

pub async fn update_relation_properties(
    State(state): State<AppState>,
    Json(req): Json<UpdateRelationPropertiesRequest>,
) -> Result<Json<Value>, ApiError> {
    let statement = compose::set_relation_properties(
        &req.triple.origin,
        &req.triple.relation,
        &req.triple.destination,
        &req.new_properties,
        req.limit,
    )
    .map_err(error::compile_error)?;

    let affected = run_and_collect(&state, &statement, RELATION).await?;
    if affected.is_empty() {
        return Err(error::not_found("relation"));
    }

    Ok(Json(Value::Array(affected)))
}

pub async fn remove_relation_properties(
    State(state): State<AppState>,
    Json(req): Json<RemoveRelationPropertiesRequest>,
) -> Result<Json<Value>, ApiError> {
    let statement = compose::remove_relation_properties(
        &req.triple.origin,
        &req.triple.relation,
        &req.triple.destination,
        &req.remove_properties,
        req.limit,
    )
    .map_err(error::compile_error)?;

    let affected = run_and_collect(&state, &statement, RELATION).await?;
    if affected.is_empty() {
        return Err(error::not_found("relation"));
    }

    Ok(Json(Value::Array(affected)))
}
