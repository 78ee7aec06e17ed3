//! Relation CRUD handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use grafton_cypher::{compose, Entity, Properties, DESTINATION, ORIGIN, RELATION};
use grafton_store::{column_i64, column_json};

use crate::error::{self, ApiError};
use crate::state::AppState;

/// The three descriptors every relation operation works on.
#[derive(Deserialize)]
pub struct RelationTriple {
    #[serde(rename = "OriginNode")]
    pub origin: Entity,
    #[serde(rename = "DestinationNode")]
    pub destination: Entity,
    #[serde(rename = "Relation")]
    pub relation: Entity,
}

#[derive(Deserialize)]
pub struct ReadRelationQuery {
    /// JSON-encoded `{Category, Properties}` objects, one per role.
    #[serde(rename = "OriginNode")]
    pub origin: String,
    #[serde(rename = "DestinationNode")]
    pub destination: String,
    #[serde(rename = "Relation")]
    pub relation: String,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
pub struct UpdateRelationRequest {
    #[serde(flatten)]
    pub triple: RelationTriple,
    #[serde(rename = "NewProperties", default)]
    pub new_properties: Properties,
}

#[derive(Deserialize)]
pub struct DeleteManyRelationsRequest {
    #[serde(flatten)]
    pub triple: RelationTriple,
    #[serde(rename = "Limit")]
    pub limit: Option<u32>,
}

fn decode_entity(name: &str, raw: &str) -> Result<Entity, ApiError> {
    serde_json::from_str(raw).map_err(|e| error::bad_request(format!("invalid `{name}`: {e}")))
}

pub async fn create_relation(
    State(state): State<AppState>,
    Json(triple): Json<RelationTriple>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let statement = compose::create_relation(&triple.origin, &triple.relation, &triple.destination)
        .map_err(error::compile_error)?;

    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    // MERGE on matched endpoints always yields a row; an empty result means
    // one of the endpoint nodes did not exist.
    let row = rows
        .first()
        .ok_or_else(|| error::not_found("origin or destination node"))?;

    let properties = column_json(row, "properties").map_err(error::store_error)?;
    let relation_type = column_json(row, "relationType").map_err(error::store_error)?;
    let origin = column_json(row, "origin").map_err(error::store_error)?;
    let destination = column_json(row, "destination").map_err(error::store_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "Relation": { "Type": relation_type, "Properties": properties },
            "Origin": origin,
            "Destination": destination,
        })),
    ))
}

pub async fn read_relation(
    State(state): State<AppState>,
    Query(query): Query<ReadRelationQuery>,
) -> Result<Json<Value>, ApiError> {
    let origin = decode_entity("OriginNode", &query.origin)?;
    let destination = decode_entity("DestinationNode", &query.destination)?;
    let relation = decode_entity("Relation", &query.relation)?;

    let statement = compose::read_relation(&origin, &relation, &destination, query.limit)
        .map_err(error::compile_error)?;
    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    if rows.is_empty() {
        return Err(error::not_found("relation"));
    }

    let mut matches = Vec::with_capacity(rows.len());
    for row in &rows {
        matches.push(json!({
            "Relation": column_json(row, RELATION).map_err(error::store_error)?,
            "Origin": column_json(row, ORIGIN).map_err(error::store_error)?,
            "Destination": column_json(row, DESTINATION).map_err(error::store_error)?,
        }));
    }

    Ok(Json(Value::Array(matches)))
}

pub async fn update_relation(
    State(state): State<AppState>,
    Json(req): Json<UpdateRelationRequest>,
) -> Result<Json<Value>, ApiError> {
    let statement = compose::update_relation(
        &req.triple.origin,
        &req.triple.relation,
        &req.triple.destination,
        &req.new_properties,
    )
    .map_err(error::compile_error)?;

    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    let row = rows.first().ok_or_else(|| error::not_found("relation"))?;
    let updated = column_json(row, RELATION).map_err(error::store_error)?;

    Ok(Json(updated))
}

pub async fn delete_relation(
    State(state): State<AppState>,
    Json(triple): Json<RelationTriple>,
) -> Result<Json<Value>, ApiError> {
    let statement = compose::delete_relation(&triple.origin, &triple.relation, &triple.destination)
        .map_err(error::compile_error)?;

    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    let deleted = match rows.first() {
        Some(row) => column_i64(row, "deletedCount").map_err(error::store_error)?,
        None => 0,
    };
    if deleted == 0 {
        return Err(error::not_found("relation"));
    }

    Ok(Json(json!({ "DeletedCount": deleted })))
}

pub async fn delete_many_relations(
    State(state): State<AppState>,
    Json(req): Json<DeleteManyRelationsRequest>,
) -> Result<Json<Value>, ApiError> {
    let statement = compose::delete_many_relations(
        &req.triple.origin,
        &req.triple.relation,
        &req.triple.destination,
        req.limit,
    )
    .map_err(error::compile_error)?;

    let rows = state
        .store
        .execute(&statement)
        .await
        .map_err(error::store_error)?;

    let deleted = match rows.first() {
        Some(row) => column_i64(row, "deletedCount").map_err(error::store_error)?,
        None => 0,
    };

    Ok(Json(json!({ "DeletedCount": deleted })))
}
