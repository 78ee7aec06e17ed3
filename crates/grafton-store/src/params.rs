//! Conversion from the compiler's flat JSON parameter map to driver
//! parameters.

use grafton_cypher::Statement;
use neo4rs::{BoltList, BoltMap, BoltNull, BoltString, BoltType, Query};
use serde_json::Value;

/// Bind a compiled statement's parameters onto a driver query.
pub(crate) fn to_query(statement: &Statement) -> Query {
    let mut query = Query::new(statement.text.clone());
    for (key, value) in &statement.parameters {
        query = query.param(key.as_str(), to_bolt(value));
    }
    query
}

/// Scalars map to bolt primitives; arrays and objects (create payloads)
/// recurse into bolt lists and maps.
fn to_bolt(value: &Value) -> BoltType {
    match value {
        Value::Null => BoltType::Null(BoltNull),
        Value::Bool(b) => BoltType::from(*b),
        Value::Number(n) if n.is_i64() => BoltType::from(n.as_i64().unwrap_or_default()),
        Value::Number(n) => BoltType::from(n.as_f64().unwrap_or_default()),
        Value::String(s) => BoltType::from(s.clone()),
        Value::Array(items) => BoltType::List(BoltList::from(
            items.iter().map(to_bolt).collect::<Vec<_>>(),
        )),
        Value::Object(map) => BoltType::Map(
            map.iter()
                .map(|(k, v)| (BoltString::from(k.as_str()), to_bolt(v)))
                .collect::<BoltMap>(),
        ),
    }
}
