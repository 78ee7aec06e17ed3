//! Parameter binding: the namespaced flat map handed to the driver.

use std::collections::HashMap;

use serde_json::Value;

use crate::entity::{is_identifier, Entity, Properties};
use crate::error::{CypherError, CypherResult};

/// Prefix reserved for SET payload values (`$new_<property>`). No role may
/// use this name, which keeps payload keys disjoint from match keys.
pub const NEW_PREFIX: &str = "new";

/// Flat parameter map of a compiled statement.
pub type ParamMap = HashMap<String, Value>;

pub(crate) fn check_role(role: &str) -> CypherResult<()> {
    if role == NEW_PREFIX {
        return Err(CypherError::binding(
            "role `new` is reserved for mutation payloads",
        ));
    }
    if !is_identifier(role) {
        return Err(CypherError::binding(format!(
            "role `{role}` is not a valid identifier"
        )));
    }
    Ok(())
}

pub(crate) fn check_property_name(name: &str) -> CypherResult<()> {
    if !is_identifier(name) {
        return Err(CypherError::binding(format!(
            "property name `{name}` is not a valid placeholder identifier"
        )));
    }
    Ok(())
}

/// Property values in match and SET positions must be scalars; nested
/// arrays/objects and nulls have no match semantics there. Create payloads
/// go through [`bind_free_form`] instead.
pub(crate) fn check_value(name: &str, value: &Value) -> CypherResult<()> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(()),
        _ => Err(CypherError::binding(format!(
            "property `{name}` must be a string, number or boolean"
        ))),
    }
}

/// Build the flat parameter map for a set of role/descriptor pairs plus an
/// optional mutation payload.
///
/// Every property of every pair becomes `<role>_<property>`; payload values
/// become `new_<property>`. Roles must be pairwise distinct and none may be
/// the reserved `new`, so distinct entries can never collide no matter how
/// the descriptors' property names overlap.
pub fn bind(pairs: &[(&str, &Entity)], new_values: Option<&Properties>) -> CypherResult<ParamMap> {
    let mut params = ParamMap::new();

    let mut seen_roles: Vec<&str> = Vec::with_capacity(pairs.len());
    for (role, entity) in pairs {
        check_role(role)?;
        if seen_roles.contains(role) {
            return Err(CypherError::binding(format!("duplicate role `{role}`")));
        }
        seen_roles.push(role);

        for (name, value) in &entity.properties {
            check_property_name(name)?;
            check_value(name, value)?;
            params.insert(format!("{role}_{name}"), value.clone());
        }
    }

    if let Some(new_values) = new_values {
        for (name, value) in new_values {
            check_property_name(name)?;
            check_value(name, value)?;
            params.insert(format!("{NEW_PREFIX}_{name}"), value.clone());
        }
    }

    Ok(params)
}

/// Like [`bind`] for a single created entity: property names still follow
/// the identifier grammar, but values are free-form JSON. Nested arrays and
/// objects ride through to the driver boundary unchanged.
pub fn bind_free_form(role: &str, entity: &Entity) -> CypherResult<ParamMap> {
    check_role(role)?;

    let mut params = ParamMap::new();
    for (name, value) in &entity.properties {
        check_property_name(name)?;
        params.insert(format!("{role}_{name}"), value.clone());
    }
    Ok(params)
}
