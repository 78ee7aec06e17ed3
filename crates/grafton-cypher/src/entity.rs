//! Entity descriptors: the compiler's input data model.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CypherError, CypherResult};

/// Property bag of a descriptor. Iteration order is unspecified by contract;
/// callers must not rely on it beyond separator correctness.
pub type Properties = BTreeMap<String, Value>;

/// One labeled graph entity to match or create: a node label or relationship
/// type plus a bag of concrete property values.
///
/// Descriptors are built fresh from each decoded request body, are immutable
/// after construction, and live only as compiler input. Field names follow
/// the wire contract (`Category`, `Properties`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Properties", default)]
    pub properties: Properties,
}

impl Entity {
    pub fn new(category: impl Into<String>, properties: Properties) -> Self {
        Self {
            category: category.into(),
            properties,
        }
    }

    /// Check that the category can be spliced into a label/type position.
    ///
    /// Cypher has no parameter syntax for labels, so the category is the one
    /// piece of caller input that lands in the query text itself. Anything
    /// outside the identifier grammar is rejected before any text is built.
    pub fn validate(&self) -> CypherResult<()> {
        if self.category.is_empty() {
            return Err(CypherError::validation("`Category` must not be empty"));
        }
        if !is_identifier(&self.category) {
            return Err(CypherError::validation(format!(
                "`Category` `{}` is not a valid label or relationship type",
                self.category
            )));
        }
        Ok(())
    }
}

/// Identifier grammar shared by categories, roles, and property names:
/// ASCII letters, digits and underscores, not starting with a digit.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
