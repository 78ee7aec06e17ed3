//! Mutation clause composer: one function per verb × shape.
//!
//! Each function assembles MATCH plus the verb-specific clauses into a
//! single executable [`Statement`]. Nothing here executes anything; the verb
//! handlers in `grafton-web` hand the statement to the store, which keeps
//! compilation testable on its own.
//!
//! Limit policy: single-entity read/delete default to `LIMIT 1` to bound the
//! blast radius of an under-specified match; bulk verbs and relation reads
//! are unbounded unless the caller supplies a positive limit. A limit of 0
//! counts as absent.

use crate::entity::{Entity, Properties};
use crate::error::{CypherError, CypherResult};
use crate::fragment::{node_fragment, relation_fragment};
use crate::params::{bind, bind_free_form, check_property_name, ParamMap, NEW_PREFIX};

/// Role of the single node in node-shaped statements.
pub const NODE: &str = "n1";
/// Role of the origin node in triple-shaped statements.
pub const ORIGIN: &str = "n1";
/// Role of the destination node in triple-shaped statements.
pub const DESTINATION: &str = "n2";
/// Role of the relationship in triple-shaped statements.
pub const RELATION: &str = "r";

/// A compiled statement: query text plus its flat parameter map.
///
/// Invariant: every `$placeholder` in `text` has exactly one entry in
/// `parameters` and vice versa.
#[derive(Debug, Clone)]
pub struct Statement {
    pub text: String,
    pub parameters: ParamMap,
}

fn positive(limit: Option<u32>) -> Option<u32> {
    limit.filter(|n| *n > 0)
}

/// `SET role.a = $new_a, role.b = $new_b` with the same separator rule as
/// fragment rendering.
fn assignments<'a>(
    role: &str,
    names: impl Iterator<Item = &'a String>,
) -> CypherResult<String> {
    let mut out = String::new();
    for (i, name) in names.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        check_property_name(name)?;
        out.push_str(role);
        out.push('.');
        out.push_str(name);
        out.push_str(" = $");
        out.push_str(NEW_PREFIX);
        out.push('_');
        out.push_str(name);
    }
    Ok(out)
}

/// `role.a, role.b` for REMOVE lists, same separator rule.
fn removals(role: &str, names: &[String]) -> CypherResult<String> {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        check_property_name(name)?;
        out.push_str(role);
        out.push('.');
        out.push_str(name);
    }
    Ok(out)
}

/// `(n1:A {..})-[r:T {..}]->(n2:B {..})`
fn triple_pattern(origin: &Entity, relation: &Entity, destination: &Entity) -> CypherResult<String> {
    Ok(format!(
        "{}-{}->{}",
        node_fragment(origin, ORIGIN)?,
        relation_fragment(relation, RELATION)?,
        node_fragment(destination, DESTINATION)?
    ))
}

/// `CREATE (n1:Cat {..}) RETURN n1`
///
/// Created values are a free-form payload: nested arrays and objects are
/// accepted here, unlike in match and SET positions.
pub fn create_node(node: &Entity) -> CypherResult<Statement> {
    if node.properties.is_empty() {
        return Err(CypherError::validation(
            "`Properties` must not be empty when creating a node",
        ));
    }
    let fragment = node_fragment(node, NODE)?;
    let parameters = bind_free_form(NODE, node)?;
    Ok(Statement {
        text: format!("CREATE {fragment} RETURN {NODE}"),
        parameters,
    })
}

/// `MATCH (n1:Cat {..}) RETURN n1 LIMIT k` (default limit 1).
pub fn read_node(node: &Entity, limit: Option<u32>) -> CypherResult<Statement> {
    let fragment = node_fragment(node, NODE)?;
    let parameters = bind(&[(NODE, node)], None)?;
    let limit = positive(limit).unwrap_or(1);
    Ok(Statement {
        text: format!("MATCH {fragment} RETURN {NODE} LIMIT {limit}"),
        parameters,
    })
}

/// `MATCH .. WITH n1, properties(n1) AS before SET .. RETURN before,
/// properties(n1) AS after`
///
/// Returning both snapshots makes the update observable to the caller and
/// trivially idempotent to re-apply.
pub fn update_node(node: &Entity, new_values: &Properties) -> CypherResult<Statement> {
    if new_values.is_empty() {
        return Err(CypherError::validation("`NewProperties` must not be empty"));
    }
    let fragment = node_fragment(node, NODE)?;
    let set = assignments(NODE, new_values.keys())?;
    let parameters = bind(&[(NODE, node)], Some(new_values))?;
    Ok(Statement {
        text: format!(
            "MATCH {fragment} WITH {NODE}, properties({NODE}) AS before \
             SET {set} RETURN before, properties({NODE}) AS after"
        ),
        parameters,
    })
}

/// `MATCH .. DETACH DELETE n1 RETURN n1 LIMIT k` (default limit 1).
pub fn delete_node(node: &Entity, limit: Option<u32>) -> CypherResult<Statement> {
    let fragment = node_fragment(node, NODE)?;
    let parameters = bind(&[(NODE, node)], None)?;
    let limit = positive(limit).unwrap_or(1);
    Ok(Statement {
        text: format!("MATCH {fragment} DETACH DELETE {NODE} RETURN {NODE} LIMIT {limit}"),
        parameters,
    })
}

/// `MATCH .. WITH n1 [LIMIT k] DETACH DELETE n1 RETURN n1`; unbounded when
/// no positive limit is given.
pub fn delete_many_nodes(node: &Entity, limit: Option<u32>) -> CypherResult<Statement> {
    let fragment = node_fragment(node, NODE)?;
    let parameters = bind(&[(NODE, node)], None)?;
    let mut text = format!("MATCH {fragment} WITH {NODE}");
    if let Some(limit) = positive(limit) {
        text.push_str(&format!(" LIMIT {limit}"));
    }
    text.push_str(&format!(" DETACH DELETE {NODE} RETURN {NODE}"));
    Ok(Statement { text, parameters })
}

/// `MATCH (n1..), (n2..) MERGE (n1)-[r:T {..}]->(n2) RETURN ..`
pub fn create_relation(
    origin: &Entity,
    relation: &Entity,
    destination: &Entity,
) -> CypherResult<Statement> {
    let origin_fragment = node_fragment(origin, ORIGIN)?;
    let destination_fragment = node_fragment(destination, DESTINATION)?;
    let relation_fragment = relation_fragment(relation, RELATION)?;
    let parameters = bind(
        &[(ORIGIN, origin), (RELATION, relation), (DESTINATION, destination)],
        None,
    )?;
    Ok(Statement {
        text: format!(
            "MATCH {origin_fragment}, {destination_fragment} \
             MERGE ({ORIGIN})-{relation_fragment}->({DESTINATION}) \
             RETURN properties({RELATION}) AS properties, type({RELATION}) AS relationType, \
             properties(startNode({RELATION})) AS origin, \
             properties(endNode({RELATION})) AS destination"
        ),
        parameters,
    })
}

/// `MATCH (n1..)-[r..]->(n2..) RETURN r, n1, n2 [LIMIT k]`; unbounded when
/// no positive limit is given.
pub fn read_relation(
    origin: &Entity,
    relation: &Entity,
    destination: &Entity,
    limit: Option<u32>,
) -> CypherResult<Statement> {
    let pattern = triple_pattern(origin, relation, destination)?;
    let parameters = bind(
        &[(ORIGIN, origin), (RELATION, relation), (DESTINATION, destination)],
        None,
    )?;
    let mut text = format!("MATCH {pattern} RETURN {RELATION}, {ORIGIN}, {DESTINATION}");
    if let Some(limit) = positive(limit) {
        text.push_str(&format!(" LIMIT {limit}"));
    }
    Ok(Statement { text, parameters })
}

/// `MATCH (n1..)-[r..]->(n2..) SET r.a = $new_a, .. RETURN r LIMIT 1`
pub fn update_relation(
    origin: &Entity,
    relation: &Entity,
    destination: &Entity,
    new_values: &Properties,
) -> CypherResult<Statement> {
    if new_values.is_empty() {
        return Err(CypherError::validation("`NewProperties` must not be empty"));
    }
    let pattern = triple_pattern(origin, relation, destination)?;
    let set = assignments(RELATION, new_values.keys())?;
    let parameters = bind(
        &[(ORIGIN, origin), (RELATION, relation), (DESTINATION, destination)],
        Some(new_values),
    )?;
    Ok(Statement {
        text: format!("MATCH {pattern} SET {set} RETURN {RELATION} LIMIT 1"),
        parameters,
    })
}

/// `MATCH (n1..)-[r..]->(n2..) DELETE r RETURN count(r) AS deletedCount`
pub fn delete_relation(
    origin: &Entity,
    relation: &Entity,
    destination: &Entity,
) -> CypherResult<Statement> {
    let pattern = triple_pattern(origin, relation, destination)?;
    let parameters = bind(
        &[(ORIGIN, origin), (RELATION, relation), (DESTINATION, destination)],
        None,
    )?;
    Ok(Statement {
        text: format!(
            "MATCH {pattern} DELETE {RELATION} RETURN count({RELATION}) AS deletedCount"
        ),
        parameters,
    })
}

/// `MATCH (n1..)-[r..]->(n2..) WITH r [LIMIT k] DELETE r RETURN count(r) AS
/// deletedCount`; unbounded when no positive limit is given.
///
/// The trailing count aggregates over the deleted rows; the driver exposes
/// no statement counters on a row stream, so the count rides in the result.
pub fn delete_many_relations(
    origin: &Entity,
    relation: &Entity,
    destination: &Entity,
    limit: Option<u32>,
) -> CypherResult<Statement> {
    let pattern = triple_pattern(origin, relation, destination)?;
    let parameters = bind(
        &[(ORIGIN, origin), (RELATION, relation), (DESTINATION, destination)],
        None,
    )?;
    let mut text = format!("MATCH {pattern} WITH {RELATION}");
    if let Some(limit) = positive(limit) {
        text.push_str(&format!(" LIMIT {limit}"));
    }
    text.push_str(&format!(
        " DELETE {RELATION} RETURN count({RELATION}) AS deletedCount"
    ));
    Ok(Statement { text, parameters })
}

/// `MATCH (n1..) SET n1.a = $new_a, .. RETURN n1 [LIMIT k]`
pub fn set_properties(
    target: &Entity,
    new_values: &Properties,
    limit: Option<u32>,
) -> CypherResult<Statement> {
    if new_values.is_empty() {
        return Err(CypherError::validation("`NewProperties` must not be empty"));
    }
    let fragment = node_fragment(target, NODE)?;
    let set = assignments(NODE, new_values.keys())?;
    let parameters = bind(&[(NODE, target)], Some(new_values))?;
    let mut text = format!("MATCH {fragment} SET {set} RETURN {NODE}");
    if let Some(limit) = positive(limit) {
        text.push_str(&format!(" LIMIT {limit}"));
    }
    Ok(Statement { text, parameters })
}

/// `MATCH (n1..) REMOVE n1.a, n1.b RETURN n1 [LIMIT k]`
pub fn remove_properties(
    target: &Entity,
    names: &[String],
    limit: Option<u32>,
) -> CypherResult<Statement> {
    if names.is_empty() {
        return Err(CypherError::validation(
            "`RemoveProperties` must not be empty",
        ));
    }
    let fragment = node_fragment(target, NODE)?;
    let parameters = bind(&[(NODE, target)], None)?;
    let remove = removals(NODE, names)?;

    let mut text = format!("MATCH {fragment} REMOVE {remove} RETURN {NODE}");
    if let Some(limit) = positive(limit) {
        text.push_str(&format!(" LIMIT {limit}"));
    }
    Ok(Statement { text, parameters })
}

/// `MATCH (n1..)-[r..]->(n2..) SET r.a = $new_a, .. RETURN r [LIMIT k]`
pub fn set_relation_properties(
    origin: &Entity,
    relation: &Entity,
    destination: &Entity,
    new_values: &Properties,
    limit: Option<u32>,
) -> CypherResult<Statement> {
    if new_values.is_empty() {
        return Err(CypherError::validation("`NewProperties` must not be empty"));
    }
    let pattern = triple_pattern(origin, relation, destination)?;
    let set = assignments(RELATION, new_values.keys())?;
    let parameters = bind(
        &[(ORIGIN, origin), (RELATION, relation), (DESTINATION, destination)],
        Some(new_values),
    )?;
    let mut text = format!("MATCH {pattern} SET {set} RETURN {RELATION}");
    if let Some(limit) = positive(limit) {
        text.push_str(&format!(" LIMIT {limit}"));
    }
    Ok(Statement { text, parameters })
}

/// `MATCH (n1..)-[r..]->(n2..) REMOVE r.a, r.b RETURN r [LIMIT k]`
pub fn remove_relation_properties(
    origin: &Entity,
    relation: &Entity,
    destination: &Entity,
    names: &[String],
    limit: Option<u32>,
) -> CypherResult<Statement> {
    if names.is_empty() {
        return Err(CypherError::validation(
            "`RemoveProperties` must not be empty",
        ));
    }
    let pattern = triple_pattern(origin, relation, destination)?;
    let parameters = bind(
        &[(ORIGIN, origin), (RELATION, relation), (DESTINATION, destination)],
        None,
    )?;
    let remove = removals(RELATION, names)?;

    let mut text = format!("MATCH {pattern} REMOVE {remove} RETURN {RELATION}");
    if let Some(limit) = positive(limit) {
        text.push_str(&format!(" LIMIT {limit}"));
    }
    Ok(Statement { text, parameters })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CypherError;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn entity(category: &str, props: &[(&str, serde_json::Value)]) -> Entity {
        let properties: Properties = props
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        Entity::new(category, properties)
    }

    fn props(pairs: &[(&str, serde_json::Value)]) -> Properties {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    /// Collect the set of `$placeholder` identifiers appearing in text.
    fn placeholders(text: &str) -> BTreeSet<String> {
        let bytes = text.as_bytes();
        let mut out = BTreeSet::new();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len()
                    && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
                {
                    end += 1;
                }
                out.insert(text[start..end].to_string());
                i = end;
            } else {
                i += 1;
            }
        }
        out
    }

    fn assert_bindings_complete(statement: &Statement) {
        let in_text = placeholders(&statement.text);
        let bound: BTreeSet<String> = statement.parameters.keys().cloned().collect();
        assert_eq!(in_text, bound, "text: {}", statement.text);
    }

    #[test]
    fn test_read_node_concrete_scenario() {
        let product = entity("Product", &[("id", json!("p1"))]);
        let statement = read_node(&product, None).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Product {id: $n1_id}) RETURN n1 LIMIT 1"
        );
        assert_eq!(statement.parameters.len(), 1);
        assert_eq!(statement.parameters["n1_id"], json!("p1"));
    }

    #[test]
    fn test_read_node_with_explicit_limit() {
        let product = entity("Product", &[]);
        let statement = read_node(&product, Some(25)).unwrap();
        assert_eq!(statement.text, "MATCH (n1:Product) RETURN n1 LIMIT 25");
        assert!(statement.parameters.is_empty());
    }

    #[test]
    fn test_zero_limit_counts_as_absent() {
        let product = entity("Product", &[]);
        let statement = read_node(&product, Some(0)).unwrap();
        assert!(statement.text.ends_with("LIMIT 1"));

        let statement = delete_many_nodes(&product, Some(0)).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Product) WITH n1 DETACH DELETE n1 RETURN n1"
        );
    }

    #[test]
    fn test_create_node() {
        let product = entity("Product", &[("id", json!("p1")), ("name", json!("Widget"))]);
        let statement = create_node(&product).unwrap();
        assert_eq!(
            statement.text,
            "CREATE (n1:Product {id: $n1_id, name: $n1_name}) RETURN n1"
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_create_node_accepts_nested_payload() {
        let product = entity(
            "Product",
            &[
                ("id", json!("p1")),
                ("meta", json!({"color": "red", "sizes": [1, 2]})),
            ],
        );
        let statement = create_node(&product).unwrap();
        assert_eq!(
            statement.text,
            "CREATE (n1:Product {id: $n1_id, meta: $n1_meta}) RETURN n1"
        );
        assert_eq!(
            statement.parameters["n1_meta"],
            json!({"color": "red", "sizes": [1, 2]})
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_nested_values_rejected_in_match_and_set_positions() {
        let product = entity("Product", &[("meta", json!({"k": 1}))]);
        assert!(matches!(
            read_node(&product, None),
            Err(CypherError::Binding(_))
        ));

        let target = entity("Product", &[("id", json!("p1"))]);
        assert!(set_properties(&target, &props(&[("meta", json!({"k": 1}))]), None).is_err());
    }

    #[test]
    fn test_create_node_requires_properties() {
        let product = entity("Product", &[]);
        assert!(matches!(
            create_node(&product),
            Err(CypherError::Validation(_))
        ));
    }

    #[test]
    fn test_update_node_returns_before_and_after() {
        let product = entity("Product", &[("id", json!("p1"))]);
        let statement = update_node(&product, &props(&[("name", json!("Gadget"))])).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Product {id: $n1_id}) WITH n1, properties(n1) AS before \
             SET n1.name = $new_name RETURN before, properties(n1) AS after"
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_update_node_rejects_empty_payload() {
        let product = entity("Product", &[("id", json!("p1"))]);
        assert!(update_node(&product, &Properties::new()).is_err());
    }

    #[test]
    fn test_delete_node_defaults_to_limit_one() {
        let product = entity("Product", &[("id", json!("p1"))]);
        let statement = delete_node(&product, None).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Product {id: $n1_id}) DETACH DELETE n1 RETURN n1 LIMIT 1"
        );
    }

    #[test]
    fn test_delete_many_nodes_with_limit() {
        let product = entity("Product", &[("stale", json!(true))]);
        let statement = delete_many_nodes(&product, Some(2)).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Product {stale: $n1_stale}) WITH n1 LIMIT 2 DETACH DELETE n1 RETURN n1"
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_create_relation() {
        let origin = entity("Provider", &[("id", json!("v1"))]);
        let relation = entity("PRODUCES", &[("since", json!(2020))]);
        let destination = entity("Product", &[("id", json!("p1"))]);
        let statement = create_relation(&origin, &relation, &destination).unwrap();
        assert!(statement.text.starts_with(
            "MATCH (n1:Provider {id: $n1_id}), (n2:Product {id: $n2_id}) \
             MERGE (n1)-[r:PRODUCES {since: $r_since}]->(n2)"
        ));
        assert!(statement.text.contains("type(r) AS relationType"));
        assert_bindings_complete(&statement);
        assert_eq!(statement.parameters.len(), 3);
    }

    #[test]
    fn test_read_relation_unbounded_by_default() {
        let origin = entity("Provider", &[]);
        let relation = entity("PRODUCES", &[]);
        let destination = entity("Product", &[]);
        let statement = read_relation(&origin, &relation, &destination, None).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Provider)-[r:PRODUCES]->(n2:Product) RETURN r, n1, n2"
        );

        let statement = read_relation(&origin, &relation, &destination, Some(10)).unwrap();
        assert!(statement.text.ends_with("LIMIT 10"));
    }

    #[test]
    fn test_update_relation() {
        let origin = entity("Consumer", &[("id", json!("c1"))]);
        let relation = entity("RATES", &[]);
        let destination = entity("Product", &[("id", json!("p1"))]);
        let statement =
            update_relation(&origin, &relation, &destination, &props(&[("stars", json!(4))]))
                .unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Consumer {id: $n1_id})-[r:RATES]->(n2:Product {id: $n2_id}) \
             SET r.stars = $new_stars RETURN r LIMIT 1"
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_delete_relation_counts_deletions() {
        let origin = entity("Consumer", &[("id", json!("c1"))]);
        let relation = entity("RATES", &[]);
        let destination = entity("Product", &[("id", json!("p1"))]);
        let statement = delete_relation(&origin, &relation, &destination).unwrap();
        assert!(statement
            .text
            .ends_with("DELETE r RETURN count(r) AS deletedCount"));
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_delete_many_relations_with_and_without_limit() {
        let origin = entity("Consumer", &[]);
        let relation = entity("RATES", &[]);
        let destination = entity("Product", &[]);

        let statement =
            delete_many_relations(&origin, &relation, &destination, Some(2)).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Consumer)-[r:RATES]->(n2:Product) WITH r LIMIT 2 \
             DELETE r RETURN count(r) AS deletedCount"
        );

        let statement = delete_many_relations(&origin, &relation, &destination, None).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Consumer)-[r:RATES]->(n2:Product) WITH r \
             DELETE r RETURN count(r) AS deletedCount"
        );
    }

    #[test]
    fn test_set_properties_bulk() {
        let target = entity("Product", &[("category", json!("tools"))]);
        let statement = set_properties(
            &target,
            &props(&[("discount", json!(10)), ("featured", json!(true))]),
            Some(5),
        )
        .unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Product {category: $n1_category}) \
             SET n1.discount = $new_discount, n1.featured = $new_featured \
             RETURN n1 LIMIT 5"
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_remove_properties() {
        let target = entity("Product", &[("id", json!("p1"))]);
        let names = vec!["discount".to_string(), "featured".to_string()];
        let statement = remove_properties(&target, &names, None).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Product {id: $n1_id}) REMOVE n1.discount, n1.featured RETURN n1"
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_set_relation_properties_bulk() {
        let origin = entity("Provider", &[("id", json!("v1"))]);
        let relation = entity("PRODUCES", &[]);
        let destination = entity("Product", &[("id", json!("p1"))]);
        let statement = set_relation_properties(
            &origin,
            &relation,
            &destination,
            &props(&[("batch", json!("b9")), ("since", json!(2020))]),
            None,
        )
        .unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Provider {id: $n1_id})-[r:PRODUCES]->(n2:Product {id: $n2_id}) \
             SET r.batch = $new_batch, r.since = $new_since RETURN r"
        );
        assert_bindings_complete(&statement);

        let statement =
            set_relation_properties(&origin, &relation, &destination, &props(&[("batch", json!("b9"))]), Some(5))
                .unwrap();
        assert!(statement.text.ends_with("LIMIT 5"));
    }

    #[test]
    fn test_remove_relation_properties() {
        let origin = entity("Provider", &[]);
        let relation = entity("PRODUCES", &[]);
        let destination = entity("Product", &[]);
        let names = vec!["batch".to_string(), "since".to_string()];
        let statement =
            remove_relation_properties(&origin, &relation, &destination, &names, None).unwrap();
        assert_eq!(
            statement.text,
            "MATCH (n1:Provider)-[r:PRODUCES]->(n2:Product) \
             REMOVE r.batch, r.since RETURN r"
        );
        assert_bindings_complete(&statement);
    }

    #[test]
    fn test_remove_relation_properties_rejects_empty_list() {
        let origin = entity("Provider", &[]);
        let relation = entity("PRODUCES", &[]);
        let destination = entity("Product", &[]);
        assert!(remove_relation_properties(&origin, &relation, &destination, &[], None).is_err());
    }

    #[test]
    fn test_remove_properties_rejects_empty_list() {
        let target = entity("Product", &[("id", json!("p1"))]);
        assert!(remove_properties(&target, &[], None).is_err());
    }

    #[test]
    fn test_remove_properties_rejects_invalid_name() {
        let target = entity("Product", &[("id", json!("p1"))]);
        let names = vec!["ok".to_string(), "not ok".to_string()];
        assert!(remove_properties(&target, &names, None).is_err());
    }

    #[test]
    fn test_empty_category_fails_before_any_text_is_built() {
        let origin = entity("Provider", &[]);
        let relation = entity("", &[]);
        let destination = entity("Product", &[]);
        assert!(matches!(
            create_relation(&origin, &relation, &destination),
            Err(CypherError::Validation(_))
        ));
    }

    #[test]
    fn test_binding_completeness_across_all_verbs() {
        let node = entity("Product", &[("id", json!("p1")), ("stock", json!(7))]);
        let origin = entity("Provider", &[("id", json!("v1"))]);
        let relation = entity("PRODUCES", &[("batch", json!("b9"))]);
        let destination = entity("Material", &[("id", json!("m1"))]);
        let payload = props(&[("price", json!(3.5))]);

        for statement in [
            create_node(&node).unwrap(),
            read_node(&node, Some(3)).unwrap(),
            update_node(&node, &payload).unwrap(),
            delete_node(&node, None).unwrap(),
            delete_many_nodes(&node, Some(4)).unwrap(),
            create_relation(&origin, &relation, &destination).unwrap(),
            read_relation(&origin, &relation, &destination, Some(2)).unwrap(),
            update_relation(&origin, &relation, &destination, &payload).unwrap(),
            delete_relation(&origin, &relation, &destination).unwrap(),
            delete_many_relations(&origin, &relation, &destination, None).unwrap(),
            set_properties(&node, &payload, None).unwrap(),
            remove_properties(&node, &["stock".to_string()], None).unwrap(),
            set_relation_properties(&origin, &relation, &destination, &payload, Some(3)).unwrap(),
            remove_relation_properties(&origin, &relation, &destination, &["batch".to_string()], None)
                .unwrap(),
        ] {
            assert_bindings_complete(&statement);
        }
    }
}
