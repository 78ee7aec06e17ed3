//! Rendering of pattern fragments for single roles.
//!
//! A fragment is the piece of MATCH/CREATE/MERGE text describing one entity:
//! `(n1:Product {id: $n1_id})` for a node, `[r:RATES {stars: $r_stars}]` for
//! a relationship. Parameter placeholders are namespaced as
//! `$<role>_<property>` so that several entities can share one statement
//! without colliding.

use crate::entity::Entity;
use crate::error::CypherResult;
use crate::params::check_property_name;

/// Render `(role:Category {prop: $role_prop, ...})`.
pub fn node_fragment(entity: &Entity, role: &str) -> CypherResult<String> {
    render(entity, role, '(', ')')
}

/// Render `[role:Category {prop: $role_prop, ...}]`.
pub fn relation_fragment(entity: &Entity, role: &str) -> CypherResult<String> {
    render(entity, role, '[', ']')
}

fn render(entity: &Entity, role: &str, open: char, close: char) -> CypherResult<String> {
    entity.validate()?;

    let mut out = String::new();
    out.push(open);
    out.push_str(role);
    out.push(':');
    out.push_str(&entity.category);

    if !entity.properties.is_empty() {
        out.push_str(" {");
        for (i, name) in entity.properties.keys().enumerate() {
            // Separator before every element except the first. Index-based,
            // so the rule holds for 0, 1 and N properties alike.
            if i > 0 {
                out.push_str(", ");
            }
            check_property_name(name)?;
            out.push_str(name);
            out.push_str(": $");
            out.push_str(role);
            out.push('_');
            out.push_str(name);
        }
        out.push('}');
    }
    out.push(close);
    Ok(out)
}
