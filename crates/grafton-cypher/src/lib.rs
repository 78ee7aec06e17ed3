//! # Grafton Cypher
//!
//! The query compiler: turns descriptions of graph entities (a node, a
//! relationship, or a node-relation-node triple) plus a CRUD verb into a
//! parameterized Cypher statement.
//!
//! Everything in this crate is pure and synchronous. Compilation produces a
//! [`Statement`] (query text plus a flat parameter map) and never touches
//! the store; execution lives in `grafton-store`.

pub mod compose;
pub mod entity;
pub mod error;
pub mod fragment;
pub mod params;

pub use compose::{Statement, DESTINATION, NODE, ORIGIN, RELATION};
pub use entity::{Entity, Properties};
pub use error::{CypherError, CypherResult};
pub use params::{bind, bind_free_form, ParamMap};
