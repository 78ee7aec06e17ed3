//! Route handlers.

pub mod health;
pub mod nodes;
pub mod properties;
pub mod relations;
pub mod reports;
