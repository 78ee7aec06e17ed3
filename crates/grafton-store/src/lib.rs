//! # Grafton Store
//!
//! Execution layer over Neo4j. Takes the compiled statements produced by
//! `grafton-cypher`, binds their parameters onto the driver, and returns
//! result rows. Also hosts the handful of fixed analytical queries, which
//! are static text with no compilation logic.

pub mod client;
pub mod error;
pub mod params;
pub mod reports;

pub use client::{column_i64, column_json, StoreClient, StoreConfig, StoreCounts};
pub use error::{StoreError, StoreResult};
