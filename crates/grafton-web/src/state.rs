//! Application state.

use grafton_store::StoreClient;
use std::sync::Arc;

/// Application state shared across handlers.
///
/// Requests share nothing mutable; the store's connection pool is the only
/// shared resource.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StoreClient>,
}

impl AppState {
    pub fn new(store: Arc<StoreClient>) -> Self {
        Self { store }
    }
}
