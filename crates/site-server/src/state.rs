//! Application State

use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Prefix the frontend is mounted under ("" for the root)
    pub base_path: Arc<str>,
}
