/// Shared application state
use crate::services::AssetStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<AssetStore>,
}

impl AppState {
    pub fn new(assets: Arc<AssetStore>) -> Self {
        Self { assets }
    }
}
