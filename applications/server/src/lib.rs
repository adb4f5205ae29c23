//! Storybook Server Library
//!
//! Static asset server for the storybook web page: a read-only
//! file-system subtree exposed under `/api/assets`, plus a health
//! endpoint and a fallback serving the built web page.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::AssetStore;
pub use state::AppState;
