/// API route modules
pub mod assets;
pub mod health;
