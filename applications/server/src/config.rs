/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_assets")]
    pub assets: AssetSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Directory the asset route maps onto (read-only)
    #[serde(default = "default_asset_directory")]
    pub directory: PathBuf,

    /// Directory with the built web page, served as the fallback
    #[serde(default = "default_web_directory")]
    pub web_directory: PathBuf,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        Self::load_from(PathBuf::from("config.toml"))
    }

    /// Load configuration from an explicit file path and environment
    pub fn load_from(config_path: PathBuf) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with STORYBOOK_)
        settings = settings.add_source(
            config::Environment::with_prefix("STORYBOOK")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.assets.directory.exists() && !self.assets.directory.is_dir() {
            return Err(ServerError::Config(format!(
                "Asset path is not a directory: {:?} (set STORYBOOK_ASSETS_DIRECTORY)",
                self.assets.directory
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_assets() -> AssetSettings {
    AssetSettings {
        directory: default_asset_directory(),
        web_directory: default_web_directory(),
    }
}

fn default_asset_directory() -> PathBuf {
    PathBuf::from("./attached_assets")
}

fn default_web_directory() -> PathBuf {
    PathBuf::from("./web")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            assets: default_assets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.assets.directory, PathBuf::from("./attached_assets"));
    }

    #[test]
    fn validate_rejects_file_as_asset_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("not-a-dir");
        std::fs::write(&file_path, b"plain file").unwrap();

        let mut config = ServerConfig::default();
        config.assets.directory = file_path;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_existing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default();
        config.assets.directory = temp_dir.path().to_path_buf();
        assert!(config.validate().is_ok());
    }
}
