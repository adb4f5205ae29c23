/// Asset store - read-only view of the asset directory on disk
use crate::error::{Result, ServerError};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct AssetStore {
    base_path: PathBuf,
}

impl AssetStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Initialize the asset directory
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    /// Base directory the asset route maps onto
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a relative request path to a file inside the store
    ///
    /// Only plain relative paths resolve; anything empty, absolute, or
    /// containing a parent-directory component is refused before touching
    /// the filesystem, and the canonicalized result must stay inside the
    /// base directory. A path that resolves to anything but a regular
    /// file is reported as not found.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
        if relative.is_empty() {
            return Err(ServerError::NotFound("Asset not found".to_string()));
        }

        let requested = Path::new(relative);
        let plain_relative = requested
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !plain_relative {
            return Err(ServerError::NotFound("Asset not found".to_string()));
        }

        let path = self.base_path.join(requested);
        if !path.is_file() {
            return Err(ServerError::NotFound(format!(
                "Asset not found: {}",
                relative
            )));
        }

        self.validate_path(&path)?;
        Ok(path)
    }

    /// Validate that a path is within the asset directory (prevent directory traversal)
    pub fn validate_path(&self, path: &Path) -> Result<()> {
        let canonical_base = self
            .base_path
            .canonicalize()
            .map_err(|e| ServerError::Internal(format!("Invalid base path: {}", e)))?;

        let canonical_path = path
            .canonicalize()
            .map_err(|_| ServerError::NotFound("Asset not found".to_string()))?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(ServerError::NotFound("Asset not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_existing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        std::fs::write(temp_dir.path().join("cover.png"), b"png bytes").unwrap();

        let path = store.resolve("cover.png").unwrap();
        assert!(path.ends_with("cover.png"));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_resolve_nested_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        std::fs::create_dir_all(temp_dir.path().join("audio")).unwrap();
        std::fs::write(temp_dir.path().join("audio/story.mp3"), b"mp3 bytes").unwrap();

        assert!(store.resolve("audio/story.mp3").is_ok());
    }

    #[tokio::test]
    async fn test_resolve_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        let err = store.resolve("does-not-exist.png").unwrap_err();
        assert!(matches!(err, ServerError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_traversal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(temp_dir.path().join("assets"));
        store.initialize().await.unwrap();

        // A real file one level above the base directory
        std::fs::write(temp_dir.path().join("secret.txt"), b"secret").unwrap();

        assert!(store.resolve("../secret.txt").is_err());
        assert!(store.resolve("audio/../../secret.txt").is_err());
        assert!(store.resolve("/etc/hostname").is_err());
        assert!(store.resolve("").is_err());
    }

    #[tokio::test]
    async fn test_resolve_rejects_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        std::fs::create_dir_all(temp_dir.path().join("audio")).unwrap();

        let err = store.resolve("audio").unwrap_err();
        assert!(matches!(err, ServerError::NotFound(_)));
    }
}
