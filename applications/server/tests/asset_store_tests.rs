/// Asset store tests
/// Exercises path resolution against a real temporary directory tree
use std::path::PathBuf;
use storybook_server::services::AssetStore;
use tempfile::TempDir;

async fn create_store() -> (AssetStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = AssetStore::new(temp_dir.path().join("assets"));
    store.initialize().await.unwrap();
    (store, temp_dir)
}

#[tokio::test]
async fn test_initialize_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("brand/new/assets");

    let store = AssetStore::new(base.clone());
    store.initialize().await.unwrap();

    assert!(base.is_dir());
    assert_eq!(store.base_path(), base.as_path());
}

#[tokio::test]
async fn test_resolves_deeply_nested_assets() {
    let (store, _temp_dir) = create_store().await;

    let nested = store.base_path().join("pages/music/art");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join("sparkle.png"), b"png").unwrap();

    let resolved = store.resolve("pages/music/art/sparkle.png").unwrap();
    assert!(resolved.is_file());
}

#[tokio::test]
async fn test_resolves_names_with_spaces_and_unicode() {
    let (store, _temp_dir) = create_store().await;

    std::fs::write(store.base_path().join("page une ♪.png"), b"png").unwrap();

    assert!(store.resolve("page une ♪.png").is_ok());
}

#[tokio::test]
async fn test_deleted_file_stops_resolving() {
    let (store, _temp_dir) = create_store().await;

    let path = store.base_path().join("temp.mp3");
    std::fs::write(&path, b"mp3").unwrap();
    assert!(store.resolve("temp.mp3").is_ok());

    std::fs::remove_file(&path).unwrap();
    assert!(store.resolve("temp.mp3").is_err());
}

#[tokio::test]
async fn test_validate_path_rejects_outside_base() {
    let (store, temp_dir) = create_store().await;

    let outside = temp_dir.path().join("outside.txt");
    std::fs::write(&outside, b"outside").unwrap();

    assert!(store.validate_path(&outside).is_err());
}

#[tokio::test]
async fn test_validate_path_accepts_inside_base() {
    let (store, _temp_dir) = create_store().await;

    let inside = store.base_path().join("inside.txt");
    std::fs::write(&inside, b"inside").unwrap();

    assert!(store.validate_path(&inside).is_ok());
}

#[tokio::test]
async fn test_absolute_request_paths_never_resolve() {
    let (store, _temp_dir) = create_store().await;

    // Even a path pointing at a file that exists on the system
    let absolute = PathBuf::from("/etc/hosts");
    if absolute.exists() {
        assert!(store.resolve("/etc/hosts").is_err());
    }
    assert!(store.resolve("/").is_err());
}
