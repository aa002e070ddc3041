use super::*;
use crate::store::{file_name_for, is_valid_file_name};
use tempfile::TempDir;
use uuid::Uuid;

async fn test_store() -> (FsStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = FsStore::open(dir.path().join("storage")).await.unwrap();
    (store, dir)
}

#[tokio::test]
async fn open_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FsStore::open(&nested).await.unwrap();
    assert!(store.dir().is_dir());
}

#[tokio::test]
async fn save_writes_exact_bytes() {
    let (store, _dir) = test_store().await;
    let svg = "  <svg xmlns=\"http://www.w3.org/2000/svg\"><!-- ünïcode --></svg>\n";

    let record = store.save(svg).await.unwrap();
    assert!(is_valid_file_name(&record.file_name));
    assert_eq!(record.file_name, file_name_for(record.id));

    let on_disk = std::fs::read(store.dir().join(&record.file_name)).unwrap();
    assert_eq!(on_disk, svg.as_bytes());
    assert_eq!(store.read(&record.file_name).await.unwrap(), svg.as_bytes());
}

#[tokio::test]
async fn save_rejects_non_markup_and_creates_nothing() {
    let (store, _dir) = test_store().await;
    for bad in ["", "   ", "plain text", "svg/>"] {
        assert!(matches!(store.save(bad).await, Err(StoreError::InvalidContent)));
    }
    assert!(store.list().await.unwrap().is_empty());
    assert_eq!(std::fs::read_dir(store.dir()).unwrap().count(), 0);
}

#[tokio::test]
async fn list_returns_only_svg_files_descending() {
    let (store, _dir) = test_store().await;
    for _ in 0..5 {
        store.save("<svg/>").await.unwrap();
    }
    std::fs::write(store.dir().join("notes.txt"), "ignored").unwrap();

    let names = store.list().await.unwrap();
    assert_eq!(names.len(), 5);
    assert!(names.iter().all(|n| n.ends_with(".svg")));
    assert!(names.windows(2).all(|w| w[0] > w[1]));
}

#[tokio::test]
async fn list_fails_when_directory_is_gone() {
    let (store, _dir) = test_store().await;
    std::fs::remove_dir_all(store.dir()).unwrap();
    assert!(matches!(store.list().await, Err(StoreError::Io(_))));
}

#[tokio::test]
async fn read_missing_file_is_not_found() {
    let (store, _dir) = test_store().await;
    let name = file_name_for(Uuid::new_v4());
    assert!(matches!(store.read(&name).await, Err(StoreError::NotFound(n)) if n == name));
}

#[tokio::test]
async fn read_rejects_traversal_before_touching_disk() {
    let (store, dir) = test_store().await;
    std::fs::write(dir.path().join("secret.txt"), "nope").unwrap();
    assert!(matches!(
        store.read("../secret.txt").await,
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.read("../../etc/passwd").await,
        Err(StoreError::InvalidName(_))
    ));
}
