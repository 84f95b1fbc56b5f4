mod common;

use std::path::{Path, PathBuf};

use granite_core::catalog::{
    create_material, edit_material, remove_material, BlobStore, CatalogStore, ChangeKind,
    DirBlobStore, JsonCatalog, MaterialStatus, PhotoUpload,
};
use granite_core::error::{GraniteError, Result};

use common::draft;

fn photo(tag: &str) -> PhotoUpload {
    PhotoUpload {
        bytes: tag.as_bytes().to_vec(),
        extension: "JPG".into(),
    }
}

// ---------------------------------------------------------------------------
// JsonCatalog
// ---------------------------------------------------------------------------

#[test]
fn test_insert_assigns_sequential_ids() {
    let mut store = JsonCatalog::in_memory();
    let a = store.insert(draft("A", "10").validate(1).unwrap(), vec!["a.jpg".into()], "admin").unwrap();
    let b = store.insert(draft("B", "20").validate(1).unwrap(), vec!["b.jpg".into()], "admin").unwrap();
    assert_eq!(a.id, "mat-0001");
    assert_eq!(b.id, "mat-0002");
    assert_eq!(store.len(), 2);
    assert_eq!(b.created_by, "admin");
    assert_eq!(b.status, MaterialStatus::Available);
}

#[test]
fn test_snapshot_persists_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("catalog.json");

    {
        let mut store = JsonCatalog::open(&path).unwrap();
        assert!(store.is_empty());
        store.insert(draft("Deccan", "99.5").validate(1).unwrap(), vec!["x.jpg".into()], "admin").unwrap();
    }
    assert!(path.exists());

    let mut reopened = JsonCatalog::open(&path).unwrap();
    let rows = reopened.list();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].factory_name, "Deccan");
    assert_eq!(rows[0].rate, 99.5);

    // Sequence continues after the highest stored id.
    let next = reopened.insert(draft("Next", "1").validate(1).unwrap(), vec![], "admin").unwrap();
    assert_eq!(next.id, "mat-0002");
}

#[test]
fn test_update_appends_images() {
    let mut store = JsonCatalog::in_memory();
    let m = store.insert(draft("A", "10").validate(1).unwrap(), vec!["a.jpg".into()], "admin").unwrap();

    let mut edit = draft("A2", "15");
    edit.status = MaterialStatus::Sold;
    let updated = store
        .update(&m.id, edit.validate(2).unwrap(), vec!["b.jpg".into()])
        .unwrap();
    assert_eq!(updated.images, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
    assert_eq!(updated.factory_name, "A2");
    assert_eq!(updated.status, MaterialStatus::Sold);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn test_missing_material_errors() {
    let mut store = JsonCatalog::in_memory();
    assert!(matches!(store.get("mat-0009"), Err(GraniteError::MaterialNotFound(_))));
    assert!(matches!(store.delete("mat-0009"), Err(GraniteError::MaterialNotFound(_))));
    assert!(matches!(
        store.set_status("mat-0009", MaterialStatus::Sold),
        Err(GraniteError::MaterialNotFound(_))
    ));
}

#[test]
fn test_subscribers_notified_on_every_write() {
    let mut store = JsonCatalog::in_memory();
    let rx = store.subscribe();

    let m = store.insert(draft("A", "10").validate(1).unwrap(), vec!["a.jpg".into()], "admin").unwrap();
    store.set_status(&m.id, MaterialStatus::Sold).unwrap();
    store.delete(&m.id).unwrap();

    let kinds: Vec<ChangeKind> = rx.try_iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![ChangeKind::Inserted, ChangeKind::Updated, ChangeKind::Deleted]);
}

#[test]
fn test_dropped_subscriber_does_not_break_writes() {
    let mut store = JsonCatalog::in_memory();
    drop(store.subscribe());
    let live = store.subscribe();
    store.insert(draft("A", "10").validate(1).unwrap(), vec![], "admin").unwrap();
    assert_eq!(live.try_iter().count(), 1);
}

#[test]
fn test_corrupt_snapshot_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(JsonCatalog::open(&path), Err(GraniteError::Json(_))));
}

/// Snapshot path whose parent is a regular file, so every save fails.
fn unwritable_path(dir: &Path) -> PathBuf {
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, "").unwrap();
    blocker.join("catalog.json")
}

#[test]
fn test_failed_insert_leaves_catalog_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCatalog::open(&unwritable_path(dir.path())).unwrap();
    let rx = store.subscribe();

    let result = store.insert(draft("A", "10").validate(1).unwrap(), vec!["a.jpg".into()], "admin");
    assert!(matches!(result, Err(GraniteError::Io(_))));
    assert_eq!(store.list().len(), 0);
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn test_failed_writes_keep_last_good_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let mut store = JsonCatalog::open(&path).unwrap();
    let m = store.insert(draft("A", "10").validate(1).unwrap(), vec!["a.jpg".into()], "admin").unwrap();

    // Replace the snapshot with a directory so the next save fails.
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();
    let rx = store.subscribe();

    assert!(store.set_status(&m.id, MaterialStatus::Sold).is_err());
    assert!(store
        .update(&m.id, draft("B", "20").validate(1).unwrap(), vec!["b.jpg".into()])
        .is_err());
    assert!(store.delete(&m.id).is_err());
    assert!(store.insert(draft("C", "30").validate(1).unwrap(), vec![], "admin").is_err());

    assert_eq!(store.list(), vec![m.clone()]);
    assert_eq!(rx.try_iter().count(), 0);

    // The sequence did not advance on the failed insert.
    std::fs::remove_dir(&path).unwrap();
    let next = store.insert(draft("D", "40").validate(1).unwrap(), vec![], "admin").unwrap();
    assert_eq!(next.id, "mat-0002");
    let reopened = JsonCatalog::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get(&m.id).unwrap().status, MaterialStatus::Available);
}

// ---------------------------------------------------------------------------
// DirBlobStore
// ---------------------------------------------------------------------------

#[test]
fn test_blob_upload_and_delete() {
    let dir = tempfile::tempdir().unwrap();
    let mut blobs = DirBlobStore::new(dir.path().join("photos")).unwrap();

    let a = blobs.upload(b"one", "JPG").unwrap();
    let b = blobs.upload(b"two", ".png").unwrap();
    assert_ne!(a, b);
    assert!(a.ends_with(".jpg"));
    assert!(b.ends_with(".png"));
    assert_eq!(std::fs::read(&a).unwrap(), b"one");

    blobs.delete(&a).unwrap();
    assert!(!Path::new(&a).exists());
    assert!(Path::new(&b).exists());
}

#[test]
fn test_blob_delete_resolves_by_last_segment() {
    let dir = tempfile::tempdir().unwrap();
    let mut blobs = DirBlobStore::new(dir.path()).unwrap();
    let locator = blobs.upload(b"x", "jpg").unwrap();
    let name = Path::new(&locator).file_name().unwrap().to_str().unwrap().to_string();

    blobs.delete(&format!("https://cdn.example.com/materials/{name}")).unwrap();
    assert!(!Path::new(&locator).exists());
}

#[test]
fn test_blob_rejects_bad_locators() {
    let dir = tempfile::tempdir().unwrap();
    let mut blobs = DirBlobStore::new(dir.path()).unwrap();
    assert!(matches!(blobs.delete("photos/"), Err(GraniteError::InvalidLocator(_))));
    assert!(matches!(blobs.delete(".."), Err(GraniteError::InvalidLocator(_))));
    assert!(matches!(blobs.delete("missing.jpg"), Err(GraniteError::Io(_))));
}

// ---------------------------------------------------------------------------
// Admin operations
// ---------------------------------------------------------------------------

#[test]
fn test_create_uploads_then_inserts() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCatalog::in_memory();
    let mut blobs = DirBlobStore::new(dir.path()).unwrap();
    let mut progress = Vec::new();

    let m = create_material(
        &mut store,
        &mut blobs,
        &draft("Deccan", "120"),
        &[photo("a"), photo("b")],
        "admin",
        |done| progress.push(done),
    )
    .unwrap();

    assert_eq!(progress, vec![1, 2]);
    assert_eq!(m.images.len(), 2);
    assert!(m.images.iter().all(|p| Path::new(p).exists()));
}

#[test]
fn test_invalid_draft_uploads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCatalog::in_memory();
    let mut blobs = DirBlobStore::new(dir.path()).unwrap();

    let result = create_material(&mut store, &mut blobs, &draft("", "120"), &[photo("a")], "admin", |_| {});
    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_edit_keeps_existing_photos() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCatalog::in_memory();
    let mut blobs = DirBlobStore::new(dir.path()).unwrap();
    let m = create_material(&mut store, &mut blobs, &draft("A", "1"), &[photo("a")], "admin", |_| {}).unwrap();

    // No new photos is fine when the listing already has one.
    let edited = edit_material(&mut store, &mut blobs, &m.id, &draft("A", "2"), &[], |_| {}).unwrap();
    assert_eq!(edited.images, m.images);
    assert_eq!(edited.rate, 2.0);

    let edited = edit_material(&mut store, &mut blobs, &m.id, &draft("A", "2"), &[photo("b")], |_| {}).unwrap();
    assert_eq!(edited.images.len(), 2);
    assert_eq!(edited.images[0], m.images[0]);
}

#[test]
fn test_remove_deletes_photos_and_row() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCatalog::in_memory();
    let mut blobs = DirBlobStore::new(dir.path()).unwrap();
    let m = create_material(&mut store, &mut blobs, &draft("A", "1"), &[photo("a"), photo("b")], "admin", |_| {}).unwrap();

    // One photo already gone: removal still succeeds.
    std::fs::remove_file(&m.images[0]).unwrap();

    let removed = remove_material(&mut store, &mut blobs, &m.id).unwrap();
    assert_eq!(removed.id, m.id);
    assert!(store.is_empty());
    assert!(!Path::new(&m.images[1]).exists());
}

/// Blob store that fails every upload after the first `limit`.
struct FlakyBlobs {
    inner: DirBlobStore,
    limit: usize,
    uploads: usize,
}

impl BlobStore for FlakyBlobs {
    fn upload(&mut self, bytes: &[u8], extension: &str) -> Result<String> {
        if self.uploads == self.limit {
            return Err(GraniteError::InvalidLocator("upload refused".into()));
        }
        self.uploads += 1;
        self.inner.upload(bytes, extension)
    }

    fn delete(&mut self, locator: &str) -> Result<()> {
        self.inner.delete(locator)
    }
}

#[test]
fn test_failed_upload_removes_earlier_photos() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonCatalog::in_memory();
    let mut blobs = FlakyBlobs {
        inner: DirBlobStore::new(dir.path()).unwrap(),
        limit: 1,
        uploads: 0,
    };

    let result = create_material(&mut store, &mut blobs, &draft("A", "1"), &[photo("a"), photo("b")], "admin", |_| {});
    assert!(matches!(result, Err(GraniteError::InvalidLocator(_))));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_failed_insert_removes_uploaded_photos() {
    let dir = tempfile::tempdir().unwrap();
    let photos_dir = dir.path().join("photos");
    let mut store = JsonCatalog::open(&unwritable_path(dir.path())).unwrap();
    let mut blobs = DirBlobStore::new(&photos_dir).unwrap();

    let result = create_material(&mut store, &mut blobs, &draft("A", "1"), &[photo("a"), photo("b")], "admin", |_| {});
    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(&photos_dir).unwrap().count(), 0);
    assert!(store.is_empty());
}
