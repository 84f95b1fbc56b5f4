use std::path::Path;

use tracing::warn;

use crate::error::Result;

use super::blob::BlobStore;
use super::material::{Material, MaterialDraft};
use super::store::CatalogStore;

/// A photo picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    pub extension: String,
}

impl PhotoUpload {
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self { bytes, extension })
    }
}

/// Validate `draft`, upload `photos` and insert a new listing.
///
/// Nothing is uploaded if the draft is invalid, and uploaded photos are
/// deleted again if the insert fails.
pub fn create_material(
    store: &mut dyn CatalogStore,
    blobs: &mut dyn BlobStore,
    draft: &MaterialDraft,
    photos: &[PhotoUpload],
    created_by: &str,
    mut on_uploaded: impl FnMut(usize),
) -> Result<Material> {
    let fields = draft.validate(photos.len())?;
    let locators = upload_all(blobs, photos, &mut on_uploaded)?;
    match store.insert(fields, locators.clone(), created_by) {
        Ok(material) => Ok(material),
        Err(e) => {
            discard(blobs, &locators);
            Err(e)
        }
    }
}

/// Validate `draft`, upload `photos` and apply the edit. New photos are
/// appended to the existing ones; they are deleted again if the update fails.
pub fn edit_material(
    store: &mut dyn CatalogStore,
    blobs: &mut dyn BlobStore,
    id: &str,
    draft: &MaterialDraft,
    photos: &[PhotoUpload],
    mut on_uploaded: impl FnMut(usize),
) -> Result<Material> {
    let existing = store.get(id)?;
    let fields = draft.validate(existing.images.len() + photos.len())?;
    let locators = upload_all(blobs, photos, &mut on_uploaded)?;
    match store.update(id, fields, locators.clone()) {
        Ok(material) => Ok(material),
        Err(e) => {
            discard(blobs, &locators);
            Err(e)
        }
    }
}

/// Delete a listing's photos, then the listing itself.
///
/// A photo that cannot be removed is logged and skipped; the row is deleted
/// regardless.
pub fn remove_material(
    store: &mut dyn CatalogStore,
    blobs: &mut dyn BlobStore,
    id: &str,
) -> Result<Material> {
    let material = store.get(id)?;
    for locator in &material.images {
        if let Err(e) = blobs.delete(locator) {
            warn!(%locator, error = %e, "failed to delete photo");
        }
    }
    store.delete(id)
}

fn upload_all(
    blobs: &mut dyn BlobStore,
    photos: &[PhotoUpload],
    on_uploaded: &mut impl FnMut(usize),
) -> Result<Vec<String>> {
    let mut locators = Vec::with_capacity(photos.len());
    for (i, photo) in photos.iter().enumerate() {
        match blobs.upload(&photo.bytes, &photo.extension) {
            Ok(locator) => locators.push(locator),
            Err(e) => {
                discard(blobs, &locators);
                return Err(e);
            }
        }
        on_uploaded(i + 1);
    }
    Ok(locators)
}

/// Best-effort removal of photos uploaded for a write that did not land.
fn discard(blobs: &mut dyn BlobStore, locators: &[String]) {
    for locator in locators {
        if let Err(e) = blobs.delete(locator) {
            warn!(%locator, error = %e, "failed to delete orphaned photo");
        }
    }
}
