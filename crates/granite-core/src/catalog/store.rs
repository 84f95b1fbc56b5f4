use std::path::{Path, PathBuf};
use std::sync::mpsc;

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::consts::MATERIAL_ID_PREFIX;
use crate::error::{GraniteError, Result};

use super::material::{Material, MaterialFields, MaterialStatus};
use super::snapshot;

/// Kind of write reported to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Inserted,
    Updated,
    Deleted,
}

/// Notification sent after every successful catalog write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogChange {
    pub kind: ChangeKind,
    pub id: String,
}

/// Persistent catalog of listings. Writes are last-write-wins.
///
/// Subscribers only learn that something changed; they are expected to refetch
/// with [`CatalogStore::list`].
pub trait CatalogStore {
    fn list(&self) -> Vec<Material>;

    fn get(&self, id: &str) -> Result<Material>;

    fn insert(&mut self, fields: MaterialFields, images: Vec<String>, created_by: &str) -> Result<Material>;

    /// Replace the editable fields and append `new_images` to the existing photos.
    fn update(&mut self, id: &str, fields: MaterialFields, new_images: Vec<String>) -> Result<Material>;

    fn set_status(&mut self, id: &str, status: MaterialStatus) -> Result<Material>;

    fn delete(&mut self, id: &str) -> Result<Material>;

    fn subscribe(&mut self) -> mpsc::Receiver<CatalogChange>;
}

/// Catalog kept in memory and mirrored to a JSON snapshot file after each write.
///
/// A write reaches `rows` only after the snapshot has been written, so a failed
/// write leaves the catalog as it was.
pub struct JsonCatalog {
    path: Option<PathBuf>,
    rows: Vec<Material>,
    next_seq: u64,
    subscribers: Vec<mpsc::Sender<CatalogChange>>,
}

impl JsonCatalog {
    /// Catalog without a backing file.
    pub fn in_memory() -> Self {
        Self::from_rows(None, Vec::new())
    }

    /// Load the snapshot at `path`; a missing file starts an empty catalog that
    /// will be created on the first write.
    pub fn open(path: &Path) -> Result<Self> {
        let rows: Vec<Material> = snapshot::read_rows(path)?;
        info!(path = %path.display(), rows = rows.len(), "catalog opened");
        Ok(Self::from_rows(Some(path.to_path_buf()), rows))
    }

    fn from_rows(path: Option<PathBuf>, rows: Vec<Material>) -> Self {
        let next_seq = snapshot::next_sequence(rows.iter().map(|m| m.id.as_str()), MATERIAL_ID_PREFIX);
        Self {
            path,
            rows,
            next_seq,
            subscribers: Vec::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the snapshot file, if any.
    pub fn save(&self) -> Result<()> {
        self.persist(&self.rows)
    }

    fn persist(&self, rows: &[Material]) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        snapshot::write_rows(path, rows)?;
        debug!(path = %path.display(), rows = rows.len(), "catalog saved");
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.rows
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| GraniteError::MaterialNotFound(id.to_string()))
    }

    /// Persist `rows`, then adopt them and notify subscribers.
    fn commit(&mut self, rows: Vec<Material>, kind: ChangeKind, id: &str) -> Result<()> {
        self.persist(&rows)?;
        self.rows = rows;

        let change = CatalogChange {
            kind,
            id: id.to_string(),
        };
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(change.clone()).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            warn!(dropped, "pruned disconnected catalog subscribers");
        }
        Ok(())
    }

    /// Apply `edit` to a copy of row `id` and commit it.
    fn commit_row(&mut self, id: &str, edit: impl FnOnce(&mut Material)) -> Result<Material> {
        let idx = self.position(id)?;
        let mut rows = self.rows.clone();
        edit(&mut rows[idx]);
        rows[idx].updated_at = OffsetDateTime::now_utc();
        let material = rows[idx].clone();
        self.commit(rows, ChangeKind::Updated, id)?;
        Ok(material)
    }
}

impl CatalogStore for JsonCatalog {
    fn list(&self) -> Vec<Material> {
        self.rows.clone()
    }

    fn get(&self, id: &str) -> Result<Material> {
        let idx = self.position(id)?;
        Ok(self.rows[idx].clone())
    }

    fn insert(&mut self, fields: MaterialFields, images: Vec<String>, created_by: &str) -> Result<Material> {
        let now = OffsetDateTime::now_utc();
        let id = format!("{MATERIAL_ID_PREFIX}-{:04}", self.next_seq);

        let material = Material {
            id: id.clone(),
            factory_name: fields.factory_name,
            owner_name: fields.owner_name,
            owner_phone: fields.owner_phone,
            rate: fields.rate,
            images,
            status: fields.status,
            created_at: now,
            updated_at: now,
            created_by: created_by.to_string(),
            description: fields.description,
            notes: fields.notes,
        };
        let mut rows = self.rows.clone();
        rows.push(material.clone());
        self.commit(rows, ChangeKind::Inserted, &id)?;
        self.next_seq += 1;
        info!(%id, factory = %material.factory_name, photos = material.images.len(), "material inserted");
        Ok(material)
    }

    fn update(&mut self, id: &str, fields: MaterialFields, new_images: Vec<String>) -> Result<Material> {
        let material = self.commit_row(id, |row| {
            row.factory_name = fields.factory_name;
            row.owner_name = fields.owner_name;
            row.owner_phone = fields.owner_phone;
            row.rate = fields.rate;
            row.description = fields.description;
            row.notes = fields.notes;
            row.status = fields.status;
            row.images.extend(new_images);
        })?;
        info!(%id, "material updated");
        Ok(material)
    }

    fn set_status(&mut self, id: &str, status: MaterialStatus) -> Result<Material> {
        let material = self.commit_row(id, |row| row.status = status)?;
        info!(%id, %status, "material status changed");
        Ok(material)
    }

    fn delete(&mut self, id: &str) -> Result<Material> {
        let idx = self.position(id)?;
        let mut rows = self.rows.clone();
        let material = rows.remove(idx);
        self.commit(rows, ChangeKind::Deleted, id)?;
        info!(%id, "material deleted");
        Ok(material)
    }

    fn subscribe(&mut self) -> mpsc::Receiver<CatalogChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }
}
