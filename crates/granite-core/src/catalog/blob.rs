use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::error::{GraniteError, Result};

/// Durable storage for listing photos.
pub trait BlobStore {
    /// Store `bytes` and return a durable locator for them.
    fn upload(&mut self, bytes: &[u8], extension: &str) -> Result<String>;

    /// Remove the blob a locator points to.
    fn delete(&mut self, locator: &str) -> Result<()>;
}

/// Blob store backed by a local directory. Locators are file paths.
pub struct DirBlobStore {
    root: PathBuf,
    counter: u64,
}

impl DirBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root, counter: 0 })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unique_name(&mut self, extension: &str) -> String {
        self.counter += 1;
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        if ext.is_empty() {
            format!("{nanos:x}-{}", self.counter)
        } else {
            format!("{nanos:x}-{}.{ext}", self.counter)
        }
    }

    /// Resolve a locator to a file in this store by its last path segment.
    fn resolve(&self, locator: &str) -> Result<PathBuf> {
        let name = locator
            .rsplit(['/', '\\'])
            .next()
            .filter(|n| !n.is_empty() && *n != "." && *n != "..")
            .ok_or_else(|| GraniteError::InvalidLocator(locator.to_string()))?;
        Ok(self.root.join(name))
    }
}

impl BlobStore for DirBlobStore {
    fn upload(&mut self, bytes: &[u8], extension: &str) -> Result<String> {
        let name = self.unique_name(extension);
        let path = self.root.join(name);
        std::fs::write(&path, bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "photo uploaded");
        Ok(path.display().to_string())
    }

    fn delete(&mut self, locator: &str) -> Result<()> {
        let path = self.resolve(locator)?;
        std::fs::remove_file(&path)?;
        info!(path = %path.display(), "photo deleted");
        Ok(())
    }
}
