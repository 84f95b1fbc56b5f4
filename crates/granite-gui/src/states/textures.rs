use std::collections::{HashMap, HashSet};

use crate::messages::ImageKind;

/// Decoded photos uploaded to the GPU, keyed by locator.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<(String, ImageKind), egui::TextureHandle>,
    /// Requested from the worker, not yet answered.
    pending: HashSet<(String, ImageKind)>,
    /// Decoding failed; never requested again this session.
    failed: HashSet<(String, ImageKind)>,
}

impl TextureCache {
    pub fn get(&self, locator: &str, kind: ImageKind) -> Option<&egui::TextureHandle> {
        self.textures.get(&(locator.to_string(), kind))
    }

    /// Best texture available for the viewer: full size, else the preview.
    pub fn best(&self, locator: &str) -> Option<&egui::TextureHandle> {
        self.get(locator, ImageKind::Full)
            .or_else(|| self.get(locator, ImageKind::Thumbnail))
    }

    pub fn is_failed(&self, locator: &str, kind: ImageKind) -> bool {
        self.failed.contains(&(locator.to_string(), kind))
    }

    /// Mark `locator` as requested. Returns false if it is already loaded,
    /// in flight, or known to fail.
    pub fn request(&mut self, locator: &str, kind: ImageKind) -> bool {
        let key = (locator.to_string(), kind);
        if self.textures.contains_key(&key) || self.failed.contains(&key) {
            return false;
        }
        self.pending.insert(key)
    }

    pub fn insert(&mut self, locator: String, kind: ImageKind, texture: egui::TextureHandle) {
        let key = (locator, kind);
        self.pending.remove(&key);
        self.textures.insert(key, texture);
    }

    pub fn mark_failed(&mut self, locator: String, kind: ImageKind) {
        let key = (locator, kind);
        self.pending.remove(&key);
        self.failed.insert(key);
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Forget everything, e.g. after switching catalogs.
    pub fn clear(&mut self) {
        self.textures.clear();
        self.pending.clear();
        self.failed.clear();
    }
}
