use std::collections::HashSet;

use super::material::{Material, MaterialStatus};

/// Inventory figures shown on the admin analytics page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStats {
    pub total_materials: usize,
    pub total_photos: usize,
    pub unique_factories: usize,
    pub available: usize,
    pub sold: usize,
    /// Every listing counts as one entry, even repeated factories.
    pub total_entries: usize,
}

impl CatalogStats {
    pub fn compute(materials: &[Material]) -> Self {
        let factories: HashSet<&str> = materials.iter().map(|m| m.factory_name.as_str()).collect();
        let count = |status| materials.iter().filter(|m| m.status == status).count();

        Self {
            total_materials: materials.len(),
            total_photos: materials.iter().map(|m| m.images.len()).sum(),
            unique_factories: factories.len(),
            available: count(MaterialStatus::Available),
            sold: count(MaterialStatus::Sold),
            total_entries: materials.len(),
        }
    }

    /// Share of available listings as a rounded percentage; 0 for an empty catalog.
    pub fn availability_percent(&self) -> u32 {
        if self.total_materials == 0 {
            return 0;
        }
        (self.available as f64 / self.total_materials as f64 * 100.0).round() as u32
    }

    /// Photos per listing, rounded to one decimal; 0 for an empty catalog.
    pub fn average_photos(&self) -> f64 {
        if self.total_materials == 0 {
            return 0.0;
        }
        let avg = self.total_photos as f64 / self.total_materials as f64;
        (avg * 10.0).round() / 10.0
    }
}
