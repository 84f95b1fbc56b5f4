use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraniteError, Result};

use super::material::{Material, MaterialStatus};

/// Status filter offered to buyers above the catalog grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    #[default]
    Available,
    Sold,
}

impl StatusFilter {
    pub const ALL: &[Self] = &[Self::All, Self::Available, Self::Sold];

    pub fn matches(&self, material: &Material) -> bool {
        match self {
            Self::All => true,
            Self::Available => material.status == MaterialStatus::Available,
            Self::Sold => material.status == MaterialStatus::Sold,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Available => write!(f, "Available"),
            Self::Sold => write!(f, "Sold"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = GraniteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "available" => Ok(Self::Available),
            "sold" => Ok(Self::Sold),
            other => Err(GraniteError::InvalidMaterial(format!(
                "unknown filter '{other}' (expected all, available or sold)"
            ))),
        }
    }
}

/// Materials matching `filter`, newest first.
pub fn list_view(materials: &[Material], filter: StatusFilter) -> Vec<Material> {
    let mut view: Vec<Material> = materials
        .iter()
        .filter(|m| filter.matches(m))
        .cloned()
        .collect();
    view.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    view
}
