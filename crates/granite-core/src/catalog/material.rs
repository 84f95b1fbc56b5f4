use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{GraniteError, Result};

/// Availability of a listing. Only available listings accept buy requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStatus {
    #[default]
    Available,
    Sold,
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Sold => write!(f, "sold"),
        }
    }
}

impl FromStr for MaterialStatus {
    type Err = GraniteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "sold" => Ok(Self::Sold),
            other => Err(GraniteError::InvalidMaterial(format!(
                "unknown status '{other}' (expected available or sold)"
            ))),
        }
    }
}

/// One stone-material listing as stored in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub factory_name: String,
    pub owner_name: String,
    #[serde(default)]
    pub owner_phone: String,
    /// Price per square foot.
    pub rate: f64,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: MaterialStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub created_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Material {
    pub fn is_available(&self) -> bool {
        self.status == MaterialStatus::Available
    }

    /// Locator of the cover photo, if the listing has any.
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Raw form input for creating or editing a listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialDraft {
    pub factory_name: String,
    pub owner_name: String,
    pub owner_phone: String,
    /// Price as typed; parsed by [`MaterialDraft::validate`].
    pub rate: String,
    pub description: String,
    pub notes: String,
    pub status: MaterialStatus,
}

/// A draft that passed validation, with the rate parsed and blank optional
/// fields collapsed to `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialFields {
    pub factory_name: String,
    pub owner_name: String,
    pub owner_phone: String,
    pub rate: f64,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub status: MaterialStatus,
}

impl MaterialDraft {
    pub fn from_material(material: &Material) -> Self {
        Self {
            factory_name: material.factory_name.clone(),
            owner_name: material.owner_name.clone(),
            owner_phone: material.owner_phone.clone(),
            rate: material.rate.to_string(),
            description: material.description.clone().unwrap_or_default(),
            notes: material.notes.clone().unwrap_or_default(),
            status: material.status,
        }
    }

    /// Check the draft. `photo_count` counts existing plus newly uploaded photos;
    /// a listing needs at least one.
    pub fn validate(&self, photo_count: usize) -> Result<MaterialFields> {
        let factory_name = required(&self.factory_name, "factory name")?;
        let owner_name = required(&self.owner_name, "owner name")?;

        let rate: f64 = self
            .rate
            .trim()
            .parse()
            .map_err(|_| GraniteError::InvalidMaterial(format!("rate '{}' is not a number", self.rate)))?;
        if !rate.is_finite() || rate < 0.0 {
            return Err(GraniteError::InvalidMaterial(format!(
                "rate must be a non-negative number, got {rate}"
            )));
        }

        if photo_count == 0 {
            return Err(GraniteError::InvalidMaterial(
                "at least one photo is required".into(),
            ));
        }

        Ok(MaterialFields {
            factory_name,
            owner_name,
            owner_phone: self.owner_phone.trim().to_string(),
            rate,
            description: optional(&self.description),
            notes: optional(&self.notes),
            status: self.status,
        })
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GraniteError::InvalidMaterial(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
