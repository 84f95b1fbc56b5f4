use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::{Role, UserProfile};
use crate::catalog::StatusFilter;
use crate::consts::{DEFAULT_WHATSAPP_NUMBER, WHATSAPP_NUMBER_ENV};
use crate::error::{GraniteError, Result};

/// Application settings shared by the CLI and the desktop app.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON snapshot holding the catalog rows.
    pub catalog_path: PathBuf,
    /// JSON snapshot holding sent buy requests.
    pub requests_path: PathBuf,
    /// Directory photos are uploaded into.
    pub blob_dir: PathBuf,
    /// Number buy requests are handed off to.
    pub whatsapp_number: String,
    /// Filter buyers see first.
    pub default_filter: StatusFilter,
    pub currency_symbol: String,
    /// Local identities standing in for the hosted sign-in provider.
    pub users: Vec<UserProfile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.json"),
            requests_path: PathBuf::from("buy_requests.json"),
            blob_dir: PathBuf::from("photos"),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            default_filter: StatusFilter::Available,
            currency_symbol: "\u{20b9}".to_string(),
            users: vec![
                UserProfile {
                    id: "admin".into(),
                    email: "admin@example.com".into(),
                    role: Role::Admin,
                    display_name: Some("Catalog Admin".into()),
                    company_name: None,
                    phone: None,
                },
                UserProfile {
                    id: "buyer".into(),
                    email: "buyer@example.com".into(),
                    role: Role::Buyer,
                    display_name: None,
                    company_name: Some("Example Builders".into()),
                    phone: Some("+91 90000 00000".into()),
                },
            ],
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise defaults; then apply environment overrides.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(std::env::var(WHATSAPP_NUMBER_ENV).ok());
    }

    /// Apply an explicit messaging number override; blank values are ignored.
    pub fn apply_overrides(&mut self, whatsapp_number: Option<String>) {
        if let Some(number) = whatsapp_number.filter(|n| !n.trim().is_empty()) {
            self.whatsapp_number = number.trim().to_string();
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// First configured user with `role`.
    pub fn user_with_role(&self, role: Role) -> Result<&UserProfile> {
        self.users
            .iter()
            .find(|u| u.role == role)
            .ok_or_else(|| GraniteError::Unauthorized(format!("no {role} user configured")))
    }
}
