pub mod add;
pub mod buy;
pub mod config;
pub mod edit;
pub mod list;
pub mod status;
pub mod view;

use std::path::Path;

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use granite_core::access::{require_role, Role, UserProfile};
use granite_core::catalog::{DirBlobStore, JsonCatalog};
use granite_core::config::AppConfig;
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    Buyer,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Admin,
            RoleArg::Buyer => Role::Buyer,
        }
    }
}

/// Settings plus the identity a command runs as.
pub struct Context {
    pub config: AppConfig,
    pub user: UserProfile,
}

impl Context {
    pub fn load(config_path: Option<&Path>, role: Role) -> Result<Self> {
        let config = AppConfig::resolve(config_path).with_context(|| match config_path {
            Some(p) => format!("Failed to load config from {}", p.display()),
            None => "Failed to load default config".to_string(),
        })?;
        let user = config.user_with_role(role)?.clone();
        debug!(user = %user.email, %role, "acting as");
        Ok(Self { config, user })
    }

    pub fn catalog(&self) -> Result<JsonCatalog> {
        let path = &self.config.catalog_path;
        JsonCatalog::open(path)
            .with_context(|| format!("Failed to open catalog {}", path.display()))
    }

    pub fn blobs(&self) -> Result<DirBlobStore> {
        let dir = &self.config.blob_dir;
        DirBlobStore::new(dir)
            .with_context(|| format!("Failed to prepare photo directory {}", dir.display()))
    }

    /// Fail unless the current identity is an admin.
    pub fn require_admin(&self) -> Result<()> {
        require_role(&self.user, Role::Admin)?;
        Ok(())
    }
}
