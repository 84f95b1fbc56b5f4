use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context as _, Result};
use granite_core::access::{require_role, Role, UserProfile};
use granite_core::catalog::{
    remove_material, BuyRequestLog, CatalogChange, CatalogStore, DirBlobStore, JsonCatalog, Material,
    MaterialStatus,
};
use granite_core::config::AppConfig;

use crate::convert::decoded_to_color_image;
use crate::messages::{ImageKind, WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{TextureCache, UIState, ViewerState};
use crate::workers;

/// Longest side of grid and strip previews, in pixels.
pub const THUMBNAIL_SIDE: u32 = 320;

pub struct GraniteApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: AppConfig,
    pub user: UserProfile,
    pub catalog: JsonCatalog,
    changes: mpsc::Receiver<CatalogChange>,
    /// Rows as of the last refetch.
    pub materials: Vec<Material>,
    pub ui_state: UIState,
    pub textures: TextureCache,
    pub viewer: ViewerState,
}

impl GraniteApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone())
            .context("Failed to spawn decoder thread")?;

        let mut catalog = JsonCatalog::open(&config.catalog_path).with_context(|| {
            format!("Failed to open catalog {}", config.catalog_path.display())
        })?;
        let changes = catalog.subscribe();
        let role = if config.user_with_role(Role::Admin).is_ok() {
            Role::Admin
        } else {
            Role::Buyer
        };
        let user = config.user_with_role(role)?.clone();
        let buy_log = BuyRequestLog::open(&config.requests_path).with_context(|| {
            format!("Failed to open buy requests {}", config.requests_path.display())
        })?;
        let ui_state = UIState::new(role, config.default_filter, buy_log);

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            config,
            user,
            catalog,
            changes,
            materials: Vec::new(),
            ui_state,
            textures: TextureCache::default(),
            viewer: ViewerState::default(),
        };
        app.refresh();
        app.ui_state.add_log(format!(
            "Opened {} ({} listings)",
            app.config.catalog_path.display(),
            app.materials.len()
        ));
        Ok(app)
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Decoded {
                    locator,
                    kind,
                    image,
                } => {
                    let texture = ctx.load_texture(
                        format!("{locator}#{kind:?}"),
                        decoded_to_color_image(&image),
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(locator, kind, texture);
                }
                WorkerResult::Failed {
                    locator,
                    kind,
                    message,
                } => {
                    self.textures.mark_failed(locator, kind);
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::CatalogPicked { path } => {
                    self.open_catalog(path);
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Refetch rows whenever the catalog reports a write.
    fn poll_catalog(&mut self) {
        let changes = self.changes.try_iter().count();
        if changes > 0 {
            tracing::debug!(changes, "catalog changed, refetching");
            self.refresh();
        }
    }

    pub fn refresh(&mut self) {
        self.materials = self.catalog.list();
        let covers: Vec<String> = self
            .materials
            .iter()
            .filter_map(|m| m.cover().map(str::to_string))
            .collect();
        self.request_thumbnails(&covers);
    }

    pub fn request_thumbnails(&mut self, locators: &[String]) {
        let wanted: Vec<String> = locators
            .iter()
            .filter(|l| self.textures.request(l, ImageKind::Thumbnail))
            .cloned()
            .collect();
        if !wanted.is_empty() {
            self.send_command(WorkerCommand::DecodeThumbnails {
                locators: wanted,
                max_side: THUMBNAIL_SIDE,
            });
        }
    }

    pub fn request_full(&mut self, locator: &str) {
        if self.textures.request(locator, ImageKind::Full) {
            self.send_command(WorkerCommand::DecodeFull {
                locator: locator.to_string(),
            });
        }
    }

    /// Re-read the catalog file from disk, picking up writes from other processes.
    pub fn reload(&mut self) {
        match JsonCatalog::open(&self.config.catalog_path) {
            Ok(mut catalog) => {
                self.changes = catalog.subscribe();
                self.catalog = catalog;
                self.refresh();
                self.ui_state
                    .add_log(format!("Reloaded ({} listings)", self.materials.len()));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: reload failed: {e}")),
        }
    }

    pub fn open_catalog(&mut self, path: PathBuf) {
        self.config.catalog_path = path;
        self.viewer.open = None;
        self.textures.clear();
        self.reload();
    }

    pub fn switch_role(&mut self, role: Role) {
        match self.config.user_with_role(role) {
            Ok(user) => {
                self.user = user.clone();
                self.ui_state.role = role;
                self.ui_state.show_analytics = role == Role::Admin;
                self.ui_state.filter = self.config.default_filter;
                self.ui_state.add_log(format!("Signed in as {} ({role})", self.user.email));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Show the photos of `material_id` in the modal viewer.
    pub fn open_viewer(&mut self, material_id: &str, index: usize) {
        let Some(material) = self.materials.iter().find(|m| m.id == material_id) else {
            return;
        };
        let title = material.factory_name.clone();
        let images = material.images.clone();

        match self.viewer.open(title, images.clone(), index) {
            Ok(()) => self.request_thumbnails(&images),
            Err(e) => self.ui_state.add_log(format!("ERROR: cannot open viewer: {e}")),
        }
    }

    pub fn toggle_status(&mut self, material_id: &str) {
        let result = require_role(&self.user, Role::Admin)
            .and_then(|()| self.catalog.get(material_id))
            .and_then(|m| {
                let next = match m.status {
                    MaterialStatus::Available => MaterialStatus::Sold,
                    MaterialStatus::Sold => MaterialStatus::Available,
                };
                self.catalog.set_status(material_id, next)
            });
        match result {
            Ok(m) => self.ui_state.add_log(format!("{} marked {}", m.factory_name, m.status)),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn delete_material(&mut self, material_id: &str) {
        let result = require_role(&self.user, Role::Admin)
            .and_then(|()| DirBlobStore::new(&self.config.blob_dir))
            .and_then(|mut blobs| remove_material(&mut self.catalog, &mut blobs, material_id));
        match result {
            Ok(m) => self.ui_state.add_log(format!("Deleted {}", m.factory_name)),
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Record the pending buy request and open the chat link.
    pub fn confirm_buy(&mut self, ctx: &egui::Context) {
        let Some(id) = self.ui_state.pending_buy.take() else {
            return;
        };
        let Some(material) = self.materials.iter().find(|m| m.id == id) else {
            return;
        };
        let buyer = self.user.buyer_profile();
        match self
            .ui_state
            .buy_log
            .submit(material, &buyer, &self.config.whatsapp_number)
        {
            Ok((request, link)) => {
                ctx.open_url(egui::OpenUrl::new_tab(link));
                self.ui_state.add_log(format!(
                    "Buy request {} sent for {}",
                    request.id, material.factory_name
                ));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for GraniteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.poll_catalog();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        if self.ui_state.is_admin() && self.ui_state.show_analytics {
            panels::analytics::show(ctx, self);
        }
        panels::catalog::show(ctx, self);
        panels::buy_dialog::show(ctx, self);
        panels::viewer::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Granite")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Granite");
                        ui.label("Stone catalog and photo viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
