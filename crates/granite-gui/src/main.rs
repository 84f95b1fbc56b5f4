mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod workers;

use std::path::PathBuf;

use granite_core::config::AppConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional first argument: settings file.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match AppConfig::resolve(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load settings, using defaults");
            let mut config = AppConfig::default();
            config.apply_env();
            config
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Granite"),
        ..Default::default()
    };

    eframe::run_native(
        "GraniteCatalog",
        options,
        Box::new(|cc| Ok(Box::new(app::GraniteApp::new(&cc.egui_ctx, config)?))),
    )
}
