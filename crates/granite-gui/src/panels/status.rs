use crate::app::GraniteApp;

pub fn show(ctx: &egui::Context, app: &mut GraniteApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(format!("{} listings", app.materials.len()));
            ui.separator();
            ui.label(format!("Filter: {}", app.ui_state.filter));
            if let Some(open) = &app.viewer.open {
                let (position, percent) = open.mounted.with_session(|s| {
                    (s.navigation().position_label(), s.zoom().percent())
                });
                ui.separator();
                ui.label(format!("Photo {position}"));
                ui.separator();
                ui.label(format!("Zoom: {percent}%"));
            }
            if app.textures.is_loading() {
                ui.separator();
                ui.spinner();
                ui.label("Loading photos");
            }
        });

        ui.add_space(2.0);
    });
}
