use granite_core::catalog::{list_view, Material, StatusFilter};

use crate::app::GraniteApp;
use crate::messages::ImageKind;

const CARD_WIDTH: f32 = 220.0;
const COVER_HEIGHT: f32 = 150.0;

/// What a click in the grid asks for. Applied after drawing so the grid can
/// borrow the app immutably.
enum CardAction {
    View(String),
    Interested(String),
    ToggleStatus(String),
    Delete(String),
}

pub fn show(ctx: &egui::Context, app: &mut GraniteApp) {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(if app.ui_state.is_admin() {
                "Materials"
            } else {
                "Available Stone"
            });
            ui.add_space(16.0);
            for &filter in StatusFilter::ALL {
                ui.selectable_value(&mut app.ui_state.filter, filter, filter.to_string());
            }
        });
        ui.separator();

        let rows = list_view(&app.materials, app.ui_state.filter);
        if rows.is_empty() {
            show_placeholder(ui, app.ui_state.filter);
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for material in &rows {
                    card(ui, app, material, &mut actions);
                }
            });
        });
    });

    for action in actions {
        match action {
            CardAction::View(id) => app.open_viewer(&id, 0),
            CardAction::Interested(id) => app.ui_state.pending_buy = Some(id),
            CardAction::ToggleStatus(id) => app.toggle_status(&id),
            CardAction::Delete(id) => app.delete_material(&id),
        }
    }
}

fn card(ui: &mut egui::Ui, app: &GraniteApp, material: &Material, actions: &mut Vec<CardAction>) {
    egui::Frame::group(ui.style())
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                cover(ui, app, material, actions);

                ui.strong(&material.factory_name);
                ui.label(format!(
                    "{}{:.2} / sqft",
                    app.config.currency_symbol, material.rate
                ));
                let status_color = if material.is_available() {
                    egui::Color32::from_rgb(80, 180, 100)
                } else {
                    egui::Color32::from_rgb(200, 80, 80)
                };
                ui.colored_label(status_color, material.status.to_string());

                if let Some(description) = &material.description {
                    ui.small(description);
                }

                if app.ui_state.is_admin() {
                    ui.small(format!("{} {}", material.owner_name, material.owner_phone));
                    ui.horizontal(|ui| {
                        let toggle = if material.is_available() {
                            "Mark sold"
                        } else {
                            "Mark available"
                        };
                        if ui.small_button(toggle).clicked() {
                            actions.push(CardAction::ToggleStatus(material.id.clone()));
                        }
                        if ui.small_button("Delete").clicked() {
                            actions.push(CardAction::Delete(material.id.clone()));
                        }
                    });
                } else if material.is_available() && ui.button("I'm Interested").clicked() {
                    actions.push(CardAction::Interested(material.id.clone()));
                }
            });
        });
}

fn cover(ui: &mut egui::Ui, app: &GraniteApp, material: &Material, actions: &mut Vec<CardAction>) {
    let size = egui::vec2(CARD_WIDTH, COVER_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_gray(40));

    match material.cover() {
        Some(locator) => {
            if let Some(texture) = app.textures.get(locator, ImageKind::Thumbnail) {
                let tex = texture.size_vec2();
                let scale = (size.x / tex.x).min(size.y / tex.y);
                let img_rect = egui::Rect::from_center_size(rect.center(), tex * scale);
                ui.painter().image(
                    texture.id(),
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            } else if app.textures.is_failed(locator, ImageKind::Thumbnail) {
                centered_text(ui, rect, "Photo unavailable");
            } else {
                centered_text(ui, rect, "Loading...");
            }
        }
        None => centered_text(ui, rect, "No photos"),
    }

    // Photo count badge
    if !material.images.is_empty() {
        let text = format!("{} photos", material.images.len());
        let pos = rect.right_top() + egui::vec2(-6.0, 6.0);
        let galley = ui.painter().layout_no_wrap(
            text,
            egui::FontId::proportional(11.0),
            egui::Color32::WHITE,
        );
        let badge = egui::Rect::from_min_size(
            pos - egui::vec2(galley.size().x + 8.0, 0.0),
            galley.size() + egui::vec2(8.0, 4.0),
        );
        ui.painter()
            .rect_filled(badge, 4.0, egui::Color32::from_black_alpha(160));
        ui.painter()
            .galley(badge.min + egui::vec2(4.0, 2.0), galley, egui::Color32::WHITE);
    }

    if !material.images.is_empty() {
        let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            actions.push(CardAction::View(material.id.clone()));
        }
    }
}

fn centered_text(ui: &egui::Ui, rect: egui::Rect, text: &str) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::from_gray(140),
    );
}

fn show_placeholder(ui: &mut egui::Ui, filter: StatusFilter) {
    let text = match filter {
        StatusFilter::All => "No materials yet".to_string(),
        other => format!("No {} materials", other.to_string().to_lowercase()),
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
