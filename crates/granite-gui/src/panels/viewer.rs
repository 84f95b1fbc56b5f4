use granite_core::viewer::{InputEvent, Key, PanCursor, ViewportTransform};

use crate::app::GraniteApp;
use crate::convert::{pos_to_core, rect_to_core, rect_to_egui, to_core_vec};
use crate::messages::ImageKind;

const TOP_BAR_HEIGHT: f32 = 44.0;
const STRIP_HEIGHT: f32 = 92.0;
const STRIP_THUMB: egui::Vec2 = egui::vec2(80.0, 60.0);
const ARROW_SIZE: egui::Vec2 = egui::vec2(44.0, 44.0);

/// What the overlay needs from the session for one frame.
struct Snapshot {
    title: String,
    images: Vec<String>,
    index: usize,
    position: String,
    percent: u32,
    can_zoom_in: bool,
    can_zoom_out: bool,
    zoomed: bool,
    has_previous: bool,
    has_next: bool,
    thumbnails: bool,
    dragging: bool,
    cursor: PanCursor,
    transform: ViewportTransform,
}

pub fn show(ctx: &egui::Context, app: &mut GraniteApp) {
    if !app.viewer.is_open() {
        return;
    }

    forward_keys(ctx, app);
    if close_if_requested(app) {
        return;
    }

    let Some(snap) = snapshot(app) else {
        return;
    };
    let current = snap.images[snap.index].clone();
    app.request_full(&current);

    let events = draw(ctx, app, &snap, &current);

    if let Some(open) = &app.viewer.open {
        for event in events {
            let effect = open.mounted.handle(event);
            if !effect.is_none() {
                ctx.request_repaint();
            }
        }
    }
    close_if_requested(app);
}

/// Feed key presses to the keyboard surface; the mounted viewer listens there.
fn forward_keys(ctx: &egui::Context, app: &GraniteApp) {
    let keys: Vec<Key> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|e| match e {
                egui::Event::Key {
                    key, pressed: true, ..
                } => Some(map_key(*key)),
                _ => None,
            })
            .collect()
    });
    for key in keys {
        app.viewer.keys.dispatch(key);
    }
}

fn map_key(key: egui::Key) -> Key {
    match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::ArrowRight => Key::ArrowRight,
        _ => Key::Other,
    }
}

fn close_if_requested(app: &mut GraniteApp) -> bool {
    let closed = app.viewer.poll_closed();
    if closed {
        app.ui_state.add_log("Viewer closed".into());
    }
    closed
}

fn snapshot(app: &GraniteApp) -> Option<Snapshot> {
    let open = app.viewer.open.as_ref()?;
    Some(open.mounted.with_session(|s| {
        let nav = s.navigation();
        let zoom = s.zoom();
        Snapshot {
            title: open.title.clone(),
            images: s.images().as_slice().to_vec(),
            index: s.index(),
            position: nav.position_label(),
            percent: zoom.percent(),
            can_zoom_in: zoom.can_increase(),
            can_zoom_out: zoom.can_decrease(),
            zoomed: zoom.is_zoomed(),
            has_previous: nav.has_previous(),
            has_next: nav.has_next(),
            thumbnails: s.shows_thumbnails(),
            dragging: s.pan().is_dragging(),
            cursor: s.cursor(),
            transform: s.transform(),
        }
    }))
}

fn draw(ctx: &egui::Context, app: &GraniteApp, snap: &Snapshot, current: &str) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let screen = ctx.screen_rect();

    egui::Area::new(egui::Id::new("image_viewer"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.set_min_size(screen.size());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(235));

            let top = egui::Rect::from_min_size(screen.min, egui::vec2(screen.width(), TOP_BAR_HEIGHT));
            let strip_height = if snap.thumbnails { STRIP_HEIGHT } else { 0.0 };
            let viewport = egui::Rect::from_min_max(
                egui::pos2(screen.min.x, top.max.y),
                egui::pos2(screen.max.x, screen.max.y - strip_height),
            );

            image_area(ui, app, snap, current, viewport, &mut events);
            top_bar(ui, snap, top, &mut events);
            arrows(ui, snap, viewport, &mut events);
            if snap.thumbnails {
                let strip = egui::Rect::from_min_max(
                    egui::pos2(screen.min.x, viewport.max.y),
                    screen.max,
                );
                thumbnail_strip(ui, app, snap, strip, &mut events);
            }
        });

    events
}

fn image_area(
    ui: &mut egui::Ui,
    app: &GraniteApp,
    snap: &Snapshot,
    current: &str,
    viewport: egui::Rect,
    events: &mut Vec<InputEvent>,
) {
    let response = ui.allocate_rect(viewport, egui::Sense::click_and_drag());

    match app.textures.best(current) {
        Some(texture) => {
            let natural = to_core_vec(texture.size_vec2());
            let img_rect = rect_to_egui(snap.transform.image_rect(rect_to_core(viewport), natural));
            ui.painter_at(viewport).image(
                texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => {
            let text = if app.textures.is_failed(current, ImageKind::Full) {
                "Photo unavailable"
            } else {
                "Loading..."
            };
            ui.painter().text(
                viewport.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(160),
            );
        }
    }

    // Wheel: egui reports wheel-up as positive y, the session expects negative.
    if response.hovered() {
        let dy = ui.input(|i| i.raw_scroll_delta.y);
        if dy != 0.0 {
            events.push(InputEvent::Wheel { delta_y: -dy });
        }
    }

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::PointerDown(pos_to_core(pos)));
        }
    }
    if response.dragged_by(egui::PointerButton::Primary) && response.drag_delta() != egui::Vec2::ZERO {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(InputEvent::PointerMove(pos_to_core(pos)));
        }
    }
    if response.drag_stopped() {
        events.push(InputEvent::PointerUp);
    } else if snap.dragging && !response.contains_pointer() {
        events.push(InputEvent::PointerLeave);
    }

    if response.hovered() {
        match snap.cursor {
            PanCursor::Default => {}
            PanCursor::Grab => ui.ctx().set_cursor_icon(egui::CursorIcon::Grab),
            PanCursor::Grabbing => ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing),
        }
    }
}

fn top_bar(ui: &mut egui::Ui, snap: &Snapshot, rect: egui::Rect, events: &mut Vec<InputEvent>) {
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect.shrink2(egui::vec2(12.0, 6.0))), |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(
                egui::RichText::new(&snap.title)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                egui::RichText::new(&snap.position).color(egui::Color32::from_gray(180)),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{2715}").on_hover_text("Close (Esc)").clicked() {
                    events.push(InputEvent::CloseClicked);
                }
                ui.separator();
                if ui.add_enabled(snap.zoomed, egui::Button::new("Reset")).clicked() {
                    events.push(InputEvent::ResetViewClicked);
                }
                if ui.add_enabled(snap.can_zoom_in, egui::Button::new("+")).clicked() {
                    events.push(InputEvent::ZoomInClicked);
                }
                ui.label(
                    egui::RichText::new(format!("{}%", snap.percent)).color(egui::Color32::WHITE),
                );
                if ui.add_enabled(snap.can_zoom_out, egui::Button::new("\u{2212}")).clicked() {
                    events.push(InputEvent::ZoomOutClicked);
                }
            });
        });
    });
}

fn arrows(ui: &mut egui::Ui, snap: &Snapshot, viewport: egui::Rect, events: &mut Vec<InputEvent>) {
    let y = viewport.center().y;
    if snap.has_previous {
        let rect = egui::Rect::from_center_size(
            egui::pos2(viewport.min.x + 16.0 + ARROW_SIZE.x / 2.0, y),
            ARROW_SIZE,
        );
        if ui.put(rect, egui::Button::new("\u{25c0}")).clicked() {
            events.push(InputEvent::PreviousClicked);
        }
    }
    if snap.has_next {
        let rect = egui::Rect::from_center_size(
            egui::pos2(viewport.max.x - 16.0 - ARROW_SIZE.x / 2.0, y),
            ARROW_SIZE,
        );
        if ui.put(rect, egui::Button::new("\u{25b6}")).clicked() {
            events.push(InputEvent::NextClicked);
        }
    }
}

fn thumbnail_strip(
    ui: &mut egui::Ui,
    app: &GraniteApp,
    snap: &Snapshot,
    rect: egui::Rect,
    events: &mut Vec<InputEvent>,
) {
    ui.scope_builder(egui::UiBuilder::new().max_rect(rect.shrink(8.0)), |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                for (i, locator) in snap.images.iter().enumerate() {
                    let selected = i == snap.index;
                    let button = match app.textures.get(locator, ImageKind::Thumbnail) {
                        Some(texture) => {
                            let tex = texture.size_vec2();
                            let scale = (STRIP_THUMB.x / tex.x).min(STRIP_THUMB.y / tex.y);
                            egui::Button::image(egui::Image::new(egui::load::SizedTexture::new(
                                texture.id(),
                                tex * scale,
                            )))
                        }
                        None => egui::Button::new((i + 1).to_string()).min_size(STRIP_THUMB),
                    };
                    if ui.add(button.selected(selected)).clicked() {
                        events.push(InputEvent::ThumbnailClicked(i));
                    }
                }
            });
        });
    });
}
