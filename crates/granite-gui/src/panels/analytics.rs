use egui_plot::{Bar, BarChart, Plot};
use granite_core::catalog::CatalogStats;

use crate::app::GraniteApp;
use crate::panels::section_header;

const CHART_HEIGHT: f32 = 160.0;

pub fn show(ctx: &egui::Context, app: &mut GraniteApp) {
    let stats = CatalogStats::compute(&app.materials);

    egui::SidePanel::right("analytics")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            section_header(ui, "Analytics", Some(&format!("{} listings", stats.total_materials)));
            ui.add_space(4.0);

            egui::Grid::new("analytics_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Total materials", stats.total_materials.to_string()),
                        ("Total photos", stats.total_photos.to_string()),
                        ("Factories", stats.unique_factories.to_string()),
                        ("Available", stats.available.to_string()),
                        ("Sold", stats.sold.to_string()),
                        ("Availability", format!("{}%", stats.availability_percent())),
                        ("Avg photos", format!("{:.1}", stats.average_photos())),
                    ];
                    for (label, value) in rows {
                        ui.label(label);
                        ui.strong(value);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            section_header(ui, "Status", None);
            status_chart(ui, &stats);
        });
}

fn status_chart(ui: &mut egui::Ui, stats: &CatalogStats) {
    let bars = vec![
        Bar::new(0.0, stats.available as f64)
            .name("Available")
            .fill(egui::Color32::from_rgb(80, 180, 100))
            .width(0.6),
        Bar::new(1.0, stats.sold as f64)
            .name("Sold")
            .fill(egui::Color32::from_rgb(200, 80, 80))
            .width(0.6),
    ];
    let chart = BarChart::new("status", bars);

    Plot::new("status_chart")
        .height(CHART_HEIGHT)
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .show_x(false)
        .x_axis_formatter(|mark, _range| match mark.value.round() as i64 {
            0 => "Available".to_string(),
            1 => "Sold".to_string(),
            _ => String::new(),
        })
        .y_axis_label("listings")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
