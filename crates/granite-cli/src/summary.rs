use console::Style;
use granite_core::catalog::{CatalogStats, Material, MaterialStatus, StatusFilter};
use granite_core::viewer::{InputEvent, Key, PanCursor, ViewerEffect, ViewerSession};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    available: Style,
    sold: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            available: Style::new().green(),
            sold: Style::new().red(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }

    fn status(&self, status: MaterialStatus) -> &Style {
        match status {
            MaterialStatus::Available => &self.available,
            MaterialStatus::Sold => &self.sold,
        }
    }
}

fn underline(title: &str) -> String {
    "\u{2550}".repeat(title.chars().count())
}

pub fn print_material_table(rows: &[Material], filter: StatusFilter, currency: &str) {
    let s = Styles::new();
    let title = format!("Catalog ({filter})");

    println!();
    println!("  {}", s.title.apply_to(&title));
    println!("  {}", s.title.apply_to(underline(&title)));
    println!();

    if rows.is_empty() {
        println!("  {}", s.disabled.apply_to("No materials found"));
        println!();
        return;
    }

    println!(
        "  {:<10}{:<28}{:<20}{:>12}  {:<11}{:>6}  {}",
        s.label.apply_to("ID"),
        s.label.apply_to("Factory"),
        s.label.apply_to("Owner"),
        s.label.apply_to("Rate/sqft"),
        s.label.apply_to("Status"),
        s.label.apply_to("Photos"),
        s.label.apply_to("Added"),
    );
    for m in rows {
        let added = m.created_at.date();
        println!(
            "  {:<10}{:<28}{:<20}{:>12}  {:<11}{:>6}  {}",
            m.id,
            s.value.apply_to(truncate(&m.factory_name, 26)),
            truncate(&m.owner_name, 18),
            format!("{currency}{:.2}", m.rate),
            s.status(m.status).apply_to(m.status),
            m.images.len(),
            added,
        );
    }
    println!();
    println!("  {} shown", s.label.apply_to(rows.len()));
    println!();
}

pub fn print_material(material: &Material, verb: &str, currency: &str) {
    let s = Styles::new();

    println!();
    println!(
        "  {} {}",
        s.header.apply_to(verb),
        s.value.apply_to(&material.id)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Factory"),
        s.value.apply_to(&material.factory_name)
    );
    let owner = if material.owner_phone.is_empty() {
        material.owner_name.clone()
    } else {
        format!("{} ({})", material.owner_name, material.owner_phone)
    };
    println!("    {:<12}{}", s.label.apply_to("Owner"), owner);
    println!(
        "    {:<12}{}",
        s.label.apply_to("Rate"),
        s.value.apply_to(format!("{currency}{:.2} / sqft", material.rate))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Status"),
        s.status(material.status).apply_to(material.status)
    );
    if let Some(description) = &material.description {
        println!("    {:<12}{}", s.label.apply_to("Description"), description);
    }
    for (i, photo) in material.images.iter().enumerate() {
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("Photo {}", i + 1)),
            s.path.apply_to(photo)
        );
    }
    println!();
}

pub fn print_stats(stats: &CatalogStats) {
    let s = Styles::new();
    let title = "Catalog Analytics";

    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to(underline(title)));
    println!();

    let rows = [
        ("Materials", stats.total_materials.to_string()),
        ("Photos", stats.total_photos.to_string()),
        ("Factories", stats.unique_factories.to_string()),
        ("Entries", stats.total_entries.to_string()),
    ];
    for (label, value) in rows {
        println!("  {:<16}{}", s.label.apply_to(label), s.value.apply_to(value));
    }
    println!();

    println!("  {}", s.header.apply_to("Status"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Available"),
        s.available.apply_to(stats.available)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Sold"),
        s.sold.apply_to(stats.sold)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Availability"),
        s.value.apply_to(format!("{}%", stats.availability_percent()))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Avg photos"),
        s.value.apply_to(format!("{:.1}", stats.average_photos()))
    );
    println!();
}

/// One line of `granite view` output.
pub fn print_view_step(step: &str, effect: ViewerEffect, session: &ViewerSession) {
    let s = Styles::new();
    let offset = session.pan().offset();
    let cursor = match session.cursor() {
        PanCursor::Default => "default",
        PanCursor::Grab => "grab",
        PanCursor::Grabbing => "grabbing",
    };
    let effect_style = if effect.is_none() { &s.disabled } else { &s.available };

    println!(
        "  {:<14}{:<18}{:<8}{:>5}%  offset ({:.0}, {:.0})  {:<9}{}",
        s.label.apply_to(step),
        effect_style.apply_to(effect),
        session.navigation().position_label(),
        session.zoom().percent(),
        offset.x,
        offset.y,
        cursor,
        s.path.apply_to(session.current()),
    );
}

pub fn print_view_header(session: &ViewerSession) {
    let s = Styles::new();
    let title = "Viewer Replay";

    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to(underline(title)));
    println!();
    let thumbs = if session.shows_thumbnails() {
        s.value.apply_to("shown")
    } else {
        s.disabled.apply_to("hidden")
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(session.images().len())
    );
    println!("  {:<14}{}", s.label.apply_to("Thumbnails"), thumbs);
    println!();
    print_view_step("open", ViewerEffect::None, session);
}

/// Short label for a replayed input, used as the step column.
pub fn describe(event: &InputEvent) -> String {
    match event {
        InputEvent::Key(Key::Escape) => "esc".into(),
        InputEvent::Key(Key::ArrowLeft) => "left".into(),
        InputEvent::Key(Key::ArrowRight) => "right".into(),
        InputEvent::Key(Key::Other) => "key".into(),
        InputEvent::Wheel { delta_y } if *delta_y < 0.0 => "wheel-up".into(),
        InputEvent::Wheel { .. } => "wheel-down".into(),
        InputEvent::PointerDown(p) => format!("down {:.0},{:.0}", p.x, p.y),
        InputEvent::PointerMove(p) => format!("move {:.0},{:.0}", p.x, p.y),
        InputEvent::PointerUp => "up".into(),
        InputEvent::PointerLeave => "leave".into(),
        InputEvent::ThumbnailClicked(i) => format!("thumb {i}"),
        InputEvent::CloseClicked => "close".into(),
        InputEvent::PreviousClicked => "prev".into(),
        InputEvent::NextClicked => "next".into(),
        InputEvent::ZoomInClicked => "zoom-in".into(),
        InputEvent::ZoomOutClicked => "zoom-out".into(),
        InputEvent::ResetViewClicked => "reset".into(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}\u{2026}")
}
