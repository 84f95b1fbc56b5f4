use granite_core::io::image_io::DecodedImage;
use granite_core::viewer::{Rect, Vec2};

/// Convert a decoded RGBA photo to an egui ColorImage.
pub fn decoded_to_color_image(image: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.rgba,
    )
}

pub fn to_core_vec(v: egui::Vec2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub fn pos_to_core(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

pub fn rect_to_core(r: egui::Rect) -> Rect {
    Rect::from_min_size(pos_to_core(r.min), to_core_vec(r.size()))
}

pub fn rect_to_egui(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(r.min.x, r.min.y),
        egui::vec2(r.size.x, r.size.y),
    )
}
