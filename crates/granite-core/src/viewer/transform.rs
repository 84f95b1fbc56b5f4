use crate::consts::FIT_FRACTION;

use super::geometry::{Rect, Vec2};
use super::pan::PanState;
use super::zoom::ZoomState;

/// Visual transform of the displayed image: scale about the image centre, then
/// translate by `offset / scale` in image-local units.
///
/// Expressing the translation before scaling keeps panning speed constant in
/// screen space: the on-screen displacement always equals `offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f32,
    pub offset: Vec2,
}

impl ViewportTransform {
    pub fn new(scale: f32, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    pub fn from_state(zoom: &ZoomState, pan: &PanState) -> Self {
        Self::new(zoom.scale(), pan.offset())
    }

    /// Whether the image is held inside the fit box (scale 1.0) or may overflow.
    pub fn is_fitted(&self) -> bool {
        self.scale <= 1.0
    }

    /// Translation in image-local (pre-scale) units.
    pub fn translation(&self) -> Vec2 {
        if self.is_fitted() {
            Vec2::ZERO
        } else {
            self.offset / self.scale
        }
    }

    /// On-screen rectangle of an image with `natural_size` pixels inside `viewport`.
    ///
    /// At scale 1.0 the image is shrunk (never enlarged) to fit `FIT_FRACTION`
    /// of the viewport and centred; a leftover pan offset is ignored. Above 1.0
    /// it is drawn at natural size times scale and clipped by the viewport.
    pub fn image_rect(&self, viewport: Rect, natural_size: Vec2) -> Rect {
        if self.is_fitted() {
            let size = fit_size(natural_size, viewport.size * FIT_FRACTION);
            return Rect::from_center_size(viewport.center(), size);
        }
        let size = natural_size * self.scale;
        Rect::from_center_size(viewport.center() + self.translation() * self.scale, size)
    }

    /// Equivalent CSS transform string, e.g. `scale(2) translate(20px, 15px)`.
    pub fn css(&self) -> String {
        let t = self.translation();
        format!("scale({}) translate({}px, {}px)", self.scale, t.x, t.y)
    }
}

/// Largest size with the aspect ratio of `natural` that fits in `bounds`,
/// without enlarging beyond `natural`.
pub fn fit_size(natural: Vec2, bounds: Vec2) -> Vec2 {
    if natural.x <= 0.0 || natural.y <= 0.0 {
        return Vec2::ZERO;
    }
    let factor = (bounds.x / natural.x).min(bounds.y / natural.y).min(1.0);
    natural * factor
}
