use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// Discrete zoom level clamped to `[MIN_ZOOM, MAX_ZOOM]` in `ZOOM_STEP` increments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    scale: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { scale: MIN_ZOOM }
    }
}

impl ZoomState {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns true if the scale changed.
    pub fn increase(&mut self) -> bool {
        self.set((self.scale + ZOOM_STEP).min(MAX_ZOOM))
    }

    /// Returns true if the scale changed.
    pub fn decrease(&mut self) -> bool {
        self.set((self.scale - ZOOM_STEP).max(MIN_ZOOM))
    }

    pub fn reset(&mut self) {
        self.scale = MIN_ZOOM;
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_ZOOM
    }

    pub fn can_increase(&self) -> bool {
        self.scale < MAX_ZOOM
    }

    pub fn can_decrease(&self) -> bool {
        self.scale > MIN_ZOOM
    }

    /// Zoom level as a whole percentage, e.g. `150` for 1.5x.
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }

    fn set(&mut self, scale: f32) -> bool {
        let changed = scale != self.scale;
        self.scale = scale;
        changed
    }
}
