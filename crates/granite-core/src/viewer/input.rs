use std::fmt;

use super::geometry::Vec2;

/// Keys the viewer reacts to. Everything else maps to `Other` and is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Raw input delivered to a viewer session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// Vertical wheel delta; negative means wheel up (zoom in).
    Wheel { delta_y: f32 },
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
    /// Pointer left the image viewport; ends any drag like `PointerUp`.
    PointerLeave,
    ThumbnailClicked(usize),
    CloseClicked,
    PreviousClicked,
    NextClicked,
    ZoomInClicked,
    ZoomOutClicked,
    ResetViewClicked,
}

/// What a handled event did to the session. Informational only; callers are
/// not required to act on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEffect {
    None,
    Closed,
    Navigated { index: usize },
    Zoomed { percent: u32 },
    ViewReset,
    DragStarted,
    Panned,
    DragEnded,
}

impl ViewerEffect {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ViewerEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "no-op"),
            Self::Closed => write!(f, "closed"),
            Self::Navigated { index } => write!(f, "navigated to #{}", index + 1),
            Self::Zoomed { percent } => write!(f, "zoom {percent}%"),
            Self::ViewReset => write!(f, "view reset"),
            Self::DragStarted => write!(f, "drag started"),
            Self::Panned => write!(f, "panned"),
            Self::DragEnded => write!(f, "drag ended"),
        }
    }
}
