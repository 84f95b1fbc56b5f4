use super::geometry::Vec2;
use super::zoom::ZoomState;

/// Drag gesture in progress, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    /// `anchor` is the pointer position minus the offset at drag start, so the
    /// live offset is always `pointer - anchor`.
    Dragging { anchor: Vec2 },
}

/// Cursor shape the viewer should show over the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanCursor {
    Default,
    Grab,
    Grabbing,
}

/// Drag-to-pan offset. Only meaningful while zoomed in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanState {
    offset: Vec2,
    drag: DragSession,
}

impl PanState {
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn drag(&self) -> DragSession {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragSession::Dragging { .. })
    }

    /// Start a drag at `pointer`. Ignored at zoom 1.0. Returns true if a drag began.
    pub fn begin_drag(&mut self, pointer: Vec2, zoom: &ZoomState) -> bool {
        if !zoom.is_zoomed() {
            return false;
        }
        self.drag = DragSession::Dragging {
            anchor: pointer - self.offset,
        };
        true
    }

    /// Follow the pointer while dragging. Returns true if the offset moved.
    pub fn update_drag(&mut self, pointer: Vec2) -> bool {
        match self.drag {
            DragSession::Dragging { anchor } => {
                self.offset = pointer - anchor;
                true
            }
            DragSession::Idle => false,
        }
    }

    /// Finish the drag, keeping the offset. Returns true if a drag was active.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.drag = DragSession::Idle;
        was_dragging
    }

    /// Back to the origin, cancelling any drag in progress.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.drag = DragSession::Idle;
    }

    pub fn cursor(&self, zoom: &ZoomState) -> PanCursor {
        match (zoom.is_zoomed(), self.drag) {
            (false, _) => PanCursor::Default,
            (true, DragSession::Idle) => PanCursor::Grab,
            (true, DragSession::Dragging { .. }) => PanCursor::Grabbing,
        }
    }
}
