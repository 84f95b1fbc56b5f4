use std::fmt;

use tracing::debug;

use crate::error::Result;

use super::image_list::ImageList;
use super::input::{InputEvent, Key, ViewerEffect};
use super::navigation::NavigationState;
use super::pan::{PanCursor, PanState};
use super::transform::ViewportTransform;
use super::zoom::ZoomState;

/// One open image viewer: the image list plus its navigation, zoom and pan
/// state, and the caller's close callback.
///
/// Visibility belongs to the caller. The session is created when the viewer
/// opens and dropped when it closes; nothing survives between sessions.
pub struct ViewerSession {
    images: ImageList,
    nav: NavigationState,
    zoom: ZoomState,
    pan: PanState,
    on_close: Box<dyn FnMut()>,
}

impl fmt::Debug for ViewerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewerSession")
            .field("images", &self.images)
            .field("nav", &self.nav)
            .field("zoom", &self.zoom)
            .field("pan", &self.pan)
            .finish_non_exhaustive()
    }
}

impl ViewerSession {
    pub fn open(images: ImageList, initial: usize, on_close: impl FnMut() + 'static) -> Result<Self> {
        let nav = NavigationState::new(images.len(), initial)?;
        debug!(index = initial, total = images.len(), "viewer opened");
        Ok(Self {
            images,
            nav,
            zoom: ZoomState::default(),
            pan: PanState::default(),
            on_close: Box::new(on_close),
        })
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn pan(&self) -> &PanState {
        &self.pan
    }

    pub fn index(&self) -> usize {
        self.nav.index()
    }

    /// Locator of the image currently shown.
    pub fn current(&self) -> &str {
        self.images.get(self.nav.index()).unwrap_or_default()
    }

    pub fn transform(&self) -> ViewportTransform {
        ViewportTransform::from_state(&self.zoom, &self.pan)
    }

    pub fn cursor(&self) -> PanCursor {
        self.pan.cursor(&self.zoom)
    }

    /// The thumbnail strip is only useful with more than one image.
    pub fn shows_thumbnails(&self) -> bool {
        self.images.len() > 1
    }

    /// Route one input event to the navigation, zoom and pan state machines.
    pub fn handle(&mut self, event: InputEvent) -> ViewerEffect {
        let effect = match event {
            InputEvent::Key(Key::Escape) | InputEvent::CloseClicked => {
                (self.on_close)();
                ViewerEffect::Closed
            }
            InputEvent::Key(Key::ArrowLeft) | InputEvent::PreviousClicked => {
                let moved = self.nav.previous();
                self.after_navigation(moved)
            }
            InputEvent::Key(Key::ArrowRight) | InputEvent::NextClicked => {
                let moved = self.nav.next();
                self.after_navigation(moved)
            }
            InputEvent::Key(Key::Other) => ViewerEffect::None,
            InputEvent::Wheel { delta_y } if delta_y < 0.0 => self.zoom_in(),
            InputEvent::Wheel { .. } => self.zoom_out(),
            InputEvent::ZoomInClicked => self.zoom_in(),
            InputEvent::ZoomOutClicked => self.zoom_out(),
            InputEvent::ResetViewClicked => {
                self.reset_view();
                ViewerEffect::ViewReset
            }
            InputEvent::PointerDown(pos) => {
                if self.pan.begin_drag(pos, &self.zoom) {
                    ViewerEffect::DragStarted
                } else {
                    ViewerEffect::None
                }
            }
            InputEvent::PointerMove(pos) => {
                if self.zoom.is_zoomed() && self.pan.update_drag(pos) {
                    ViewerEffect::Panned
                } else {
                    ViewerEffect::None
                }
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                if self.pan.end_drag() {
                    ViewerEffect::DragEnded
                } else {
                    ViewerEffect::None
                }
            }
            InputEvent::ThumbnailClicked(index) => {
                let moved = self.nav.jump_to(index);
                self.after_navigation(moved)
            }
        };

        if !effect.is_none() {
            debug!(?event, %effect, "viewer input");
        }
        effect
    }

    /// Zoom back to 1.0 and recentre.
    pub fn reset_view(&mut self) {
        self.zoom.reset();
        self.pan.reset();
    }

    fn after_navigation(&mut self, moved: bool) -> ViewerEffect {
        if !moved {
            return ViewerEffect::None;
        }
        self.reset_view();
        ViewerEffect::Navigated {
            index: self.nav.index(),
        }
    }

    fn zoom_in(&mut self) -> ViewerEffect {
        if self.zoom.increase() {
            ViewerEffect::Zoomed {
                percent: self.zoom.percent(),
            }
        } else {
            ViewerEffect::None
        }
    }

    fn zoom_out(&mut self) -> ViewerEffect {
        if self.zoom.decrease() {
            ViewerEffect::Zoomed {
                percent: self.zoom.percent(),
            }
        } else {
            ViewerEffect::None
        }
    }
}
