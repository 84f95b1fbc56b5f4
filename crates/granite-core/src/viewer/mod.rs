pub mod geometry;
pub mod image_list;
pub mod input;
pub mod listener;
pub mod navigation;
pub mod pan;
pub mod session;
pub mod transform;
pub mod zoom;

pub use geometry::{Rect, Vec2};
pub use image_list::ImageList;
pub use input::{InputEvent, Key, ViewerEffect};
pub use listener::{KeyboardSurface, ListenerGuard, MountedViewer};
pub use navigation::NavigationState;
pub use pan::{DragSession, PanCursor, PanState};
pub use session::ViewerSession;
pub use transform::ViewportTransform;
pub use zoom::ZoomState;
