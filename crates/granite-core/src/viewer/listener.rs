//! Process-wide keyboard surface with scoped listener registration.
//!
//! A mounted viewer listens to keys globally, not only while its image has
//! focus. Registrations are tied to a [`ListenerGuard`]; dropping the guard
//! removes the listener, so unmounting can never leave a handler behind.
//!
//! Listeners registered by [`MountedViewer`] read the live session on every
//! key press instead of a snapshot taken at mount time, so arrow keys always
//! step from the index currently on screen.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::error::Result;

use super::image_list::ImageList;
use super::input::{InputEvent, Key, ViewerEffect};
use super::session::ViewerSession;

type Listener = Rc<RefCell<dyn FnMut(Key)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(lid, _)| *lid == id)
    }
}

/// Shared handle to the global keyboard input surface. Clones refer to the
/// same surface.
#[derive(Clone, Default)]
pub struct KeyboardSurface {
    inner: Rc<RefCell<Registry>>,
}

impl fmt::Debug for KeyboardSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardSurface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl KeyboardSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `listener` until the returned guard is dropped.
    #[must_use = "dropping the guard deregisters the listener immediately"]
    pub fn register(&self, listener: impl FnMut(Key) + 'static) -> ListenerGuard {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        let listener: Listener = Rc::new(RefCell::new(listener));
        registry.listeners.push((id, listener));
        debug!(id, "keyboard listener registered");
        ListenerGuard {
            id,
            surface: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver `key` to every listener registered at the time of the call.
    ///
    /// Listeners may deregister themselves or others while running; a listener
    /// removed during dispatch is skipped.
    pub fn dispatch(&self, key: Key) {
        let snapshot: Vec<(u64, Listener)> = self.inner.borrow().listeners.clone();
        for (id, listener) in snapshot {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            (&mut *listener.borrow_mut())(key);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Live registration on a [`KeyboardSurface`].
pub struct ListenerGuard {
    id: u64,
    surface: Weak<RefCell<Registry>>,
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.surface.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            debug!(id = self.id, "keyboard listener removed");
        }
    }
}

/// A viewer session mounted on a keyboard surface.
///
/// The close callback must not touch this `MountedViewer` synchronously
/// (the session is borrowed while it runs); signal the owner instead, e.g.
/// through a channel, and drop the viewer afterwards.
pub struct MountedViewer {
    session: Rc<RefCell<ViewerSession>>,
    _keys: ListenerGuard,
}

impl fmt::Debug for MountedViewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedViewer")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl MountedViewer {
    pub fn mount(
        surface: &KeyboardSurface,
        images: ImageList,
        initial: usize,
        on_close: impl FnMut() + 'static,
    ) -> Result<Self> {
        let session = Rc::new(RefCell::new(ViewerSession::open(images, initial, on_close)?));
        let live = Rc::downgrade(&session);
        let keys = surface.register(move |key| {
            if let Some(session) = live.upgrade() {
                session.borrow_mut().handle(InputEvent::Key(key));
            }
        });
        Ok(Self {
            session,
            _keys: keys,
        })
    }

    /// Route a non-keyboard event (pointer, wheel, buttons) to the session.
    pub fn handle(&self, event: InputEvent) -> ViewerEffect {
        self.session.borrow_mut().handle(event)
    }

    /// Read access to the session for rendering.
    pub fn with_session<R>(&self, f: impl FnOnce(&ViewerSession) -> R) -> R {
        f(&self.session.borrow())
    }
}
