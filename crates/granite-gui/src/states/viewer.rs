use std::sync::mpsc;

use granite_core::error::Result;
use granite_core::viewer::{ImageList, KeyboardSurface, MountedViewer};

/// A viewer currently shown over the catalog.
pub struct OpenViewer {
    pub mounted: MountedViewer,
    pub title: String,
}

/// Modal photo viewer state. At most one viewer is mounted at a time.
pub struct ViewerState {
    /// Keyboard surface the app feeds key presses into.
    pub keys: KeyboardSurface,
    pub open: Option<OpenViewer>,
    close_tx: mpsc::Sender<()>,
    close_rx: mpsc::Receiver<()>,
}

impl Default for ViewerState {
    fn default() -> Self {
        let (close_tx, close_rx) = mpsc::channel();
        Self {
            keys: KeyboardSurface::new(),
            open: None,
            close_tx,
            close_rx,
        }
    }
}

impl ViewerState {
    /// Mount a viewer for `images` starting at `initial`, replacing any open one.
    pub fn open(&mut self, title: String, images: Vec<String>, initial: usize) -> Result<()> {
        self.open = None;
        while self.close_rx.try_recv().is_ok() {}

        let images = ImageList::new(images)?;
        let close_tx = self.close_tx.clone();
        // The session is borrowed while this runs, so only signal here.
        let mounted = MountedViewer::mount(&self.keys, images, initial, move || {
            let _ = close_tx.send(());
        })?;
        self.open = Some(OpenViewer { mounted, title });
        Ok(())
    }

    /// Unmount the viewer if it asked to close. Returns true if it did.
    pub fn poll_closed(&mut self) -> bool {
        if self.close_rx.try_recv().is_err() {
            return false;
        }
        while self.close_rx.try_recv().is_ok() {}
        self.open = None;
        true
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}
