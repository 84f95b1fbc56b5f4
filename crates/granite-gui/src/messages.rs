use std::path::PathBuf;

use granite_core::io::image_io::DecodedImage;

/// Which texture slot a decoded photo fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// Small preview for the catalog grid and the viewer strip.
    Thumbnail,
    /// Full-resolution photo for the viewer.
    Full,
}

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode previews for many photos at once.
    DecodeThumbnails { locators: Vec<String>, max_side: u32 },

    /// Decode one photo at full resolution.
    DecodeFull { locator: String },
}

/// Results sent back to the UI thread, from the worker or a file dialog.
pub enum WorkerResult {
    Decoded {
        locator: String,
        kind: ImageKind,
        image: DecodedImage,
    },

    /// Decoding failed; the UI stops waiting for this slot.
    Failed {
        locator: String,
        kind: ImageKind,
        message: String,
    },

    /// A catalog file was picked in the open dialog.
    CatalogPicked { path: PathBuf },

    Log {
        message: String,
    },
}
