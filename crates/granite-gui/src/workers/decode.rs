use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use granite_core::io::image_io::{load_rgba, DecodedImage};
use rayon::prelude::*;

use crate::messages::{ImageKind, WorkerResult};

use super::{send, send_log};

pub(super) fn handle_decode_thumbnails(
    locators: &[String],
    max_side: u32,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();

    let failures: usize = locators
        .par_iter()
        .map(|locator| {
            let decoded = decode(locator).and_then(|img| Ok(img.thumbnail(max_side)?));
            let failed = decoded.is_err();
            send(tx, ctx, into_result(locator, ImageKind::Thumbnail, decoded));
            usize::from(failed)
        })
        .sum();

    let elapsed = start.elapsed();
    tracing::debug!(count = locators.len(), failures, ?elapsed, "thumbnails decoded");
    if failures > 0 {
        send_log(tx, ctx, format!("{failures} of {} previews failed to load", locators.len()));
    }
}

pub(super) fn handle_decode_full(locator: &str, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    send(tx, ctx, into_result(locator, ImageKind::Full, decode(locator)));
}

fn decode(locator: &str) -> Result<DecodedImage> {
    load_rgba(Path::new(locator)).with_context(|| format!("Failed to load {locator}"))
}

fn into_result(locator: &str, kind: ImageKind, decoded: Result<DecodedImage>) -> WorkerResult {
    match decoded {
        Ok(image) => WorkerResult::Decoded {
            locator: locator.to_string(),
            kind,
            image,
        },
        Err(e) => {
            tracing::warn!(%locator, error = %e, "decode failed");
            WorkerResult::Failed {
                locator: locator.to_string(),
                kind,
                message: format!("{e:#}"),
            }
        }
    }
}
