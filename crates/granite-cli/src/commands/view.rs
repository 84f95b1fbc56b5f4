use std::cell::Cell;
use std::rc::Rc;

use anyhow::{bail, Context as _, Result};
use clap::Args;
use granite_core::viewer::{
    ImageList, InputEvent, Key, KeyboardSurface, MountedViewer, Vec2, ViewerEffect,
};

use crate::summary::{describe, print_view_header, print_view_step};

#[derive(Args)]
pub struct ViewArgs {
    /// Image locators, in display order
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Index of the image shown first
    #[arg(long, default_value = "0")]
    pub start: usize,

    /// Comma-separated input script, e.g. "wheel-up,down:10:10,move:50:40,up,right"
    #[arg(long, default_value = "")]
    pub keys: String,
}

pub fn run(args: &ViewArgs) -> Result<()> {
    let events = parse_script(&args.keys)?;
    let images = ImageList::new(args.images.iter().cloned())?;

    let surface = KeyboardSurface::new();
    let closed = Rc::new(Cell::new(false));
    let on_close = Rc::clone(&closed);
    let viewer = MountedViewer::mount(&surface, images, args.start, move || on_close.set(true))
        .with_context(|| format!("Cannot open viewer at image {}", args.start))?;

    viewer.with_session(print_view_header);

    for event in events {
        let effect = match event {
            // Keys go through the surface like a real keyboard would.
            InputEvent::Key(key) => {
                let before = viewer.with_session(|s| s.index());
                surface.dispatch(key);
                let after = viewer.with_session(|s| s.index());
                key_effect(before, after, closed.get())
            }
            other => viewer.handle(other),
        };
        viewer.with_session(|s| print_view_step(&describe(&event), effect, s));

        if closed.get() {
            break;
        }
    }

    drop(viewer);
    tracing::debug!(listeners = surface.listener_count(), "viewer unmounted");
    Ok(())
}

fn key_effect(before: usize, after: usize, closed: bool) -> ViewerEffect {
    if closed {
        ViewerEffect::Closed
    } else if before != after {
        ViewerEffect::Navigated { index: after }
    } else {
        ViewerEffect::None
    }
}

/// Parse a replay script into viewer input events.
fn parse_script(script: &str) -> Result<Vec<InputEvent>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<InputEvent> {
    let mut parts = token.split(':');
    let head = parts.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = parts.collect();

    let event = match (head.as_str(), args.as_slice()) {
        ("left", []) => InputEvent::Key(Key::ArrowLeft),
        ("right", []) => InputEvent::Key(Key::ArrowRight),
        ("esc" | "escape", []) => InputEvent::Key(Key::Escape),
        ("wheel-up", []) => InputEvent::Wheel { delta_y: -1.0 },
        ("wheel-down", []) => InputEvent::Wheel { delta_y: 1.0 },
        ("down", [x, y]) => InputEvent::PointerDown(point(token, x, y)?),
        ("move", [x, y]) => InputEvent::PointerMove(point(token, x, y)?),
        ("up", []) => InputEvent::PointerUp,
        ("leave", []) => InputEvent::PointerLeave,
        ("thumb", [n]) => InputEvent::ThumbnailClicked(
            n.parse()
                .with_context(|| format!("Bad thumbnail index in '{token}'"))?,
        ),
        ("prev", []) => InputEvent::PreviousClicked,
        ("next", []) => InputEvent::NextClicked,
        ("close", []) => InputEvent::CloseClicked,
        ("reset", []) => InputEvent::ResetViewClicked,
        ("zoom-in", []) => InputEvent::ZoomInClicked,
        ("zoom-out", []) => InputEvent::ZoomOutClicked,
        _ => bail!("Unknown viewer input '{token}'"),
    };
    Ok(event)
}

fn point(token: &str, x: &str, y: &str) -> Result<Vec2> {
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .with_context(|| format!("Bad coordinate '{v}' in '{token}'"))
    };
    Ok(Vec2::new(parse(x)?, parse(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let events = parse_script("wheel-up, down:10:20 ,move:15.5:20,up,thumb:2,esc").unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::Wheel { delta_y: -1.0 },
                InputEvent::PointerDown(Vec2::new(10.0, 20.0)),
                InputEvent::PointerMove(Vec2::new(15.5, 20.0)),
                InputEvent::PointerUp,
                InputEvent::ThumbnailClicked(2),
                InputEvent::Key(Key::Escape),
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_bad_tokens() {
        assert!(parse_script("jump").is_err());
        assert!(parse_script("down:1").is_err());
        assert!(parse_script("move:a:b").is_err());
        assert!(parse_script("left:1").is_err());
    }
}
