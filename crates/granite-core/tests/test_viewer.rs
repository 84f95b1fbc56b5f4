mod common;

use granite_core::error::GraniteError;
use granite_core::viewer::{
    DragSession, ImageList, InputEvent, Key, NavigationState, PanCursor, Vec2, ViewerEffect,
    ViewerSession, ZoomState,
};

use common::{images, open_session};

// ---------------------------------------------------------------------------
// Opening
// ---------------------------------------------------------------------------

#[test]
fn test_open_at_initial_index_unzoomed() {
    let (session, _) = open_session(4, 2);
    assert_eq!(session.index(), 2);
    assert_eq!(session.zoom().scale(), 1.0);
    assert_eq!(session.pan().offset(), Vec2::ZERO);
    assert_eq!(session.current(), "img-2.jpg");
    assert_eq!(session.navigation().position_label(), "3 / 4");
}

#[test]
fn test_empty_image_list_rejected() {
    let result = ImageList::new(Vec::<String>::new());
    assert!(matches!(result, Err(GraniteError::EmptyImageList)));
}

#[test]
fn test_initial_index_out_of_range_rejected() {
    let result = ViewerSession::open(images(3), 3, || {});
    assert!(matches!(
        result,
        Err(GraniteError::IndexOutOfRange { index: 3, total: 3 })
    ));
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_next_at_last_index_is_noop() {
    let mut nav = NavigationState::new(3, 2).unwrap();
    assert!(!nav.next());
    assert_eq!(nav.index(), 2);
    assert!(!nav.has_next());
}

#[test]
fn test_previous_at_first_index_is_noop() {
    let mut nav = NavigationState::new(3, 0).unwrap();
    assert!(!nav.previous());
    assert_eq!(nav.index(), 0);
    assert!(!nav.has_previous());
}

#[test]
fn test_jump_to_out_of_range_ignored() {
    let mut nav = NavigationState::new(3, 1).unwrap();
    assert!(!nav.jump_to(3));
    assert!(!nav.jump_to(usize::MAX));
    assert_eq!(nav.index(), 1);
    assert!(nav.jump_to(0));
    assert_eq!(nav.index(), 0);
}

#[test]
fn test_arrow_keys_scenario() {
    // 3 images, opened on the second one.
    let (mut session, _) = open_session(3, 1);
    assert_eq!(session.navigation().position_label(), "2 / 3");

    assert_eq!(
        session.handle(InputEvent::Key(Key::ArrowRight)),
        ViewerEffect::Navigated { index: 2 }
    );
    assert_eq!(session.handle(InputEvent::Key(Key::ArrowRight)), ViewerEffect::None);
    assert_eq!(session.index(), 2);

    session.handle(InputEvent::Wheel { delta_y: -1.0 });
    session.handle(InputEvent::Wheel { delta_y: -1.0 });
    assert_eq!(session.zoom().scale(), 2.0);

    assert_eq!(
        session.handle(InputEvent::Key(Key::ArrowLeft)),
        ViewerEffect::Navigated { index: 1 }
    );
    assert_eq!(session.index(), 1);
    assert_eq!(session.zoom().scale(), 1.0);
}

#[test]
fn test_zoom_drag_then_navigate_resets_view() {
    let (mut session, _) = open_session(3, 0);
    session.handle(InputEvent::ZoomInClicked);
    session.handle(InputEvent::ZoomInClicked);
    assert_eq!(session.zoom().scale(), 2.0);

    assert_eq!(
        session.handle(InputEvent::PointerDown(Vec2::new(100.0, 100.0))),
        ViewerEffect::DragStarted
    );
    assert_eq!(
        session.handle(InputEvent::PointerMove(Vec2::new(140.0, 130.0))),
        ViewerEffect::Panned
    );
    assert_eq!(session.pan().offset(), Vec2::new(40.0, 30.0));

    session.handle(InputEvent::NextClicked);
    assert_eq!(session.pan().offset(), Vec2::ZERO);
    assert_eq!(session.zoom().scale(), 1.0);
    assert!(!session.pan().is_dragging());
}

#[test]
fn test_thumbnail_click_on_current_index_still_resets() {
    let (mut session, _) = open_session(3, 1);
    session.handle(InputEvent::ZoomInClicked);
    assert_eq!(
        session.handle(InputEvent::ThumbnailClicked(1)),
        ViewerEffect::Navigated { index: 1 }
    );
    assert_eq!(session.zoom().scale(), 1.0);
}

#[test]
fn test_thumbnail_click_out_of_range_keeps_zoom() {
    let (mut session, _) = open_session(3, 1);
    session.handle(InputEvent::ZoomInClicked);
    assert_eq!(session.handle(InputEvent::ThumbnailClicked(7)), ViewerEffect::None);
    assert_eq!(session.index(), 1);
    assert_eq!(session.zoom().scale(), 1.5);
}

#[test]
fn test_thumbnails_hidden_for_single_image() {
    let (single, _) = open_session(1, 0);
    let (many, _) = open_session(2, 0);
    assert!(!single.shows_thumbnails());
    assert!(many.shows_thumbnails());
}

// ---------------------------------------------------------------------------
// Zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_increase_clamps_at_five() {
    let mut zoom = ZoomState::default();
    for _ in 0..10 {
        zoom.increase();
    }
    assert_eq!(zoom.scale(), 5.0);
    assert!(!zoom.increase());
    assert!(!zoom.can_increase());
    assert_eq!(zoom.percent(), 500);
}

#[test]
fn test_zoom_decrease_clamps_at_one() {
    let mut zoom = ZoomState::default();
    for _ in 0..4 {
        assert!(!zoom.decrease());
    }
    assert_eq!(zoom.scale(), 1.0);
    assert!(!zoom.can_decrease());
}

#[test]
fn test_wheel_direction() {
    let (mut session, _) = open_session(1, 0);
    assert_eq!(
        session.handle(InputEvent::Wheel { delta_y: -120.0 }),
        ViewerEffect::Zoomed { percent: 150 }
    );
    assert_eq!(
        session.handle(InputEvent::Wheel { delta_y: 120.0 }),
        ViewerEffect::Zoomed { percent: 100 }
    );
    assert_eq!(session.handle(InputEvent::Wheel { delta_y: 120.0 }), ViewerEffect::None);
}

#[test]
fn test_reset_view_button() {
    let (mut session, _) = open_session(2, 0);
    session.handle(InputEvent::ZoomInClicked);
    session.handle(InputEvent::PointerDown(Vec2::new(0.0, 0.0)));
    session.handle(InputEvent::PointerMove(Vec2::new(-10.0, 5.0)));
    assert_eq!(session.handle(InputEvent::ResetViewClicked), ViewerEffect::ViewReset);
    assert_eq!(session.zoom().scale(), 1.0);
    assert_eq!(session.pan().offset(), Vec2::ZERO);
    assert_eq!(session.pan().drag(), DragSession::Idle);
}

// ---------------------------------------------------------------------------
// Pan
// ---------------------------------------------------------------------------

#[test]
fn test_drag_ignored_when_not_zoomed() {
    let (mut session, _) = open_session(2, 0);
    assert_eq!(
        session.handle(InputEvent::PointerDown(Vec2::new(10.0, 10.0))),
        ViewerEffect::None
    );
    assert_eq!(
        session.handle(InputEvent::PointerMove(Vec2::new(50.0, 80.0))),
        ViewerEffect::None
    );
    assert_eq!(session.pan().offset(), Vec2::ZERO);
    assert_eq!(session.cursor(), PanCursor::Default);
}

#[test]
fn test_second_drag_continues_from_last_offset() {
    let (mut session, _) = open_session(1, 0);
    session.handle(InputEvent::ZoomInClicked);

    session.handle(InputEvent::PointerDown(Vec2::new(100.0, 100.0)));
    session.handle(InputEvent::PointerMove(Vec2::new(140.0, 130.0)));
    assert_eq!(session.handle(InputEvent::PointerUp), ViewerEffect::DragEnded);
    assert_eq!(session.pan().offset(), Vec2::new(40.0, 30.0));

    // Moving without a drag does nothing.
    session.handle(InputEvent::PointerMove(Vec2::new(500.0, 500.0)));
    assert_eq!(session.pan().offset(), Vec2::new(40.0, 30.0));

    session.handle(InputEvent::PointerDown(Vec2::new(0.0, 0.0)));
    session.handle(InputEvent::PointerMove(Vec2::new(10.0, -10.0)));
    assert_eq!(session.pan().offset(), Vec2::new(50.0, 20.0));
}

#[test]
fn test_pointer_leave_ends_drag() {
    let (mut session, _) = open_session(1, 0);
    session.handle(InputEvent::ZoomInClicked);
    session.handle(InputEvent::PointerDown(Vec2::new(5.0, 5.0)));
    assert_eq!(session.cursor(), PanCursor::Grabbing);
    assert_eq!(session.handle(InputEvent::PointerLeave), ViewerEffect::DragEnded);
    assert_eq!(session.cursor(), PanCursor::Grab);
    assert_eq!(session.handle(InputEvent::PointerLeave), ViewerEffect::None);
}

#[test]
fn test_zoom_out_to_one_stops_panning() {
    let (mut session, _) = open_session(1, 0);
    session.handle(InputEvent::ZoomInClicked);
    session.handle(InputEvent::PointerDown(Vec2::new(0.0, 0.0)));
    session.handle(InputEvent::ZoomOutClicked);
    assert_eq!(
        session.handle(InputEvent::PointerMove(Vec2::new(30.0, 30.0))),
        ViewerEffect::None
    );
    assert_eq!(session.pan().offset(), Vec2::ZERO);
}

// ---------------------------------------------------------------------------
// Closing
// ---------------------------------------------------------------------------

#[test]
fn test_escape_and_close_button_invoke_callback() {
    let (mut session, closed) = open_session(2, 0);
    assert_eq!(session.handle(InputEvent::Key(Key::Escape)), ViewerEffect::Closed);
    assert_eq!(closed.get(), 1);
    assert_eq!(session.handle(InputEvent::CloseClicked), ViewerEffect::Closed);
    assert_eq!(closed.get(), 2);
}

#[test]
fn test_other_keys_ignored() {
    let (mut session, closed) = open_session(2, 0);
    assert_eq!(session.handle(InputEvent::Key(Key::Other)), ViewerEffect::None);
    assert_eq!(closed.get(), 0);
    assert_eq!(session.index(), 0);
}

#[test]
fn test_session_never_mutates_image_list() {
    let list = images(3);
    let (mut session, _) = open_session(3, 0);
    for event in [
        InputEvent::NextClicked,
        InputEvent::ThumbnailClicked(0),
        InputEvent::ZoomInClicked,
        InputEvent::Key(Key::Escape),
    ] {
        session.handle(event);
    }
    assert_eq!(session.images(), &list);
}
