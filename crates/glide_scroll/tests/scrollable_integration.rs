//! Integration tests for the simulated scrollable
//!
//! These tests verify that:
//! - Commands, gestures and wheel input move the native scroll position
//! - Callbacks fire in order and exactly once per completed motion
//! - Direction modes, configuration and layout changes are respected
//! - Locking and loading interact correctly with the disabled state

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use glide_core::Modifiers;
use glide_scroll::prelude::*;
use glide_scroll::ElementRole;

fn record(scrollable: &mut Scrollable<MemoryHost>, kinds: &[ScrollEventKind]) -> Rc<RefCell<Vec<ScrollEventKind>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for kind in kinds {
        let log = log.clone();
        let kind = *kind;
        scrollable.subscribe(kind, move |_| log.borrow_mut().push(kind));
    }
    log
}

fn count(scrollable: &mut Scrollable<MemoryHost>, kind: ScrollEventKind) -> Rc<Cell<usize>> {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    scrollable.subscribe(kind, move |_| c.set(c.get() + 1));
    count
}

/// Test that a command scroll reports updated, start, scroll and end in order
#[test]
fn test_scroll_by_callback_order() {
    let mut scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 100.0, 500.0),
        ScrollableOptions::default(),
    );
    let log = record(
        &mut scrollable,
        &[
            ScrollEventKind::Updated,
            ScrollEventKind::Start,
            ScrollEventKind::Scroll,
            ScrollEventKind::End,
        ],
    );

    scrollable.scroll_by(ScrollTarget::Value(120.0));

    assert_eq!(
        log.borrow().as_slice(),
        &[
            ScrollEventKind::Updated,
            ScrollEventKind::Start,
            ScrollEventKind::Scroll,
            ScrollEventKind::End,
        ]
    );
    assert_eq!(scrollable.scroll_top(), 120.0);
}

/// Test that a two-axis drag reports a single end once both axes finish
#[test]
fn test_both_axes_drag_ends_once() {
    let mut scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 500.0, 500.0),
        ScrollableOptions::default().direction(ScrollableDirection::Both),
    );
    let ends = count(&mut scrollable, ScrollEventKind::End);

    let content = scrollable.content();
    let event = GestureEvent::pointer(content);
    assert!(scrollable.validate(&event));
    scrollable.handle_init(&event);
    scrollable.handle_start(&event);
    scrollable.handle_move(&mut GestureEvent::pointer(content).with_delta(-20.0, -30.0));
    scrollable.handle_end(&mut GestureEvent::pointer(content));

    assert_eq!(scrollable.scroll_offset(), ScrollOffset::new(30.0, 20.0));
    assert_eq!(ends.get(), 1);
}

/// Test that wheel deltas are normalized by the device pixel ratio
#[test]
fn test_wheel_delta_uses_pixel_ratio() {
    let host = MemoryHost::new(100.0, 100.0, 100.0, 500.0).with_device_pixel_ratio(2.0);
    let mut scrollable = Scrollable::new(host, ScrollableOptions::default());

    let event = GestureEvent::wheel(-60.0);
    assert!(scrollable.validate(&event));
    scrollable.handle_init(&event);
    scrollable.handle_start(&event);
    scrollable.handle_move(&mut GestureEvent::wheel(-60.0).with_delta(0.0, -60.0));

    assert_eq!(scrollable.scroll_top(), 30.0);
}

/// Test that a wheel with a command key held is treated as zoom
#[test]
fn test_command_wheel_is_rejected() {
    let mut scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 100.0, 500.0),
        ScrollableOptions::default(),
    );
    let ctrl = Modifiers::new(false, true, false, false);
    assert!(!scrollable.validate(&GestureEvent::wheel(-10.0).with_modifiers(ctrl)));
    assert!(scrollable.validate(&GestureEvent::wheel(-10.0)));
}

/// Test that shift turns the wheel horizontal when both axes scroll
#[test]
fn test_shift_wheel_direction() {
    let scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 500.0, 500.0),
        ScrollableOptions::default().direction(ScrollableDirection::Both),
    );
    let shift = Modifiers::new(true, false, false, false);

    assert_eq!(
        scrollable.try_get_allowed_direction(&GestureEvent::wheel(-10.0).with_modifiers(shift)),
        Some(ScrollableDirection::Horizontal)
    );
    assert_eq!(
        scrollable.try_get_allowed_direction(&GestureEvent::wheel(-10.0)),
        Some(ScrollableDirection::Vertical)
    );
    assert_eq!(
        scrollable.try_get_allowed_direction(&GestureEvent::pointer(None)),
        Some(ScrollableDirection::Both)
    );
}

/// Test that a horizontal scrollable resets and ignores the vertical axis
#[test]
fn test_horizontal_mode_resets_vertical_scroll() {
    let mut host = MemoryHost::new(100.0, 100.0, 500.0, 500.0);
    host.scroll_natively(50.0, 0.0);
    let mut scrollable = Scrollable::new(
        host,
        ScrollableOptions::default().direction(ScrollableDirection::Horizontal),
    );
    assert_eq!(scrollable.scroll_top(), 0.0);

    scrollable.scroll_by(ScrollTarget::Value(100.0));
    assert_eq!(scrollable.scroll_offset(), ScrollOffset::new(0.0, 100.0));
}

/// Test that options loaded from TOML drive the scrollable
#[test]
fn test_options_from_toml() -> anyhow::Result<()> {
    let options = ScrollableOptions::from_toml_str(
        r#"
        direction = "horizontal"
        use_keyboard = false
        "#,
    )?;
    let mut scrollable = Scrollable::new(MemoryHost::new(100.0, 100.0, 500.0, 100.0), options);

    assert!(scrollable.direction().is_horizontal);
    assert!(!scrollable.handle_key_down(&mut KeyEvent::new(KeyCode::RIGHT)));
    Ok(())
}

/// Test that queries read the content wrapper when one is configured
#[test]
fn test_queries_with_content_wrapper() {
    let host = MemoryHost::new(100.0, 120.0, 100.0, 500.0).with_scroll_view_content();
    let wrapper = host.element(ElementRole::ScrollViewContent);
    let scrollable = Scrollable::new(
        host,
        ScrollableOptions {
            need_scroll_view_content_wrapper: true,
            ..Default::default()
        },
    );

    assert_eq!(scrollable.content(), wrapper);
    assert_eq!(scrollable.client_height(), 120.0);
    assert_eq!(scrollable.client_width(), 100.0);
    assert_eq!(scrollable.scroll_height(), 500.0);
    assert_eq!(scrollable.scroll_width(), 100.0);
}

/// Test that an unsubscribed handler no longer fires
#[test]
fn test_unsubscribe() {
    let mut scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 100.0, 500.0),
        ScrollableOptions::default(),
    );
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let id = scrollable.subscribe(ScrollEventKind::Scroll, move |_| c.set(c.get() + 1));

    assert!(scrollable.unsubscribe(id));
    scrollable.scroll_by(ScrollTarget::Value(50.0));
    assert_eq!(calls.get(), 0);
}

/// Test that shrinking content pulls an idle scroll position back in range
#[test]
fn test_content_shrink_clamps_location() {
    let mut scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 100.0, 500.0),
        ScrollableOptions::default(),
    );
    let updates = count(&mut scrollable, ScrollEventKind::Updated);
    scrollable.scroll_by(ScrollTarget::Value(1000.0));
    assert_eq!(scrollable.scroll_top(), 400.0);
    let before = updates.get();

    scrollable.host_mut().set_content_size(100.0, 200.0);
    scrollable.update_dimensions();

    assert_eq!(updates.get(), before + 1);
    assert_eq!(scrollable.scroll_top(), 100.0);
    assert_eq!(scrollable.axis(Axis::Vertical).scroll_location(), -100.0);
}

/// Test that the disabled lock survives a finished load
#[test]
fn test_disabled_lock_survives_release() {
    let mut scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 100.0, 500.0),
        ScrollableOptions::default().disabled(true),
    );
    assert!(scrollable.is_locked());

    scrollable.release();
    assert!(scrollable.is_locked());
}

/// Test a full fling driven by frame ticks
#[test]
fn test_fling_settles_within_bounds() {
    let mut scrollable = Scrollable::new(
        MemoryHost::new(100.0, 100.0, 100.0, 500.0),
        ScrollableOptions::default(),
    );
    let bounces = count(&mut scrollable, ScrollEventKind::Bounce);
    let ends = count(&mut scrollable, ScrollEventKind::End);

    let content = scrollable.content();
    let event = GestureEvent::pointer(content);
    scrollable.handle_init(&event);
    scrollable.handle_start(&event);
    scrollable.handle_move(&mut GestureEvent::pointer(content).with_delta(0.0, -350.0));
    scrollable.handle_end(&mut GestureEvent::pointer(content).with_velocity(0.0, -40.0));

    let mut frames = 0;
    while scrollable.tick(Duration::from_millis(16)) {
        frames += 1;
        assert!(frames < 1200, "fling never settled");
    }

    assert_eq!(scrollable.scroll_top(), 400.0);
    assert_eq!(bounces.get(), 1);
    assert_eq!(ends.get(), 1);
}
