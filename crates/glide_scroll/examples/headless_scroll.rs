//! Headless Scroll Demo
//!
//! Drives a simulated scrollable over an in-memory host:
//! - A fling that decays through inertia
//! - An overscroll at the top that bounces back
//! - Pull-to-refresh followed by an explicit release
//! - Options loaded from TOML
//!
//! Run with: RUST_LOG=glide_scroll=trace cargo run -p glide_scroll --example headless_scroll

use std::time::Duration;

use anyhow::Result;
use glide_scroll::prelude::*;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

const OPTIONS: &str = r#"
direction = "vertical"
show_scrollbar = "always"
pull_down_enabled = true
force_generate_pockets = true
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("glide_scroll=debug,info")),
        )
        .init();

    let options = ScrollableOptions::from_toml_str(OPTIONS)?;
    let host = MemoryHost::new(320.0, 480.0, 320.0, 2400.0).with_pockets(60.0, 40.0);
    let mut scrollable = Scrollable::new(host, options);

    scrollable.subscribe(ScrollEventKind::End, |args| {
        tracing::info!("end at {:?}", args.scroll_offset);
    });
    scrollable.subscribe(ScrollEventKind::PullDown, |_| {
        tracing::info!("refresh requested");
    });

    // Fling upward through the content
    drag(&mut scrollable, -120.0, -35.0);
    let frames = settle(&mut scrollable);
    tracing::info!("fling settled after {} frames at top={}", frames, scrollable.scroll_top());

    // Back to the start, then overscroll past the top pocket
    scrollable.scroll_to(ScrollTarget::top(0.0));
    drag(&mut scrollable, 160.0, 0.0);
    tracing::info!("pocket state after pull: {:?}", scrollable.pocket_state());
    settle(&mut scrollable);

    // Loading finished
    scrollable.release();
    settle(&mut scrollable);
    tracing::info!(
        "released: pocket={:?}, locked={}, top={}",
        scrollable.pocket_state(),
        scrollable.is_locked(),
        scrollable.scroll_top()
    );

    Ok(())
}

fn drag(scrollable: &mut Scrollable<MemoryHost>, distance: f32, velocity: f32) {
    let content = scrollable.content();
    let event = GestureEvent::pointer(content);
    if !scrollable.validate(&event) {
        tracing::warn!("gesture rejected");
        return;
    }

    scrollable.handle_init(&event);
    scrollable.handle_start(&event);
    for _ in 0..4 {
        let mut step = GestureEvent::pointer(content).with_delta(0.0, distance / 4.0);
        scrollable.handle_move(&mut step);
    }
    let mut end = GestureEvent::pointer(content).with_velocity(0.0, velocity);
    scrollable.handle_end(&mut end);
}

fn settle(scrollable: &mut Scrollable<MemoryHost>) -> usize {
    let mut frames = 0;
    while scrollable.tick(FRAME) && frames < 600 {
        frames += 1;
    }
    frames
}
