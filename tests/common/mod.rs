//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use swipebar::config::SwipeBarConfig;
use swipebar::effects::RecordingApplier;
use swipebar::gesture::{InputEvent, PointerButton, TargetKind, TouchPoint, Viewport};
use swipebar::options::SwipeBarOptions;
use swipebar::runtime::{DispatchResult, SwipeBar};

/// Phone-sized viewport, below the default 640px breakpoint
pub const PHONE: Viewport = Viewport {
    width: 400.0,
    height: 800.0,
};

/// Create a headless panel set with the given config on a phone viewport
pub fn test_bar(config: SwipeBarConfig) -> SwipeBar<RecordingApplier> {
    SwipeBar::new(&config, PHONE, RecordingApplier::default())
}

/// Bottom panel 600px tall with a mid-anchor 200px above the bottom edge
pub fn mid_anchor_config() -> SwipeBarConfig {
    SwipeBarConfig {
        bottom: SwipeBarOptions {
            sidebar_height_px: Some(600.0),
            mid_anchor_point: Some(true),
            swipe_to_open: Some(false),
            mid_anchor_point_px: Some(200.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn touch_start(x: f32, y: f32) -> InputEvent {
    InputEvent::TouchStart {
        changed: vec![TouchPoint::new(1, x, y)],
        target: TargetKind::Plain,
    }
}

pub fn touch_move(x: f32, y: f32) -> InputEvent {
    InputEvent::TouchMove {
        changed: vec![TouchPoint::new(1, x, y)],
    }
}

pub fn touch_end() -> InputEvent {
    InputEvent::TouchEnd {
        changed: vec![TouchPoint::new(1, 0.0, 0.0)],
    }
}

pub fn pointer_down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        x,
        y,
        button: PointerButton::Primary,
        target: TargetKind::Plain,
    }
}

/// Touch-start at `from`, move through every point in `path`, then release
///
/// Returns the dispatch result of each move.
pub fn swipe(
    bar: &mut SwipeBar<RecordingApplier>,
    from: (f32, f32),
    path: &[(f32, f32)],
) -> Vec<DispatchResult> {
    bar.handle_input(touch_start(from.0, from.1));
    let results = path
        .iter()
        .map(|&(x, y)| bar.handle_input(touch_move(x, y)))
        .collect();
    bar.handle_input(touch_end());
    results
}
