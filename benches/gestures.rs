//! Benchmarks for the input → update → Cmd → scheduler loop
//!
//! Run with: cargo bench gestures

use swipebar::config::SwipeBarConfig;
use swipebar::effects::NoopApplier;
use swipebar::gesture::{InputEvent, TargetKind, TouchPoint, Viewport};
use swipebar::messages::Msg;
use swipebar::model::SwipeModel;
use swipebar::options::SwipeBarOptions;
use swipebar::update::update;
use swipebar::SwipeBar;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn phone() -> Viewport {
    Viewport::new(390.0, 844.0)
}

fn touch(x: f32, y: f32) -> Vec<TouchPoint> {
    vec![TouchPoint::new(1, x, y)]
}

// ============================================================================
// Update-only benchmarks
// Measures the cost of state transformations per input event
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn update_left_drag_moves(moves: usize) {
    let mut model = SwipeModel::new(&SwipeBarConfig::default(), phone());
    update(
        &mut model,
        Msg::Input(InputEvent::TouchStart {
            changed: touch(10.0, 400.0),
            target: TargetKind::Plain,
        }),
    );

    for i in 0..moves {
        let x = 30.0 + (i % 300) as f32;
        let cmd = update(
            &mut model,
            Msg::Input(InputEvent::TouchMove {
                changed: touch(x, 400.0),
            }),
        );
        divan::black_box(cmd);
    }

    divan::black_box(&model);
}

#[divan::bench(args = [100, 1000])]
fn update_ignored_moves(moves: usize) {
    // No gesture live: every controller rejects the event immediately
    let mut model = SwipeModel::new(&SwipeBarConfig::default(), phone());

    for i in 0..moves {
        let cmd = update(
            &mut model,
            Msg::Input(InputEvent::PointerMove {
                x: (i % 390) as f32,
                y: 400.0,
            }),
        );
        divan::black_box(cmd);
    }
}

// ============================================================================
// Full loop: dispatch plus one scheduler tick per event
// ============================================================================

#[divan::bench(args = [10, 100])]
fn full_swipe_cycle_mid_anchor(cycles: usize) {
    let config = SwipeBarConfig {
        bottom: SwipeBarOptions {
            sidebar_height_px: Some(600.0),
            mid_anchor_point: Some(true),
            swipe_to_open: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut bar = SwipeBar::new(&config, phone(), NoopApplier);

    for _ in 0..cycles {
        bar.handle_input(InputEvent::TouchStart {
            changed: touch(200.0, 835.0),
            target: TargetKind::Plain,
        });
        for y in (500..835).rev().step_by(15) {
            bar.handle_input(InputEvent::TouchMove {
                changed: touch(200.0, y as f32),
            });
            bar.tick();
        }
        bar.handle_input(InputEvent::TouchEnd {
            changed: touch(200.0, 500.0),
        });
        bar.close(swipebar::PanelSide::Bottom);
        divan::black_box(bar.flush());
    }
}
