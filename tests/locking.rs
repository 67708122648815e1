//! Exclusivity token and cancellation tests

mod common;

use common::{mid_anchor_config, swipe, test_bar, touch_move, touch_start};
use swipebar::config::SwipeBarConfig;
use swipebar::gesture::{InputEvent, TargetKind};
use swipebar::runtime::WinitInputAdapter;
use swipebar::{PanelSide, PanelState};

#[test]
fn test_open_left_blocks_right_swipe() {
    let mut bar = test_bar(SwipeBarConfig::default());
    bar.open(PanelSide::Left);
    assert!(!bar.model().controllers.is_attached(PanelSide::Right));

    swipe(&mut bar, (390.0, 300.0), &[(200.0, 300.0)]);
    assert_eq!(bar.coordinator().state(PanelSide::Right), PanelState::Closed);
    assert_eq!(bar.coordinator().locked_panel(), Some(PanelSide::Left));
}

#[test]
fn test_mid_anchor_retains_precedence() {
    let mut bar = test_bar(mid_anchor_config());
    bar.open(PanelSide::Bottom);

    swipe(&mut bar, (10.0, 300.0), &[(250.0, 300.0)]);
    assert_eq!(bar.coordinator().state(PanelSide::Left), PanelState::Closed);
    assert_eq!(bar.coordinator().locked_panel(), Some(PanelSide::Bottom));
}

#[test]
fn test_corner_start_only_first_activation_wins() {
    let mut bar = test_bar(SwipeBarConfig::default());
    // Inside both the left and bottom edge regions
    bar.handle_input(touch_start(10.0, 790.0));
    assert!(bar.model().controllers.is_live(PanelSide::Left));
    assert!(bar.model().controllers.is_live(PanelSide::Bottom));

    bar.handle_input(touch_move(100.0, 790.0));
    assert_eq!(bar.coordinator().locked_panel(), Some(PanelSide::Left));
    assert!(bar.coordinator().drag_offset(PanelSide::Left).is_some());
    assert_eq!(bar.coordinator().drag_offset(PanelSide::Bottom), None);
    assert!(!bar.model().controllers.is_live(PanelSide::Bottom));
}

#[test]
fn test_cancel_releases_lock_and_offset() {
    let mut bar = test_bar(SwipeBarConfig::default());
    bar.handle_input(touch_start(10.0, 300.0));
    bar.handle_input(touch_move(150.0, 300.0));
    assert_eq!(bar.coordinator().locked_panel(), Some(PanelSide::Left));

    bar.handle_input(InputEvent::TouchCancel);
    assert_eq!(bar.coordinator().locked_panel(), None);
    assert_eq!(bar.coordinator().drag_offset(PanelSide::Left), None);
    assert_eq!(bar.coordinator().state(PanelSide::Left), PanelState::Closed);
}

#[test]
fn test_cancel_from_mid_anchor_releases_lock() {
    let mut bar = test_bar(mid_anchor_config());
    bar.open_to_mid_anchor(PanelSide::Bottom);

    bar.handle_input(touch_start(200.0, 640.0));
    bar.handle_input(touch_move(200.0, 560.0));
    bar.handle_input(InputEvent::TouchCancel);

    assert_eq!(bar.coordinator().locked_panel(), None);
    assert_eq!(bar.coordinator().drag_offset(PanelSide::Bottom), None);
    assert_eq!(bar.coordinator().anchor(), PanelState::MidAnchor);
}

#[test]
fn test_pointer_cancel_on_focus_loss() {
    let mut bar = test_bar(SwipeBarConfig::default());
    bar.open(PanelSide::Right);

    bar.handle_input(common::pointer_down(150.0, 300.0));
    bar.handle_input(InputEvent::PointerMove { x: 250.0, y: 300.0 });
    bar.handle_input(InputEvent::PointerCancel);

    assert_eq!(bar.coordinator().locked_panel(), None);
    assert_eq!(bar.coordinator().drag_offset(PanelSide::Right), None);
}

#[test]
fn test_focus_loss_cancels_live_touch_gesture() {
    let mut bar = test_bar(SwipeBarConfig::default());
    bar.handle_input(touch_start(10.0, 300.0));
    bar.handle_input(touch_move(150.0, 300.0));
    assert_eq!(bar.coordinator().locked_panel(), Some(PanelSide::Left));

    let mut adapter = WinitInputAdapter::default();
    for msg in adapter.translate(&winit::event::WindowEvent::Focused(false), TargetKind::Plain) {
        bar.dispatch(msg);
    }

    assert_eq!(bar.coordinator().locked_panel(), None);
    assert_eq!(bar.coordinator().drag_offset(PanelSide::Left), None);
    assert_eq!(bar.coordinator().state(PanelSide::Left), PanelState::Closed);
    assert!(!bar.model().controllers.is_live(PanelSide::Left));
}

#[test]
fn test_cancel_settles_panel_back() {
    let mut bar = test_bar(SwipeBarConfig::default());
    bar.handle_input(touch_start(10.0, 300.0));
    bar.handle_input(touch_move(150.0, 300.0));
    bar.handle_input(InputEvent::TouchCancel);
    bar.flush();

    let applied = bar.applier().last_applied(PanelSide::Left).cloned();
    let applied = applied.expect("settle applied");
    assert_eq!(applied.live_offset, None);
    assert_eq!(applied.translate_px(), -320.0);
}

#[test]
fn test_lock_is_never_shared() {
    let mut bar = test_bar(mid_anchor_config());
    let gestures: [((f32, f32), &[(f32, f32)]); 5] = [
        ((10.0, 300.0), &[(250.0, 300.0)]),
        ((390.0, 300.0), &[(200.0, 300.0)]),
        ((200.0, 300.0), &[(100.0, 300.0), (90.0, 300.0)]),
        ((200.0, 790.0), &[(200.0, 500.0)]),
        ((10.0, 790.0), &[(200.0, 790.0)]),
    ];

    for (from, path) in gestures {
        swipe(&mut bar, from, path);
        let open: Vec<_> = PanelSide::ALL
            .into_iter()
            .filter(|&side| bar.coordinator().is_open(side))
            .collect();
        assert!(open.len() <= 1, "open panels: {:?}", open);
        if let Some(&side) = open.first() {
            assert_eq!(bar.coordinator().locked_panel(), Some(side));
        }
    }
}
