//! Scenario replay tests against the bundled YAML scenarios

use std::path::PathBuf;

use swipebar::config::SwipeBarConfig;
use swipebar::effects::AppliedEffect;
use swipebar::scenario::Scenario;
use swipebar::{PanelSide, PanelState};

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

fn run(name: &str) -> swipebar::scenario::ScenarioReport {
    let scenario = Scenario::load(&scenario_path(name)).unwrap();
    scenario.run(&SwipeBarConfig::default())
}

#[test]
fn test_open_left_scenario() {
    let report = run("open_left.yaml");
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.prevented_steps, vec![1, 2]);

    let left = report.panel(PanelSide::Left).unwrap();
    assert_eq!(left.translate_px, Some(0.0));
    assert!(left.listening);
    assert!(!report.panel(PanelSide::Right).unwrap().listening);
}

#[test]
fn test_bottom_mid_anchor_scenario() {
    let report = run("bottom_mid_anchor.yaml");
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.panel(PanelSide::Bottom).unwrap().state, PanelState::Open);
}

#[test]
fn test_cancel_scenario_settles_closed() {
    let report = run("cancel_drag.yaml");
    assert!(report.passed(), "failures: {:?}", report.failures);

    let right = report.panel(PanelSide::Right).unwrap();
    assert_eq!(right.drag_offset, None);
    assert_eq!(right.translate_px, Some(320.0));
    assert!(report
        .effects
        .iter()
        .all(|e| !matches!(e, AppliedEffect::ScrollLock(_))));
}

#[test]
fn test_report_serializes_to_json() {
    let report = run("open_left.yaml");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["name"], "open-left-from-edge");
    assert_eq!(json["locked"], "left");
    assert_eq!(json["panels"][0]["state"], "open");
}
