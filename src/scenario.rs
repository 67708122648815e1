//! Scripted gesture scenarios
//!
//! A scenario is a YAML file describing a viewport, optional panel config,
//! and a list of steps (input events, host actions, frame ticks). Running
//! it drives a headless `SwipeBar` with a `RecordingApplier` and reports
//! the resulting panel states plus every effect the applier received.
//!
//! ```yaml
//! name: open-left-by-swipe
//! viewport: { width: 390, height: 844 }
//! steps:
//!   - touch_start: { x: 10, y: 300 }
//!   - touch_move: { x: 250, y: 300 }
//!   - touch_end: {}
//! expect:
//!   left: open
//!   locked: left
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::config::SwipeBarConfig;
use crate::effects::{AppliedEffect, RecordingApplier};
use crate::gesture::{InputEvent, PointerButton, TargetKind, TouchPoint, Viewport};
use crate::panel::{PanelSide, PanelState};
use crate::runtime::SwipeBar;

fn primary_touch() -> u64 {
    1
}

fn default_settle() -> bool {
    true
}

/// One scripted step
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    TouchStart {
        x: f32,
        y: f32,
        #[serde(default = "primary_touch")]
        id: u64,
        #[serde(default)]
        editable: bool,
    },
    TouchMove {
        x: f32,
        y: f32,
        #[serde(default = "primary_touch")]
        id: u64,
    },
    TouchEnd {
        #[serde(default = "primary_touch")]
        id: u64,
    },
    TouchCancel,
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        editable: bool,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    PointerCancel,
    Open(PanelSide),
    OpenFully(PanelSide),
    OpenToMidAnchor(PanelSide),
    Close(PanelSide),
    Toggle(PanelSide),
    OverlayClick(PanelSide),
    Resize {
        width: f32,
        height: f32,
    },
    /// Run this many rendering ticks
    Tick(u32),
    /// Tick until nothing is pending
    Flush,
}

impl Step {
    fn target(editable: bool) -> TargetKind {
        if editable {
            TargetKind::Editable
        } else {
            TargetKind::Plain
        }
    }

    /// Input event for input steps, `None` for host actions and ticks
    pub fn input_event(&self) -> Option<InputEvent> {
        let event = match self {
            Step::TouchStart { x, y, id, editable } => InputEvent::TouchStart {
                changed: vec![TouchPoint::new(*id, *x, *y)],
                target: Self::target(*editable),
            },
            Step::TouchMove { x, y, id } => InputEvent::TouchMove {
                changed: vec![TouchPoint::new(*id, *x, *y)],
            },
            Step::TouchEnd { id } => InputEvent::TouchEnd {
                changed: vec![TouchPoint::new(*id, 0.0, 0.0)],
            },
            Step::TouchCancel => InputEvent::TouchCancel,
            Step::PointerDown {
                x,
                y,
                button,
                editable,
            } => InputEvent::PointerDown {
                x: *x,
                y: *y,
                button: *button,
                target: Self::target(*editable),
            },
            Step::PointerMove { x, y } => InputEvent::PointerMove { x: *x, y: *y },
            Step::PointerUp => InputEvent::PointerUp,
            Step::PointerCancel => InputEvent::PointerCancel,
            _ => return None,
        };
        Some(event)
    }
}

/// Expected lock holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockExpectation {
    None,
    Left,
    Right,
    Bottom,
}

impl LockExpectation {
    fn matches(&self, locked: Option<PanelSide>) -> bool {
        match self {
            LockExpectation::None => locked.is_none(),
            LockExpectation::Left => locked == Some(PanelSide::Left),
            LockExpectation::Right => locked == Some(PanelSide::Right),
            LockExpectation::Bottom => locked == Some(PanelSide::Bottom),
        }
    }
}

/// Assertions checked after the last step
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expectations {
    pub left: Option<PanelState>,
    pub right: Option<PanelState>,
    pub bottom: Option<PanelState>,
    pub locked: Option<LockExpectation>,
}

impl Expectations {
    fn state(&self, side: PanelSide) -> Option<PanelState> {
        match side {
            PanelSide::Left => self.left,
            PanelSide::Right => self.right,
            PanelSide::Bottom => self.bottom,
        }
    }
}

fn default_viewport() -> Viewport {
    Viewport::default()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Replaces the config passed to `run` when present
    #[serde(default)]
    pub config: Option<SwipeBarConfig>,
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
    /// Flush pending effects after the last step
    #[serde(default = "default_settle")]
    pub settle: bool,
    #[serde(default)]
    pub expect: Expectations,
}

/// Final state of one panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    pub side: PanelSide,
    pub state: PanelState,
    pub drag_offset: Option<f32>,
    /// Translation of the last applied effect, if any was applied
    pub translate_px: Option<f32>,
    pub listening: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub panels: Vec<PanelReport>,
    pub locked: Option<PanelSide>,
    /// Steps whose input asked the host to suppress default handling
    pub prevented_steps: Vec<usize>,
    pub frames: u64,
    pub effects: Vec<AppliedEffect>,
    pub failures: Vec<String>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn panel(&self, side: PanelSide) -> Option<&PanelReport> {
        self.panels.iter().find(|p| p.side == side)
    }
}

impl Scenario {
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario at {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse scenario at {}", path.display()))
    }

    /// Run every step against a fresh headless panel set
    pub fn run(&self, base_config: &SwipeBarConfig) -> ScenarioReport {
        let config = self.config.as_ref().unwrap_or(base_config);
        let mut bar = SwipeBar::new(config, self.viewport, RecordingApplier::default());
        let mut prevented_steps = Vec::new();
        let mut frames = 0;

        tracing::info!(scenario = %self.name, steps = self.steps.len(), "running scenario");

        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(index, ?step, "step");
            if let Some(event) = step.input_event() {
                if bar.handle_input(event).prevent_default {
                    prevented_steps.push(index);
                }
                continue;
            }
            match step {
                Step::Open(side) => bar.open(*side),
                Step::OpenFully(side) => bar.open_fully(*side),
                Step::OpenToMidAnchor(side) => bar.open_to_mid_anchor(*side),
                Step::Close(side) => bar.close(*side),
                Step::Toggle(side) => bar.toggle(*side),
                Step::OverlayClick(side) => bar.overlay_clicked(*side),
                Step::Resize { width, height } => bar.resize(*width, *height),
                Step::Tick(count) => {
                    for _ in 0..*count {
                        bar.tick();
                        frames += 1;
                    }
                }
                Step::Flush => frames += bar.flush(),
                _ => {}
            }
        }

        if self.settle {
            frames += bar.flush();
        }

        let coordinator = bar.coordinator();
        let panels: Vec<PanelReport> = PanelSide::ALL
            .iter()
            .map(|&side| PanelReport {
                side,
                state: coordinator.state(side),
                drag_offset: coordinator.drag_offset(side),
                translate_px: bar
                    .applier()
                    .last_applied(side)
                    .map(|request| request.translate_px()),
                listening: bar.model().controllers.is_attached(side),
            })
            .collect();
        let locked = coordinator.locked_panel();

        let mut failures = Vec::new();
        for panel in &panels {
            if let Some(expected) = self.expect.state(panel.side) {
                if expected != panel.state {
                    failures.push(format!(
                        "{}: expected {:?}, got {:?}",
                        panel.side, expected, panel.state
                    ));
                }
            }
        }
        if let Some(expected) = self.expect.locked {
            if !expected.matches(locked) {
                failures.push(format!("lock: expected {:?}, got {:?}", expected, locked));
            }
        }

        for failure in &failures {
            tracing::warn!(scenario = %self.name, %failure, "expectation failed");
        }

        ScenarioReport {
            name: self.name.clone(),
            panels,
            locked,
            prevented_steps,
            frames,
            effects: bar.into_applier().calls,
            failures,
        }
    }
}
