//! Panel sides, logical states and the per-side panel container

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::options::EffectiveOptions;

/// Screen edge a panel is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    Left,
    Right,
    Bottom,
}

impl PanelSide {
    /// All sides, in dispatch order
    pub const ALL: [PanelSide; 3] = [PanelSide::Left, PanelSide::Right, PanelSide::Bottom];

    /// Returns the axis gestures for this panel are measured along
    pub fn axis(&self) -> Axis {
        match self {
            PanelSide::Left | PanelSide::Right => Axis::Horizontal,
            PanelSide::Bottom => Axis::Vertical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelSide::Left => "left",
            PanelSide::Right => "right",
            PanelSide::Bottom => "bottom",
        }
    }
}

impl fmt::Display for PanelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(PanelSide::Left),
            "right" => Ok(PanelSide::Right),
            "bottom" => Ok(PanelSide::Bottom),
            other => Err(format!("Unknown panel side: {}", other)),
        }
    }
}

/// Axis a drag is measured along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Logical resting state of a panel
///
/// Left and right panels only ever hold `Closed` or `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Closed,
    MidAnchor,
    Open,
}

impl PanelState {
    /// True for any state other than `Closed`
    pub fn is_open(&self) -> bool {
        !matches!(self, PanelState::Closed)
    }
}

/// Exclusive gesture ownership token. `None` when no panel holds it.
pub type LockedPanel = Option<PanelSide>;

/// State for a single panel
#[derive(Debug, Clone)]
pub struct Panel {
    pub side: PanelSide,

    /// Logical state, mutated only by coordinator actions
    pub state: PanelState,

    /// Resolved options published for this side
    pub options: EffectiveOptions,

    /// Live visual displacement during a drag, `None` when resting
    pub drag_offset: Option<f32>,
}

impl Panel {
    pub fn new(side: PanelSide, options: EffectiveOptions) -> Self {
        Self {
            side,
            state: PanelState::Closed,
            options,
            drag_offset: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Size along the panel's axis (width for left/right, height for bottom)
    pub fn extent_px(&self) -> f32 {
        self.options.extent_px(self.side)
    }
}

/// All three panels
#[derive(Debug, Clone)]
pub struct PanelLayout {
    pub left: Panel,
    pub right: Panel,
    pub bottom: Panel,
}

impl PanelLayout {
    pub fn new(left: EffectiveOptions, right: EffectiveOptions, bottom: EffectiveOptions) -> Self {
        Self {
            left: Panel::new(PanelSide::Left, left),
            right: Panel::new(PanelSide::Right, right),
            bottom: Panel::new(PanelSide::Bottom, bottom),
        }
    }

    /// Get panel by side
    pub fn panel(&self, side: PanelSide) -> &Panel {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
            PanelSide::Bottom => &self.bottom,
        }
    }

    /// Get mutable panel by side
    pub fn panel_mut(&mut self, side: PanelSide) -> &mut Panel {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
            PanelSide::Bottom => &mut self.bottom,
        }
    }

    /// Whether any panel is currently open (drives body scroll locking)
    pub fn any_open(&self) -> bool {
        PanelSide::ALL.into_iter().any(|side| self.panel(side).is_open())
    }
}
