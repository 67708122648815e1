//! Panel system - the three swipeable surfaces and their logical state
//!
//! Panels live on the left, right, or bottom edge of the viewport. Left and
//! right panels are either open or closed; the bottom panel can also rest at
//! a partially open "mid-anchor".
//!
//! ## Architecture
//!
//! - `PanelSide`: Left, Right, or Bottom edge
//! - `PanelState`: Closed, MidAnchor, or Open
//! - `Panel`: logical state, resolved options, and live drag offset for one side
//! - `PanelLayout`: all three panels, indexed by side
//!
//! ## Integration
//!
//! Panels are owned by the `Coordinator` (see `coordinator.rs`) and are only
//! mutated through its actions. Controllers read them, never write them.

mod state;

pub use state::{Axis, LockedPanel, Panel, PanelLayout, PanelSide, PanelState};
