//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types: host calls become
//! `PanelMsg`, raw input becomes `Msg::Input`.

use crate::gesture::InputEvent;
use crate::options::SwipeBarOptions;
use crate::panel::PanelSide;

/// Imperative panel actions exposed to the host
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Open a panel (bottom may settle at its mid-anchor)
    Open(PanelSide),
    /// Open the bottom panel all the way
    OpenFully(PanelSide),
    /// Open the bottom panel to its mid-anchor
    OpenToMidAnchor(PanelSide),
    Close(PanelSide),
    /// Toggle button pressed: open if closed, close otherwise
    Toggle(PanelSide),
    /// Backdrop behind an open panel clicked
    OverlayClicked(PanelSide),
    /// Set or clear the live drag offset
    SetDragOffset(PanelSide, Option<f32>),
}

/// Configuration changes
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsMsg {
    /// Replace one panel's overrides
    SetPanelOptions(PanelSide, SwipeBarOptions),
    /// Merge into the process-wide defaults
    SetGlobalOptions(SwipeBarOptions),
}

/// Viewport changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportMsg {
    Resize { width: f32, height: f32 },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Panel(PanelMsg),
    Input(InputEvent),
    Options(OptionsMsg),
    Viewport(ViewportMsg),
}
