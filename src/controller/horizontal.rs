//! Left and right panels: two-state horizontal drags

use super::{clamp_px, AxisBehavior, Commit, GestureEnd};
use crate::gesture::Viewport;
use crate::options::EffectiveOptions;
use crate::panel::{PanelSide, PanelState};

/// Panel sliding in from the left edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeftEdge;

/// Panel sliding in from the right edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RightEdge;

/// Two-state commit shared by both sides
fn commit_two_state(end: &GestureEnd, toward_open: bool, toward_close: bool) -> Commit {
    if end.state.is_open() {
        if toward_close {
            Commit::Close
        } else {
            Commit::Open
        }
    } else if end.from_edge && toward_open {
        Commit::Open
    } else {
        Commit::Close
    }
}

impl AxisBehavior for LeftEdge {
    fn side(&self) -> PanelSide {
        PanelSide::Left
    }

    fn in_edge_region(
        &self,
        x: f32,
        _y: f32,
        _viewport: Viewport,
        options: &EffectiveOptions,
    ) -> bool {
        x <= options.edge_activation_width_px
    }

    fn live_offset(&self, state: PanelState, displacement: f32, options: &EffectiveOptions) -> f32 {
        let width = options.sidebar_width_px;
        let delta = options.drag_activation_delta_px;
        if state.is_open() {
            clamp_px(displacement + delta, -width, 0.0)
        } else {
            clamp_px(-width + displacement - delta, -width, 0.0)
        }
    }

    fn commit(&self, end: &GestureEnd, _options: &EffectiveOptions) -> Commit {
        // Last increment decides; standing still counts as toward open
        let toward_open = end.current >= end.prev;
        commit_two_state(end, toward_open, !toward_open)
    }
}

impl AxisBehavior for RightEdge {
    fn side(&self) -> PanelSide {
        PanelSide::Right
    }

    fn in_edge_region(
        &self,
        x: f32,
        _y: f32,
        viewport: Viewport,
        options: &EffectiveOptions,
    ) -> bool {
        x >= viewport.width - options.edge_activation_width_px
    }

    fn live_offset(&self, state: PanelState, displacement: f32, options: &EffectiveOptions) -> f32 {
        let width = options.sidebar_width_px;
        let delta = options.drag_activation_delta_px;
        if state.is_open() {
            clamp_px(displacement - delta, 0.0, width)
        } else {
            clamp_px(width + displacement + delta, 0.0, width)
        }
    }

    fn commit(&self, end: &GestureEnd, _options: &EffectiveOptions) -> Commit {
        // Strict in both directions: standing still keeps an open panel open
        // and closes a closed one
        let swiped_left = end.current < end.prev;
        let swiped_right = end.current > end.prev;
        commit_two_state(end, swiped_left, swiped_right)
    }
}
