//! Visual effect boundary
//!
//! The engine never touches pixels. Every logical transition or live drag
//! offset becomes an `EffectRequest`, which the `FrameScheduler` hands to a
//! host-provided `VisualEffectApplier` in two phases:
//!
//! ```text
//! tick N+1: install_transition(side, Ease { duration })
//! tick N+2: apply(request)
//! ```
//!
//! Installing the transition one frame before the new target is applied
//! guarantees the transition is observed instead of skipped.

mod scheduler;

pub use scheduler::FrameScheduler;

use serde::Serialize;

use crate::options::EffectiveOptions;
use crate::panel::{PanelSide, PanelState};

/// Why an effect was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Logical state changed; animate to the resting position
    Transition,
    /// Live drag offset changed (or was released)
    Drag,
}

/// Transition declaration installed before a target is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Follow the pointer immediately
    None,
    Ease { duration_ms: u32 },
}

/// Everything an applier needs to render one panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectRequest {
    pub side: PanelSide,
    pub state: PanelState,
    pub options: EffectiveOptions,
    pub live_offset: Option<f32>,
    pub kind: EffectKind,
}

impl EffectRequest {
    pub fn transition(side: PanelSide, state: PanelState, options: EffectiveOptions) -> Self {
        Self {
            side,
            state,
            options,
            live_offset: None,
            kind: EffectKind::Transition,
        }
    }

    pub fn drag(
        side: PanelSide,
        state: PanelState,
        options: EffectiveOptions,
        live_offset: Option<f32>,
    ) -> Self {
        Self {
            side,
            state,
            options,
            live_offset,
            kind: EffectKind::Drag,
        }
    }

    /// Translation of the panel at rest in `state`
    ///
    /// Left panels slide in from negative x, right panels from positive x,
    /// and the bottom panel from positive y. `0` is fully open.
    pub fn resting_translate_px(&self) -> f32 {
        let extent = self.options.extent_px(self.side);
        match (self.side, self.state) {
            (_, PanelState::Open) => 0.0,
            (PanelSide::Left, _) => -extent,
            (PanelSide::Right, _) => extent,
            (PanelSide::Bottom, PanelState::MidAnchor) => extent - self.options.mid_anchor_point_px,
            (PanelSide::Bottom, PanelState::Closed) => extent,
        }
    }

    /// Translation to render now: the live offset if any, else the resting one
    pub fn translate_px(&self) -> f32 {
        self.live_offset
            .unwrap_or_else(|| self.resting_translate_px())
    }

    /// Companion toggle displacement so it stays attached to the panel edge
    pub fn toggle_translate_px(&self) -> f32 {
        let extent = self.options.extent_px(self.side);
        let translate = self.translate_px();
        match self.side {
            PanelSide::Left => extent + translate,
            PanelSide::Right | PanelSide::Bottom => translate - extent,
        }
    }

    /// Toggle is hidden while a finger or pointer is moving the panel
    pub fn toggle_visible(&self) -> bool {
        self.live_offset.is_none()
    }

    /// Content fade-in duration, when fading applies to this request
    pub fn content_fade_ms(&self) -> Option<u32> {
        (self.options.fade_content && self.kind == EffectKind::Transition && self.state.is_open())
            .then_some(self.options.fade_content_transition_ms)
    }
}

/// Host-side renderer for panel effects
pub trait VisualEffectApplier {
    /// Phase one: declare how the next change should animate
    fn install_transition(&mut self, side: PanelSide, transition: Transition);

    /// Phase two: move the panel (and its toggle) to the requested target
    fn apply(&mut self, request: &EffectRequest);

    /// Lock or unlock page scrolling behind open panels
    fn set_scroll_lock(&mut self, _locked: bool) {}
}

/// Applier that ignores everything
#[derive(Debug, Default)]
pub struct NoopApplier;

impl VisualEffectApplier for NoopApplier {
    fn install_transition(&mut self, _side: PanelSide, _transition: Transition) {}
    fn apply(&mut self, _request: &EffectRequest) {}
}

/// One call received by a `RecordingApplier`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppliedEffect {
    Transition {
        side: PanelSide,
        transition: Transition,
    },
    Apply(EffectRequest),
    ScrollLock(bool),
}

/// Applier that records every call in order
#[derive(Debug, Default)]
pub struct RecordingApplier {
    pub calls: Vec<AppliedEffect>,
}

impl RecordingApplier {
    /// Requests applied so far, in order
    pub fn applied(&self) -> impl Iterator<Item = &EffectRequest> {
        self.calls.iter().filter_map(|call| match call {
            AppliedEffect::Apply(request) => Some(request),
            _ => None,
        })
    }

    /// Last request applied for `side`
    pub fn last_applied(&self, side: PanelSide) -> Option<&EffectRequest> {
        self.applied().filter(|r| r.side == side).last()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl VisualEffectApplier for RecordingApplier {
    fn install_transition(&mut self, side: PanelSide, transition: Transition) {
        self.calls.push(AppliedEffect::Transition { side, transition });
    }

    fn apply(&mut self, request: &EffectRequest) {
        self.calls.push(AppliedEffect::Apply(request.clone()));
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        self.calls.push(AppliedEffect::ScrollLock(locked));
    }
}
