//! Two-phase frame scheduling for visual effects

use super::{EffectKind, EffectRequest, Transition, VisualEffectApplier};
use crate::panel::PanelSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Transition declaration goes out on the next tick
    Install,
    /// Target value goes out on the next tick
    Apply,
}

#[derive(Debug, Clone)]
struct Scheduled {
    request: EffectRequest,
    phase: Phase,
}

impl Scheduled {
    fn is_drag_for(&self, side: PanelSide) -> bool {
        self.request.side == side && self.request.kind == EffectKind::Drag
    }

    fn is_transition_for(&self, side: PanelSide) -> bool {
        self.request.side == side && self.request.kind == EffectKind::Transition
    }
}

/// Sequences effect requests across rendering ticks
///
/// - Transitions: install on the next tick, apply on the tick after.
/// - Live offsets: "no transition" is installed at once, the offset is
///   applied on the next tick. A newer offset replaces whatever is pending
///   for that side, transitions included.
/// - Releasing an offset with no transition pending settles the panel back
///   to its resting position through a regular two-phase transition.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    queue: Vec<Scheduled>,
    frame: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a request, installing "no transition" right away for live drags
    pub fn schedule(&mut self, request: EffectRequest, applier: &mut dyn VisualEffectApplier) {
        let side = request.side;

        match (request.kind, request.live_offset) {
            (EffectKind::Drag, Some(_)) => {
                // A live offset supersedes anything queued for this side
                applier.install_transition(side, Transition::None);
                self.queue.retain(|s| s.request.side != side);
                self.queue.push(Scheduled {
                    request,
                    phase: Phase::Apply,
                });
            }
            (EffectKind::Drag, None) => {
                self.queue.retain(|s| !s.is_drag_for(side));
                if self.queue.iter().any(|s| s.is_transition_for(side)) {
                    return;
                }
                let settle = EffectRequest {
                    kind: EffectKind::Transition,
                    ..request
                };
                self.queue.push(Scheduled {
                    request: settle,
                    phase: Phase::Install,
                });
            }
            (EffectKind::Transition, _) => {
                self.queue.retain(|s| !s.is_drag_for(side));
                self.queue.push(Scheduled {
                    request,
                    phase: Phase::Install,
                });
            }
        }
    }

    /// Run one rendering tick
    pub fn tick(&mut self, applier: &mut dyn VisualEffectApplier) {
        self.frame += 1;
        let due = std::mem::take(&mut self.queue);

        for scheduled in due {
            match scheduled.phase {
                Phase::Install => {
                    let duration_ms = scheduled.request.options.transition_ms;
                    applier.install_transition(
                        scheduled.request.side,
                        Transition::Ease { duration_ms },
                    );
                    self.queue.push(Scheduled {
                        phase: Phase::Apply,
                        ..scheduled
                    });
                }
                Phase::Apply => {
                    tracing::trace!(
                        side = %scheduled.request.side,
                        frame = self.frame,
                        kind = ?scheduled.request.kind,
                        "applying effect"
                    );
                    applier.apply(&scheduled.request);
                }
            }
        }
    }

    /// Tick until nothing is pending; returns the number of ticks run
    pub fn flush(&mut self, applier: &mut dyn VisualEffectApplier) -> u64 {
        let start = self.frame;
        while !self.is_idle() {
            self.tick(applier);
        }
        self.frame - start
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Ticks run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
