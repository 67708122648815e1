//! Bottom panel: vertical drags with an optional mid-anchor
//!
//! Without a mid-anchor the panel behaves like the side panels. With one,
//! releases settle at three stops (closed, mid-anchor, open) depending on
//! the resting state, the last movement direction, and how far the finger
//! travelled from its origin.

use super::{clamp_px, AxisBehavior, Commit, GestureEnd};
use crate::gesture::Viewport;
use crate::options::EffectiveOptions;
use crate::panel::{PanelSide, PanelState};

/// Panel sliding up from the bottom edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BottomEdge;

impl BottomEdge {
    fn commit_mid_anchor(end: &GestureEnd, options: &EffectiveOptions) -> Commit {
        let height = options.sidebar_height_px;
        let anchor_translate = height - options.mid_anchor_point_px;
        let swiped_up = end.current < end.prev;
        let displacement = end.displacement();

        match end.state {
            PanelState::Open => {
                let translate = displacement.max(0.0);
                match (swiped_up, translate) {
                    (false, t) if t > anchor_translate => Commit::Close,
                    (true, t) if t < anchor_translate => Commit::OpenFully,
                    _ => Commit::MidAnchor,
                }
            }
            PanelState::MidAnchor => {
                let translate = clamp_px(anchor_translate + displacement, 0.0, height);
                let close_threshold = (height + anchor_translate) / 2.0;
                match (swiped_up, translate) {
                    (true, t) if t < anchor_translate => Commit::OpenFully,
                    (false, t) if t > close_threshold => Commit::Close,
                    _ => Commit::MidAnchor,
                }
            }
            PanelState::Closed => {
                if end.from_edge && swiped_up {
                    Commit::MidAnchor
                } else {
                    Commit::Close
                }
            }
        }
    }
}

impl AxisBehavior for BottomEdge {
    fn side(&self) -> PanelSide {
        PanelSide::Bottom
    }

    fn in_edge_region(
        &self,
        _x: f32,
        y: f32,
        viewport: Viewport,
        options: &EffectiveOptions,
    ) -> bool {
        y >= viewport.height - options.edge_activation_width_px
    }

    /// A closed bottom panel with an active mid-anchor can still be pulled
    /// up to its anchor from the edge
    fn allows_closed_start(&self, options: &EffectiveOptions) -> bool {
        options.swipe_to_open || options.mid_anchor_active()
    }

    fn live_offset(&self, state: PanelState, displacement: f32, options: &EffectiveOptions) -> f32 {
        let height = options.sidebar_height_px;
        let delta = options.drag_activation_delta_px;
        let mid_anchor = options.mid_anchor_active();

        match state {
            PanelState::MidAnchor if mid_anchor => {
                let anchor_translate = height - options.mid_anchor_point_px;
                clamp_px(anchor_translate + displacement - delta, 0.0, height)
            }
            PanelState::Open | PanelState::MidAnchor => clamp_px(displacement - delta, 0.0, height),
            PanelState::Closed if mid_anchor => {
                let anchor_translate = height - options.mid_anchor_point_px;
                clamp_px(height + displacement + delta, anchor_translate, height)
            }
            PanelState::Closed => clamp_px(height + displacement + delta, 0.0, height),
        }
    }

    fn commit(&self, end: &GestureEnd, options: &EffectiveOptions) -> Commit {
        if options.mid_anchor_active() {
            return Self::commit_mid_anchor(end, options);
        }

        let swiped_up = end.current < end.prev;
        if end.state.is_open() {
            if swiped_up {
                Commit::Open
            } else {
                Commit::Close
            }
        } else if end.from_edge && swiped_up {
            Commit::Open
        } else {
            Commit::Close
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Height 600, anchor 200 from the bottom (anchor translate 400)
    fn mid_opts() -> EffectiveOptions {
        EffectiveOptions {
            sidebar_height_px: 600.0,
            mid_anchor_point: true,
            swipe_to_open: false,
            mid_anchor_point_px: 200.0,
            ..EffectiveOptions::default()
        }
    }

    fn end(state: PanelState, start: f32, prev: f32, current: f32) -> GestureEnd {
        GestureEnd {
            start,
            current,
            prev,
            from_edge: true,
            state,
        }
    }

    #[test]
    fn test_edge_region() {
        let vp = Viewport::new(400.0, 800.0);
        assert!(BottomEdge.in_edge_region(0.0, 760.0, vp, &mid_opts()));
        assert!(!BottomEdge.in_edge_region(0.0, 759.0, vp, &mid_opts()));
    }

    #[test]
    fn test_closed_start_allowed_with_mid_anchor() {
        assert!(BottomEdge.allows_closed_start(&mid_opts()));
        let disabled = EffectiveOptions {
            swipe_to_open: false,
            ..EffectiveOptions::default()
        };
        assert!(!BottomEdge.allows_closed_start(&disabled));
    }

    #[test]
    fn test_live_offsets_with_mid_anchor() {
        let o = mid_opts();
        // Closed: floor at the anchor translate
        assert_eq!(BottomEdge.live_offset(PanelState::Closed, -100.0, &o), 520.0);
        assert_eq!(BottomEdge.live_offset(PanelState::Closed, -500.0, &o), 400.0);
        // Mid-anchor: 400 + d - 20
        assert_eq!(BottomEdge.live_offset(PanelState::MidAnchor, -100.0, &o), 280.0);
        assert_eq!(BottomEdge.live_offset(PanelState::MidAnchor, 150.0, &o), 530.0);
        // Open
        assert_eq!(BottomEdge.live_offset(PanelState::Open, 100.0, &o), 80.0);
    }

    #[test]
    fn test_live_offsets_without_mid_anchor() {
        let o = EffectiveOptions::default();
        // height 400
        assert_eq!(BottomEdge.live_offset(PanelState::Closed, -100.0, &o), 320.0);
        assert_eq!(BottomEdge.live_offset(PanelState::Closed, -600.0, &o), 0.0);
        assert_eq!(BottomEdge.live_offset(PanelState::Open, 50.0, &o), 30.0);
    }

    #[test]
    fn test_open_commits() {
        let o = mid_opts();
        // Down 450 past the anchor translate
        assert_eq!(BottomEdge.commit(&end(PanelState::Open, 100.0, 540.0, 550.0), &o), Commit::Close);
        // Down 200
        assert_eq!(BottomEdge.commit(&end(PanelState::Open, 100.0, 290.0, 300.0), &o), Commit::MidAnchor);
        // Up after going down 100
        assert_eq!(BottomEdge.commit(&end(PanelState::Open, 100.0, 210.0, 200.0), &o), Commit::OpenFully);
        // Up after going down 450
        assert_eq!(BottomEdge.commit(&end(PanelState::Open, 100.0, 560.0, 550.0), &o), Commit::MidAnchor);
    }

    #[test]
    fn test_mid_anchor_commits() {
        let o = mid_opts();
        // Up 50: translate 350 < 400
        assert_eq!(BottomEdge.commit(&end(PanelState::MidAnchor, 500.0, 460.0, 450.0), &o), Commit::OpenFully);
        // Down 150: translate 550 > 500
        assert_eq!(BottomEdge.commit(&end(PanelState::MidAnchor, 500.0, 640.0, 650.0), &o), Commit::Close);
        // Down 50: translate 450 <= 500
        assert_eq!(BottomEdge.commit(&end(PanelState::MidAnchor, 500.0, 540.0, 550.0), &o), Commit::MidAnchor);
        // Up while below the anchor
        assert_eq!(BottomEdge.commit(&end(PanelState::MidAnchor, 500.0, 560.0, 550.0), &o), Commit::MidAnchor);
    }

    #[test]
    fn test_closed_commits() {
        let o = mid_opts();
        assert_eq!(BottomEdge.commit(&end(PanelState::Closed, 790.0, 700.0, 690.0), &o), Commit::MidAnchor);
        assert_eq!(BottomEdge.commit(&end(PanelState::Closed, 790.0, 690.0, 700.0), &o), Commit::Close);

        let not_edge = GestureEnd {
            from_edge: false,
            ..end(PanelState::Closed, 790.0, 700.0, 690.0)
        };
        assert_eq!(BottomEdge.commit(&not_edge, &o), Commit::Close);
    }

    #[test]
    fn test_two_state_commits() {
        let o = EffectiveOptions::default();
        assert_eq!(BottomEdge.commit(&end(PanelState::Closed, 790.0, 700.0, 690.0), &o), Commit::Open);
        assert_eq!(BottomEdge.commit(&end(PanelState::Open, 100.0, 200.0, 210.0), &o), Commit::Close);
        assert_eq!(BottomEdge.commit(&end(PanelState::Open, 100.0, 200.0, 190.0), &o), Commit::Open);
    }
}
