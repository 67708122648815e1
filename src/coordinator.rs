//! Coordinator - shared panel state and the actions that mutate it
//!
//! Owns the logical state of all three panels, their resolved options, and
//! the exclusivity token (`LockedPanel`). Host calls and gesture commits
//! both funnel through the same actions; every transition yields a `Cmd`
//! describing the visual effect instead of touching anything visual.

use tracing::debug;

use crate::commands::Cmd;
use crate::config::SwipeBarConfig;
use crate::effects::EffectRequest;
use crate::gesture::Viewport;
use crate::options::{resolve, DefaultOptions, EffectiveOptions, SwipeBarOptions};
use crate::panel::{LockedPanel, Panel, PanelLayout, PanelSide, PanelState};

/// Per-panel overrides as last provided by the host
#[derive(Debug, Clone, Default)]
struct PanelOverrides {
    left: SwipeBarOptions,
    right: SwipeBarOptions,
    bottom: SwipeBarOptions,
}

impl PanelOverrides {
    fn get(&self, side: PanelSide) -> &SwipeBarOptions {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
            PanelSide::Bottom => &self.bottom,
        }
    }

    fn get_mut(&mut self, side: PanelSide) -> &mut SwipeBarOptions {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
            PanelSide::Bottom => &mut self.bottom,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Coordinator {
    layout: PanelLayout,
    locked: LockedPanel,
    /// Provider-level overrides the process defaults are built from
    global_overrides: SwipeBarOptions,
    defaults: DefaultOptions,
    overrides: PanelOverrides,
    /// Host viewport; decides whether `open` honours the bottom mid-anchor
    viewport: Viewport,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::from_config(&SwipeBarConfig::default())
    }
}

impl Coordinator {
    pub fn from_config(config: &SwipeBarConfig) -> Self {
        let defaults = DefaultOptions::from_overrides(&config.defaults);
        let overrides = PanelOverrides {
            left: config.left.clone(),
            right: config.right.clone(),
            bottom: config.bottom.clone(),
        };
        let layout = PanelLayout::new(
            resolve(PanelSide::Left, &overrides.left, &defaults),
            resolve(PanelSide::Right, &overrides.right, &defaults),
            resolve(PanelSide::Bottom, &overrides.bottom, &defaults),
        );

        Self {
            layout,
            locked: None,
            global_overrides: config.defaults.clone(),
            defaults,
            overrides,
            viewport: Viewport::default(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Open a panel and take interaction precedence
    ///
    /// The bottom panel settles at its mid-anchor when mid-anchor is active
    /// and the viewport is below its breakpoint; wide screens open fully.
    pub fn open(&mut self, side: PanelSide) -> Cmd {
        let target = match side {
            PanelSide::Left | PanelSide::Right => PanelState::Open,
            PanelSide::Bottom => {
                let options = &self.layout.bottom.options;
                if options.mid_anchor_active()
                    && self.viewport.is_small_screen(options.media_query_width)
                {
                    PanelState::MidAnchor
                } else {
                    PanelState::Open
                }
            }
        };
        self.transition(side, target, Some(side))
    }

    /// Open the bottom panel all the way, ignoring the mid-anchor
    pub fn open_fully(&mut self, side: PanelSide) -> Cmd {
        match side {
            PanelSide::Bottom => self.transition(side, PanelState::Open, Some(side)),
            PanelSide::Left | PanelSide::Right => {
                debug!(%side, "open_fully only applies to the bottom panel");
                Cmd::None
            }
        }
    }

    /// Open the bottom panel to its mid-anchor
    pub fn open_to_mid_anchor(&mut self, side: PanelSide) -> Cmd {
        match side {
            PanelSide::Bottom => self.transition(side, PanelState::MidAnchor, Some(side)),
            PanelSide::Left | PanelSide::Right => {
                debug!(%side, "open_to_mid_anchor only applies to the bottom panel");
                Cmd::None
            }
        }
    }

    /// Close a panel and release the exclusivity token
    pub fn close(&mut self, side: PanelSide) -> Cmd {
        self.transition(side, PanelState::Closed, None)
    }

    /// Toggle button behavior
    pub fn toggle(&mut self, side: PanelSide) -> Cmd {
        if self.is_open(side) {
            self.close(side)
        } else {
            self.open(side)
        }
    }

    /// Backdrop click: closes an open panel when configured to
    pub fn overlay_clicked(&mut self, side: PanelSide) -> Cmd {
        let panel = self.layout.panel(side);
        if panel.is_open() && panel.options.close_on_overlay_click {
            self.close(side)
        } else {
            Cmd::None
        }
    }

    /// Record and forward a live drag offset. Never changes `PanelState`.
    pub fn set_drag_offset(&mut self, side: PanelSide, offset: Option<f32>) -> Cmd {
        let panel = self.layout.panel_mut(side);
        panel.drag_offset = offset;
        Cmd::Effect(EffectRequest::drag(
            side,
            panel.state,
            panel.options.clone(),
            offset,
        ))
    }

    fn transition(&mut self, side: PanelSide, target: PanelState, locked: LockedPanel) -> Cmd {
        let was_any_open = self.layout.any_open();

        let panel = self.layout.panel_mut(side);
        let from = panel.state;
        panel.state = target;
        let effect = EffectRequest::transition(side, target, panel.options.clone());

        if self.locked != locked {
            debug!(from = ?self.locked, to = ?locked, "lock changed");
        }
        self.locked = locked;
        debug!(%side, ?from, to = ?target, "panel transition");

        let is_any_open = self.layout.any_open();
        let mut cmds = vec![Cmd::Effect(effect)];
        if was_any_open != is_any_open {
            cmds.push(Cmd::ScrollLock(is_any_open));
        }
        Cmd::batch(cmds)
    }

    // ------------------------------------------------------------------
    // Exclusivity token
    // ------------------------------------------------------------------

    /// Take the token for `side`; fails while another side holds it
    pub fn acquire_lock(&mut self, side: PanelSide) -> bool {
        match self.locked {
            None => {
                debug!(%side, "lock acquired");
                self.locked = Some(side);
                true
            }
            Some(holder) => holder == side,
        }
    }

    /// Release the token if `side` holds it
    pub fn release_lock(&mut self, side: PanelSide) {
        if self.locked == Some(side) {
            debug!(%side, "lock released");
            self.locked = None;
        }
    }

    /// True while a different side holds the token
    pub fn locked_by_other(&self, side: PanelSide) -> bool {
        self.locked.is_some_and(|holder| holder != side)
    }

    pub fn locked_panel(&self) -> LockedPanel {
        self.locked
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// Replace one panel's overrides and re-resolve it
    pub fn set_panel_options(&mut self, side: PanelSide, overrides: SwipeBarOptions) {
        *self.overrides.get_mut(side) = overrides;
        self.reresolve(side);
    }

    /// Merge into the process-wide defaults and re-resolve every panel
    pub fn set_global_options(&mut self, options: &SwipeBarOptions) {
        self.global_overrides = self.global_overrides.merge(options);
        self.defaults = DefaultOptions::from_overrides(&self.global_overrides);
        for side in PanelSide::ALL {
            self.reresolve(side);
        }
    }

    fn reresolve(&mut self, side: PanelSide) {
        let resolved = resolve(side, self.overrides.get(side), &self.defaults);
        let panel = self.layout.panel_mut(side);
        if panel.options != resolved {
            debug!(%side, "options re-resolved");
            panel.options = resolved;
        }
    }

    pub fn defaults(&self) -> &DefaultOptions {
        &self.defaults
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn panel(&self, side: PanelSide) -> &Panel {
        self.layout.panel(side)
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn state(&self, side: PanelSide) -> PanelState {
        self.layout.panel(side).state
    }

    pub fn is_open(&self, side: PanelSide) -> bool {
        self.layout.panel(side).is_open()
    }

    /// Bottom panel anchor
    pub fn anchor(&self) -> PanelState {
        self.layout.bottom.state
    }

    pub fn drag_offset(&self, side: PanelSide) -> Option<f32> {
        self.layout.panel(side).drag_offset
    }

    pub fn options(&self, side: PanelSide) -> &EffectiveOptions {
        &self.layout.panel(side).options
    }

    /// Backdrop is shown behind an open panel when enabled
    pub fn overlay_visible(&self, side: PanelSide) -> bool {
        let panel = self.layout.panel(side);
        panel.options.show_overlay && panel.is_open()
    }

    /// Toggle button is shown while closed, or while open without a backdrop
    pub fn toggle_visible(&self, side: PanelSide) -> bool {
        let panel = self.layout.panel(side);
        panel.options.show_toggle && (!panel.is_open() || !panel.options.show_overlay)
    }

    /// Page scroll is locked while any panel is open
    pub fn scroll_locked(&self) -> bool {
        self.layout.any_open()
    }
}
