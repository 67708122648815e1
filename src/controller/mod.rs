//! Drag controllers - turn raw input into panel actions
//!
//! One controller per panel. They share the gesture lifecycle
//! (start gating, activation threshold, live offsets, commit on release)
//! and differ only in their `AxisBehavior`: which coordinate they follow,
//! where their edge region is, how a displacement maps onto a live offset,
//! and which state a released gesture commits to.

mod bottom;
mod horizontal;

pub use bottom::BottomEdge;
pub use horizontal::{LeftEdge, RightEdge};

use tracing::{debug, trace};

use crate::commands::Cmd;
use crate::coordinator::Coordinator;
use crate::gesture::{
    find_changed_touch, has_tracked_touch_ended, DragTracker, InputEvent, InputSource,
    PointerButton, Viewport,
};
use crate::options::EffectiveOptions;
use crate::panel::{Axis, PanelSide, PanelState};

/// Clamp without panicking when `lo > hi`
pub(crate) fn clamp_px(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

/// State a released gesture settles into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// `Coordinator::open` (bottom may land on its mid-anchor)
    Open,
    /// Bottom panel all the way open
    OpenFully,
    /// Bottom panel at its mid-anchor
    MidAnchor,
    Close,
}

/// Samples available when a gesture ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEnd {
    /// Axis coordinate where the gesture started
    pub start: f32,
    /// Last recorded sample
    pub current: f32,
    /// Sample before `current`
    pub prev: f32,
    /// Whether the gesture started inside the edge region
    pub from_edge: bool,
    /// Panel state at release
    pub state: PanelState,
}

impl GestureEnd {
    /// Raw displacement from the origin, without activation compensation
    pub fn displacement(&self) -> f32 {
        self.current - self.start
    }
}

/// Per-panel geometry and commit rules
pub trait AxisBehavior {
    fn side(&self) -> PanelSide;

    /// Coordinate this panel follows
    fn axis_value(&self, x: f32, y: f32) -> f32 {
        match self.side().axis() {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    /// Whether `(x, y)` lies in the strip a closed panel can be pulled from
    fn in_edge_region(
        &self,
        x: f32,
        y: f32,
        viewport: Viewport,
        options: &EffectiveOptions,
    ) -> bool;

    /// Whether a gesture may start while the panel is closed
    fn allows_closed_start(&self, options: &EffectiveOptions) -> bool {
        options.swipe_to_open
    }

    /// Live translation for a displacement along the axis
    fn live_offset(&self, state: PanelState, displacement: f32, options: &EffectiveOptions) -> f32;

    /// Target state for a released gesture
    fn commit(&self, end: &GestureEnd, options: &EffectiveOptions) -> Commit;
}

/// Whether a controller is listening for input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subscription {
    #[default]
    Detached,
    Attached,
}

/// Gesture state machine for one panel
#[derive(Debug, Clone, Default)]
pub struct DragController<B> {
    behavior: B,
    tracker: DragTracker,
    subscription: Subscription,
}

impl<B: AxisBehavior> DragController<B> {
    pub fn new(behavior: B) -> Self {
        Self {
            behavior,
            tracker: DragTracker::default(),
            subscription: Subscription::Detached,
        }
    }

    pub fn side(&self) -> PanelSide {
        self.behavior.side()
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn tracker(&self) -> &DragTracker {
        &self.tracker
    }

    pub fn is_attached(&self) -> bool {
        self.subscription == Subscription::Attached
    }

    /// Attach or detach according to viewport size, `disabled`, and the
    /// exclusivity token
    ///
    /// Detaching drops any live gesture. An activated one is cancelled so
    /// its offset and token do not leak.
    pub fn sync_subscription(&mut self, coordinator: &mut Coordinator, viewport: Viewport) -> Cmd {
        let side = self.side();
        let options = coordinator.options(side);
        let should_listen = viewport.is_small_screen(options.media_query_width)
            && !options.disabled
            && !coordinator.locked_by_other(side);

        match (self.subscription, should_listen) {
            (Subscription::Detached, true) => {
                debug!(%side, "controller attached");
                self.subscription = Subscription::Attached;
                Cmd::None
            }
            (Subscription::Attached, false) => {
                debug!(%side, "controller detached");
                self.subscription = Subscription::Detached;
                self.cancel(coordinator)
            }
            _ => Cmd::None,
        }
    }

    /// Feed one input event through the gesture state machine
    pub fn handle_input(
        &mut self,
        coordinator: &mut Coordinator,
        viewport: Viewport,
        event: &InputEvent,
    ) -> Cmd {
        if !self.is_attached() || coordinator.locked_by_other(self.side()) {
            return Cmd::None;
        }

        match event {
            InputEvent::PointerDown {
                x,
                y,
                button,
                target,
            } => {
                if target.is_editable() || *button != PointerButton::Primary {
                    return Cmd::None;
                }
                self.start(coordinator, viewport, *x, *y, None, InputSource::Mouse);
                Cmd::None
            }
            InputEvent::PointerMove { x, y } if self.tracker.is_tracking(InputSource::Mouse) => {
                self.drag_move(coordinator, viewport, *x, *y)
            }
            InputEvent::PointerUp if self.tracker.is_tracking(InputSource::Mouse) => {
                self.drag_end(coordinator, viewport)
            }
            InputEvent::PointerCancel if self.tracker.is_tracking(InputSource::Mouse) => {
                self.cancel(coordinator)
            }
            InputEvent::TouchStart { changed, target } => {
                if target.is_editable() {
                    return Cmd::None;
                }
                if let Some(touch) = changed.first() {
                    self.start(
                        coordinator,
                        viewport,
                        touch.x,
                        touch.y,
                        Some(touch.id),
                        InputSource::Touch,
                    );
                }
                Cmd::None
            }
            InputEvent::TouchMove { changed } if self.tracker.is_tracking(InputSource::Touch) => {
                match find_changed_touch(changed, self.tracker.tracked_touch_id()) {
                    Some(touch) => {
                        let (x, y) = (touch.x, touch.y);
                        self.drag_move(coordinator, viewport, x, y)
                    }
                    None => Cmd::None,
                }
            }
            InputEvent::TouchEnd { changed } if self.tracker.is_tracking(InputSource::Touch) => {
                if has_tracked_touch_ended(changed, self.tracker.tracked_touch_id()) {
                    self.drag_end(coordinator, viewport)
                } else {
                    Cmd::None
                }
            }
            InputEvent::TouchCancel if self.tracker.is_tracking(InputSource::Touch) => {
                self.cancel(coordinator)
            }
            _ => Cmd::None,
        }
    }

    fn start(
        &mut self,
        coordinator: &Coordinator,
        viewport: Viewport,
        x: f32,
        y: f32,
        touch_id: Option<u64>,
        source: InputSource,
    ) {
        let side = self.side();
        if self.tracker.is_live() {
            trace!(%side, "start ignored, gesture already live");
            return;
        }

        let panel = coordinator.panel(side);
        let open = panel.is_open();
        let options = &panel.options;

        if open && !options.swipe_to_close {
            return;
        }
        if !open && !self.behavior.allows_closed_start(options) {
            return;
        }
        if open || self.behavior.in_edge_region(x, y, viewport, options) {
            let axis_value = self.behavior.axis_value(x, y);
            self.tracker.start(x, y, axis_value, touch_id, source);
            trace!(%side, x, y, ?source, "gesture started");
        }
    }

    fn drag_move(
        &mut self,
        coordinator: &mut Coordinator,
        viewport: Viewport,
        x: f32,
        y: f32,
    ) -> Cmd {
        let side = self.side();
        let Some(gesture) = self.tracker.gesture else {
            return Cmd::None;
        };

        let options = coordinator.options(side).clone();
        let value = self.behavior.axis_value(x, y);
        let start = self.behavior.axis_value(gesture.start_x, gesture.start_y);
        let displacement = value - start;

        if !gesture.is_activated {
            if displacement.abs() < options.drag_activation_delta_px {
                return Cmd::None;
            }
            if !coordinator.acquire_lock(side) {
                debug!(%side, "activation refused, another panel holds the lock");
                self.tracker.reset();
                return Cmd::None;
            }
            if let Some(g) = self.tracker.gesture.as_mut() {
                g.is_activated = true;
            }
            debug!(%side, displacement, "gesture activated");
        }

        self.tracker.record(value);

        let state = coordinator.state(side);
        let still_valid = state.is_open()
            || self
                .behavior
                .in_edge_region(gesture.start_x, gesture.start_y, viewport, &options);
        if !still_valid {
            debug!(%side, ?state, "gesture abandoned, panel no longer draggable");
            self.tracker.reset();
            coordinator.release_lock(side);
            return coordinator.set_drag_offset(side, None);
        }

        let offset = self.behavior.live_offset(state, displacement, &options);
        Cmd::batch(vec![
            Cmd::PreventDefault,
            coordinator.set_drag_offset(side, Some(offset)),
        ])
    }

    fn drag_end(&mut self, coordinator: &mut Coordinator, viewport: Viewport) -> Cmd {
        let side = self.side();
        let Some(gesture) = self.tracker.gesture else {
            return Cmd::None;
        };

        if !gesture.is_activated {
            trace!(%side, "released below activation threshold");
            self.tracker.reset();
            return Cmd::None;
        }

        let options = coordinator.options(side).clone();
        let start = self.behavior.axis_value(gesture.start_x, gesture.start_y);
        let end = GestureEnd {
            start,
            current: self.tracker.current.unwrap_or(start),
            prev: self.tracker.prev.unwrap_or(start),
            from_edge: self
                .behavior
                .in_edge_region(gesture.start_x, gesture.start_y, viewport, &options),
            state: coordinator.state(side),
        };
        self.tracker.reset();

        let commit = self.behavior.commit(&end, &options);
        debug!(%side, ?commit, from = ?end.state, "gesture committed");

        let action = match commit {
            Commit::Open => coordinator.open(side),
            Commit::OpenFully => coordinator.open_fully(side),
            Commit::MidAnchor => coordinator.open_to_mid_anchor(side),
            Commit::Close => coordinator.close(side),
        };
        Cmd::batch(vec![action, coordinator.set_drag_offset(side, None)])
    }

    /// Abort the live gesture
    ///
    /// An activated gesture releases its token and live offset; one that
    /// never activated acquired nothing and is dropped silently.
    fn cancel(&mut self, coordinator: &mut Coordinator) -> Cmd {
        let side = self.side();
        if !self.tracker.is_live() {
            return Cmd::None;
        }

        let activated = self.tracker.is_activated();
        self.tracker.reset();
        if !activated {
            trace!(%side, "unactivated gesture dropped");
            return Cmd::None;
        }

        debug!(%side, "gesture cancelled");
        coordinator.release_lock(side);
        coordinator.set_drag_offset(side, None)
    }
}

/// The three panel controllers, in dispatch order
#[derive(Debug, Clone)]
pub struct Controllers {
    pub left: DragController<LeftEdge>,
    pub right: DragController<RightEdge>,
    pub bottom: DragController<BottomEdge>,
}

impl Default for Controllers {
    fn default() -> Self {
        Self {
            left: DragController::new(LeftEdge),
            right: DragController::new(RightEdge),
            bottom: DragController::new(BottomEdge),
        }
    }
}

impl Controllers {
    /// Dispatch one event to every attached controller: left, right, bottom
    pub fn handle_input(
        &mut self,
        coordinator: &mut Coordinator,
        viewport: Viewport,
        event: &InputEvent,
    ) -> Cmd {
        Cmd::batch(vec![
            self.left.handle_input(coordinator, viewport, event),
            self.right.handle_input(coordinator, viewport, event),
            self.bottom.handle_input(coordinator, viewport, event),
        ])
    }

    /// Re-evaluate every controller's subscription
    pub fn sync(&mut self, coordinator: &mut Coordinator, viewport: Viewport) -> Cmd {
        Cmd::batch(vec![
            self.left.sync_subscription(coordinator, viewport),
            self.right.sync_subscription(coordinator, viewport),
            self.bottom.sync_subscription(coordinator, viewport),
        ])
    }

    pub fn is_attached(&self, side: PanelSide) -> bool {
        match side {
            PanelSide::Left => self.left.is_attached(),
            PanelSide::Right => self.right.is_attached(),
            PanelSide::Bottom => self.bottom.is_attached(),
        }
    }

    pub fn is_live(&self, side: PanelSide) -> bool {
        match side {
            PanelSide::Left => self.left.tracker().is_live(),
            PanelSide::Right => self.right.tracker().is_live(),
            PanelSide::Bottom => self.bottom.tracker().is_live(),
        }
    }
}
