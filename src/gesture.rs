//! Gesture primitives shared by every drag controller
//!
//! Mouse and touch input are normalised into one start/move/end/cancel
//! vocabulary (`InputEvent`). A `DragTracker` holds the ephemeral state of
//! the single gesture a controller may track at a time.

use serde::{Deserialize, Serialize};

/// Which kind of device produced a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Mouse,
    Touch,
}

/// Mouse button for pointer-down events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Other,
}

/// What sits under the point where an input started
///
/// Gestures never start on text-editable elements, so typing and text
/// selection keep working inside panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    #[default]
    Plain,
    Editable,
}

impl TargetKind {
    /// Classify an element by tag name and its `contenteditable` flag
    ///
    /// `input`, `textarea`, and content-editable elements are editable.
    pub fn from_tag(tag: &str, content_editable: bool) -> Self {
        let tag = tag.trim();
        if content_editable
            || tag.eq_ignore_ascii_case("input")
            || tag.eq_ignore_ascii_case("textarea")
        {
            TargetKind::Editable
        } else {
            TargetKind::Plain
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, TargetKind::Editable)
    }
}

/// One contact point reported by a touch event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Unified pointer/touch input, in logical pixels
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        x: f32,
        y: f32,
        button: PointerButton,
        target: TargetKind,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
    /// Pointer interaction lost (e.g. window focus change)
    PointerCancel,
    /// `changed` lists the touches that began with this event
    TouchStart {
        changed: Vec<TouchPoint>,
        target: TargetKind,
    },
    TouchMove {
        changed: Vec<TouchPoint>,
    },
    TouchEnd {
        changed: Vec<TouchPoint>,
    },
    TouchCancel,
}

impl InputEvent {
    /// Source kind this event belongs to
    pub fn source(&self) -> InputSource {
        match self {
            InputEvent::PointerDown { .. }
            | InputEvent::PointerMove { .. }
            | InputEvent::PointerUp
            | InputEvent::PointerCancel => InputSource::Mouse,
            InputEvent::TouchStart { .. }
            | InputEvent::TouchMove { .. }
            | InputEvent::TouchEnd { .. }
            | InputEvent::TouchCancel => InputSource::Touch,
        }
    }
}

/// Viewport size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when the viewport is at or below `breakpoint` wide
    pub fn is_small_screen(&self, breakpoint: f32) -> bool {
        self.width <= breakpoint
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(390.0, 844.0)
    }
}

/// Ephemeral state of one tracked gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    pub start_x: f32,
    pub start_y: f32,
    /// Tracked touch identifier, `None` for mouse input
    pub touch_id: Option<u64>,
    pub source: InputSource,
    /// Set once the movement threshold has been crossed
    pub is_activated: bool,
}

/// Per-controller gesture slot plus the last two samples along its axis
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    pub gesture: Option<GestureState>,
    pub current: Option<f32>,
    pub prev: Option<f32>,
}

impl DragTracker {
    /// Begin tracking a gesture at `(x, y)`
    ///
    /// `axis_value` seeds both samples so the first increment is measured
    /// from the origin.
    pub fn start(
        &mut self,
        x: f32,
        y: f32,
        axis_value: f32,
        touch_id: Option<u64>,
        source: InputSource,
    ) {
        self.gesture = Some(GestureState {
            start_x: x,
            start_y: y,
            touch_id,
            source,
            is_activated: false,
        });
        self.current = Some(axis_value);
        self.prev = Some(axis_value);
    }

    /// Shift the current sample into `prev` and record a new one
    pub fn record(&mut self, axis_value: f32) {
        self.prev = self.current;
        self.current = Some(axis_value);
    }

    /// Drop all gesture state
    pub fn reset(&mut self) {
        self.gesture = None;
        self.current = None;
        self.prev = None;
    }

    pub fn is_live(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn is_activated(&self) -> bool {
        self.gesture.is_some_and(|g| g.is_activated)
    }

    /// Whether the live gesture came from `source`
    pub fn is_tracking(&self, source: InputSource) -> bool {
        self.gesture.is_some_and(|g| g.source == source)
    }

    pub fn tracked_touch_id(&self) -> Option<u64> {
        self.gesture.and_then(|g| g.touch_id)
    }
}

/// Find the touch continuing the tracked gesture
///
/// With no tracked identifier the first changed touch is taken.
pub fn find_changed_touch(changed: &[TouchPoint], tracked_id: Option<u64>) -> Option<&TouchPoint> {
    changed
        .iter()
        .find(|touch| tracked_id.is_none() || Some(touch.id) == tracked_id)
}

/// Whether the tracked touch is among the touches that just ended
pub fn has_tracked_touch_ended(changed: &[TouchPoint], tracked_id: Option<u64>) -> bool {
    changed.iter().any(|touch| Some(touch.id) == tracked_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_targets() {
        assert!(TargetKind::from_tag("input", false).is_editable());
        assert!(TargetKind::from_tag("TEXTAREA", false).is_editable());
        assert!(TargetKind::from_tag("div", true).is_editable());
        assert!(!TargetKind::from_tag("div", false).is_editable());
        assert!(!TargetKind::from_tag("button", false).is_editable());
    }

    #[test]
    fn test_find_changed_touch_by_id() {
        let touches = [TouchPoint::new(1, 10.0, 10.0), TouchPoint::new(2, 50.0, 60.0)];
        assert_eq!(find_changed_touch(&touches, Some(2)).map(|t| t.id), Some(2));
        assert!(find_changed_touch(&touches, Some(7)).is_none());
    }

    #[test]
    fn test_find_changed_touch_untracked_takes_first() {
        let touches = [TouchPoint::new(4, 10.0, 10.0), TouchPoint::new(5, 50.0, 60.0)];
        assert_eq!(find_changed_touch(&touches, None).map(|t| t.id), Some(4));
        assert!(find_changed_touch(&[], None).is_none());
    }

    #[test]
    fn test_has_tracked_touch_ended() {
        let touches = [TouchPoint::new(3, 0.0, 0.0)];
        assert!(has_tracked_touch_ended(&touches, Some(3)));
        assert!(!has_tracked_touch_ended(&touches, Some(1)));
        assert!(!has_tracked_touch_ended(&touches, None));
    }

    #[test]
    fn test_tracker_samples() {
        let mut tracker = DragTracker::default();
        tracker.start(10.0, 400.0, 10.0, Some(1), InputSource::Touch);

        assert!(tracker.is_live());
        assert!(!tracker.is_activated());
        assert!(tracker.is_tracking(InputSource::Touch));
        assert!(!tracker.is_tracking(InputSource::Mouse));
        assert_eq!(tracker.current, Some(10.0));
        assert_eq!(tracker.prev, Some(10.0));

        tracker.record(40.0);
        tracker.record(35.0);
        assert_eq!(tracker.prev, Some(40.0));
        assert_eq!(tracker.current, Some(35.0));

        tracker.reset();
        assert!(!tracker.is_live());
        assert_eq!(tracker.current, None);
    }

    #[test]
    fn test_small_screen_is_inclusive() {
        let viewport = Viewport::new(640.0, 900.0);
        assert!(viewport.is_small_screen(640.0));
        assert!(!viewport.is_small_screen(639.0));
    }

    #[test]
    fn test_event_source() {
        assert_eq!(InputEvent::PointerUp.source(), InputSource::Mouse);
        assert_eq!(InputEvent::TouchCancel.source(), InputSource::Touch);
    }
}
