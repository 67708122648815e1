//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. After every
//! message the controllers' subscriptions are re-evaluated, so a panel
//! opening or the viewport crossing the breakpoint attaches and detaches
//! controllers before the next event arrives.

mod input;
mod options;
mod panel;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SwipeModel;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use input::update_input;
pub use options::update_options;
pub use panel::update_panel;
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut SwipeModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut SwipeModel, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Input(event) => input::update_input(model, &event),
        Msg::Options(m) => options::update_options(model, m),
        Msg::Viewport(m) => viewport::update_viewport(model, m),
    };

    let sync = model.sync_subscriptions();
    Cmd::batch(vec![result.unwrap_or_default(), sync]).into_option()
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel state and logs diffs. Pointer and touch
/// moves are too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced(model: &mut SwipeModel, msg: Msg) -> Option<Cmd> {
    use crate::gesture::InputEvent;

    let is_noisy = matches!(
        &msg,
        Msg::Input(InputEvent::PointerMove { .. } | InputEvent::TouchMove { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = PanelSnapshot::from_model(model);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = PanelSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }
    after.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::Open(Left)`
/// - `Viewport::Resize { width: 390.0, height: 844.0 }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Input(e) => format!("Input::{:?}", e),
        Msg::Options(m) => format!("Options::{:?}", m),
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
    }
}
