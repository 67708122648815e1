//! swipebar - gesture-to-state engine for swipeable panels
//!
//! Three panels (left, right, bottom) open and close through touch or mouse
//! drags from the screen edge, toggle buttons, backdrop clicks, or host
//! calls. The engine follows the Elm Architecture: input and host actions
//! become `Msg`s, `update` mutates the `SwipeModel` and returns `Cmd`s, and
//! the runtime hands visual effects to a host-provided renderer.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod coordinator;
pub mod effects;
pub mod gesture;
pub mod messages;
pub mod model;
pub mod options;
pub mod panel;
pub mod runtime;
pub mod scenario;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SwipeBarConfig;
pub use coordinator::Coordinator;
pub use effects::{EffectRequest, VisualEffectApplier};
pub use gesture::{InputEvent, Viewport};
pub use messages::Msg;
pub use model::SwipeModel;
pub use options::{EffectiveOptions, SwipeBarOptions};
pub use panel::{PanelSide, PanelState};
pub use runtime::SwipeBar;
