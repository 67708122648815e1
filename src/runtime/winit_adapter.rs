//! Adapter to convert winit window events to engine messages
//!
//! winit reports physical pixels; the engine works in logical pixels, so
//! every position is divided by the window scale factor on the way in.

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use crate::gesture::{InputEvent, PointerButton, TargetKind, TouchPoint};
use crate::messages::{Msg, ViewportMsg};

/// Map a winit mouse button to the engine's button kind
pub fn pointer_button_from_winit(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back | MouseButton::Forward | MouseButton::Other(_) => PointerButton::Other,
    }
}

/// Convert one winit touch into a touch event
///
/// winit delivers one touch per event, so `changed` always holds one point.
pub fn touch_event_from_winit(
    phase: TouchPhase,
    id: u64,
    location: PhysicalPosition<f64>,
    scale_factor: f64,
    target: TargetKind,
) -> InputEvent {
    let logical = location.to_logical::<f64>(scale_factor);
    let changed = vec![TouchPoint::new(id, logical.x as f32, logical.y as f32)];
    match phase {
        TouchPhase::Started => InputEvent::TouchStart { changed, target },
        TouchPhase::Moved => InputEvent::TouchMove { changed },
        TouchPhase::Ended => InputEvent::TouchEnd { changed },
        TouchPhase::Cancelled => InputEvent::TouchCancel,
    }
}

/// Tracks what winit only reports incrementally (cursor position, scale)
#[derive(Debug, Clone)]
pub struct WinitInputAdapter {
    scale_factor: f64,
    /// Last cursor position in logical pixels
    cursor: Option<(f32, f32)>,
}

impl Default for WinitInputAdapter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl WinitInputAdapter {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            cursor: None,
        }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Record a cursor position and produce the matching move event
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputEvent {
        let logical = position.to_logical::<f64>(self.scale_factor);
        let (x, y) = (logical.x as f32, logical.y as f32);
        self.cursor = Some((x, y));
        InputEvent::PointerMove { x, y }
    }

    /// Mouse press or release at the last known cursor position
    ///
    /// Presses before any cursor movement are dropped; there is no origin
    /// to start a gesture from.
    pub fn mouse_input(
        &self,
        state: ElementState,
        button: MouseButton,
        target: TargetKind,
    ) -> Option<InputEvent> {
        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor?;
                Some(InputEvent::PointerDown {
                    x,
                    y,
                    button: pointer_button_from_winit(button),
                    target,
                })
            }
            ElementState::Released if button == MouseButton::Left => Some(InputEvent::PointerUp),
            ElementState::Released => None,
        }
    }

    /// Viewport resize in logical pixels
    pub fn resized(&self, size: PhysicalSize<u32>) -> Msg {
        let logical = size.to_logical::<f64>(self.scale_factor);
        Msg::Viewport(ViewportMsg::Resize {
            width: logical.width as f32,
            height: logical.height as f32,
        })
    }

    /// Losing focus cancels whatever gesture is live, touch or mouse
    pub fn focus_lost(&mut self) -> Vec<Msg> {
        self.cursor = None;
        vec![
            Msg::Input(InputEvent::PointerCancel),
            Msg::Input(InputEvent::TouchCancel),
        ]
    }

    /// Translate a window event into zero or more messages
    ///
    /// `target` classifies whatever sits under the pointer, as reported by
    /// the host's own hit-testing.
    pub fn translate(&mut self, event: &WindowEvent, target: TargetKind) -> Vec<Msg> {
        match event {
            WindowEvent::Touch(touch) => vec![Msg::Input(touch_event_from_winit(
                touch.phase,
                touch.id,
                touch.location,
                self.scale_factor,
                target,
            ))],
            WindowEvent::CursorMoved { position, .. } => {
                vec![Msg::Input(self.cursor_moved(*position))]
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                Vec::new()
            }
            WindowEvent::MouseInput { state, button, .. } => self
                .mouse_input(*state, *button, target)
                .map(Msg::Input)
                .into_iter()
                .collect(),
            WindowEvent::Focused(false) => self.focus_lost(),
            WindowEvent::Resized(size) => vec![self.resized(*size)],
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
