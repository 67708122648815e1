//! Runtime - drives the update loop for a host application
//!
//! `SwipeBar` owns the model, the frame scheduler, and the host's
//! `VisualEffectApplier`. Hosts feed it messages (or call the action
//! helpers) and tick it once per rendering frame:
//!
//! ```text
//! event ──► dispatch(msg) ──► update() ──► Cmd ──► scheduler / applier
//! frame ──► tick()        ──► scheduler ──► applier.install_transition / apply
//! ```

mod winit_adapter;

pub use winit_adapter::{
    pointer_button_from_winit, touch_event_from_winit, WinitInputAdapter,
};

use crate::commands::Cmd;
use crate::config::SwipeBarConfig;
use crate::coordinator::Coordinator;
use crate::effects::{FrameScheduler, VisualEffectApplier};
use crate::gesture::{InputEvent, Viewport};
use crate::messages::{Msg, OptionsMsg, PanelMsg, ViewportMsg};
use crate::model::SwipeModel;
use crate::options::SwipeBarOptions;
use crate::panel::PanelSide;
use crate::update::update;

/// What the host should do with the event it just dispatched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// The event moved a panel; suppress scrolling and text selection
    pub prevent_default: bool,
}

/// A swipeable panel set bound to one host renderer
pub struct SwipeBar<A: VisualEffectApplier> {
    model: SwipeModel,
    scheduler: FrameScheduler,
    applier: A,
}

impl<A: VisualEffectApplier> SwipeBar<A> {
    pub fn new(config: &SwipeBarConfig, viewport: Viewport, applier: A) -> Self {
        Self {
            model: SwipeModel::new(config, viewport),
            scheduler: FrameScheduler::new(),
            applier,
        }
    }

    /// Run one message through `update` and execute the resulting commands
    pub fn dispatch(&mut self, msg: Msg) -> DispatchResult {
        let mut result = DispatchResult::default();
        if let Some(cmd) = update(&mut self.model, msg) {
            self.execute(cmd, &mut result);
        }
        result
    }

    fn execute(&mut self, cmd: Cmd, result: &mut DispatchResult) {
        match cmd {
            Cmd::None => {}
            Cmd::Effect(request) => self.scheduler.schedule(request, &mut self.applier),
            Cmd::PreventDefault => result.prevent_default = true,
            Cmd::ScrollLock(locked) => self.applier.set_scroll_lock(locked),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd, result);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Host actions
    // ------------------------------------------------------------------

    pub fn open(&mut self, side: PanelSide) {
        self.dispatch(Msg::Panel(PanelMsg::Open(side)));
    }

    pub fn open_fully(&mut self, side: PanelSide) {
        self.dispatch(Msg::Panel(PanelMsg::OpenFully(side)));
    }

    pub fn open_to_mid_anchor(&mut self, side: PanelSide) {
        self.dispatch(Msg::Panel(PanelMsg::OpenToMidAnchor(side)));
    }

    pub fn close(&mut self, side: PanelSide) {
        self.dispatch(Msg::Panel(PanelMsg::Close(side)));
    }

    pub fn toggle(&mut self, side: PanelSide) {
        self.dispatch(Msg::Panel(PanelMsg::Toggle(side)));
    }

    pub fn overlay_clicked(&mut self, side: PanelSide) {
        self.dispatch(Msg::Panel(PanelMsg::OverlayClicked(side)));
    }

    pub fn set_drag_offset(&mut self, side: PanelSide, offset: Option<f32>) {
        self.dispatch(Msg::Panel(PanelMsg::SetDragOffset(side, offset)));
    }

    pub fn handle_input(&mut self, event: InputEvent) -> DispatchResult {
        self.dispatch(Msg::Input(event))
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.dispatch(Msg::Viewport(ViewportMsg::Resize { width, height }));
    }

    pub fn set_panel_options(&mut self, side: PanelSide, options: SwipeBarOptions) {
        self.dispatch(Msg::Options(OptionsMsg::SetPanelOptions(side, options)));
    }

    pub fn set_global_options(&mut self, options: SwipeBarOptions) {
        self.dispatch(Msg::Options(OptionsMsg::SetGlobalOptions(options)));
    }

    // ------------------------------------------------------------------
    // Frames
    // ------------------------------------------------------------------

    /// Advance one rendering tick
    pub fn tick(&mut self) {
        self.scheduler.tick(&mut self.applier);
    }

    /// Tick until every pending effect has been applied
    pub fn flush(&mut self) -> u64 {
        self.scheduler.flush(&mut self.applier)
    }

    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn coordinator(&self) -> &Coordinator {
        &self.model.coordinator
    }

    pub fn model(&self) -> &SwipeModel {
        &self.model
    }

    pub fn viewport(&self) -> Viewport {
        self.model.viewport
    }

    pub fn applier(&self) -> &A {
        &self.applier
    }

    pub fn applier_mut(&mut self) -> &mut A {
        &mut self.applier
    }

    pub fn into_applier(self) -> A {
        self.applier
    }
}
