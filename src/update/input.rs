//! Raw input handlers

use crate::commands::Cmd;
use crate::gesture::InputEvent;
use crate::model::SwipeModel;

/// Feed one input event to the controllers, left then right then bottom
pub fn update_input(model: &mut SwipeModel, event: &InputEvent) -> Option<Cmd> {
    model
        .controllers
        .handle_input(&mut model.coordinator, model.viewport, event)
        .into_option()
}
