//! Viewport handlers

use tracing::debug;

use crate::commands::Cmd;
use crate::gesture::Viewport;
use crate::messages::ViewportMsg;
use crate::model::SwipeModel;

pub fn update_viewport(model: &mut SwipeModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::Resize { width, height } => {
            debug!(width, height, "viewport resized");
            model.set_viewport(Viewport::new(width, height));
        }
    }
    None
}
