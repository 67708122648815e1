//! Option change handlers

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::OptionsMsg;
use crate::model::SwipeModel;

/// Apply new overrides; resolved options take effect from the next gesture
pub fn update_options(model: &mut SwipeModel, msg: OptionsMsg) -> Option<Cmd> {
    match msg {
        OptionsMsg::SetPanelOptions(side, overrides) => {
            debug!(%side, "panel options replaced");
            model.coordinator.set_panel_options(side, overrides);
        }
        OptionsMsg::SetGlobalOptions(overrides) => {
            debug!("global options merged");
            model.coordinator.set_global_options(&overrides);
        }
    }
    None
}
