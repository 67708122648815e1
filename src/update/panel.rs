//! Panel action handlers

use crate::commands::Cmd;
use crate::messages::PanelMsg;
use crate::model::SwipeModel;

/// Route a host panel action to the coordinator
pub fn update_panel(model: &mut SwipeModel, msg: PanelMsg) -> Option<Cmd> {
    let coordinator = &mut model.coordinator;
    let cmd = match msg {
        PanelMsg::Open(side) => coordinator.open(side),
        PanelMsg::OpenFully(side) => coordinator.open_fully(side),
        PanelMsg::OpenToMidAnchor(side) => coordinator.open_to_mid_anchor(side),
        PanelMsg::Close(side) => coordinator.close(side),
        PanelMsg::Toggle(side) => coordinator.toggle(side),
        PanelMsg::OverlayClicked(side) => coordinator.overlay_clicked(side),
        PanelMsg::SetDragOffset(side, offset) => coordinator.set_drag_offset(side, offset),
    };
    cmd.into_option()
}
