//! Model - everything the update functions read and write

use crate::commands::Cmd;
use crate::config::SwipeBarConfig;
use crate::controller::Controllers;
use crate::coordinator::Coordinator;
use crate::gesture::Viewport;

/// Engine state: shared panel state, per-panel controllers, viewport
#[derive(Debug, Clone, Default)]
pub struct SwipeModel {
    pub coordinator: Coordinator,
    pub controllers: Controllers,
    pub viewport: Viewport,
}

impl SwipeModel {
    /// Build a model and attach whichever controllers qualify
    pub fn new(config: &SwipeBarConfig, viewport: Viewport) -> Self {
        let mut model = Self {
            coordinator: Coordinator::from_config(config),
            controllers: Controllers::default(),
            viewport,
        };
        model.coordinator.set_viewport(viewport);
        model.sync_subscriptions();
        model
    }

    /// Record a new viewport; the coordinator needs it for `open`
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.coordinator.set_viewport(viewport);
    }

    /// Re-evaluate controller subscriptions against the current state
    pub fn sync_subscriptions(&mut self) -> Cmd {
        self.controllers.sync(&mut self.coordinator, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PanelSide;

    #[test]
    fn test_new_attaches_on_small_screen() {
        let model = SwipeModel::new(&SwipeBarConfig::default(), Viewport::new(390.0, 844.0));
        for side in PanelSide::ALL {
            assert!(model.controllers.is_attached(side));
        }
    }

    #[test]
    fn test_set_viewport_reaches_coordinator() {
        let mut model = SwipeModel::new(&SwipeBarConfig::default(), Viewport::new(390.0, 844.0));
        assert_eq!(model.coordinator.viewport(), Viewport::new(390.0, 844.0));

        model.set_viewport(Viewport::new(1024.0, 768.0));
        assert_eq!(model.viewport, Viewport::new(1024.0, 768.0));
        assert_eq!(model.coordinator.viewport(), Viewport::new(1024.0, 768.0));
    }

    #[test]
    fn test_new_stays_detached_on_wide_screen() {
        let model = SwipeModel::new(&SwipeBarConfig::default(), Viewport::new(1280.0, 800.0));
        for side in PanelSide::ALL {
            assert!(!model.controllers.is_attached(side));
        }
    }
}
