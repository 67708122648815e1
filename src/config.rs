//! Panel configuration persistence
//!
//! Reads provider-wide defaults and per-panel overrides from
//! `~/.config/swipebar/config.yaml`:
//!
//! ```yaml
//! defaults:
//!   transition_ms: 250
//! bottom:
//!   sidebar_height_px: 600
//!   mid_anchor_point: true
//!   swipe_to_open: false
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::options::SwipeBarOptions;
use crate::panel::PanelSide;

/// Option overrides for the provider and each panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwipeBarConfig {
    /// Overrides the built-in defaults for every panel
    pub defaults: SwipeBarOptions,
    pub left: SwipeBarOptions,
    pub right: SwipeBarOptions,
    pub bottom: SwipeBarOptions,
}

impl SwipeBarConfig {
    /// Load config from disk, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overrides for one panel
    pub fn panel(&self, side: PanelSide) -> &SwipeBarOptions {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
            PanelSide::Bottom => &self.bottom,
        }
    }

    /// Save config to disk
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
