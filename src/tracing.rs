//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panel=debug` - panel state diffs only
//! - `RUST_LOG=swipebar::controller=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/swipebar/logs/swipebar.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::SwipeModel;
use crate::panel::{PanelSide, PanelState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. The file layer
/// always logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A host may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of one panel for diffing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelInfo {
    pub side: PanelSide,
    pub state: PanelState,
    pub dragging: bool,
    pub attached: bool,
}

/// Lightweight snapshot of every panel plus the lock holder
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSnapshot {
    pub locked: Option<PanelSide>,
    pub panels: [PanelInfo; 3],
}

impl PanelSnapshot {
    pub fn from_model(model: &SwipeModel) -> Self {
        let info = |side: PanelSide| PanelInfo {
            side,
            state: model.coordinator.state(side),
            dragging: model.coordinator.drag_offset(side).is_some(),
            attached: model.controllers.is_attached(side),
        };
        Self {
            locked: model.coordinator.locked_panel(),
            panels: PanelSide::ALL.map(info),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PanelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.locked != other.locked {
            changes.push(format!("lock: {:?} → {:?}", self.locked, other.locked));
        }

        for (before, after) in self.panels.iter().zip(&other.panels) {
            if before.state != after.state {
                changes.push(format!(
                    "{}: {:?} → {:?}",
                    before.side, before.state, after.state
                ));
            }
            if before.dragging != after.dragging {
                let status = if after.dragging { "started" } else { "ended" };
                changes.push(format!("{}: drag {}", before.side, status));
            }
            if before.attached != after.attached {
                let status = if after.attached { "attached" } else { "detached" };
                changes.push(format!("{}: {}", before.side, status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }

    /// Assert panel invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        for panel in &self.panels {
            debug_assert!(
                panel.side == PanelSide::Bottom || panel.state != PanelState::MidAnchor,
                "{} panel reached MidAnchor after {}",
                panel.side,
                context
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self, _context: &str) {}
}
