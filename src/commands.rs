//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them; update functions only describe them.

use crate::effects::EffectRequest;

/// Side effects produced by an update
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Hand a panel effect to the frame scheduler
    Effect(EffectRequest),
    /// The input event drove a live gesture; the host should suppress its
    /// default handling (page scroll, text selection)
    PreventDefault,
    /// Lock or unlock page scrolling behind open panels
    ScrollLock(bool),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, dropping no-ops and flattening nested batches
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut flat = Vec::with_capacity(cmds.len());
        for cmd in cmds {
            match cmd {
                Cmd::None => {}
                Cmd::Batch(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Cmd::None,
            1 => flat.pop().unwrap_or_default(),
            _ => Cmd::Batch(flat),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }

    /// Convert to the `Option<Cmd>` form returned by update functions
    pub fn into_option(self) -> Option<Cmd> {
        match self {
            Cmd::None => None,
            other => Some(other),
        }
    }

    /// Check if this command asks the host to suppress default handling
    pub fn prevents_default(&self) -> bool {
        match self {
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::prevents_default),
            _ => false,
        }
    }

    /// Effect requests carried by this command, in execution order
    pub fn effects(&self) -> Vec<&EffectRequest> {
        match self {
            Cmd::Effect(request) => vec![request],
            Cmd::Batch(cmds) => cmds.iter().flat_map(Cmd::effects).collect(),
            _ => Vec::new(),
        }
    }
}
