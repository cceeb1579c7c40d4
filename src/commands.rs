//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::events::Event;
use crate::messages::Msg;
use crate::panel::PanelId;
use crate::splitter::SplitterId;

/// Owner of a scoped pointer/keyboard capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaptureTarget {
    Panel(PanelId),
    Splitter(SplitterId),
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the workspace
    Redraw,
    /// Publish an event to subscribers
    Emit(Event),
    /// Route pointer input to this target until released
    AcquireCapture(CaptureTarget),
    ReleaseCapture(CaptureTarget),
    /// Ask for one animation frame on behalf of a splitter
    RequestAnimationFrame(SplitterId),
    /// Dispatch a message at the next microtask boundary
    Defer(Box<Msg>),
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    ///
    /// Empty batches collapse to `None` and single commands are unwrapped.
    pub fn batch(mut cmds: Vec<Cmd>) -> Option<Self> {
        cmds.retain(|c| *c != Cmd::None);
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    pub fn defer(msg: Msg) -> Self {
        Cmd::Defer(Box::new(msg))
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Events and captures carry no visual change of their own
            Cmd::Emit(_)
            | Cmd::AcquireCapture(_)
            | Cmd::ReleaseCapture(_)
            | Cmd::RequestAnimationFrame(_)
            | Cmd::Defer(_) => false,
        }
    }

    /// Events this command would publish, in order
    pub fn events(&self) -> Vec<&Event> {
        match self {
            Cmd::Emit(event) => vec![event],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.events()).collect(),
            _ => Vec::new(),
        }
    }
}
