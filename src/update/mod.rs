//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

pub mod layout;
mod panel;
mod splitter;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::Workspace;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use layout::update_layout;
pub use panel::update_panel;
pub use splitter::update_splitter;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut Workspace, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut Workspace, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(id, m) => panel::update_panel(model, id, m),
        Msg::Splitter(id, m) => splitter::update_splitter(model, id, m),
        Msg::Layout(m) => layout::update_layout(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Pointer moves and animation frames are too frequent to log per message.
#[cfg(debug_assertions)]
fn update_traced(model: &mut Workspace, msg: Msg) -> Option<Cmd> {
    use crate::messages::{PanelMsg, SplitterMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Panel(_, PanelMsg::UpdateResize(_))
            | Msg::Splitter(_, SplitterMsg::PointerMove(_) | SplitterMsg::AnimationFrame)
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_workspace(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = LayoutSnapshot::from_workspace(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "layout", %diff, "state changed");
    }

    model.assert_invariants();

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Panel(panel-1)::SelectTab(2)`
/// - `Splitter(splitter-1)::KeyDown(..)`
/// - `Layout::SetRtl(true)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(id, m) => format!("Panel({})::{:?}", id, m),
        Msg::Splitter(id, m) => format!("Splitter({})::{:?}", id, m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
    }
}
