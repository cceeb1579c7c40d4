//! Panel update handlers
//!
//! Routes panel messages to the addressed `DockPanel`, then feeds every
//! event it produced to the layout coordinator so offsets stay current.

use crate::commands::{CaptureTarget, Cmd};
use crate::events::{Event, PanelEvent};
use crate::messages::PanelMsg;
use crate::model::workspace::layout_cmds;
use crate::model::Workspace;
use crate::panel::PanelId;

/// Update function for panel messages
pub fn update_panel(model: &mut Workspace, id: PanelId, msg: PanelMsg) -> Option<Cmd> {
    let Some(panel) = model.layout.panel_mut(id) else {
        tracing::warn!(panel = %id, ?msg, "message for unknown panel ignored");
        return None;
    };

    let mut capture = None;
    let events: Vec<PanelEvent> = match msg {
        PanelMsg::Expand => panel.expand().into_iter().collect(),
        PanelMsg::Collapse => panel.collapse().into_iter().collect(),
        PanelMsg::Toggle => panel.toggle().into_iter().collect(),

        PanelMsg::SelectTab(index) => panel.select_tab(index),
        PanelMsg::NavigateTab(step) => {
            panel.navigate_tab(step);
            return Some(Cmd::Redraw);
        }
        PanelMsg::FirstTab => {
            panel.first_tab();
            return Some(Cmd::Redraw);
        }
        PanelMsg::LastTab => {
            panel.last_tab();
            return Some(Cmd::Redraw);
        }
        PanelMsg::TabStripKey { key, index } => {
            let before = panel.active_tab_index();
            let events = panel.tab_strip_key(key, index)?;
            if events.is_empty() && panel.active_tab_index() == before {
                return None;
            }
            events
        }
        PanelMsg::SetProjectedTabs(tabs) => {
            panel.set_projected_tabs(tabs);
            return Some(Cmd::Redraw);
        }
        PanelMsg::SetTabs(tabs) => {
            panel.set_tabs(tabs);
            return Some(Cmd::Redraw);
        }

        PanelMsg::BeginResize(pointer) => {
            if !panel.begin_resize(pointer) {
                return None;
            }
            return Some(Cmd::AcquireCapture(CaptureTarget::Panel(id)));
        }
        PanelMsg::UpdateResize(pointer) => panel.update_resize(pointer).into_iter().collect(),
        PanelMsg::EndResize => {
            let events: Vec<_> = panel.end_resize().into_iter().collect();
            if !events.is_empty() {
                capture = Some(Cmd::ReleaseCapture(CaptureTarget::Panel(id)));
            }
            events
        }
        PanelMsg::KeyboardResize { direction, step } => {
            panel.keyboard_resize(direction, step).into_iter().collect()
        }
        PanelMsg::HostKey(press) => panel.host_key(press).into_iter().collect(),
        PanelMsg::SetInitialSize(size) => {
            if !panel.set_initial_size(size) {
                return None;
            }
            let layout_events = model.layout.refresh_panel(id);
            let mut cmds = layout_cmds(layout_events);
            cmds.push(Cmd::Redraw);
            return Cmd::batch(cmds);
        }

        PanelMsg::BackdropClick => panel.backdrop_click(),
    };

    Cmd::batch(emit_panel_events(model, id, events, capture))
}

/// Emit panel events in order, each followed by the layout events it caused
pub(crate) fn emit_panel_events(
    model: &mut Workspace,
    id: PanelId,
    events: Vec<PanelEvent>,
    capture: Option<Cmd>,
) -> Vec<Cmd> {
    if events.is_empty() {
        return capture.into_iter().collect();
    }

    let mut cmds = Vec::with_capacity(events.len() * 2 + 2);
    for event in events {
        let layout_events = model.layout.observe(id, &event);
        cmds.push(Cmd::Emit(Event::panel(id, event)));
        cmds.extend(layout_cmds(layout_events));
    }
    cmds.extend(capture);
    cmds.push(Cmd::Redraw);
    cmds
}
