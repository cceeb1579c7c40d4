//! Layout update handlers
//!
//! Membership changes and coordinator options. Removing a panel or
//! splitter mid-gesture still delivers its final size event.

use crate::commands::{CaptureTarget, Cmd};
use crate::events::{Event, LayoutEvent};
use crate::messages::LayoutMsg;
use crate::model::workspace::layout_cmds;
use crate::model::Workspace;

use super::splitter::finish;

/// Update function for layout messages
pub fn update_layout(model: &mut Workspace, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::DetachPanel(id) => {
            let mut cmds = Vec::new();
            let Some(panel) = model.layout.panel_mut(id) else {
                tracing::warn!(panel = %id, "detach of unknown panel ignored");
                return None;
            };
            if let Some(event) = panel.teardown() {
                cmds.push(Cmd::Emit(Event::panel(id, event)));
                cmds.push(Cmd::ReleaseCapture(CaptureTarget::Panel(id)));
            }
            match model.layout.detach_panel(id) {
                Ok((_, events)) => cmds.extend(layout_cmds(events)),
                Err(e) => tracing::warn!("{}", e),
            }
            cmds.push(Cmd::Redraw);
            Cmd::batch(cmds)
        }

        LayoutMsg::RemoveSplitter(id) => match model.remove_splitter(id) {
            Ok(mut splitter) => {
                let final_cmd = finish(id, splitter.teardown());
                Cmd::batch(final_cmd.into_iter().chain([Cmd::Redraw]).collect())
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        },

        LayoutMsg::SetGlobalAnchored(anchored) => {
            relayout(model.layout.set_global_anchored(anchored))
        }
        LayoutMsg::SetGlobalAnchoredPushMode(mode) => {
            relayout(model.layout.set_global_anchored_push_mode(mode))
        }
        LayoutMsg::SetIncludeCollapsedStrip(include) => {
            relayout(model.layout.set_include_collapsed_strip(include))
        }
        LayoutMsg::SetManageCrossAxisClearance(enabled) => {
            relayout(model.layout.set_manage_cross_axis_clearance(enabled))
        }

        LayoutMsg::SetRtl(rtl) => {
            model.set_rtl(rtl);
            Some(Cmd::Redraw)
        }
    }
}

fn relayout(events: Vec<LayoutEvent>) -> Option<Cmd> {
    let mut cmds = layout_cmds(events);
    cmds.push(Cmd::Redraw);
    Cmd::batch(cmds)
}
