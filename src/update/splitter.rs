//! Splitter update handlers
//!
//! Pointer input acquires a capture for the gesture's lifetime. Moves only
//! request frames; the partition changes when the frame fires.

use crate::commands::{CaptureTarget, Cmd};
use crate::events::{Event, SizesChangeEvent};
use crate::messages::SplitterMsg;
use crate::model::Workspace;
use crate::splitter::{DragEnd, SplitterId};

/// Update function for splitter messages
pub fn update_splitter(model: &mut Workspace, id: SplitterId, msg: SplitterMsg) -> Option<Cmd> {
    let Some(splitter) = model.splitter_mut(id) else {
        tracing::warn!(splitter = %id, ?msg, "message for unknown splitter ignored");
        return None;
    };

    match msg {
        SplitterMsg::PointerDown { pointer, extent } => splitter
            .pointer_down(pointer, extent)
            .then_some(Cmd::AcquireCapture(CaptureTarget::Splitter(id))),
        SplitterMsg::PointerMove(pointer) => splitter
            .pointer_move(pointer)
            .then_some(Cmd::RequestAnimationFrame(id)),
        SplitterMsg::AnimationFrame => {
            let event = splitter.animation_frame()?;
            Cmd::batch(vec![emit(id, event), Cmd::Redraw])
        }

        SplitterMsg::PointerUp => finish(id, splitter.end_drag(DragEnd::PointerUp)),
        SplitterMsg::PointerCancel => finish(id, splitter.end_drag(DragEnd::PointerCancel)),
        SplitterMsg::LostPointerCapture => {
            finish(id, splitter.end_drag(DragEnd::LostPointerCapture))
        }
        SplitterMsg::WindowMouseUp => finish(id, splitter.end_drag(DragEnd::WindowMouseUp)),

        SplitterMsg::KeyDown(press) => {
            let event = splitter.key_down(press)?;
            Cmd::batch(vec![emit(id, event), Cmd::Redraw])
        }

        SplitterMsg::Reset => {
            splitter.reset();
            Some(Cmd::Redraw)
        }
        SplitterMsg::SetPanelSizes(sizes) => {
            splitter.set_panel_sizes(sizes);
            Some(Cmd::Redraw)
        }
        SplitterMsg::SetMinSizes(mins) => {
            splitter.set_min_sizes(mins);
            Some(Cmd::Redraw)
        }
        SplitterMsg::SetDisabled(disabled) => match splitter.set_disabled(disabled) {
            Some(event) => finish(id, Some(event)),
            None => Some(Cmd::Redraw),
        },
        SplitterMsg::SetLayout(layout) => {
            splitter.set_layout(layout);
            Some(Cmd::Redraw)
        }
    }
}

fn emit(id: SplitterId, event: SizesChangeEvent) -> Cmd {
    Cmd::Emit(Event::splitter(id, event))
}

/// Final event plus capture release, or nothing if no gesture was active
pub(crate) fn finish(id: SplitterId, event: Option<SizesChangeEvent>) -> Option<Cmd> {
    let event = event?;
    Cmd::batch(vec![
        emit(id, event),
        Cmd::ReleaseCapture(CaptureTarget::Splitter(id)),
        Cmd::Redraw,
    ])
}
