//! Tests for the runtime: command execution, subscribers, scheduling and teardown

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{runtime_with_panels, runtime_with_splitter, splitter_events, resize_events};
use dockyard::commands::{CaptureTarget, Cmd};
use dockyard::events::{Event, PanelEvent};
use dockyard::input::{Extent, Point};
use dockyard::layout::LayoutOptions;
use dockyard::messages::{Msg, PanelMsg, SplitterMsg};
use dockyard::panel::{DockSide, PanelConfig, PanelId};
use dockyard::splitter::SplitterConfig;

#[test]
fn test_subscribers_see_events_in_publish_order() {
    let (mut rt, ids) = runtime_with_panels(
        LayoutOptions::default(),
        &[PanelConfig::new(DockSide::Left)],
        2,
    );
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    rt.subscribe(move |event: &Event| sink.borrow_mut().push(event.clone()));

    rt.dispatch(Msg::select_tab(ids[0], 1));

    let seen = seen.borrow();
    assert_eq!(*seen, rt.take_events());
    assert!(matches!(
        seen[0],
        Event::Panel {
            event: PanelEvent::StateChange(_),
            ..
        }
    ));
    assert!(matches!(seen[1], Event::Layout { .. }));
    assert!(matches!(
        seen.last(),
        Some(Event::Panel {
            event: PanelEvent::TabChange(_),
            ..
        })
    ));
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let (mut rt, ids) = runtime_with_panels(
        LayoutOptions::default(),
        &[PanelConfig::new(DockSide::Right)],
        1,
    );
    let count = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&count);
    let sub = rt.subscribe(move |_| *counter.borrow_mut() += 1);

    rt.dispatch(Msg::expand(ids[0]));
    let after_expand = *count.borrow();
    assert!(after_expand > 0);

    assert!(rt.unsubscribe(sub));
    assert!(!rt.unsubscribe(sub));
    rt.dispatch(Msg::collapse(ids[0]));
    assert_eq!(*count.borrow(), after_expand);
}

#[test]
fn test_redraw_flag_is_consumed() {
    let (mut rt, ids) = runtime_with_panels(
        LayoutOptions::default(),
        &[PanelConfig::new(DockSide::Top)],
        1,
    );
    rt.take_redraw();

    rt.dispatch(Msg::expand(ids[0]));
    assert!(rt.take_redraw());
    assert!(!rt.take_redraw());

    // Already expanded: nothing changes, nothing to draw
    rt.dispatch(Msg::expand(ids[0]));
    assert!(!rt.take_redraw());
}

#[test]
fn test_batch_and_defer_execute_in_order() {
    let (mut rt, ids) = runtime_with_panels(
        LayoutOptions::default(),
        &[PanelConfig::new(DockSide::Left)],
        1,
    );
    let id = ids[0];

    let cmd = Cmd::batch(vec![
        Cmd::None,
        Cmd::defer(Msg::expand(id)),
        Cmd::defer(Msg::Panel(id, PanelMsg::SetInitialSize(500.0))),
        Cmd::Redraw,
    ]);
    rt.execute(cmd.unwrap());

    assert!(!rt.model().panel(id).unwrap().is_expanded());
    assert_eq!(rt.pending_microtasks(), 2);
    assert_eq!(rt.run_microtasks(), 2);

    let panel = rt.model().panel(id).unwrap();
    assert!(panel.is_expanded());
    assert_eq!(panel.size(), 500.0);
    assert_eq!(rt.model().layout.offsets().left, 500.0);
}

#[test]
fn test_unknown_targets_are_ignored() {
    let (mut rt, _) = runtime_with_panels(LayoutOptions::default(), &[], 0);

    rt.dispatch(Msg::expand(PanelId(99)));
    rt.dispatch(Msg::Splitter(
        dockyard::splitter::SplitterId(7),
        SplitterMsg::PointerUp,
    ));

    assert!(rt.take_events().is_empty());
    assert!(rt.captures().next().is_none());
}

#[test]
fn test_frame_requests_are_deduplicated() {
    let (mut rt, id) = runtime_with_splitter(SplitterConfig::default());
    rt.dispatch(Msg::Splitter(
        id,
        SplitterMsg::PointerDown {
            pointer: Point::new(0.0, 0.0),
            extent: Extent::new(100.0, 100.0),
        },
    ));
    for x in 1..10 {
        rt.dispatch(Msg::Splitter(id, SplitterMsg::PointerMove(Point::new(x as f64, 0.0))));
    }
    assert_eq!(rt.pending_frames().len(), 1);

    rt.animation_frame();
    assert_eq!(rt.model().splitter(id).unwrap().sizes(), [59.0, 41.0]);

    // A move after the frame asks for a new one
    rt.dispatch(Msg::Splitter(id, SplitterMsg::PointerMove(Point::new(20.0, 0.0))));
    assert_eq!(rt.pending_frames(), &[id]);
}

#[test]
fn test_shutdown_finishes_gestures_and_releases_captures() {
    let (mut rt, ids) = runtime_with_panels(
        LayoutOptions::default(),
        &[PanelConfig::new(DockSide::Left), PanelConfig::new(DockSide::Bottom)],
        1,
    );
    let splitter = rt
        .model_mut()
        .add_splitter(SplitterConfig::default(), vec![Default::default(), Default::default()])
        .unwrap();

    rt.dispatch(Msg::expand(ids[0]));
    rt.dispatch(Msg::Panel(ids[0], PanelMsg::BeginResize(Point::new(0.0, 0.0))));
    rt.dispatch(Msg::Splitter(
        splitter,
        SplitterMsg::PointerDown {
            pointer: Point::new(0.0, 0.0),
            extent: Extent::new(200.0, 200.0),
        },
    ));
    assert!(rt.holds_capture(CaptureTarget::Panel(ids[0])));
    assert!(rt.holds_capture(CaptureTarget::Splitter(splitter)));
    rt.take_events();

    rt.shutdown();

    let events = rt.take_events();
    let panel_final = resize_events(&events, ids[0]);
    assert_eq!(panel_final.len(), 1);
    assert!(!panel_final[0].is_resizing);
    let splitter_final = splitter_events(&events, splitter);
    assert_eq!(splitter_final.len(), 1);
    assert!(!splitter_final[0].is_resizing);

    assert!(rt.captures().next().is_none());
    assert!(rt.model().layout.is_empty());
    assert!(rt.model().splitters().next().is_none());
}

#[test]
fn test_report_serializes_to_json() {
    let (mut rt, ids) = runtime_with_panels(
        LayoutOptions::default(),
        &[PanelConfig::new(DockSide::Left).initial_size(260.0)],
        1,
    );
    rt.dispatch(Msg::expand(ids[0]));

    let json = serde_json::to_value(rt.model().report()).unwrap();

    assert_eq!(json["margin"], "0px 0px 0px 260px");
    assert_eq!(json["panels"][0]["animation_state"], "expanded-left");
    assert_eq!(json["panels"][0]["size"], 260.0);
}
