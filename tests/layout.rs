//! Tests for the layout coordinator: aggregate margins and cross-axis clearance

mod common;

use common::{layout_events, runtime_with_panels};
use dockyard::events::{Event, LayoutEvent, PanelEvent};
use dockyard::input::Point;
use dockyard::layout::{AnchoredPushMode, CrossAxisOffsets, LayoutOptions, Offsets};
use dockyard::messages::{LayoutMsg, Msg, PanelMsg};
use dockyard::panel::{DockSide, PanelConfig, PanelMode};

// ============================================================================
// Aggregate Offsets
// ============================================================================

#[test]
fn test_margin_for_expanded_left_and_collapsed_right() {
    let configs = [
        PanelConfig::new(DockSide::Left)
            .initial_size(300.0)
            .collapsed_size(40.0),
        PanelConfig::new(DockSide::Right).collapsed_size(48.0),
    ];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);

    rt.dispatch(Msg::expand(ids[0]));

    assert_eq!(rt.model().layout.margin_style(), "0px 48px 0px 300px");
}

#[test]
fn test_panel_change_keeps_snapshot_fresh_for_layout_msgs() {
    let configs = [PanelConfig::new(DockSide::Left).collapsed_size(48.0)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);

    rt.dispatch(Msg::expand(ids[0]));
    assert_eq!(rt.model().layout.margin_style(), "0px 0px 0px 320px");

    // An unrelated layout message runs the invariant checks against the
    // snapshot captured by the expand
    rt.dispatch(Msg::Layout(LayoutMsg::SetRtl(true)));
    assert_eq!(rt.model().layout.margin_style(), "0px 0px 0px 320px");
}

#[test]
fn test_collapsed_strip_can_be_excluded() {
    let configs = [PanelConfig::new(DockSide::Right), PanelConfig::new(DockSide::Bottom)];
    let (mut rt, _) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    assert_eq!(rt.model().layout.offsets(), Offsets::new(0.0, 48.0, 48.0, 0.0));

    rt.dispatch(Msg::Layout(LayoutMsg::SetIncludeCollapsedStrip(false)));

    assert_eq!(rt.model().layout.offsets(), Offsets::ZERO);
    assert_eq!(rt.model().layout.margin_style(), "0px 0px 0px 0px");
}

#[test]
fn test_panels_on_one_side_accumulate() {
    let configs = [
        PanelConfig::new(DockSide::Left).initial_size(250.0),
        PanelConfig::new(DockSide::Left).collapsed_size(30.0),
    ];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);

    rt.dispatch(Msg::expand(ids[0]));

    assert_eq!(rt.model().layout.offsets().left, 280.0);
}

#[test]
fn test_overlay_panels_reserve_nothing() {
    let configs = [PanelConfig::new(DockSide::Top).mode(PanelMode::Overlay)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);

    rt.dispatch(Msg::expand(ids[0]));

    assert_eq!(rt.model().layout.offsets(), Offsets::ZERO);
    assert!(layout_events(&rt.take_events()).is_empty());
}

#[test]
fn test_anchored_collapsed_mode_reserves_strip_only() {
    let options = LayoutOptions {
        global_anchored: true,
        global_anchored_push_mode: AnchoredPushMode::Collapsed,
        ..Default::default()
    };
    let configs = [PanelConfig::new(DockSide::Left).initial_size(280.0)];
    let (mut rt, ids) = runtime_with_panels(options, &configs, 1);

    rt.dispatch(Msg::expand(ids[0]));

    assert_eq!(rt.model().layout.offsets().left, 48.0);
}

#[test]
fn test_anchored_none_mode_reserves_nothing() {
    let options = LayoutOptions {
        global_anchored: true,
        global_anchored_push_mode: AnchoredPushMode::None,
        ..Default::default()
    };
    let configs = [PanelConfig::new(DockSide::Right)];
    let (mut rt, ids) = runtime_with_panels(options, &configs, 1);

    rt.dispatch(Msg::expand(ids[0]));

    assert_eq!(rt.model().layout.offsets(), Offsets::ZERO);
}

#[test]
fn test_switching_push_mode_relayouts() {
    let configs = [PanelConfig::new(DockSide::Left)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    rt.dispatch(Msg::expand(ids[0]));
    assert_eq!(rt.model().layout.offsets().left, 320.0);

    rt.dispatch(Msg::Layout(LayoutMsg::SetGlobalAnchored(true)));
    assert_eq!(rt.model().layout.offsets().left, 320.0);
    assert!(rt.model().panel(ids[0]).unwrap().is_global_anchored());

    rt.take_events();
    rt.dispatch(Msg::Layout(LayoutMsg::SetGlobalAnchoredPushMode(
        AnchoredPushMode::Collapsed,
    )));
    assert_eq!(rt.model().layout.offsets().left, 48.0);

    let events = layout_events(&rt.take_events());
    assert!(events.iter().any(|e| matches!(
        e,
        LayoutEvent::OffsetsChanged { margin, .. } if margin == "0px 0px 0px 48px"
    )));
}

// ============================================================================
// Event Flow
// ============================================================================

#[test]
fn test_offsets_event_follows_state_change() {
    let configs = [PanelConfig::new(DockSide::Left)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);

    rt.dispatch(Msg::expand(ids[0]));

    let events = rt.take_events();
    assert!(matches!(
        events[0],
        Event::Panel {
            event: PanelEvent::StateChange(_),
            ..
        }
    ));
    assert!(matches!(
        &events[1],
        Event::Layout {
            event: LayoutEvent::OffsetsChanged { margin, .. }
        } if margin == "0px 0px 0px 320px"
    ));
}

#[test]
fn test_unchanged_offsets_are_not_republished() {
    let configs = [PanelConfig::new(DockSide::Left).mode(PanelMode::Overlay)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    rt.dispatch(Msg::expand(ids[0]));
    rt.dispatch(Msg::Panel(ids[0], PanelMsg::BeginResize(Point::new(0.0, 0.0))));
    rt.dispatch(Msg::Panel(ids[0], PanelMsg::UpdateResize(Point::new(20.0, 0.0))));

    assert!(layout_events(&rt.take_events()).is_empty());
}

#[test]
fn test_drag_updates_margin_live() {
    let configs = [PanelConfig::new(DockSide::Bottom)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    rt.dispatch(Msg::expand(ids[0]));

    rt.dispatch(Msg::Panel(ids[0], PanelMsg::BeginResize(Point::new(0.0, 500.0))));
    rt.dispatch(Msg::Panel(ids[0], PanelMsg::UpdateResize(Point::new(0.0, 450.0))));

    assert_eq!(rt.model().layout.offsets().bottom, 370.0);
}

#[test]
fn test_detach_removes_contribution() {
    let configs = [PanelConfig::new(DockSide::Left), PanelConfig::new(DockSide::Right)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    rt.dispatch(Msg::expand(ids[1]));

    rt.dispatch(Msg::Layout(LayoutMsg::DetachPanel(ids[1])));

    assert_eq!(rt.model().layout.offsets(), Offsets::new(0.0, 0.0, 0.0, 48.0));
    assert_eq!(rt.model().layout.len(), 1);
    rt.model().layout.assert_invariants();
}

// ============================================================================
// Cross-Axis Clearance
// ============================================================================

#[test]
fn test_perpendicular_panels_receive_clearance() {
    let configs = [
        PanelConfig::new(DockSide::Left).initial_size(300.0),
        PanelConfig::new(DockSide::Top).initial_size(200.0),
        PanelConfig::new(DockSide::Bottom),
    ];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    rt.dispatch(Msg::expand(ids[0]));
    rt.dispatch(Msg::expand(ids[1]));

    let left = rt.model().panel(ids[0]).unwrap().cross_axis_offsets();
    assert_eq!(
        left,
        CrossAxisOffsets {
            top: 200.0,
            bottom: 48.0,
            left: 0.0,
            right: 0.0
        }
    );

    let top = rt.model().panel(ids[1]).unwrap().cross_axis_offsets();
    assert_eq!(top.left, 300.0);
    assert_eq!(top.right, 0.0);
    assert_eq!(top.top, 0.0);
}

#[test]
fn test_clearance_change_is_published() {
    let configs = [PanelConfig::new(DockSide::Right), PanelConfig::new(DockSide::Top)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);

    rt.dispatch(Msg::expand(ids[1]));

    let events = layout_events(&rt.take_events());
    assert!(events.contains(&LayoutEvent::CrossAxisChanged {
        panel: ids[0],
        offsets: CrossAxisOffsets {
            top: 320.0,
            ..CrossAxisOffsets::ZERO
        },
    }));
}

#[test]
fn test_disabling_clearance_zeroes_every_panel() {
    let configs = [PanelConfig::new(DockSide::Left), PanelConfig::new(DockSide::Top)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    rt.dispatch(Msg::expand(ids[1]));
    assert_eq!(rt.model().panel(ids[0]).unwrap().cross_axis_offsets().top, 320.0);

    rt.dispatch(Msg::Layout(LayoutMsg::SetManageCrossAxisClearance(false)));

    for id in &ids {
        assert_eq!(
            rt.model().panel(*id).unwrap().cross_axis_offsets(),
            CrossAxisOffsets::ZERO
        );
    }
}

#[test]
fn test_anchored_panels_get_fixed_position_style() {
    let options = LayoutOptions {
        global_anchored: true,
        ..Default::default()
    };
    let configs = [PanelConfig::new(DockSide::Left), PanelConfig::new(DockSide::Top)];
    let (rt, ids) = runtime_with_panels(options, &configs, 1);

    let left = rt.model().panel(ids[0]).unwrap();
    assert_eq!(
        left.fixed_position_style().as_deref(),
        Some("position:fixed;top:48px;bottom:0px")
    );
    let top = rt.model().panel(ids[1]).unwrap();
    assert_eq!(
        top.fixed_position_style().as_deref(),
        Some("position:fixed;left:48px;right:0px")
    );
}

#[test]
fn test_managed_panels_leave_margin_to_coordinator() {
    let configs = [PanelConfig::new(DockSide::Left)];
    let (mut rt, ids) = runtime_with_panels(LayoutOptions::default(), &configs, 1);
    rt.dispatch(Msg::expand(ids[0]));

    let panel = rt.model().panel(ids[0]).unwrap();
    assert!(panel.is_layout_managed());
    assert_eq!(panel.main_content_margin(), Offsets::ZERO);
    assert!(panel.fixed_position_style().is_none());
}
