//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dockyard::events::{Event, LayoutEvent, PanelEvent, ResizeEvent, SizesChangeEvent};
use dockyard::layout::LayoutOptions;
use dockyard::model::Workspace;
use dockyard::panel::{PanelConfig, PanelId, PanelTab};
use dockyard::runtime::Runtime;
use dockyard::splitter::{SplitterConfig, SplitterId, SplitterPane};

/// `n` enabled tabs with ids `tab-0..n`
pub fn tabs(n: usize) -> Vec<PanelTab> {
    (0..n)
        .map(|i| PanelTab::new(format!("tab-{}", i), format!("Tab {}", i)))
        .collect()
}

/// Runtime with one panel per config, each given `tab_count` tabs
pub fn runtime_with_panels(
    options: LayoutOptions,
    configs: &[PanelConfig],
    tab_count: usize,
) -> (Runtime, Vec<PanelId>) {
    let mut runtime = Runtime::new(Workspace::new(options));
    let ids = configs
        .iter()
        .map(|config| runtime.attach_panel(config.clone(), tabs(tab_count)))
        .collect();
    runtime.run_microtasks();
    runtime.take_events();
    (runtime, ids)
}

/// Runtime holding a single splitter with two default panes
pub fn runtime_with_splitter(config: SplitterConfig) -> (Runtime, SplitterId) {
    let mut workspace = Workspace::default();
    let id = workspace
        .add_splitter(config, vec![SplitterPane::default(), SplitterPane::default()])
        .unwrap();
    (Runtime::new(workspace), id)
}

/// Panel events for one panel, in publish order
pub fn panel_events(events: &[Event], panel: PanelId) -> Vec<PanelEvent> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Panel { id, event } if *id == panel => Some(event.clone()),
            _ => None,
        })
        .collect()
}

/// Size-change payloads for one panel
pub fn resize_events(events: &[Event], panel: PanelId) -> Vec<ResizeEvent> {
    panel_events(events, panel)
        .into_iter()
        .filter_map(|e| match e {
            PanelEvent::SizeChange(r) => Some(r),
            _ => None,
        })
        .collect()
}

pub fn layout_events(events: &[Event]) -> Vec<LayoutEvent> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Layout { event } => Some(event.clone()),
            _ => None,
        })
        .collect()
}

pub fn splitter_events(events: &[Event], splitter: SplitterId) -> Vec<SizesChangeEvent> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Splitter { id, event } if *id == splitter => Some(*event),
            _ => None,
        })
        .collect()
}

/// Assert a partition sums to 100 within rounding
pub fn assert_sums_to_100(sizes: [f64; 2]) {
    assert!(
        (sizes[0] + sizes[1] - 100.0).abs() <= 0.001,
        "partition {:?} does not sum to 100",
        sizes
    );
}
