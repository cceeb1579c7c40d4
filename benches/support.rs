//! Shared helpers for benchmarks

use dockyard::layout::LayoutOptions;
use dockyard::model::Workspace;
use dockyard::panel::{DockSide, PanelConfig, PanelId, PanelTab};
use dockyard::splitter::{SplitterConfig, SplitterId, SplitterPane};
use dockyard::Runtime;

const SIDES: [DockSide; 4] = [DockSide::Left, DockSide::Top, DockSide::Right, DockSide::Bottom];

/// Runtime with `panels` panels spread round-robin over the four sides
#[allow(dead_code)]
pub fn make_runtime(panels: usize) -> (Runtime, Vec<PanelId>) {
    let mut runtime = Runtime::new(Workspace::new(LayoutOptions::default()));
    let ids = (0..panels)
        .map(|i| {
            let config = PanelConfig::new(SIDES[i % SIDES.len()]).initial_size(240.0 + i as f64);
            runtime.attach_panel(config, vec![PanelTab::new(format!("tab-{}", i), "Tab")])
        })
        .collect();
    runtime.take_events();
    (runtime, ids)
}

/// Runtime holding one default splitter
#[allow(dead_code)]
pub fn make_splitter() -> (Runtime, SplitterId) {
    let mut workspace = Workspace::default();
    let id = workspace
        .add_splitter(
            SplitterConfig::default(),
            vec![SplitterPane::new("left"), SplitterPane::new("right")],
        )
        .expect("two panes");
    (Runtime::new(workspace), id)
}
