//! Benchmarks for layout offset aggregation and panel drag updates
//!
//! Run with: cargo bench --bench layout

mod support;
use support::make_runtime;

use dockyard::input::Point;
use dockyard::layout::{aggregate_offsets, distribute, LayoutOptions, PanelSnapshot};
use dockyard::messages::{Msg, PanelMsg};
use dockyard::panel::{DockSide, PanelMode};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn snapshots(count: usize) -> Vec<PanelSnapshot> {
    let sides = [DockSide::Left, DockSide::Right, DockSide::Top, DockSide::Bottom];
    (0..count)
        .map(|i| PanelSnapshot {
            side: sides[i % 4],
            expanded: i % 3 == 0,
            size: 200.0 + i as f64,
            collapsed_size: 48.0,
            mode: if i % 5 == 0 {
                PanelMode::Overlay
            } else {
                PanelMode::Push
            },
        })
        .collect()
}

// ============================================================================
// Pure aggregation
// ============================================================================

#[divan::bench(args = [1, 4, 16, 64])]
fn aggregate(count: usize) {
    let snaps = snapshots(count);
    let options = LayoutOptions::default();
    divan::black_box(aggregate_offsets(divan::black_box(&snaps), &options));
}

#[divan::bench(args = [4, 16, 64])]
fn aggregate_and_distribute(count: usize) {
    let snaps = snapshots(count);
    let options = LayoutOptions::default();
    let offsets = aggregate_offsets(&snaps, &options);
    let cross = distribute(
        snaps.iter().enumerate().map(|(i, s)| (i, s.side)),
        &offsets,
        true,
    );
    divan::black_box(cross);
}

// ============================================================================
// Through the runtime
// ============================================================================

#[divan::bench(args = [1, 4, 16])]
fn toggle_panel(bencher: divan::Bencher, panels: usize) {
    let (mut runtime, ids) = make_runtime(panels);
    bencher.bench_local(|| {
        runtime.dispatch(Msg::toggle(ids[0]));
        divan::black_box(runtime.take_events());
    });
}

#[divan::bench(args = [1, 4, 16])]
fn drag_sample(bencher: divan::Bencher, panels: usize) {
    let (mut runtime, ids) = make_runtime(panels);
    runtime.dispatch(Msg::expand(ids[0]));
    runtime.dispatch(Msg::Panel(ids[0], PanelMsg::BeginResize(Point::new(0.0, 0.0))));
    let mut x = 0.0;
    bencher.bench_local(|| {
        x = (x + 7.0) % 300.0;
        runtime.dispatch(Msg::Panel(ids[0], PanelMsg::UpdateResize(Point::new(x, 0.0))));
        divan::black_box(runtime.take_events());
    });
}
