//! Panel state machine
//!
//! One `DockPanel` owns its expand/collapse, active tab and size state.
//! States are `collapsed` (initial) and `expanded`, with an orthogonal
//! `resizing` flag that can overlay the expanded state during a gesture.
//! Every mutation goes through the methods here and reports what changed
//! as `PanelEvent`s; nothing else writes a panel's primary state.

use std::fmt;

use super::config::PanelConfig;
use super::dock::{DockSide, PanelId, PanelMode};
use super::tabs::{PanelTab, TabSet};
use crate::events::{PanelEvent, ResizeEvent, StateChangeEvent, TabChangeEvent};
use crate::input::{Direction, Key, KeyPress, Point};
use crate::layout::{CrossAxisOffsets, Offsets, PanelSnapshot};

/// Cyclic tab navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabNavigation {
    Previous,
    Next,
}

/// Pointer and size captured when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragStart {
    pointer: Point,
    size: f64,
}

/// Animation key, rendered as `"{expanded|collapsed}-{side}"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationState {
    pub expanded: bool,
    pub side: DockSide,
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.expanded { "expanded" } else { "collapsed" };
        write!(f, "{}-{}", state, self.side)
    }
}

/// Parameters a renderer needs to animate between states
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    pub size: f64,
    pub collapsed_size: f64,
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct DockPanel {
    id: PanelId,
    config: PanelConfig,
    tabs: TabSet,
    expanded: bool,
    active_tab_index: usize,
    size: f64,
    drag: Option<DragStart>,
    /// Set by a layout coordinator, which then owns the push margin
    layout_managed: bool,
    global_anchored: bool,
    cross_axis: CrossAxisOffsets,
}

impl DockPanel {
    pub fn new(id: PanelId, config: PanelConfig, tabs: Vec<PanelTab>) -> Self {
        let initial = if config.initial_size.is_finite() {
            config.initial_size
        } else {
            config.min_size
        };
        let size = config.clamp_size(initial);
        Self {
            id,
            config,
            tabs: TabSet::new(tabs),
            expanded: false,
            active_tab_index: 0,
            size,
            drag: None,
            layout_managed: false,
            global_anchored: false,
            cross_axis: CrossAxisOffsets::ZERO,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn side(&self) -> DockSide {
        self.config.side
    }

    pub fn mode(&self) -> PanelMode {
        self.config.mode
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn collapsed_size(&self) -> f64 {
        self.config.collapsed_size
    }

    pub fn active_tab_index(&self) -> usize {
        self.active_tab_index
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn active_tab(&self) -> Option<&PanelTab> {
        self.tabs.get(self.active_tab_index)
    }

    pub fn is_layout_managed(&self) -> bool {
        self.layout_managed
    }

    pub fn is_global_anchored(&self) -> bool {
        self.global_anchored
    }

    pub fn cross_axis_offsets(&self) -> CrossAxisOffsets {
        self.cross_axis
    }

    /// Projection consumed by the layout aggregator
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            side: self.config.side,
            expanded: self.expanded,
            size: self.size,
            collapsed_size: self.config.collapsed_size,
            mode: self.config.mode,
        }
    }

    // ------------------------------------------------------------------
    // Expand / collapse
    // ------------------------------------------------------------------

    /// Expand; a no-op (no event) when already expanded
    pub fn expand(&mut self) -> Option<PanelEvent> {
        if self.expanded {
            return None;
        }
        self.expanded = true;
        tracing::debug!(panel = %self.id, side = %self.side(), "expanded");
        Some(self.state_change())
    }

    /// Collapse; a no-op (no event) when already collapsed
    pub fn collapse(&mut self) -> Option<PanelEvent> {
        if !self.expanded {
            return None;
        }
        self.expanded = false;
        tracing::debug!(panel = %self.id, side = %self.side(), "collapsed");
        Some(self.state_change())
    }

    pub fn toggle(&mut self) -> Option<PanelEvent> {
        if self.expanded {
            self.collapse()
        } else {
            self.expand()
        }
    }

    fn state_change(&self) -> PanelEvent {
        PanelEvent::StateChange(StateChangeEvent {
            expanded: self.expanded,
            active_tab_index: self.active_tab_index,
            size: self.size,
            side: self.config.side,
        })
    }

    // ------------------------------------------------------------------
    // Tabs
    // ------------------------------------------------------------------

    /// Select a visible tab.
    ///
    /// Out-of-range indices are ignored. Selecting the active tab of an
    /// expanded panel collapses it; otherwise the index is set, the panel
    /// expands if needed, and a tab-change event follows.
    pub fn select_tab(&mut self, index: usize) -> Vec<PanelEvent> {
        let Some(tab) = self.tabs.get(index).cloned() else {
            tracing::debug!(panel = %self.id, index, "ignoring out-of-range tab selection");
            return Vec::new();
        };

        if index == self.active_tab_index && self.expanded {
            return self.collapse().into_iter().collect();
        }

        let previous_index = self.active_tab_index;
        self.active_tab_index = index;

        let mut events: Vec<PanelEvent> = self.expand().into_iter().collect();
        events.push(PanelEvent::TabChange(TabChangeEvent {
            index,
            tab,
            previous_index,
        }));
        events
    }

    /// Move the active index cyclically over visible tabs
    pub fn navigate_tab(&mut self, step: TabNavigation) {
        let count = self.tabs.len();
        if count == 0 {
            return;
        }
        let current = self.active_tab_index.min(count - 1);
        self.active_tab_index = match step {
            TabNavigation::Previous => (current + count - 1) % count,
            TabNavigation::Next => (current + 1) % count,
        };
    }

    pub fn first_tab(&mut self) {
        self.active_tab_index = 0;
    }

    pub fn last_tab(&mut self) {
        self.active_tab_index = self.tabs.len().saturating_sub(1);
    }

    /// Key handling on the tab strip, where `index` is the focused tab.
    ///
    /// Returns `None` when the key is not handled.
    pub fn tab_strip_key(&mut self, key: Key, index: usize) -> Option<Vec<PanelEvent>> {
        let horizontal = self.side().is_horizontal_dock();
        match key {
            Key::ArrowLeft if horizontal => self.navigate_tab(TabNavigation::Previous),
            Key::ArrowRight if horizontal => self.navigate_tab(TabNavigation::Next),
            Key::ArrowUp if !horizontal => self.navigate_tab(TabNavigation::Previous),
            Key::ArrowDown if !horizontal => self.navigate_tab(TabNavigation::Next),
            Key::Home => self.first_tab(),
            Key::End => self.last_tab(),
            Key::Enter | Key::Space => return Some(self.select_tab(index)),
            Key::Escape if self.expanded => return Some(self.collapse().into_iter().collect()),
            _ => return None,
        }
        Some(Vec::new())
    }

    /// Replace the projected tabs and re-clamp the active index
    pub fn set_projected_tabs(&mut self, tabs: Vec<PanelTab>) {
        self.tabs.set_projected(tabs);
        self.clamp_active_tab();
    }

    /// Replace the programmatic tabs and re-clamp the active index
    pub fn set_tabs(&mut self, tabs: Vec<PanelTab>) {
        self.tabs.set_programmatic(tabs);
        self.clamp_active_tab();
    }

    fn clamp_active_tab(&mut self) {
        let count = self.tabs.len();
        if count == 0 {
            self.active_tab_index = 0;
        } else if self.active_tab_index >= count {
            self.active_tab_index = count - 1;
        }
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    /// Start a drag gesture. Returns false when the panel cannot resize
    /// or a gesture is already active.
    pub fn begin_resize(&mut self, pointer: Point) -> bool {
        if !self.config.resizable || !self.expanded || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragStart {
            pointer,
            size: self.size,
        });
        tracing::debug!(panel = %self.id, size = self.size, "resize started");
        true
    }

    /// Apply a pointer sample to the active drag
    pub fn update_resize(&mut self, pointer: Point) -> Option<PanelEvent> {
        let start = self.drag?;
        let delta = self.config.side.project_delta(
            pointer.x - start.pointer.x,
            pointer.y - start.pointer.y,
        );
        self.size = self.config.clamp_size(start.size + delta);
        tracing::trace!(panel = %self.id, size = self.size, delta, "resizing");
        Some(self.size_change(true, delta))
    }

    /// Finish the active drag.
    ///
    /// Emits exactly one final event per gesture, even when no move
    /// happened; later calls are no-ops.
    pub fn end_resize(&mut self) -> Option<PanelEvent> {
        self.drag.take()?;
        tracing::debug!(panel = %self.id, size = self.size, "resize finished");
        Some(self.size_change(false, 0.0))
    }

    /// Nudge the size by a signed step. Keyboard moves are already final.
    pub fn keyboard_resize(&mut self, direction: Direction, step: f64) -> Option<PanelEvent> {
        if !self.config.resizable || !self.expanded {
            return None;
        }
        let side = self.config.side;
        let delta = match direction {
            Direction::Left if side == DockSide::Right => step,
            Direction::Left => -step,
            Direction::Right if side == DockSide::Right => -step,
            Direction::Right => step,
            Direction::Up if side == DockSide::Bottom => step,
            Direction::Up => -step,
            Direction::Down if side == DockSide::Bottom => -step,
            Direction::Down => step,
        };
        self.size = self.config.clamp_size(self.size + delta);
        tracing::debug!(panel = %self.id, size = self.size, delta, "keyboard resize");
        Some(self.size_change(false, delta))
    }

    /// Key handling on the panel host: Shift+Arrow resizes
    pub fn host_key(&mut self, press: KeyPress) -> Option<PanelEvent> {
        if !press.modifiers.shift() {
            return None;
        }
        let direction = Direction::from_key(press.key)?;
        self.keyboard_resize(direction, self.config.keyboard_step)
    }

    /// Re-sync the current size from a new initial size, unless dragging
    pub fn set_initial_size(&mut self, size: f64) -> bool {
        if self.is_resizing() || !size.is_finite() {
            return false;
        }
        self.config.initial_size = size;
        self.size = self.config.clamp_size(size);
        true
    }

    fn size_change(&self, is_resizing: bool, delta: f64) -> PanelEvent {
        PanelEvent::SizeChange(ResizeEvent {
            size: self.size,
            side: self.config.side,
            is_resizing,
            delta,
        })
    }

    // ------------------------------------------------------------------
    // Backdrop
    // ------------------------------------------------------------------

    pub fn show_backdrop(&self) -> bool {
        self.config.has_backdrop && self.expanded && self.config.mode == PanelMode::Overlay
    }

    pub fn backdrop_click(&mut self) -> Vec<PanelEvent> {
        let mut events = vec![PanelEvent::BackdropClick];
        if self.config.close_on_backdrop_click {
            events.extend(self.collapse());
        }
        events
    }

    // ------------------------------------------------------------------
    // Render projections
    // ------------------------------------------------------------------

    pub fn animation_state(&self) -> AnimationState {
        AnimationState {
            expanded: self.expanded,
            side: self.config.side,
        }
    }

    pub fn animation_params(&self) -> AnimationParams {
        AnimationParams {
            size: self.size,
            collapsed_size: self.config.collapsed_size,
            duration_ms: self.config.animation_duration,
        }
    }

    /// Margin a standalone push panel applies to its own content.
    ///
    /// Zero when layout-managed: the coordinator's aggregate applies instead.
    pub fn main_content_margin(&self) -> Offsets {
        if self.layout_managed || self.config.mode != PanelMode::Push || !self.expanded {
            return Offsets::ZERO;
        }
        Offsets::on_side(self.config.side, self.size)
    }

    /// Fixed-position inset style for globally anchored, layout-managed panels
    pub fn fixed_position_style(&self) -> Option<String> {
        if !self.global_anchored || !self.layout_managed {
            return None;
        }
        let off = self.cross_axis;
        let style = if self.config.side.is_vertical_dock() {
            format!("position:fixed;top:{}px;bottom:{}px", off.top, off.bottom)
        } else {
            format!("position:fixed;left:{}px;right:{}px", off.left, off.right)
        };
        Some(style)
    }

    // ------------------------------------------------------------------
    // Coordinator hooks
    // ------------------------------------------------------------------

    pub(crate) fn set_layout_managed(&mut self, managed: bool) {
        self.layout_managed = managed;
    }

    pub(crate) fn set_global_anchored(&mut self, anchored: bool) {
        self.global_anchored = anchored;
    }

    /// Returns true when the offsets changed
    pub(crate) fn set_cross_axis_offsets(&mut self, offsets: CrossAxisOffsets) -> bool {
        if self.cross_axis == offsets {
            return false;
        }
        self.cross_axis = offsets;
        true
    }

    /// Release everything held by the panel before it is dropped.
    ///
    /// A drag in progress is finished so its final event is not lost.
    pub fn teardown(&mut self) -> Option<PanelEvent> {
        self.end_resize()
    }

    /// Validate internal invariants in debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let (min, max) = (self.config.min_size, self.config.max_size);
        if min <= max {
            assert!(
                self.size >= min && self.size <= max,
                "{} size {} outside [{}, {}]",
                self.id,
                self.size,
                min,
                max
            );
        }
        let count = self.tabs.len();
        assert!(
            (count == 0 && self.active_tab_index == 0) || self.active_tab_index < count,
            "{} active tab {} out of range for {} tabs",
            self.id,
            self.active_tab_index,
            count
        );
        assert!(
            self.drag.is_none() || self.config.resizable,
            "{} resizing while not resizable",
            self.id
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
