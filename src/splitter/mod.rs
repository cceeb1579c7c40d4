//! Two-pane percentage splitter
//!
//! A `Splitter` owns a `Partition` of its container between exactly two
//! panes and converts pointer drags and key presses into new clamped
//! percentages. Drag samples are coalesced: `pointer_move` only records
//! the latest sample and asks for a frame, `animation_frame` applies it.

mod normalize;

pub use normalize::{clamp_first, effective_mins, normalize, round3, Partition, DEFAULT_SIZES};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::events::SizesChangeEvent;
use crate::input::{Extent, Key, KeyPress, Point};

/// Stable identifier for a splitter within a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SplitterId(pub u64);

impl fmt::Display for SplitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "splitter-{}", self.0)
    }
}

/// Arrangement of the two panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitterLayout {
    /// Panes side by side, handle moves along x
    #[default]
    Horizontal,
    /// Panes stacked, handle moves along y
    Vertical,
}

impl SplitterLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitterLayout::Horizontal => "horizontal",
            SplitterLayout::Vertical => "vertical",
        }
    }
}

/// Recognized splitter options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    pub layout: SplitterLayout,
    /// Requested partition; normalized before use
    pub panel_sizes: Option<[f64; 2]>,
    /// Minimum percentage per pane
    pub min_sizes: [f64; 2],
    /// Percent per arrow press
    pub step: f64,
    /// Percent per arrow press with Ctrl, Alt or Shift held
    pub large_step: f64,
    pub disabled: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            layout: SplitterLayout::Horizontal,
            panel_sizes: None,
            min_sizes: [10.0, 10.0],
            step: 2.0,
            large_step: 10.0,
            disabled: false,
        }
    }
}

/// One of the two regions a splitter divides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitterPane {
    /// Empty ids are assigned by the workspace
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub aria_label: Option<String>,
}

impl SplitterPane {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            aria_label: None,
        }
    }
}

/// Why a drag gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    PointerUp,
    PointerCancel,
    LostPointerCapture,
    /// Window-level mouse up without a matching pointer up
    WindowMouseUp,
    Teardown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start: Point,
    start_first: f64,
    extent: Extent,
}

/// Separator ARIA attributes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparatorAria {
    pub role: &'static str,
    pub orientation: &'static str,
    pub value_min: u8,
    pub value_max: u8,
    pub value_now: i64,
    pub value_text: String,
    pub controls: String,
    /// The handle is not rendered while disabled
    pub rendered: bool,
}

/// Flex style for one pane
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaneStyle {
    pub id: String,
    pub basis_percent: f64,
    pub min_percent: f64,
    pub layout: SplitterLayout,
}

impl PaneStyle {
    pub fn css(&self) -> String {
        let dim = match self.layout {
            SplitterLayout::Horizontal => "min-width",
            SplitterLayout::Vertical => "min-height",
        };
        format!("flex-basis:{}%;{}:{}%", self.basis_percent, dim, self.min_percent)
    }
}

#[derive(Debug, Clone)]
pub struct Splitter {
    id: SplitterId,
    config: SplitterConfig,
    panes: [SplitterPane; 2],
    partition: Partition,
    rtl: bool,
    drag: Option<DragState>,
    /// Latest pointer sample not yet applied
    pending: Option<Point>,
    frame_requested: bool,
}

impl Splitter {
    /// Build a splitter over exactly two panes
    pub fn new(id: SplitterId, config: SplitterConfig, panes: Vec<SplitterPane>) -> Result<Self> {
        let found = panes.len();
        let panes: [SplitterPane; 2] = panes
            .try_into()
            .map_err(|_| LayoutError::SplitterPaneCount { found })?;
        let partition = normalize(config.panel_sizes, config.min_sizes);
        Ok(Self {
            id,
            config,
            panes,
            partition,
            rtl: false,
            drag: None,
            pending: None,
            frame_requested: false,
        })
    }

    pub fn id(&self) -> SplitterId {
        self.id
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    pub fn panes(&self) -> &[SplitterPane; 2] {
        &self.panes
    }

    pub fn partition(&self) -> Partition {
        self.partition
    }

    pub fn sizes(&self) -> [f64; 2] {
        self.partition.sizes()
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn mins(&self) -> [f64; 2] {
        effective_mins(self.config.min_sizes)
    }

    fn event(&self, is_resizing: bool) -> SizesChangeEvent {
        SizesChangeEvent {
            sizes: self.partition.sizes(),
            is_resizing,
        }
    }

    // ------------------------------------------------------------------
    // Pointer drag
    // ------------------------------------------------------------------

    /// Start a drag; returns false when disabled or already dragging
    pub fn pointer_down(&mut self, pointer: Point, extent: Extent) -> bool {
        if self.config.disabled || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragState {
            start: pointer,
            start_first: self.partition.first(),
            extent,
        });
        self.pending = None;
        tracing::debug!(splitter = %self.id, sizes = ?self.sizes(), "drag started");
        true
    }

    /// Record a pointer sample
    ///
    /// Returns true when a new animation frame must be requested; samples
    /// arriving while a frame is already pending just replace the last one.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        if self.drag.is_none() {
            return false;
        }
        self.pending = Some(pointer);
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Apply the latest pending sample
    pub fn animation_frame(&mut self) -> Option<SizesChangeEvent> {
        self.frame_requested = false;
        let pointer = self.pending.take()?;
        self.apply_drag(pointer)?;
        tracing::trace!(splitter = %self.id, sizes = ?self.sizes(), "drag frame");
        Some(self.event(true))
    }

    fn apply_drag(&mut self, pointer: Point) -> Option<()> {
        let drag = self.drag?;
        let (delta_px, total) = match self.config.layout {
            SplitterLayout::Horizontal => (pointer.x - drag.start.x, drag.extent.width),
            SplitterLayout::Vertical => (pointer.y - drag.start.y, drag.extent.height),
        };
        let total = if total == 0.0 { 1.0 } else { total };
        let mut delta_percent = delta_px / total * 100.0;
        if self.rtl && self.config.layout == SplitterLayout::Horizontal {
            delta_percent = -delta_percent;
        }
        self.partition = clamp_first(drag.start_first + delta_percent, self.mins());
        Some(())
    }

    /// End the current gesture
    ///
    /// Any pending sample is flushed first and one final non-resizing event
    /// is returned. Only the first end of a gesture returns an event.
    pub fn end_drag(&mut self, reason: DragEnd) -> Option<SizesChangeEvent> {
        self.drag?;
        if let Some(pointer) = self.pending.take() {
            self.apply_drag(pointer);
        }
        self.drag = None;
        self.frame_requested = false;
        tracing::debug!(splitter = %self.id, ?reason, sizes = ?self.sizes(), "drag finished");
        Some(self.event(false))
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Arrow keys step the first pane; Home/End snap it to its bounds
    pub fn key_down(&mut self, press: KeyPress) -> Option<SizesChangeEvent> {
        if self.config.disabled {
            return None;
        }
        let m = press.modifiers;
        let step = if m.ctrl() || m.alt() || m.shift() {
            self.config.large_step
        } else {
            self.config.step
        };
        let horizontal = self.config.layout == SplitterLayout::Horizontal;
        let mirror = if self.rtl { -1.0 } else { 1.0 };
        let mins = self.mins();
        let current = self.partition.first();

        let target = match press.key {
            Key::ArrowLeft if horizontal => current - step * mirror,
            Key::ArrowRight if horizontal => current + step * mirror,
            Key::ArrowUp if !horizontal => current - step,
            Key::ArrowDown if !horizontal => current + step,
            Key::Home => mins[0],
            Key::End => 100.0 - mins[1],
            _ => return None,
        };

        self.partition = clamp_first(target, mins);
        tracing::debug!(splitter = %self.id, key = ?press.key, sizes = ?self.sizes(), "keyboard resize");
        Some(self.event(false))
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Re-normalize from the configured sizes; emits nothing
    pub fn reset(&mut self) {
        self.partition = normalize(self.config.panel_sizes, self.config.min_sizes);
    }

    pub fn set_panel_sizes(&mut self, sizes: Option<[f64; 2]>) {
        self.config.panel_sizes = sizes;
        self.reset();
    }

    /// New minimums re-clamp the current partition
    pub fn set_min_sizes(&mut self, mins: [f64; 2]) {
        self.config.min_sizes = mins;
        self.partition = normalize(Some(self.partition.sizes()), mins);
    }

    /// Disabling mid-drag ends the gesture
    pub fn set_disabled(&mut self, disabled: bool) -> Option<SizesChangeEvent> {
        self.config.disabled = disabled;
        if disabled {
            self.end_drag(DragEnd::PointerCancel)
        } else {
            None
        }
    }

    pub fn set_layout(&mut self, layout: SplitterLayout) {
        self.config.layout = layout;
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    // ------------------------------------------------------------------
    // Render projections
    // ------------------------------------------------------------------

    pub fn aria(&self) -> SeparatorAria {
        let first = self.partition.first();
        SeparatorAria {
            role: "separator",
            orientation: self.config.layout.as_str(),
            value_min: 0,
            value_max: 100,
            value_now: first.round() as i64,
            value_text: format!("{}%", first.round() as i64),
            controls: format!("{} {}", self.panes[0].id, self.panes[1].id),
            rendered: !self.config.disabled,
        }
    }

    pub fn pane_styles(&self) -> [PaneStyle; 2] {
        let mins = self.mins();
        let sizes = self.partition.sizes();
        let style = |i: usize| PaneStyle {
            id: self.panes[i].id.clone(),
            basis_percent: sizes[i],
            min_percent: mins[i],
            layout: self.config.layout,
        };
        [style(0), style(1)]
    }

    /// Handle offset as a CSS fragment, e.g. `left:30%`
    pub fn handle_position(&self) -> String {
        let edge = match self.config.layout {
            SplitterLayout::Horizontal => "left",
            SplitterLayout::Vertical => "top",
        };
        format!("{}:{}%", edge, self.partition.first())
    }

    pub fn teardown(&mut self) -> Option<SizesChangeEvent> {
        self.end_drag(DragEnd::Teardown)
    }

    /// Validate partition invariants in debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        let [a, b] = self.partition.sizes();
        let [m0, m1] = self.mins();
        assert!(
            (a + b - 100.0).abs() <= 0.001,
            "{} partition {:?} does not sum to 100",
            self.id,
            [a, b]
        );
        assert!(
            a >= m0 - 0.001 && a <= 100.0 - m1 + 0.001,
            "{} first pane {} outside [{}, {}]",
            self.id,
            a,
            m0,
            100.0 - m1
        );
        assert!(
            self.pending.is_none() || self.drag.is_some(),
            "{} pending sample without a drag",
            self.id
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
