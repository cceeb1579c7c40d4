//! Layout offset aggregation
//!
//! Turns the set of panel snapshots into one `{top, right, bottom, left}`
//! margin for the sibling content region.

use serde::{Deserialize, Serialize};

use crate::panel::{DockSide, PanelMode};

/// How much space globally anchored push panels reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnchoredPushMode {
    /// Reserve the full expanded size (same as a non-anchored layout)
    #[default]
    Full,
    /// Always reserve only the collapsed strip, even when expanded
    Collapsed,
    /// Reserve nothing; content flows under the panel
    None,
}

/// Layout coordinator options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Whether a collapsed panel's strip counts toward the push margin
    pub include_collapsed_strip_in_offset: bool,
    /// Panels are fixed to the viewport instead of the layout container
    pub global_anchored: bool,
    /// Shift perpendicular panels so their tab strips stay visible
    pub manage_cross_axis_clearance: bool,
    pub global_anchored_push_mode: AnchoredPushMode,
    /// CSS transition for cross-axis shifts; renderers only
    pub cross_axis_transition: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            include_collapsed_strip_in_offset: true,
            global_anchored: false,
            manage_cross_axis_clearance: true,
            global_anchored_push_mode: AnchoredPushMode::Full,
            cross_axis_transition: "250ms ease".to_string(),
        }
    }
}

/// Immutable projection of one panel, as read by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelSnapshot {
    pub side: DockSide,
    pub expanded: bool,
    pub size: f64,
    pub collapsed_size: f64,
    pub mode: PanelMode,
}

/// Four-sided margin in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Offsets {
    pub const ZERO: Offsets = Offsets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Offset on one side only
    pub fn on_side(side: DockSide, amount: f64) -> Self {
        let mut offsets = Self::ZERO;
        *offsets.side_mut(side) = amount;
        offsets
    }

    fn side_mut(&mut self, side: DockSide) -> &mut f64 {
        match side {
            DockSide::Top => &mut self.top,
            DockSide::Right => &mut self.right,
            DockSide::Bottom => &mut self.bottom,
            DockSide::Left => &mut self.left,
        }
    }

    /// CSS margin shorthand: `"{top}px {right}px {bottom}px {left}px"`.
    ///
    /// Renderers rely on this exact ordering and unit.
    pub fn margin_shorthand(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl std::fmt::Display for Offsets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.margin_shorthand())
    }
}

/// Contribution of one snapshot to its side's margin
fn contribution(snapshot: &PanelSnapshot, options: &LayoutOptions) -> f64 {
    let strip = if options.include_collapsed_strip_in_offset {
        snapshot.collapsed_size
    } else {
        0.0
    };

    if options.global_anchored {
        match options.global_anchored_push_mode {
            AnchoredPushMode::None => return 0.0,
            // Expansion overlays the viewport, so only the strip is reserved
            AnchoredPushMode::Collapsed => return strip,
            AnchoredPushMode::Full => {}
        }
    }

    if snapshot.expanded {
        snapshot.size
    } else {
        strip
    }
}

/// Sum of push-mode contributions on one side
pub fn sum_for_side(snapshots: &[PanelSnapshot], side: DockSide, options: &LayoutOptions) -> f64 {
    snapshots
        .iter()
        .filter(|s| s.side == side && s.mode == PanelMode::Push)
        .map(|s| contribution(s, options))
        .fold(0.0, |acc, v| acc + v)
}

/// Aggregate margins for sibling content from all panel snapshots
pub fn aggregate_offsets(snapshots: &[PanelSnapshot], options: &LayoutOptions) -> Offsets {
    Offsets {
        top: sum_for_side(snapshots, DockSide::Top, options),
        right: sum_for_side(snapshots, DockSide::Right, options),
        bottom: sum_for_side(snapshots, DockSide::Bottom, options),
        left: sum_for_side(snapshots, DockSide::Left, options),
    }
}
