//! Cross-axis clearance between perpendicular panels
//!
//! A left/right panel is shortened at its top and bottom by whatever the
//! top/bottom panels reserve, and a top/bottom panel is shortened at its
//! left and right by the left/right reservations, so no control strip is
//! hidden under a perpendicular panel.

use serde::{Deserialize, Serialize};

use super::offsets::Offsets;
use crate::panel::DockSide;

/// Clearance on the two edges perpendicular to a panel's docking axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrossAxisOffsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl CrossAxisOffsets {
    pub const ZERO: CrossAxisOffsets = CrossAxisOffsets {
        top: 0.0,
        bottom: 0.0,
        left: 0.0,
        right: 0.0,
    };
}

/// Clearance for a panel on `side` given the aggregate offsets.
///
/// Only the two dimensions orthogonal to the panel's own docking axis are
/// populated.
pub fn cross_axis_for_side(side: DockSide, aggregate: &Offsets) -> CrossAxisOffsets {
    match side {
        DockSide::Left | DockSide::Right => CrossAxisOffsets {
            top: aggregate.top,
            bottom: aggregate.bottom,
            ..CrossAxisOffsets::ZERO
        },
        DockSide::Top | DockSide::Bottom => CrossAxisOffsets {
            left: aggregate.left,
            right: aggregate.right,
            ..CrossAxisOffsets::ZERO
        },
    }
}

/// Distribute clearance to every panel; all zero when management is off
pub fn distribute<I, K>(panels: I, aggregate: &Offsets, enabled: bool) -> Vec<(K, CrossAxisOffsets)>
where
    I: IntoIterator<Item = (K, DockSide)>,
{
    panels
        .into_iter()
        .map(|(key, side)| {
            let offsets = if enabled {
                cross_axis_for_side(side, aggregate)
            } else {
                CrossAxisOffsets::ZERO
            };
            (key, offsets)
        })
        .collect()
}
