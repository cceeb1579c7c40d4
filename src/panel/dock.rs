//! Dock sides, panel modes and identifiers
//!
//! This module defines the core vocabulary of the docking panel system.

use serde::{Deserialize, Serialize};

/// Edge a panel is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DockSide {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl DockSide {
    /// Top and bottom docks lay their tab strip out horizontally
    pub fn is_horizontal_dock(&self) -> bool {
        matches!(self, DockSide::Top | DockSide::Bottom)
    }

    /// Left and right docks lay their tab strip out vertically
    pub fn is_vertical_dock(&self) -> bool {
        !self.is_horizontal_dock()
    }

    /// Project a pointer delta onto the docking axis.
    ///
    /// The sign is chosen so that dragging toward the panel interior
    /// always grows the panel, whichever edge it occupies.
    pub fn project_delta(&self, dx: f64, dy: f64) -> f64 {
        match self {
            DockSide::Left => dx,
            DockSide::Right => -dx,
            DockSide::Top => dy,
            DockSide::Bottom => -dy,
        }
    }

    /// Lowercase name, as used in animation keys
    pub fn as_str(&self) -> &'static str {
        match self {
            DockSide::Left => "left",
            DockSide::Right => "right",
            DockSide::Top => "top",
            DockSide::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for DockSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a panel reserves layout space or floats over content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    #[default]
    Push,
    Overlay,
}

/// Stable identifier for a panel within its layout
///
/// Assigned once at attach time and used as the key for snapshots and
/// cross-axis offsets, so nothing depends on reference identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub u64);

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_toward_interior_grows() {
        // Left panel: pointer moves right
        assert_eq!(DockSide::Left.project_delta(30.0, 5.0), 30.0);
        // Right panel: pointer moves left
        assert_eq!(DockSide::Right.project_delta(-30.0, 5.0), 30.0);
        // Top panel: pointer moves down
        assert_eq!(DockSide::Top.project_delta(5.0, 30.0), 30.0);
        // Bottom panel: pointer moves up
        assert_eq!(DockSide::Bottom.project_delta(5.0, -30.0), 30.0);
    }

    #[test]
    fn test_dock_orientation() {
        assert!(DockSide::Top.is_horizontal_dock());
        assert!(DockSide::Bottom.is_horizontal_dock());
        assert!(DockSide::Left.is_vertical_dock());
        assert!(DockSide::Right.is_vertical_dock());
    }

    #[test]
    fn test_side_serde_lowercase() {
        let side: DockSide = serde_yaml::from_str("bottom").unwrap();
        assert_eq!(side, DockSide::Bottom);
        let mode: PanelMode = serde_yaml::from_str("overlay").unwrap();
        assert_eq!(mode, PanelMode::Overlay);
    }
}
