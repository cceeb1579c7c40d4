//! Panel system - dockable drawer panels
//!
//! A panel is docked on one edge of its container, reserves space (push
//! mode) or floats above content (overlay mode), and resizes along its
//! docking axis by drag or keyboard.
//!
//! ## Architecture
//!
//! - `DockSide`: Left, Right, Top or Bottom edge
//! - `PanelId`: Stable identifier assigned at attach time
//! - `PanelConfig`: Recognized per-panel options with defaults
//! - `TabSet`: Projected + programmatic tabs, disabled ones filtered out
//! - `DockPanel`: The per-panel state machine
//!
//! ## Integration
//!
//! Panels are owned by a `DockLayout` (see `crate::layout`), which reads
//! their snapshots to compute margins and writes cross-axis offsets back.
//! Messages reach a panel through `Msg::Panel` in `update/panel.rs`.

mod config;
mod dock;
mod state;
mod tabs;

pub use config::PanelConfig;
pub use dock::{DockSide, PanelId, PanelMode};
pub use state::{AnimationParams, AnimationState, DockPanel, TabNavigation};
pub use tabs::{PanelTab, TabSet};
