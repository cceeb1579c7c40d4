//! Per-panel configuration

use serde::{Deserialize, Serialize};

use super::dock::{DockSide, PanelMode};

/// Recognized panel options
///
/// Missing fields deserialize to the defaults below, so a config file
/// only needs to spell out what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub side: DockSide,
    pub mode: PanelMode,
    pub has_backdrop: bool,
    pub close_on_backdrop_click: bool,
    pub initial_size: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Thickness reserved while collapsed (the tab rail)
    pub collapsed_size: f64,
    pub resizable: bool,
    /// Expand on attach when at least one tab is visible
    pub auto_focus: bool,
    /// Milliseconds; consumed by renderers only
    pub animation_duration: u64,
    /// Pixels per Shift+Arrow nudge
    pub keyboard_step: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            side: DockSide::Left,
            mode: PanelMode::Push,
            has_backdrop: false,
            close_on_backdrop_click: true,
            initial_size: 320.0,
            min_size: 200.0,
            max_size: 800.0,
            collapsed_size: 48.0,
            resizable: true,
            auto_focus: false,
            animation_duration: 250,
            keyboard_step: 10.0,
        }
    }
}

impl PanelConfig {
    /// Default configuration docked on `side`
    pub fn new(side: DockSide) -> Self {
        Self {
            side,
            ..Default::default()
        }
    }

    pub fn mode(mut self, mode: PanelMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn initial_size(mut self, size: f64) -> Self {
        self.initial_size = size;
        self
    }

    pub fn collapsed_size(mut self, size: f64) -> Self {
        self.collapsed_size = size;
        self
    }

    pub fn bounds(mut self, min_size: f64, max_size: f64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn backdrop(mut self, has_backdrop: bool, close_on_click: bool) -> Self {
        self.has_backdrop = has_backdrop;
        self.close_on_backdrop_click = close_on_click;
        self
    }

    /// Clamp a size into `[min_size, max_size]`.
    ///
    /// Written as `max(min, min(max, v))` so a degenerate `min > max`
    /// resolves to `min` rather than panicking like `f64::clamp`.
    pub fn clamp_size(&self, size: f64) -> f64 {
        self.min_size.max(self.max_size.min(size))
    }
}
