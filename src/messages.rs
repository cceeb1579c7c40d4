//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use serde::Deserialize;

use crate::input::{Direction, Extent, Key, KeyPress, Point};
use crate::layout::AnchoredPushMode;
use crate::panel::{PanelId, PanelTab, TabNavigation};
use crate::splitter::{SplitterId, SplitterLayout};

/// Messages addressed to one panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    // === Expand / Collapse ===
    Expand,
    Collapse,
    Toggle,

    // === Tabs ===
    /// Select a visible tab (click or Enter/Space)
    SelectTab(usize),
    /// Cyclic keyboard navigation; emits nothing
    NavigateTab(TabNavigation),
    FirstTab,
    LastTab,
    /// Key pressed on the tab strip while `index` has focus
    TabStripKey { key: Key, index: usize },
    /// Replace the projected tabs
    SetProjectedTabs(Vec<PanelTab>),
    /// Replace the programmatic tabs
    SetTabs(Vec<PanelTab>),

    // === Resize ===
    /// Pointer pressed on the resize handle
    BeginResize(Point),
    /// Pointer moved while dragging
    UpdateResize(Point),
    /// Pointer released or capture lost
    EndResize,
    KeyboardResize { direction: Direction, step: f64 },
    /// Key pressed on the panel host (Shift+Arrow resizes)
    HostKey(KeyPress),
    SetInitialSize(f64),

    // === Backdrop ===
    BackdropClick,
}

/// Messages addressed to one splitter
#[derive(Debug, Clone, PartialEq)]
pub enum SplitterMsg {
    /// Pointer pressed on the handle; `extent` is the container's size
    PointerDown { pointer: Point, extent: Extent },
    PointerMove(Point),
    /// A requested animation frame fired
    AnimationFrame,
    PointerUp,
    PointerCancel,
    LostPointerCapture,
    /// Window-level mouse up (safety net)
    WindowMouseUp,
    KeyDown(KeyPress),
    /// Restore configured sizes without emitting
    Reset,
    SetPanelSizes(Option<[f64; 2]>),
    SetMinSizes([f64; 2]),
    SetDisabled(bool),
    SetLayout(SplitterLayout),
}

/// Workspace-level messages (membership, coordinator options)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMsg {
    /// Remove a panel, finishing any drag it holds
    DetachPanel(PanelId),
    /// Remove a splitter, finishing any drag it holds
    RemoveSplitter(SplitterId),
    SetGlobalAnchored(bool),
    SetGlobalAnchoredPushMode(AnchoredPushMode),
    SetIncludeCollapsedStrip(bool),
    SetManageCrossAxisClearance(bool),
    /// Text direction for every splitter
    SetRtl(bool),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Panel messages (expand, tabs, resize)
    Panel(PanelId, PanelMsg),
    /// Splitter messages (drag, keyboard)
    Splitter(SplitterId, SplitterMsg),
    /// Layout messages (membership, options)
    Layout(LayoutMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn expand(id: PanelId) -> Self {
        Msg::Panel(id, PanelMsg::Expand)
    }

    pub fn collapse(id: PanelId) -> Self {
        Msg::Panel(id, PanelMsg::Collapse)
    }

    pub fn toggle(id: PanelId) -> Self {
        Msg::Panel(id, PanelMsg::Toggle)
    }

    pub fn select_tab(id: PanelId, index: usize) -> Self {
        Msg::Panel(id, PanelMsg::SelectTab(index))
    }

    pub fn splitter_key(id: SplitterId, press: KeyPress) -> Self {
        Msg::Splitter(id, SplitterMsg::KeyDown(press))
    }
}
