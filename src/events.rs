//! Outbound event payloads
//!
//! These are what collaborators observe: each panel exposes tab-change,
//! state-change and size-change streams, the layout publishes offset
//! changes, and each splitter publishes partition changes.

use serde::Serialize;

use crate::layout::{CrossAxisOffsets, Offsets};
use crate::panel::{DockSide, PanelId, PanelTab};
use crate::splitter::SplitterId;

/// Emitted when the active tab changes through selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabChangeEvent {
    pub index: usize,
    pub tab: PanelTab,
    pub previous_index: usize,
}

/// Emitted on expand/collapse
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateChangeEvent {
    pub expanded: bool,
    pub active_tab_index: usize,
    pub size: f64,
    pub side: DockSide,
}

/// Emitted on every size change; `is_resizing` is false for final values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResizeEvent {
    pub size: f64,
    pub side: DockSide,
    pub is_resizing: bool,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelEvent {
    TabChange(TabChangeEvent),
    StateChange(StateChangeEvent),
    SizeChange(ResizeEvent),
    BackdropClick,
}

impl PanelEvent {
    /// Whether this event changes what the layout aggregator reads
    pub fn affects_layout(&self) -> bool {
        matches!(self, PanelEvent::StateChange(_) | PanelEvent::SizeChange(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutEvent {
    /// Aggregate margins for sibling content changed
    OffsetsChanged { offsets: Offsets, margin: String },
    /// A panel received new cross-axis clearance
    CrossAxisChanged {
        panel: PanelId,
        offsets: CrossAxisOffsets,
    },
}

/// Emitted whenever the splitter partition changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizesChangeEvent {
    pub sizes: [f64; 2],
    pub is_resizing: bool,
}

/// Any event published by the workspace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Event {
    Panel { id: PanelId, event: PanelEvent },
    Layout { event: LayoutEvent },
    Splitter { id: SplitterId, event: SizesChangeEvent },
}

impl Event {
    pub fn panel(id: PanelId, event: PanelEvent) -> Self {
        Event::Panel { id, event }
    }

    pub fn layout(event: LayoutEvent) -> Self {
        Event::Layout { event }
    }

    pub fn splitter(id: SplitterId, event: SizesChangeEvent) -> Self {
        Event::Splitter { id, event }
    }
}
