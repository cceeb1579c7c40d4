//! Workspace state
//!
//! The workspace holds one layout coordinator with its panels and any
//! number of splitters. It is the single model `update` mutates.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::commands::Cmd;
use crate::config::WorkspaceConfig;
use crate::error::{LayoutError, Result};
use crate::events::{Event, LayoutEvent};
use crate::layout::{CrossAxisOffsets, DockLayout, LayoutOptions, Offsets};
use crate::messages::{Msg, PanelMsg};
use crate::panel::{DockPanel, DockSide, PanelConfig, PanelId, PanelMode, PanelTab};
use crate::splitter::{Splitter, SplitterConfig, SplitterId, SplitterPane};

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub layout: DockLayout,
    splitters: BTreeMap<SplitterId, Splitter>,
    rtl: bool,
    next_splitter_id: u64,
    /// Counter behind `splitter-panel-{n}` pane ids
    next_pane_id: u64,
}

impl Workspace {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            layout: DockLayout::new(options),
            ..Default::default()
        }
    }

    /// Build a workspace from configuration
    ///
    /// Returns the commands produced while attaching (initial layout events
    /// and deferred auto-focus expansions).
    pub fn from_config(config: &WorkspaceConfig) -> Result<(Self, Option<Cmd>)> {
        let mut workspace = Self::new(config.layout.clone());
        workspace.rtl = config.rtl;

        let mut cmds = Vec::new();
        for entry in &config.panels {
            let (_, cmd) = workspace.attach_panel(entry.config.clone(), entry.tabs.clone());
            cmds.extend(cmd);
        }
        for entry in &config.splitters {
            workspace.add_splitter(entry.config.clone(), entry.panes.clone())?;
        }
        Ok((workspace, Cmd::batch(cmds)))
    }

    pub fn is_rtl(&self) -> bool {
        self.rtl
    }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
        for splitter in self.splitters.values_mut() {
            splitter.set_rtl(rtl);
        }
    }

    // ------------------------------------------------------------------
    // Panels
    // ------------------------------------------------------------------

    /// Attach a panel to the layout
    ///
    /// A panel with `auto_focus` and at least one visible tab is expanded
    /// at the next microtask, once its tabs have settled.
    pub fn attach_panel(&mut self, config: PanelConfig, tabs: Vec<PanelTab>) -> (PanelId, Option<Cmd>) {
        let (id, events) = self.layout.attach_panel(config, tabs);
        let mut cmds = layout_cmds(events);

        let wants_focus = self
            .layout
            .panel(id)
            .is_some_and(|p| p.config().auto_focus && !p.tabs().is_empty());
        if wants_focus {
            cmds.push(Cmd::defer(Msg::Panel(id, PanelMsg::Expand)));
        }
        if !cmds.is_empty() {
            cmds.push(Cmd::Redraw);
        }
        (id, Cmd::batch(cmds))
    }

    pub fn panel(&self, id: PanelId) -> Option<&DockPanel> {
        self.layout.panel(id)
    }

    // ------------------------------------------------------------------
    // Splitters
    // ------------------------------------------------------------------

    /// Add a splitter over exactly two panes
    ///
    /// Panes without an id get `splitter-panel-{n}`.
    pub fn add_splitter(&mut self, config: SplitterConfig, mut panes: Vec<SplitterPane>) -> Result<SplitterId> {
        if panes.len() != 2 {
            return Err(LayoutError::SplitterPaneCount { found: panes.len() });
        }
        for pane in &mut panes {
            if pane.id.is_empty() {
                self.next_pane_id += 1;
                pane.id = format!("splitter-panel-{}", self.next_pane_id);
            }
        }

        self.next_splitter_id += 1;
        let id = SplitterId(self.next_splitter_id);
        let mut splitter = Splitter::new(id, config, panes)?;
        splitter.set_rtl(self.rtl);
        tracing::debug!(splitter = %id, sizes = ?splitter.sizes(), "splitter added");
        self.splitters.insert(id, splitter);
        Ok(id)
    }

    pub fn remove_splitter(&mut self, id: SplitterId) -> Result<Splitter> {
        self.splitters.remove(&id).ok_or(LayoutError::UnknownSplitter(id))
    }

    pub fn splitter(&self, id: SplitterId) -> Option<&Splitter> {
        self.splitters.get(&id)
    }

    pub(crate) fn splitter_mut(&mut self, id: SplitterId) -> Option<&mut Splitter> {
        self.splitters.get_mut(&id)
    }

    pub fn splitters(&self) -> impl Iterator<Item = &Splitter> {
        self.splitters.values()
    }

    pub fn splitter_ids(&self) -> Vec<SplitterId> {
        self.splitters.keys().copied().collect()
    }

    /// Serializable view of the current state
    pub fn report(&self) -> WorkspaceReport {
        WorkspaceReport {
            rtl: self.rtl,
            offsets: self.layout.offsets(),
            margin: self.layout.margin_style(),
            panels: self.layout.panels().map(PanelReport::from_panel).collect(),
            splitters: self
                .splitters
                .values()
                .map(|s| SplitterReport {
                    id: s.id(),
                    sizes: s.sizes(),
                    resizing: s.is_resizing(),
                })
                .collect(),
        }
    }

    /// Validate internal invariants in debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        self.layout.assert_invariants();
        for (id, splitter) in &self.splitters {
            assert_eq!(*id, splitter.id(), "splitter keyed under wrong id");
            assert_eq!(splitter.is_rtl(), self.rtl, "{} text direction out of sync", id);
            splitter.assert_invariants();
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

/// Wrap layout events as emit commands
pub(crate) fn layout_cmds(events: Vec<LayoutEvent>) -> Vec<Cmd> {
    events
        .into_iter()
        .map(|e| Cmd::Emit(Event::layout(e)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceReport {
    pub rtl: bool,
    pub offsets: Offsets,
    pub margin: String,
    pub panels: Vec<PanelReport>,
    pub splitters: Vec<SplitterReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    pub id: PanelId,
    pub side: DockSide,
    pub mode: PanelMode,
    pub expanded: bool,
    pub size: f64,
    pub active_tab_index: usize,
    pub animation_state: String,
    pub cross_axis: CrossAxisOffsets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_position: Option<String>,
}

impl PanelReport {
    fn from_panel(panel: &DockPanel) -> Self {
        Self {
            id: panel.id(),
            side: panel.side(),
            mode: panel.mode(),
            expanded: panel.is_expanded(),
            size: panel.size(),
            active_tab_index: panel.active_tab_index(),
            animation_state: panel.animation_state().to_string(),
            cross_axis: panel.cross_axis_offsets(),
            fixed_position: panel.fixed_position_style(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitterReport {
    pub id: SplitterId,
    pub sizes: [f64; 2],
    pub resizing: bool,
}
