//! Layout coordinator
//!
//! `DockLayout` owns the panels of one container. It keeps a snapshot per
//! panel keyed by `PanelId`, recomputes the aggregate margin for sibling
//! content whenever a snapshot changes, and writes cross-axis clearance
//! back onto each panel. Panels never see each other.

mod cross_axis;
mod offsets;

pub use cross_axis::{cross_axis_for_side, distribute, CrossAxisOffsets};
pub use offsets::{aggregate_offsets, sum_for_side, AnchoredPushMode, LayoutOptions, Offsets, PanelSnapshot};

use crate::error::{LayoutError, Result};
use crate::events::{LayoutEvent, PanelEvent};
use crate::panel::{DockPanel, PanelConfig, PanelId, PanelTab};

#[derive(Debug, Clone, Default)]
pub struct DockLayout {
    options: LayoutOptions,
    /// Panels in attachment order
    panels: Vec<DockPanel>,
    /// Last captured snapshot per panel, same order as `panels`
    snapshots: Vec<(PanelId, PanelSnapshot)>,
    offsets: Offsets,
    next_id: u64,
}

impl DockLayout {
    pub fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Current aggregate margin for sibling content
    pub fn offsets(&self) -> Offsets {
        self.offsets
    }

    /// Margin as a CSS shorthand string
    pub fn margin_style(&self) -> String {
        self.offsets.margin_shorthand()
    }

    pub fn snapshots(&self) -> &[(PanelId, PanelSnapshot)] {
        &self.snapshots
    }

    pub fn panels(&self) -> impl Iterator<Item = &DockPanel> {
        self.panels.iter()
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel(&self, id: PanelId) -> Option<&DockPanel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    /// Panel mutation must be followed by a snapshot refresh, so only
    /// `update` reaches this.
    pub(crate) fn panel_mut(&mut self, id: PanelId) -> Option<&mut DockPanel> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }

    fn allocate_id(&mut self) -> PanelId {
        self.next_id += 1;
        PanelId(self.next_id)
    }

    // ------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------

    /// Create a panel inside this layout
    ///
    /// The panel is marked layout-managed and inherits the layout's
    /// anchoring. Returns its id and any layout events the new membership
    /// produced.
    pub fn attach_panel(
        &mut self,
        config: PanelConfig,
        tabs: Vec<PanelTab>,
    ) -> (PanelId, Vec<LayoutEvent>) {
        let id = self.allocate_id();
        let mut panel = DockPanel::new(id, config, tabs);
        panel.set_layout_managed(true);
        panel.set_global_anchored(self.options.global_anchored);
        tracing::debug!(panel = %id, side = %panel.side(), "panel attached");
        self.panels.push(panel);
        (id, self.recapture_all())
    }

    /// Remove a panel from this layout
    ///
    /// Callers finish any gesture with `DockPanel::teardown` first; the
    /// detached panel is returned unmanaged.
    pub fn detach_panel(&mut self, id: PanelId) -> Result<(DockPanel, Vec<LayoutEvent>)> {
        let index = self
            .panels
            .iter()
            .position(|p| p.id() == id)
            .ok_or(LayoutError::UnknownPanel(id))?;
        let mut panel = self.panels.remove(index);
        panel.set_layout_managed(false);
        panel.set_global_anchored(false);
        tracing::debug!(panel = %id, "panel detached");
        Ok((panel, self.recapture_all()))
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// Feed a panel's event to the coordinator
    ///
    /// State and size changes patch that panel's snapshot and recompute
    /// derived offsets; other events are ignored.
    pub fn observe(&mut self, id: PanelId, event: &PanelEvent) -> Vec<LayoutEvent> {
        if !event.affects_layout() {
            return Vec::new();
        }
        self.refresh_panel(id)
    }

    /// Recapture one panel's snapshot and recompute derived offsets
    pub fn refresh_panel(&mut self, id: PanelId) -> Vec<LayoutEvent> {
        let Some(snapshot) = self.panel(id).map(DockPanel::snapshot) else {
            return Vec::new();
        };
        match self.snapshots.iter_mut().find(|(key, _)| *key == id) {
            Some((_, slot)) => *slot = snapshot,
            None => self.snapshots.push((id, snapshot)),
        }
        self.recompute()
    }

    fn recapture_all(&mut self) -> Vec<LayoutEvent> {
        self.snapshots = self.panels.iter().map(|p| (p.id(), p.snapshot())).collect();
        self.recompute()
    }

    /// Recompute aggregate and cross-axis offsets from the snapshots
    fn recompute(&mut self) -> Vec<LayoutEvent> {
        let mut events = Vec::new();

        let snaps: Vec<PanelSnapshot> = self.snapshots.iter().map(|(_, s)| *s).collect();
        let offsets = aggregate_offsets(&snaps, &self.options);
        if offsets != self.offsets {
            tracing::debug!(target: "layout", from = %self.offsets, to = %offsets, "offsets changed");
            self.offsets = offsets;
            events.push(LayoutEvent::OffsetsChanged {
                offsets,
                margin: offsets.margin_shorthand(),
            });
        }

        let sides = self.panels.iter().map(|p| (p.id(), p.side()));
        let distributed = distribute(sides, &offsets, self.options.manage_cross_axis_clearance);
        for (id, cross) in distributed {
            if let Some(panel) = self.panel_mut(id) {
                if panel.set_cross_axis_offsets(cross) {
                    events.push(LayoutEvent::CrossAxisChanged {
                        panel: id,
                        offsets: cross,
                    });
                }
            }
        }

        events
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    pub fn set_options(&mut self, options: LayoutOptions) -> Vec<LayoutEvent> {
        let anchored = options.global_anchored;
        self.options = options;
        for panel in &mut self.panels {
            panel.set_global_anchored(anchored);
        }
        self.recompute()
    }

    /// Change anchoring and propagate it to every attached panel
    pub fn set_global_anchored(&mut self, anchored: bool) -> Vec<LayoutEvent> {
        self.options.global_anchored = anchored;
        for panel in &mut self.panels {
            panel.set_global_anchored(anchored);
        }
        self.recompute()
    }

    pub fn set_global_anchored_push_mode(&mut self, mode: AnchoredPushMode) -> Vec<LayoutEvent> {
        self.options.global_anchored_push_mode = mode;
        self.recompute()
    }

    pub fn set_include_collapsed_strip(&mut self, include: bool) -> Vec<LayoutEvent> {
        self.options.include_collapsed_strip_in_offset = include;
        self.recompute()
    }

    pub fn set_manage_cross_axis_clearance(&mut self, enabled: bool) -> Vec<LayoutEvent> {
        self.options.manage_cross_axis_clearance = enabled;
        self.recompute()
    }

    /// Validate coordinator invariants in debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert_eq!(
            self.panels.len(),
            self.snapshots.len(),
            "snapshot count out of sync with panels"
        );
        for panel in &self.panels {
            panel.assert_invariants();
            assert!(panel.is_layout_managed(), "{} not layout-managed", panel.id());
            let snapshot = self
                .snapshots
                .iter()
                .find(|(id, _)| *id == panel.id())
                .map(|(_, s)| *s);
            assert_eq!(snapshot, Some(panel.snapshot()), "{} snapshot is stale", panel.id());
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
