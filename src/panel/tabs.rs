//! Panel tabs: projected and programmatic tab lists

use serde::{Deserialize, Serialize};

/// A tab shown in a panel's tab strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PanelTab {
    /// Stable id; projected tabs without one get `projected-{index}`
    #[serde(default)]
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// Opaque host payload, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl PanelTab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Accessible name, falling back to the label
    pub fn aria_label(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.label)
    }
}

/// The two tab sources of a panel
///
/// Projected tabs come from the rendering layer's content, programmatic
/// tabs from configuration. The visible set is projected followed by
/// programmatic, with disabled tabs removed.
#[derive(Debug, Clone, Default)]
pub struct TabSet {
    projected: Vec<PanelTab>,
    programmatic: Vec<PanelTab>,
}

impl TabSet {
    pub fn new(programmatic: Vec<PanelTab>) -> Self {
        Self {
            projected: Vec::new(),
            programmatic,
        }
    }

    /// Replace the projected tabs, assigning fallback ids where missing
    pub fn set_projected(&mut self, tabs: Vec<PanelTab>) {
        self.projected = tabs
            .into_iter()
            .enumerate()
            .map(|(index, mut tab)| {
                if tab.id.is_empty() {
                    tab.id = format!("projected-{}", index);
                }
                tab
            })
            .collect();
    }

    pub fn set_programmatic(&mut self, tabs: Vec<PanelTab>) {
        self.programmatic = tabs;
    }

    /// Visible (non-disabled) tabs in display order
    pub fn visible(&self) -> impl Iterator<Item = &PanelTab> {
        self.projected
            .iter()
            .chain(self.programmatic.iter())
            .filter(|tab| !tab.disabled)
    }

    /// Number of visible tabs
    pub fn len(&self) -> usize {
        self.visible().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visible tab at an index
    pub fn get(&self, index: usize) -> Option<&PanelTab> {
        self.visible().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_order_and_filtering() {
        let mut tabs = TabSet::new(vec![
            PanelTab::new("settings", "Settings"),
            PanelTab::new("hidden", "Hidden").disabled(),
        ]);
        tabs.set_projected(vec![PanelTab {
            label: "Explorer".into(),
            ..Default::default()
        }]);

        let ids: Vec<&str> = tabs.visible().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["projected-0", "settings"]);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs.get(1).map(|t| t.label.as_str()), Some("Settings"));
        assert!(tabs.get(2).is_none());
    }

    #[test]
    fn test_aria_label_falls_back_to_label() {
        let tab = PanelTab::new("a", "Search");
        assert_eq!(tab.aria_label(), "Search");
    }
}
