//! Workspace configuration
//!
//! Describes panels, splitters and coordinator options in YAML. The default
//! location is `~/.config/dockyard/workspace.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::LayoutOptions;
use crate::panel::{PanelConfig, PanelTab};
use crate::splitter::{SplitterConfig, SplitterPane};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse workspace config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// One panel entry: its options plus programmatic tabs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelEntry {
    #[serde(flatten)]
    pub config: PanelConfig,
    #[serde(default)]
    pub tabs: Vec<PanelTab>,
}

/// One splitter entry: its options plus the panes it divides
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitterEntry {
    #[serde(flatten)]
    pub config: SplitterConfig,
    #[serde(default = "default_panes")]
    pub panes: Vec<SplitterPane>,
}

fn default_panes() -> Vec<SplitterPane> {
    vec![SplitterPane::default(), SplitterPane::default()]
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Right-to-left text direction
    pub rtl: bool,
    pub layout: LayoutOptions,
    pub panels: Vec<PanelEntry>,
    pub splitters: Vec<SplitterEntry>,
}

impl WorkspaceConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!("Loaded workspace config from {}", path.display());
        Ok(config)
    }

    /// Load the default workspace file, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::workspace_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Workspace file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AnchoredPushMode;
    use crate::panel::DockSide;
    use crate::splitter::SplitterLayout;

    #[test]
    fn test_empty_document_is_default() {
        let config = WorkspaceConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, WorkspaceConfig::default());
        assert!(config.layout.include_collapsed_strip_in_offset);
    }

    #[test]
    fn test_full_document() {
        let yaml = r#"
rtl: true
layout:
  global_anchored: true
  global_anchored_push_mode: collapsed
panels:
  - side: right
    mode: overlay
    has_backdrop: true
    tabs:
      - id: files
        label: Files
      - id: search
        label: Search
        disabled: true
splitters:
  - layout: vertical
    panel_sizes: [30, 70]
    panes:
      - id: top
      - id: bottom
        aria_label: Output
"#;
        let config = WorkspaceConfig::from_yaml_str(yaml).unwrap();
        assert!(config.rtl);
        assert_eq!(config.layout.global_anchored_push_mode, AnchoredPushMode::Collapsed);
        assert_eq!(config.panels[0].config.side, DockSide::Right);
        assert_eq!(config.panels[0].config.initial_size, 320.0);
        assert_eq!(config.panels[0].tabs.len(), 2);
        assert!(config.panels[0].tabs[1].disabled);
        assert_eq!(config.splitters[0].config.layout, SplitterLayout::Vertical);
        assert_eq!(config.splitters[0].config.step, 2.0);
        assert_eq!(config.splitters[0].panes[1].aria_label.as_deref(), Some("Output"));
    }

    #[test]
    fn test_splitter_panes_default_to_two() {
        let config = WorkspaceConfig::from_yaml_str("splitters:\n  - step: 5").unwrap();
        assert_eq!(config.splitters[0].panes.len(), 2);
    }

    #[test]
    fn test_parse_error() {
        let err = WorkspaceConfig::from_yaml_str("panels: 12").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
