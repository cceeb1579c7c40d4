//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! layout and resize state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=dockyard::splitter=trace` - module-level filtering, including drag frames
//!
//! # Log Files
//!
//! Logs are written to `~/.config/dockyard/logs/dockyard.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Workspace;
use crate::panel::PanelId;
use crate::splitter::SplitterId;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. File logging
/// writes to `~/.config/dockyard/logs/dockyard.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so stdout stays clean for reports
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "dockyard.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of layout state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub margin: String,
    pub panels: Vec<PanelInfo>,
    pub splitters: Vec<(SplitterId, [f64; 2])>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub id: PanelId,
    pub expanded: bool,
    pub size: f64,
    pub active_tab: usize,
    pub resizing: bool,
}

impl LayoutSnapshot {
    pub fn from_workspace(workspace: &Workspace) -> Self {
        Self {
            margin: workspace.layout.margin_style(),
            panels: workspace
                .layout
                .panels()
                .map(|p| PanelInfo {
                    id: p.id(),
                    expanded: p.is_expanded(),
                    size: p.size(),
                    active_tab: p.active_tab_index(),
                    resizing: p.is_resizing(),
                })
                .collect(),
            splitters: workspace.splitters().map(|s| (s.id(), s.sizes())).collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        if self.panels.len() != other.panels.len() {
            return Some(format!(
                "panel count: {} → {}",
                self.panels.len(),
                other.panels.len()
            ));
        }

        let mut changes = Vec::new();
        if self.margin != other.margin {
            changes.push(format!("margin: {} → {}", self.margin, other.margin));
        }
        for (before, after) in self.panels.iter().zip(&other.panels) {
            if before.expanded != after.expanded {
                let state = if after.expanded { "expanded" } else { "collapsed" };
                changes.push(format!("{}: {}", after.id, state));
            }
            if before.size != after.size {
                changes.push(format!("{}: size {} → {}", after.id, before.size, after.size));
            }
            if before.active_tab != after.active_tab {
                changes.push(format!(
                    "{}: tab {} → {}",
                    after.id, before.active_tab, after.active_tab
                ));
            }
            if before.resizing != after.resizing {
                let state = if after.resizing { "started" } else { "ended" };
                changes.push(format!("{}: resize {}", after.id, state));
            }
        }
        for (before, after) in self.splitters.iter().zip(&other.splitters) {
            if before.1 != after.1 {
                changes.push(format!("{}: {:?} → {:?}", after.0, before.1, after.1));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
