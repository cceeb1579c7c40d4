//! Command-line argument parsing
//!
//! Supports:
//! - Loading a workspace config (or the default one)
//! - Replaying a script of interaction steps
//! - Pretty-printing the JSON report

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::config::{ConfigError, WorkspaceConfig};
use crate::events::Event;
use crate::model::WorkspaceReport;
use crate::script::Script;

/// Replay panel and splitter interactions and report the resulting layout
#[derive(Parser, Debug)]
#[command(
    name = "dockyard",
    version,
    about = "Replay panel and splitter interactions and report the resulting layout"
)]
pub struct CliArgs {
    /// Workspace config (defaults to ~/.config/dockyard/workspace.yaml)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// YAML script of interaction steps to replay
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pub pretty: bool,
}

impl CliArgs {
    /// Resolve the workspace config: an explicit path must load, the
    /// default location falls back to defaults
    pub fn load_config(&self) -> Result<WorkspaceConfig, ConfigError> {
        match &self.config {
            Some(path) => WorkspaceConfig::from_path(path),
            None => Ok(WorkspaceConfig::load()),
        }
    }

    pub fn load_script(&self) -> Result<Script, ConfigError> {
        match &self.script {
            Some(path) => Script::from_path(path),
            None => Ok(Script::default()),
        }
    }
}

/// Everything printed by the binary
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub workspace: WorkspaceReport,
    pub events: Vec<Event>,
}
