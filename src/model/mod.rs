//! Application model - the complete state of the workspace
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod workspace;

pub use workspace::{PanelReport, SplitterReport, Workspace, WorkspaceReport};
