//! dockyard - dockable panels and a two-pane splitter
//!
//! This crate provides the layout-and-resize engine behind drawer panels
//! docked on a container's edges and a percentage splitter, implementing
//! the Elm Architecture pattern: `Msg` → `update` → `Cmd`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod events;
pub mod input;
pub mod layout;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod script;
pub mod splitter;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkspaceConfig;
pub use error::LayoutError;
pub use events::Event;
pub use messages::Msg;
pub use model::Workspace;
pub use runtime::Runtime;
