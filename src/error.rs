//! Error types for workspace construction and message routing

use thiserror::Error;

use crate::panel::PanelId;
use crate::splitter::SplitterId;

/// Errors raised by the layout engine
///
/// Out-of-range input (tab indices, sizes, pointer deltas) is clamped or
/// ignored and never ends up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A splitter was configured with other than two panes
    #[error("splitter requires exactly two panes, found {found}")]
    SplitterPaneCount { found: usize },

    #[error("unknown panel: {0}")]
    UnknownPanel(PanelId),

    #[error("unknown splitter: {0}")]
    UnknownSplitter(SplitterId),
}

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
