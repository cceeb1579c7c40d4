//! Scripted interaction replay
//!
//! A script is a YAML list of steps, each translated into the messages a
//! host would dispatch for that gesture. Panels and splitters are referred
//! to by the numeric ids they received in configuration order.
//!
//! ```yaml
//! - expand: { panel: 1 }
//! - drag: { panel: 1, from: { x: 320, y: 0 }, to: [{ x: 400, y: 0 }] }
//! - splitter_key: { splitter: 1, key: ArrowLeft, modifiers: [shift] }
//! - layout: { set_global_anchored: true }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::config::ConfigError;
use crate::input::{Extent, Key, KeyPress, Modifiers, Point};
use crate::messages::{LayoutMsg, Msg, PanelMsg, SplitterMsg};
use crate::panel::PanelId;
use crate::runtime::Runtime;
use crate::splitter::SplitterId;

/// How a scripted splitter drag ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptDragEnd {
    #[default]
    PointerUp,
    PointerCancel,
    LostPointerCapture,
    WindowMouseUp,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Expand {
        panel: PanelId,
    },
    Collapse {
        panel: PanelId,
    },
    Toggle {
        panel: PanelId,
    },
    SelectTab {
        panel: PanelId,
        index: usize,
    },
    TabKey {
        panel: PanelId,
        key: Key,
        #[serde(default)]
        index: usize,
    },
    /// Drag the panel's resize handle through a series of samples
    Drag {
        panel: PanelId,
        from: Point,
        #[serde(default)]
        to: Vec<Point>,
    },
    /// Key press on the panel host (Shift+Arrow resizes)
    ResizeKey {
        panel: PanelId,
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    BackdropClick {
        panel: PanelId,
    },
    /// Drag the splitter handle; one animation frame fires per sample
    SplitterDrag {
        splitter: SplitterId,
        extent: Extent,
        from: Point,
        #[serde(default)]
        to: Vec<Point>,
        #[serde(default)]
        end: ScriptDragEnd,
    },
    SplitterKey {
        splitter: SplitterId,
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Reset {
        splitter: SplitterId,
    },
    Layout(LayoutMsg),
}

impl Step {
    /// Play this step against a runtime, then drain microtasks
    pub fn apply(&self, runtime: &mut Runtime) {
        match self {
            Step::Expand { panel } => runtime.dispatch(Msg::expand(*panel)),
            Step::Collapse { panel } => runtime.dispatch(Msg::collapse(*panel)),
            Step::Toggle { panel } => runtime.dispatch(Msg::toggle(*panel)),
            Step::SelectTab { panel, index } => runtime.dispatch(Msg::select_tab(*panel, *index)),
            Step::TabKey { panel, key, index } => runtime.dispatch(Msg::Panel(
                *panel,
                PanelMsg::TabStripKey {
                    key: *key,
                    index: *index,
                },
            )),
            Step::Drag { panel, from, to } => {
                runtime.dispatch(Msg::Panel(*panel, PanelMsg::BeginResize(*from)));
                for point in to {
                    runtime.dispatch(Msg::Panel(*panel, PanelMsg::UpdateResize(*point)));
                }
                runtime.dispatch(Msg::Panel(*panel, PanelMsg::EndResize));
            }
            Step::ResizeKey {
                panel,
                key,
                modifiers,
            } => runtime.dispatch(Msg::Panel(
                *panel,
                PanelMsg::HostKey(KeyPress::new(*key, *modifiers)),
            )),
            Step::BackdropClick { panel } => {
                runtime.dispatch(Msg::Panel(*panel, PanelMsg::BackdropClick))
            }
            Step::SplitterDrag {
                splitter,
                extent,
                from,
                to,
                end,
            } => {
                let id = *splitter;
                runtime.dispatch(Msg::Splitter(
                    id,
                    SplitterMsg::PointerDown {
                        pointer: *from,
                        extent: *extent,
                    },
                ));
                for point in to {
                    runtime.dispatch(Msg::Splitter(id, SplitterMsg::PointerMove(*point)));
                    runtime.animation_frame();
                }
                let end = match end {
                    ScriptDragEnd::PointerUp => SplitterMsg::PointerUp,
                    ScriptDragEnd::PointerCancel => SplitterMsg::PointerCancel,
                    ScriptDragEnd::LostPointerCapture => SplitterMsg::LostPointerCapture,
                    ScriptDragEnd::WindowMouseUp => SplitterMsg::WindowMouseUp,
                };
                runtime.dispatch(Msg::Splitter(id, end));
            }
            Step::SplitterKey {
                splitter,
                key,
                modifiers,
            } => runtime.dispatch(Msg::splitter_key(*splitter, KeyPress::new(*key, *modifiers))),
            Step::Reset { splitter } => runtime.dispatch(Msg::Splitter(*splitter, SplitterMsg::Reset)),
            Step::Layout(msg) => runtime.dispatch(Msg::Layout(msg.clone())),
        }
        runtime.run_microtasks();
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn run(&self, runtime: &mut Runtime) {
        for (i, step) in self.steps.iter().enumerate() {
            tracing::debug!(step = i, ?step, "replaying");
            step.apply(runtime);
        }
    }
}
