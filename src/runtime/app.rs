//! Deterministic command driver
//!
//! `Runtime` owns the workspace and executes the commands `update` returns.
//! It has no threads or timers: the host calls `run_microtasks` after each
//! input turn and `animation_frame` once per display frame.

use std::collections::{BTreeSet, VecDeque};

use crate::commands::{CaptureTarget, Cmd};
use crate::config::WorkspaceConfig;
use crate::error::Result;
use crate::events::Event;
use crate::messages::{LayoutMsg, Msg, SplitterMsg};
use crate::model::Workspace;
use crate::panel::{PanelConfig, PanelId, PanelTab};
use crate::splitter::SplitterId;
use crate::update::update;

/// Handle returned by `Runtime::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&Event)>;

pub struct Runtime {
    model: Workspace,
    microtasks: VecDeque<Msg>,
    /// Splitters waiting for the next frame, in request order
    frame_requests: Vec<SplitterId>,
    captures: BTreeSet<CaptureTarget>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: u64,
    /// Every event published since the last `take_events`
    emitted: Vec<Event>,
    needs_redraw: bool,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("model", &self.model)
            .field("microtasks", &self.microtasks)
            .field("frame_requests", &self.frame_requests)
            .field("captures", &self.captures)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Runtime {
    pub fn new(model: Workspace) -> Self {
        Self {
            model,
            microtasks: VecDeque::new(),
            frame_requests: Vec::new(),
            captures: BTreeSet::new(),
            subscribers: Vec::new(),
            next_subscriber: 0,
            emitted: Vec::new(),
            needs_redraw: false,
        }
    }

    /// Build the workspace from configuration and run its setup commands
    ///
    /// Deferred work (auto-focus) stays queued until `run_microtasks`.
    pub fn from_config(config: &WorkspaceConfig) -> Result<Self> {
        let (model, cmd) = Workspace::from_config(config)?;
        let mut runtime = Self::new(model);
        if let Some(cmd) = cmd {
            runtime.execute(cmd);
        }
        Ok(runtime)
    }

    pub fn model(&self) -> &Workspace {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Workspace {
        &mut self.model
    }

    // ------------------------------------------------------------------
    // Subscribers
    // ------------------------------------------------------------------

    /// Register a listener called for every published event
    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) -> SubscriberId {
        self.next_subscriber += 1;
        let id = SubscriberId(self.next_subscriber);
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(key, _)| *key != id);
        self.subscribers.len() != before
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Run one message through `update` and execute the resulting commands
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.execute(cmd);
        }
    }

    /// Attach a panel and run its setup commands
    pub fn attach_panel(&mut self, config: PanelConfig, tabs: Vec<PanelTab>) -> PanelId {
        let (id, cmd) = self.model.attach_panel(config, tabs);
        if let Some(cmd) = cmd {
            self.execute(cmd);
        }
        id
    }

    pub fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.needs_redraw = true,
            Cmd::Emit(event) => self.publish(event),
            Cmd::AcquireCapture(target) => {
                tracing::trace!(?target, "capture acquired");
                self.captures.insert(target);
            }
            Cmd::ReleaseCapture(target) => {
                if !self.captures.remove(&target) {
                    tracing::debug!(?target, "release of capture not held");
                }
            }
            Cmd::RequestAnimationFrame(id) => {
                if !self.frame_requests.contains(&id) {
                    self.frame_requests.push(id);
                }
            }
            Cmd::Defer(msg) => self.microtasks.push_back(*msg),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
        }
    }

    fn publish(&mut self, event: Event) {
        for (_, listener) in &mut self.subscribers {
            listener(&event);
        }
        self.emitted.push(event);
    }

    // ------------------------------------------------------------------
    // Scheduling
    // ------------------------------------------------------------------

    /// Drain the microtask queue, including work queued while draining
    ///
    /// Returns the number of messages processed.
    pub fn run_microtasks(&mut self) -> usize {
        let mut processed = 0;
        while let Some(msg) = self.microtasks.pop_front() {
            self.dispatch(msg);
            processed += 1;
        }
        processed
    }

    /// Fire one animation frame for every splitter that asked for it
    pub fn animation_frame(&mut self) {
        let requests = std::mem::take(&mut self.frame_requests);
        for id in requests {
            self.dispatch(Msg::Splitter(id, SplitterMsg::AnimationFrame));
        }
    }

    pub fn pending_microtasks(&self) -> usize {
        self.microtasks.len()
    }

    pub fn pending_frames(&self) -> &[SplitterId] {
        &self.frame_requests
    }

    pub fn captures(&self) -> impl Iterator<Item = &CaptureTarget> {
        self.captures.iter()
    }

    pub fn holds_capture(&self, target: CaptureTarget) -> bool {
        self.captures.contains(&target)
    }

    /// Events published since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.emitted)
    }

    /// Whether a redraw was requested since the last call
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Remove every panel and splitter
    ///
    /// Gestures in progress end with their final events and all captures
    /// are released.
    pub fn shutdown(&mut self) {
        for id in self.model.layout.panel_ids() {
            self.dispatch(Msg::Layout(LayoutMsg::DetachPanel(id)));
        }
        for id in self.model.splitter_ids() {
            self.dispatch(Msg::Layout(LayoutMsg::RemoveSplitter(id)));
        }
        self.frame_requests.clear();
        self.microtasks.clear();
        debug_assert!(self.captures.is_empty(), "captures left after shutdown");
    }
}
