//! Runtime module - command execution and scheduling
//!
//! - `app` - the `Runtime` driver: microtasks, frame coalescing, captures
//!   and event subscribers

pub mod app;

pub use app::{Runtime, SubscriberId};
