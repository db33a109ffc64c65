//! Cooperative process scheduling for dosh.
//!
//! Applications run as processes: boxed [`Task`]s stepped one at a time by
//! the kernel. Nothing runs in parallel; a task yields by returning from
//! [`Task::step`].
//!
//! # Lifecycle
//!
//! ```text
//!            suspend                     input
//! Running ───────────▶ WaitingForInput ───────▶ Running
//!    │
//!    ├── completed ──▶ Terminated
//!    └── fault/panic ─▶ Terminated
//! ```
//!
//! The [`ProcessTable`] holds every process and the single foreground
//! designation. Only the foreground process ever receives input.

mod table;
mod task;

pub use table::{Process, ProcessTable};
pub use task::{Step, Task, TaskContext};
