//! Tool system for dosh.
//!
//! Builtin commands are tools: each implements [`Tool`] and runs to
//! completion within one scheduler iteration. Commands that need to wait for
//! input are applications (see [`crate::apps`]) and run as processes instead.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! ├── Shell      (help, exit, echo, version, date, time)
//! ├── Files      (cd, dir, md, rd, type, delete, force_dlt, drives)
//! └── Processes  (ps, fg)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolArgs, ToolSchema};

#[cfg(test)]
pub(crate) use context::testing::TestEnv;
