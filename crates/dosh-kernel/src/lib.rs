//! dosh-kernel: the core of the dosh shell.
//!
//! This crate provides:
//!
//! - **VFS**: Drive-letter paths (`A:/docs/readme.txt`) sandboxed onto host
//!   directories discovered under `<root>/devices/<category>/<drive>/`
//! - **Scheduler**: A process table of cooperative tasks, stepped once per
//!   input line, with a single foreground process that owns input
//! - **Tools**: Builtin commands (`dir`, `cd`, `type`, `delete`, ...)
//! - **Apps**: Applications that run as processes (`edit`, `countdown`)
//! - **Dispatch**: Command-line parsing and alias resolution
//! - **Paths / Config**: XDG-compliant locations and `config.toml` loading

pub mod apps;
pub mod config;
pub mod dispatch;
pub mod kernel;
pub mod paths;
pub mod scheduler;
pub mod tools;
pub mod vfs;

pub use config::KernelConfig;
pub use kernel::Kernel;

// Data types shared with front ends
pub use dosh_types::{
    DirEntry, DirEntryKind, ExecResult, ProcessFault, ProcessId, ProcessInfo, ProcessState,
    SpawnError, VfsError, VfsResult,
};
