//! Built-in tools for dosh.
//!
//! These tools are always available and provide core functionality.

mod cd;
mod cmd_info;
mod date;
mod delete;
mod dir;
mod drives;
mod echo;
mod exit;
mod fg;
mod force_dlt;
mod help;
mod log;
mod md;
mod ps;
mod rd;
mod sleep;
mod sysinfo;
mod type_file;
mod version;

use dosh_types::{ExecResult, VfsError};

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cd::Cd);
    registry.register(cmd_info::CmdInfo);
    registry.register(date::Date);
    registry.register(date::Time);
    registry.register(delete::Delete);
    registry.register(dir::Dir);
    registry.register(drives::Drives);
    registry.register(echo::Echo);
    registry.register(exit::Exit);
    registry.register(fg::Fg);
    registry.register(force_dlt::ForceDelete);
    registry.register(help::Help);
    registry.register(log::LogDate);
    registry.register(log::LogTime);
    registry.register(md::Md);
    registry.register(ps::Ps);
    registry.register(rd::Rd);
    registry.register(sleep::Sleep);
    registry.register(sysinfo::SysInfo);
    registry.register(type_file::TypeFile);
    registry.register(version::Version);
}

/// `<command>: <error>` as a failed result.
fn vfs_failure(command: &str, err: VfsError) -> ExecResult {
    ExecResult::failure(1, format!("{}: {}", command, err))
}
