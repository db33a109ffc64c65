//! Execution context for tools.

use std::collections::BTreeMap;

use crate::apps::AppRegistry;
use crate::scheduler::ProcessTable;
use crate::vfs::VirtualFs;

use super::registry::ToolRegistry;

/// Execution context passed to tools.
///
/// Borrows the kernel's state for the duration of one builtin call.
pub struct ExecContext<'a> {
    /// Filesystem and session (current drive/dir).
    pub vfs: &'a mut VirtualFs,
    /// Process table, for `ps` and `fg`.
    pub processes: &'a mut ProcessTable,
    /// Builtins, for `help`.
    pub tools: &'a ToolRegistry,
    /// Applications, for `help`.
    pub apps: &'a AppRegistry,
    /// Alias → command name.
    pub aliases: &'a BTreeMap<String, String>,
    /// System name shown in banners and `version`.
    pub system_name: &'a str,
    shutdown: bool,
}

impl<'a> ExecContext<'a> {
    pub fn new(
        vfs: &'a mut VirtualFs,
        processes: &'a mut ProcessTable,
        tools: &'a ToolRegistry,
        apps: &'a AppRegistry,
        aliases: &'a BTreeMap<String, String>,
        system_name: &'a str,
    ) -> Self {
        Self {
            vfs,
            processes,
            tools,
            apps,
            aliases,
            system_name,
            shutdown: false,
        }
    }

    /// Ask the kernel to stop after this iteration.
    pub fn request_shutdown(&mut self) {
        self.shutdown = true;
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown
    }

    /// Aliases that point at `command`, sorted.
    pub fn aliases_for(&self, command: &str) -> Vec<&str> {
        self.aliases
            .iter()
            .filter(|(_, target)| target.as_str() == command)
            .map(|(alias, _)| alias.as_str())
            .collect()
    }
}
