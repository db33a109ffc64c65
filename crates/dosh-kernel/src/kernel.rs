//! The dosh kernel.
//!
//! The Kernel owns and coordinates all core components:
//! - Virtual filesystem (drive table + session)
//! - Process table (applications and the foreground designation)
//! - Command dispatcher (builtins, applications, aliases)
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                          Kernel                            │
//! │  ┌──────────────┐  ┌───────────────────┐  ┌─────────────┐  │
//! │  │  VirtualFs   │  │ CommandDispatcher │  │ ProcessTable│  │
//! │  │ (drives,     │  │ (tools, apps,     │  │ (tasks,     │  │
//! │  │  session)    │  │  aliases)         │  │  foreground)│  │
//! │  └──────────────┘  └───────────────────┘  └─────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # One iteration per line
//!
//! [`Kernel::handle_line`] is the whole scheduler loop body:
//!
//! 1. If the foreground process waits for input, it gets the line.
//!    Otherwise the line is dispatched as a command.
//! 2. Every Running process gets exactly one step, in creation order.

use anyhow::Result;
use dosh_types::{ExecResult, ProcessId, SpawnError};

use crate::apps::{register_apps, AppRegistry};
use crate::config::KernelConfig;
use crate::dispatch::{default_aliases, CommandDispatcher, CommandLine, Dispatch};
use crate::scheduler::ProcessTable;
use crate::tools::{register_builtins, ExecContext, ToolArgs, ToolRegistry};
use crate::vfs::{DriveTable, VirtualFs};

/// Exit code for a command name nothing resolves to.
pub const UNKNOWN_COMMAND_CODE: i64 = 127;

/// The dosh kernel.
pub struct Kernel {
    name: String,
    vfs: VirtualFs,
    processes: ProcessTable,
    dispatcher: CommandDispatcher,
    running: bool,
}

impl Kernel {
    /// Mount drives under `<root>/devices` and build the command catalog.
    ///
    /// Finding no drives is not an error: the kernel runs degraded and every
    /// path operation fails until drives appear and a new kernel is built.
    pub fn new(config: KernelConfig) -> Result<Self> {
        config.validate()?;

        let devices = config.devices_dir();
        let drives = DriveTable::scan(&devices);
        if drives.is_empty() {
            tracing::warn!("no drives mounted from {}", devices.display());
        } else {
            tracing::info!("{} drive(s) mounted from {}", drives.len(), devices.display());
        }
        let vfs = VirtualFs::new(drives).with_trash_dir(config.trash_dir.clone());

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);
        let mut apps = AppRegistry::new();
        register_apps(&mut apps);
        let mut dispatcher = CommandDispatcher::new(tools, apps, default_aliases());
        dispatcher.extend_aliases(config.aliases);

        Ok(Self {
            name: config.name,
            vfs,
            processes: ProcessTable::new(),
            dispatcher,
            running: true,
        })
    }

    /// System name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shell prompt, or `""` while the foreground process waits for input.
    pub fn prompt(&self) -> String {
        if self.awaiting_input() {
            return String::new();
        }
        let mut path = self.vfs.current_path();
        if path.len() > 1 && path.ends_with('/') {
            path.pop();
        }
        format!("{} {}> ", self.name, path)
    }

    /// True if the next line goes to the foreground process.
    pub fn awaiting_input(&self) -> bool {
        self.processes.awaiting_input().is_some()
    }

    /// False once `exit` has run.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop accepting lines.
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    pub fn vfs(&self) -> &VirtualFs {
        &self.vfs
    }

    pub fn vfs_mut(&mut self) -> &mut VirtualFs {
        &mut self.vfs
    }

    pub fn processes(&self) -> &ProcessTable {
        &self.processes
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Run one scheduler iteration for an input line.
    #[tracing::instrument(level = "debug", skip(self, line), fields(line_len = line.len()))]
    pub async fn handle_line(&mut self, line: &str) -> ExecResult {
        if !self.running {
            return ExecResult::failure(1, format!("{} has shut down", self.name));
        }

        let mut result = if self.processes.deliver_input(line) {
            ExecResult::default()
        } else {
            self.dispatch(line).await
        };

        for id in self.processes.runnable() {
            self.processes.resume(id, &mut self.vfs, &mut result).await;
        }

        result
    }

    /// Start an application as a process.
    ///
    /// Background requests for foreground-only applications are refused
    /// before anything is constructed.
    pub fn spawn_app(&mut self, name: &str, args: &ToolArgs, background: bool) -> Result<ProcessId, SpawnError> {
        let app = *self
            .dispatcher
            .apps
            .get(name)
            .ok_or_else(|| SpawnError::UnknownApplication(name.to_string()))?;
        if background && !app.allow_background {
            return Err(SpawnError::BackgroundNotAllowed(app.name.to_string()));
        }

        let task = (app.factory)(args);
        Ok(self.processes.spawn(app.name, task, !background))
    }

    async fn dispatch(&mut self, line: &str) -> ExecResult {
        let Some(cmd) = CommandLine::parse(line) else {
            return ExecResult::default();
        };

        match self.dispatcher.resolve(&cmd.name) {
            Dispatch::Builtin(tool) => {
                let mut ctx = ExecContext::new(
                    &mut self.vfs,
                    &mut self.processes,
                    &self.dispatcher.tools,
                    &self.dispatcher.apps,
                    &self.dispatcher.aliases,
                    &self.name,
                );
                let result = tool.execute(cmd.args, &mut ctx).await;
                let shutdown = ctx.shutdown_requested();
                if shutdown {
                    tracing::info!("shutdown requested");
                    self.running = false;
                }
                result
            }
            Dispatch::Application(app) => match self.spawn_app(app.name, &cmd.args, cmd.background) {
                Ok(id) => ExecResult::success(format!("[{}] Process '{}' started.", id, app.name)),
                Err(e) => ExecResult::failure(1, format!("Error: {}", e)),
            },
            Dispatch::Unknown(_) => ExecResult::failure(
                UNKNOWN_COMMAND_CODE,
                format!("Unknown command: '{}'. Type 'help' for a list of commands.", cmd.name),
            ),
        }
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("name", &self.name)
            .field("path", &self.vfs.current_path())
            .field("running", &self.running)
            .finish()
    }
}
