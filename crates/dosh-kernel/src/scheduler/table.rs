//! The process table.

use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;

use dosh_types::{ExecResult, ProcessFault, ProcessId, ProcessInfo, ProcessState};
use futures::FutureExt;

use super::task::{Step, Task, TaskContext};
use crate::vfs::VirtualFs;

/// A process: a named task plus its scheduling state.
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    state: ProcessState,
    /// Dropped once the process terminates.
    task: Option<Box<dyn Task>>,
    pending_input: Option<String>,
}

impl Process {
    pub fn state(&self) -> ProcessState {
        self.state
    }
}

impl std::fmt::Debug for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Process")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .finish()
    }
}

/// All processes ever started, keyed by id, plus the foreground designation.
///
/// Terminated processes stay listed but are never stepped again. The
/// foreground process, if any, is never terminated.
#[derive(Debug, Default)]
pub struct ProcessTable {
    next_id: u64,
    processes: BTreeMap<ProcessId, Process>,
    foreground: Option<ProcessId>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new Running process. A foreground spawn takes the
    /// foreground designation from whoever held it.
    pub fn spawn(&mut self, name: impl Into<String>, task: Box<dyn Task>, foreground: bool) -> ProcessId {
        let id = ProcessId(self.next_id);
        self.next_id += 1;

        let name = name.into();
        tracing::debug!(pid = id.0, name = %name, foreground, "spawned process");
        self.processes.insert(
            id,
            Process {
                id,
                name,
                state: ProcessState::Running,
                task: Some(task),
                pending_input: None,
            },
        );
        if foreground {
            self.foreground = Some(id);
        }
        id
    }

    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(&id)
    }

    pub fn state(&self, id: ProcessId) -> Option<ProcessState> {
        self.processes.get(&id).map(|p| p.state)
    }

    pub fn foreground(&self) -> Option<ProcessId> {
        self.foreground
    }

    /// Give `id` the foreground. Fails for unknown or terminated processes.
    pub fn set_foreground(&mut self, id: ProcessId) -> bool {
        match self.processes.get(&id) {
            Some(p) if p.state != ProcessState::Terminated => {
                self.foreground = Some(id);
                true
            }
            _ => false,
        }
    }

    /// The foreground process if it is waiting for input.
    pub fn awaiting_input(&self) -> Option<ProcessId> {
        self.foreground
            .filter(|id| self.state(*id) == Some(ProcessState::WaitingForInput))
    }

    /// Hand a line to the waiting foreground process and make it Running.
    ///
    /// Returns false (and keeps the line) when no foreground process waits.
    pub fn deliver_input(&mut self, line: impl Into<String>) -> bool {
        let Some(id) = self.awaiting_input() else {
            return false;
        };
        let Some(process) = self.processes.get_mut(&id) else {
            return false;
        };
        process.pending_input = Some(line.into());
        process.state = ProcessState::Running;
        true
    }

    /// Ids of Running processes in creation order.
    pub fn runnable(&self) -> Vec<ProcessId> {
        self.processes
            .values()
            .filter(|p| p.state == ProcessState::Running)
            .map(|p| p.id)
            .collect()
    }

    /// Snapshot of every process for display.
    pub fn list(&self) -> Vec<ProcessInfo> {
        self.processes
            .values()
            .map(|p| ProcessInfo {
                id: p.id,
                name: p.name.clone(),
                state: p.state,
                foreground: self.foreground == Some(p.id),
            })
            .collect()
    }

    /// Number of processes not yet terminated.
    pub fn live_count(&self) -> usize {
        self.processes
            .values()
            .filter(|p| p.state != ProcessState::Terminated)
            .count()
    }

    /// Give process `id` one step, if it is Running.
    ///
    /// Panics inside the step are caught and treated as a fault. Lifecycle
    /// notices are appended to `out`.
    pub async fn resume(&mut self, id: ProcessId, vfs: &mut VirtualFs, out: &mut ExecResult) {
        let (mut task, input) = match self.processes.get_mut(&id) {
            Some(p) if p.state == ProcessState::Running => match p.task.take() {
                Some(task) => (task, p.pending_input.take()),
                None => return,
            },
            _ => return,
        };

        let step = {
            let mut ctx = TaskContext::new(id, input, vfs, out);
            match AssertUnwindSafe(task.step(&mut ctx)).catch_unwind().await {
                Ok(step) => step,
                Err(payload) => Step::Faulted(ProcessFault::from_panic(payload.as_ref())),
            }
        };

        match step {
            Step::Continue => self.put_back(id, task, ProcessState::Running),
            Step::SuspendForInput => {
                self.put_back(id, task, ProcessState::WaitingForInput);
                if self.foreground != Some(id) {
                    tracing::debug!(pid = id.0, "background process wants input, promoting to foreground");
                    self.foreground = Some(id);
                }
            }
            Step::Completed => {
                drop(task);
                if let Some(name) = self.terminate(id) {
                    out.push_out(format!("[{}] Process '{}' terminated.", id, name));
                }
            }
            Step::Faulted(fault) => {
                drop(task);
                if let Some(name) = self.terminate(id) {
                    tracing::warn!(pid = id.0, "process faulted: {}", fault);
                    out.push_err(format!("[{}] Error in process '{}': {}", id, name, fault));
                }
            }
        }
    }

    fn put_back(&mut self, id: ProcessId, task: Box<dyn Task>, state: ProcessState) {
        if let Some(p) = self.processes.get_mut(&id) {
            p.task = Some(task);
            p.state = state;
        }
    }

    /// Mark terminated, clear foreground if held. Returns the process name.
    fn terminate(&mut self, id: ProcessId) -> Option<String> {
        let p = self.processes.get_mut(&id)?;
        p.state = ProcessState::Terminated;
        p.task = None;
        p.pending_input = None;
        if self.foreground == Some(id) {
            self.foreground = None;
        }
        tracing::debug!(pid = id.0, "process terminated");
        Some(p.name.clone())
    }
}
