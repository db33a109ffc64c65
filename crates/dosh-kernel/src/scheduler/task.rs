//! The resumable-step interface applications implement.

use async_trait::async_trait;
use dosh_types::{ExecResult, ProcessFault, ProcessId};

use crate::vfs::VirtualFs;

/// Outcome of one step of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Still running; step again next iteration.
    Continue,
    /// Waiting for a line of input. The next step sees it via [`TaskContext::take_input`].
    SuspendForInput,
    /// Finished normally.
    Completed,
    /// Failed. The process terminates and the fault is reported.
    Faulted(ProcessFault),
}

/// Everything a task can touch during one step.
pub struct TaskContext<'a> {
    pid: ProcessId,
    input: Option<String>,
    vfs: &'a mut VirtualFs,
    out: &'a mut ExecResult,
}

impl<'a> TaskContext<'a> {
    pub fn new(
        pid: ProcessId,
        input: Option<String>,
        vfs: &'a mut VirtualFs,
        out: &'a mut ExecResult,
    ) -> Self {
        Self {
            pid,
            input,
            vfs,
            out,
        }
    }

    /// The running process's id.
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// The input line delivered since the last suspension, if any.
    pub fn take_input(&mut self) -> Option<String> {
        self.input.take()
    }

    pub fn vfs(&mut self) -> &mut VirtualFs {
        self.vfs
    }

    /// Write a line to this iteration's output.
    pub fn print(&mut self, line: impl AsRef<str>) {
        self.out.push_out(line);
    }

    /// Write a line to this iteration's error output.
    pub fn eprint(&mut self, line: impl AsRef<str>) {
        self.out.push_err(line);
    }
}

/// A cooperative computation run as a process.
///
/// `step` is called at most once per scheduler iteration and must return
/// promptly. State that survives between steps lives in the implementor.
#[async_trait]
pub trait Task: Send {
    async fn step(&mut self, ctx: &mut TaskContext<'_>) -> Step;
}
