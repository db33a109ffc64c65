//! Process identification and status types.

use serde::{Deserialize, Serialize};

/// Unique identifier for a process. Assigned from 0 upward, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProcessId(pub u64);

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Runnable; receives one step per scheduler iteration.
    Running,
    /// Suspended until the next input line is delivered.
    WaitingForInput,
    /// Finished or faulted. Terminal.
    Terminated,
}

impl std::fmt::Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessState::Running => write!(f, "Running"),
            ProcessState::WaitingForInput => write!(f, "Waiting"),
            ProcessState::Terminated => write!(f, "Terminated"),
        }
    }
}

/// Information about a process for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process ID.
    pub id: ProcessId,
    /// Display name (the command that started it).
    pub name: String,
    /// Current state.
    pub state: ProcessState,
    /// True if this process holds the foreground designation.
    pub foreground: bool,
}
