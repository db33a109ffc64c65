//! fg: Bring a process to the foreground.

use async_trait::async_trait;
use dosh_types::{ExecResult, ProcessId};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Fg tool: hand the foreground (and future input) to a live process.
pub struct Fg;

#[async_trait]
impl Tool for Fg {
    fn name(&self) -> &str {
        "fg"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("fg", "Bring a process to the foreground").usage("fg <pid>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(raw) = args.get(0) else {
            return self.schema().usage_error();
        };
        let Ok(id) = raw.parse::<u64>().map(ProcessId) else {
            return ExecResult::failure(1, format!("fg: invalid process id: {}", raw));
        };

        if !ctx.processes.set_foreground(id) {
            return ExecResult::failure(1, format!("fg: no such running process: {}", id));
        }
        let name = ctx
            .processes
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        ExecResult::success(format!("[{}] {} is now in the foreground", id, name))
    }
}
