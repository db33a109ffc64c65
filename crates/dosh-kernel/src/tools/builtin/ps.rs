//! ps: List processes.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Ps tool: one line per process, terminated ones included.
pub struct Ps;

#[async_trait]
impl Tool for Ps {
    fn name(&self) -> &str {
        "ps"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ps", "List processes")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let processes = ctx.processes.list();
        if processes.is_empty() {
            return ExecResult::success("No processes.");
        }

        let mut lines = vec![format!("{:>5}  {:<10} {:<2} {}", "PID", "STATE", "FG", "NAME")];
        for p in processes {
            let fg = if p.foreground { "*" } else { "" };
            lines.push(format!("{:>5}  {:<10} {:<2} {}", p.id, p.state.to_string(), fg, p.name));
        }
        ExecResult::success(lines.join("\n"))
    }
}
