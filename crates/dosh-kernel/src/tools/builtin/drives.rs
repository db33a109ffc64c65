//! drives: List mounted drives.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Drives;

#[async_trait]
impl Tool for Drives {
    fn name(&self) -> &str {
        "drives"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("drives", "List mounted drives")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let table = ctx.vfs.drives();
        if table.is_empty() {
            return ExecResult::success("No drives mounted.");
        }

        let lines: Vec<String> = table
            .iter()
            .map(|d| format!("{}  {:<10} {:<12} ({})", d.letter, d.kind, d.label, d.category))
            .collect();
        ExecResult::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    #[tokio::test]
    async fn test_drives_lists_metadata() {
        let mut env = TestEnv::new();
        let result = Drives.execute(ToolArgs::new(), &mut env.ctx()).await;
        let lines: Vec<_> = result.out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("A:  system"));
        assert!(lines[0].contains("System"));
        assert!(lines[0].ends_with("(internal)"));
        assert!(lines[1].starts_with("B:  generic"));
        assert!(lines[1].contains("No Label"));
    }
}
