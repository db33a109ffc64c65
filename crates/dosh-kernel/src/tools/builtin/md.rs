//! md: Create directories.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Md tool: create a directory and any missing parents.
pub struct Md;

#[async_trait]
impl Tool for Md {
    fn name(&self) -> &str {
        "md"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("md", "Create a directory").usage("md <directory_name>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.get(0) else {
            return self.schema().usage_error();
        };

        match ctx.vfs.mkdir(path).await {
            Ok(()) => ExecResult::success(""),
            Err(e) => super::vfs_failure("md", e),
        }
    }
}
