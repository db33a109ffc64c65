//! force_dlt: Permanently delete a file or directory tree.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct ForceDelete;

#[async_trait]
impl Tool for ForceDelete {
    fn name(&self) -> &str {
        "force_dlt"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("force_dlt", "Permanently delete a file or directory")
            .usage("force_dlt <file_or_directory>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.get(0) else {
            return self.schema().usage_error();
        };

        match ctx.vfs.force_delete(path).await {
            Ok(()) => ExecResult::success(""),
            Err(e) => super::vfs_failure("force_dlt", e),
        }
    }
}
