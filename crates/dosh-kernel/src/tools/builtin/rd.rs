//! rd: Remove an empty directory.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Rd;

#[async_trait]
impl Tool for Rd {
    fn name(&self) -> &str {
        "rd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rd", "Remove an empty directory").usage("rd <directory_name>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.get(0) else {
            return self.schema().usage_error();
        };

        match ctx.vfs.rmdir(path).await {
            Ok(()) => ExecResult::success(""),
            Err(e) => super::vfs_failure("rd", e),
        }
    }
}
