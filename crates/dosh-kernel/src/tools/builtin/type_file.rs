//! type: Print the contents of a text file.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Type tool: print a file verbatim.
pub struct TypeFile;

#[async_trait]
impl Tool for TypeFile {
    fn name(&self) -> &str {
        "type"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("type", "Display the contents of a text file").usage("type <filename>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.get(0) else {
            return self.schema().usage_error();
        };

        match ctx.vfs.read(path).await {
            Ok(content) => ExecResult::success(content),
            Err(e) => super::vfs_failure("type", e),
        }
    }
}
