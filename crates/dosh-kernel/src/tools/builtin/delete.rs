//! delete: Move a file or directory to the trash.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Delete tool: recoverable removal via the trash on `A:`.
pub struct Delete;

#[async_trait]
impl Tool for Delete {
    fn name(&self) -> &str {
        "delete"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("delete", "Move a file or directory to the trash")
            .usage("delete <file_or_directory>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.get(0) else {
            return self.schema().usage_error();
        };

        match ctx.vfs.trash(path).await {
            Ok(stored) => ExecResult::success(format!(
                "Moved '{}' to {}/{}",
                path,
                ctx.vfs.trash_path(),
                stored
            )),
            Err(e) => super::vfs_failure("delete", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    #[tokio::test]
    async fn test_delete_moves_to_trash() {
        let mut env = TestEnv::new();
        env.vfs.write("A:/hello.txt", "hi").await.unwrap();

        let result = Delete.execute(ToolArgs::from_words(["hello.txt"]), &mut env.ctx()).await;
        assert!(result.ok(), "{}", result.err);
        assert!(result.out.starts_with("Moved 'hello.txt' to A:/user/trashbin/hello.txt."));

        let trashed = env.vfs.list("A:/user/trashbin").await.unwrap();
        assert_eq!(trashed.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let mut env = TestEnv::new();
        let result = Delete.execute(ToolArgs::from_words(["ghost"]), &mut env.ctx()).await;
        assert_eq!(result.err, "delete: not found: ghost");
    }
}
