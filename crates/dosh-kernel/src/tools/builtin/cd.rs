//! cd: Change working directory or drive.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change current directory, or print it with no argument.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change the current directory or drive").usage("cd [path | X:]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(path) = args.get(0) else {
            return ExecResult::success(ctx.vfs.current_path());
        };

        match ctx.vfs.change_dir(path).await {
            Ok(()) => ExecResult::success(""),
            Err(e) => super::vfs_failure("cd", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    #[tokio::test]
    async fn test_cd_no_args_prints_path() {
        let mut env = TestEnv::new();
        let result = Cd.execute(ToolArgs::new(), &mut env.ctx()).await;
        assert!(result.ok());
        assert_eq!(result.out, "A:/");
    }

    #[tokio::test]
    async fn test_cd_subdir_and_back() {
        let mut env = TestEnv::new();
        env.vfs.mkdir("A:/docs").await.unwrap();

        let result = Cd.execute(ToolArgs::from_words(["docs"]), &mut env.ctx()).await;
        assert!(result.ok());
        assert_eq!(env.vfs.current_path(), "A:/docs");

        Cd.execute(ToolArgs::from_words([".."]), &mut env.ctx()).await;
        assert_eq!(env.vfs.current_path(), "A:/");
    }

    #[tokio::test]
    async fn test_cd_drive() {
        let mut env = TestEnv::new();
        let result = Cd.execute(ToolArgs::from_words(["b:"]), &mut env.ctx()).await;
        assert!(result.ok());
        assert_eq!(env.vfs.current_path(), "B:/");
    }

    #[tokio::test]
    async fn test_cd_errors() {
        let mut env = TestEnv::new();
        env.vfs.write("A:/f.txt", "x").await.unwrap();

        let result = Cd.execute(ToolArgs::from_words(["f.txt"]), &mut env.ctx()).await;
        assert!(!result.ok());
        assert_eq!(result.err, "cd: not a directory: f.txt");

        let result = Cd.execute(ToolArgs::from_words(["Q:"]), &mut env.ctx()).await;
        assert_eq!(result.err, "cd: unknown drive: Q:");

        let result = Cd.execute(ToolArgs::from_words(["../.."]), &mut env.ctx()).await;
        assert_eq!(result.err, "cd: invalid path: ../..");
        assert_eq!(env.vfs.current_path(), "A:/");
    }
}
