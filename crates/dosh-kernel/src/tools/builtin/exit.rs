//! exit: Shut the system down.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Exit tool: stop the kernel once the current iteration finishes.
pub struct Exit;

#[async_trait]
impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("exit", "Shut down the system")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ctx.request_shutdown();
        ExecResult::success(format!("Shutting down {}...", ctx.system_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    #[tokio::test]
    async fn test_exit_requests_shutdown() {
        let mut env = TestEnv::new();
        let mut ctx = env.ctx();
        assert!(!ctx.shutdown_requested());

        let result = Exit.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "Shutting down dosh...");
        assert!(ctx.shutdown_requested());
    }
}
