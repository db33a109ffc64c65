//! version: Show the system version.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Version;

#[async_trait]
impl Tool for Version {
    fn name(&self) -> &str {
        "version"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("version", "Display the system version")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(format!(
            "{} Version: {}",
            ctx.system_name,
            env!("CARGO_PKG_VERSION")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    #[tokio::test]
    async fn test_version_names_system() {
        let mut env = TestEnv::new();
        let result = Version.execute(ToolArgs::new(), &mut env.ctx()).await;
        assert_eq!(result.out, format!("dosh Version: {}", env!("CARGO_PKG_VERSION")));
    }
}
