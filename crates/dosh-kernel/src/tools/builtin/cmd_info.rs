//! cmd_info: Describe one command.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// CmdInfo tool: description, category, aliases and usage of a builtin or
/// application. Accepts an alias and reports the command it points at.
pub struct CmdInfo;

#[async_trait]
impl Tool for CmdInfo {
    fn name(&self) -> &str {
        "cmd_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cmd_info", "Show details about a command").usage("cmd_info <command_name>")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(raw) = args.get(0) else {
            return self.schema().usage_error();
        };
        let typed = raw.to_lowercase();
        let name = ctx.aliases.get(&typed).cloned().unwrap_or(typed);

        let (description, category, usage) = if let Some(tool) = ctx.tools.get(&name) {
            let schema = tool.schema();
            (schema.description, "builtin", schema.usage)
        } else if let Some(app) = ctx.apps.get(&name) {
            let usage = if app.allow_background {
                format!("{} [args] [&]", app.name)
            } else {
                format!("{} [args]", app.name)
            };
            (app.description.to_string(), "application", usage)
        } else {
            return ExecResult::failure(1, format!("Command '{}' not found.", name));
        };

        let aliases = ctx.aliases_for(&name);
        let aliases = if aliases.is_empty() {
            "N/A".to_string()
        } else {
            aliases.join(", ")
        };

        let lines = [
            format!("Info for command '{}':", name),
            format!("  Description: {}", description),
            format!("  Category:    {}", category),
            format!("  Alias:       {}", aliases),
            format!("  Usage:       {}", usage),
        ];
        ExecResult::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    async fn info(env: &mut TestEnv, name: &str) -> ExecResult {
        CmdInfo
            .execute(ToolArgs::from_words([name]), &mut env.ctx())
            .await
    }

    #[tokio::test]
    async fn test_cmd_info_builtin() {
        let mut env = TestEnv::new();
        let result = info(&mut env, "MD").await;
        assert!(result.ok());
        assert_eq!(
            result.out,
            "Info for command 'md':\n  Description: Create a directory\n  Category:    builtin\n  Alias:       mkdir\n  Usage:       md <directory_name>"
        );
    }

    #[tokio::test]
    async fn test_cmd_info_follows_alias_to_application() {
        let mut env = TestEnv::new();
        let result = info(&mut env, "banana").await;
        assert!(result.out.starts_with("Info for command 'edit':"));
        assert!(result.out.contains("  Category:    application"));
        assert!(result.out.contains("  Alias:       banana"));
        assert!(result.out.ends_with("  Usage:       edit [args]"));
    }

    #[tokio::test]
    async fn test_cmd_info_without_aliases() {
        let mut env = TestEnv::new();
        let result = info(&mut env, "countdown").await;
        assert!(result.out.contains("  Alias:       N/A"));
        assert!(result.out.ends_with("countdown [args] [&]"));
    }

    #[tokio::test]
    async fn test_cmd_info_errors() {
        let mut env = TestEnv::new();
        let result = info(&mut env, "frob").await;
        assert_eq!(result.err, "Command 'frob' not found.");

        let result = CmdInfo.execute(ToolArgs::new(), &mut env.ctx()).await;
        assert_eq!(result.err, "Usage: cmd_info <command_name>");
    }
}
