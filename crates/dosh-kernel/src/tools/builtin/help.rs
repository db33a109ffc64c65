//! help: List available commands and applications.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Help tool: sorted catalog of builtins and applications with aliases.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "List available commands")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let mut catalog: Vec<(String, String)> = ctx
            .tools
            .schemas()
            .into_iter()
            .map(|s| (s.name, s.description))
            .collect();
        catalog.extend(
            ctx.apps
                .iter()
                .map(|app| (app.name.to_string(), format!("{} (application)", app.description))),
        );
        catalog.sort();

        let mut lines = vec!["Available commands:".to_string()];
        for (name, description) in catalog {
            let aliases = ctx.aliases_for(&name);
            if aliases.is_empty() {
                lines.push(format!("  {:<12} {:<19} - {}", name, "", description));
            } else {
                let alias = format!("(alias: {})", aliases.join(", "));
                lines.push(format!("  {:<12} {:<19} - {}", name, alias, description));
            }
        }
        ExecResult::success(lines.join("\n"))
    }
}
