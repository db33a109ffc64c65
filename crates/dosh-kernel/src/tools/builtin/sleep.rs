//! sleep: Pause for a number of seconds.
//!
//! The whole iteration waits, background processes included.

use std::time::Duration;

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Sleep tool: delay for a (possibly fractional) number of seconds.
pub struct Sleep;

#[async_trait]
impl Tool for Sleep {
    fn name(&self) -> &str {
        "sleep"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("sleep", "Pause for a number of seconds").usage("sleep <seconds>")
    }

    async fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        let Some(raw) = args.get(0) else {
            return self.schema().usage_error();
        };
        let seconds = match raw.parse::<f64>() {
            Ok(s) if s.is_finite() && s >= 0.0 => s,
            _ => return ExecResult::failure(1, format!("sleep: '{}' is not a valid number", raw)),
        };

        tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
        ExecResult::success(format!("Sleeping for {} seconds...\nAwake.", seconds))
    }
}
