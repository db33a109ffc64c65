//! date, time: Display the current local date or time.

use async_trait::async_trait;
use chrono::Local;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Day-first date, e.g. `09/03/2024`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// 24-hour time, e.g. `14:05`.
pub const TIME_FORMAT: &str = "%H:%M";

/// Date tool: display current date.
pub struct Date;

#[async_trait]
impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Display the current date")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(format!("Current date: {}", Local::now().format(DATE_FORMAT)))
    }
}

/// Time tool: display current time.
pub struct Time;

#[async_trait]
impl Tool for Time {
    fn name(&self) -> &str {
        "time"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("time", "Display the current time")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        ExecResult::success(format!("Current time: {}", Local::now().format(TIME_FORMAT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    #[tokio::test]
    async fn test_date_shape() {
        let mut env = TestEnv::new();
        let result = Date.execute(ToolArgs::new(), &mut env.ctx()).await;
        let value = result.out.strip_prefix("Current date: ").unwrap();
        let parts: Vec<_> = value.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 4);
    }

    #[tokio::test]
    async fn test_time_shape() {
        let mut env = TestEnv::new();
        let result = Time.execute(ToolArgs::new(), &mut env.ctx()).await;
        let value = result.out.strip_prefix("Current time: ").unwrap();
        assert_eq!(value.len(), 5);
        assert_eq!(&value[2..3], ":");
    }
}
