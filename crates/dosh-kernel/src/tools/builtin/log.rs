//! logtime, logdate: Stamp the current time or date into the system log.
//!
//! The line is echoed and also emitted as a tracing event, so it lands in
//! whatever log the front end installed.

use async_trait::async_trait;
use chrono::Local;
use dosh_types::ExecResult;

use super::date::DATE_FORMAT;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Date plus seconds-resolution time, e.g. `09/03/2024 14:05:09`.
pub const FULL_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

fn log_line(stamp: String) -> ExecResult {
    tracing::info!(target: "dosh::log", "{}", stamp);
    ExecResult::success(format!("LOG: {}", stamp))
}

pub struct LogTime;

#[async_trait]
impl Tool for LogTime {
    fn name(&self) -> &str {
        "logtime"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("logtime", "Log the current date and time")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        log_line(Local::now().format(FULL_FORMAT).to_string())
    }
}

pub struct LogDate;

#[async_trait]
impl Tool for LogDate {
    fn name(&self) -> &str {
        "logdate"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("logdate", "Log the current date")
    }

    async fn execute(&self, _args: ToolArgs, _ctx: &mut ExecContext<'_>) -> ExecResult {
        log_line(Local::now().format(DATE_FORMAT).to_string())
    }
}
