//! Core tool traits and types.

use async_trait::async_trait;
use dosh_types::ExecResult;

use super::context::ExecContext;

/// Schema describing a tool's interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Usage line shown when arguments are missing, e.g. `md <directory>`.
    pub usage: String,
}

impl ToolSchema {
    /// Create a new tool schema. Usage defaults to the bare name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
        }
    }

    /// Set the usage line.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// `Usage: <usage>` as a failed result.
    pub fn usage_error(&self) -> ExecResult {
        ExecResult::failure(1, format!("Usage: {}", self.usage))
    }
}

/// Whitespace-split arguments following the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from words, as the dispatcher does.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Get a positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    /// All arguments joined with single spaces.
    pub fn joined(&self) -> String {
        self.positional.join(" ")
    }
}

/// A builtin command.
///
/// Builtins run to completion inside one scheduler iteration and report
/// through the returned [`ExecResult`]. Anything that needs to wait for input
/// is an application instead.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult;
}
