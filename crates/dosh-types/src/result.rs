//! ExecResult: the result of one command or one scheduler iteration.

use serde::{Deserialize, Serialize};

/// The result of executing a command line.
///
/// `out` and `err` accumulate text; `code` is 0 on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output text.
    pub out: String,
    /// Standard error text.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// Append a line to standard output.
    pub fn push_out(&mut self, line: impl AsRef<str>) {
        push_line(&mut self.out, line.as_ref());
    }

    /// Append a line to standard error.
    pub fn push_err(&mut self, line: impl AsRef<str>) {
        push_line(&mut self.err, line.as_ref());
    }

    /// Fold another result into this one. A failing code wins over success.
    pub fn merge(&mut self, other: ExecResult) {
        if !other.out.is_empty() {
            push_line(&mut self.out, other.out.trim_end_matches('\n'));
        }
        if !other.err.is_empty() {
            push_line(&mut self.err, other.err.trim_end_matches('\n'));
        }
        if self.code == 0 {
            self.code = other.code;
        }
    }
}

fn push_line(buf: &mut String, line: &str) {
    if !buf.is_empty() && !buf.ends_with('\n') {
        buf.push('\n');
    }
    buf.push_str(line);
}
