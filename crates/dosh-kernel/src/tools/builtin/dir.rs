//! dir: Detailed directory listing.
//!
//! ```text
//!  Directory of A:/docs
//!
//! 03/09/2024 07:05 AM <DIR>                  old
//! 03/09/2024 07:06 AM                  1,024 readme.txt
//!
//!                1 File(s)          1,024 bytes
//!                1 Dir(s)
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Local};
use dosh_types::{DirEntry, ExecResult};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Timestamp column format.
const LISTING_TIME_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Dir tool: list a directory with times, sizes and totals.
pub struct Dir;

#[async_trait]
impl Tool for Dir {
    fn name(&self) -> &str {
        "dir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("dir", "List the contents of a directory").usage("dir [path]")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let path = args.get(0).unwrap_or(".");

        let shown = match ctx.vfs.resolve(path) {
            Ok(resolved) => resolved.display(),
            Err(e) => return super::vfs_failure("dir", e),
        };
        let entries = match ctx.vfs.list(path).await {
            Ok(entries) => entries,
            Err(e) => return super::vfs_failure("dir", e),
        };

        ExecResult::success(render(&shown, &entries))
    }
}

fn render(shown: &str, entries: &[DirEntry]) -> String {
    let mut lines = vec![format!(" Directory of {}", shown), String::new()];
    if entries.is_empty() {
        lines.push("File Not Found".to_string());
        return lines.join("\n");
    }

    let mut files = 0u64;
    let mut dirs = 0u64;
    let mut total = 0u64;
    for entry in entries {
        let modified = entry
            .modified
            .map(|t| DateTime::<Local>::from(t).format(LISTING_TIME_FORMAT).to_string())
            .unwrap_or_default();
        let (kind, size) = if entry.is_dir() {
            dirs += 1;
            ("<DIR>", String::new())
        } else {
            files += 1;
            total += entry.size;
            ("", group_thousands(entry.size))
        };
        lines.push(format!("{:<18} {:<8} {:>14} {}", modified, kind, size, entry.name));
    }

    lines.push(String::new());
    lines.push(format!("{:>16} File(s) {:>14} bytes", files, group_thousands(total)));
    lines.push(format!("{:>16} Dir(s)", dirs));
    lines.join("\n")
}

/// `1234567` → `1,234,567`
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
