//! sysinfo: Show the system version and the host it runs on.

use async_trait::async_trait;
use dosh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Sysinfo tool: dosh version plus host OS name and release.
pub struct SysInfo;

/// Host OS name and release. Reads /proc on Linux, falls back to the
/// compile-time OS name elsewhere.
fn host_os() -> (String, String) {
    let read = |name: &str| {
        std::fs::read_to_string(format!("/proc/sys/kernel/{name}"))
            .map(|s| s.trim().to_string())
            .ok()
            .filter(|s| !s.is_empty())
    };
    let name = read("ostype").unwrap_or_else(|| std::env::consts::OS.to_string());
    let release = read("osrelease").unwrap_or_else(|| "unknown".to_string());
    (name, release)
}

#[async_trait]
impl Tool for SysInfo {
    fn name(&self) -> &str {
        "sysinfo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("sysinfo", "Display system information")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext<'_>) -> ExecResult {
        let (os, release) = host_os();
        let lines = [
            "--- System Information ---".to_string(),
            format!("{} Version: {}", ctx.system_name, env!("CARGO_PKG_VERSION")),
            format!("Base OS:         {}", os),
            format!("Base OS Version: {}", release),
            "--------------------------".to_string(),
        ];
        ExecResult::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::TestEnv;

    #[tokio::test]
    async fn test_sysinfo_block() {
        let mut env = TestEnv::new();
        let result = SysInfo.execute(ToolArgs::new(), &mut env.ctx()).await;
        assert!(result.ok());

        let lines: Vec<_> = result.out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "--- System Information ---");
        assert_eq!(lines[1], format!("dosh Version: {}", env!("CARGO_PKG_VERSION")));
        assert!(lines[2].starts_with("Base OS:"));
        assert!(lines[2].len() > "Base OS:         ".len());
        assert!(lines[3].starts_with("Base OS Version: "));
    }
}
