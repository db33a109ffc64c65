//! dosh REPL: the read loop around a [`Kernel`].
//!
//! Each line read is one kernel iteration. The prompt goes blank while the
//! foreground process waits for input, and those lines stay out of history
//! (they are document text, not commands).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::Runtime;

use dosh_kernel::{ExecResult, Kernel, KernelConfig};

/// REPL state: a kernel plus the runtime that drives it.
pub struct Repl {
    kernel: Kernel,
    runtime: Runtime,
}

impl Repl {
    /// Create a REPL from `config.toml` (or defaults).
    pub fn new() -> Result<Self> {
        Self::with_config(KernelConfig::load()?)
    }

    /// Create a REPL with a custom kernel configuration.
    pub fn with_config(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("Failed to create kernel")?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        Ok(Self { kernel, runtime })
    }

    /// Create a REPL over a specific system root, other settings default.
    pub fn with_root(root: PathBuf) -> Result<Self> {
        Self::with_config(KernelConfig::default().with_root(root))
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn prompt(&self) -> String {
        self.kernel.prompt()
    }

    pub fn awaiting_input(&self) -> bool {
        self.kernel.awaiting_input()
    }

    pub fn is_running(&self) -> bool {
        self.kernel.is_running()
    }

    /// Run one kernel iteration for `line`.
    pub fn process_line(&mut self, line: &str) -> ExecResult {
        self.runtime.block_on(self.kernel.handle_line(line))
    }
}

fn print_result(result: &ExecResult) {
    if !result.out.is_empty() {
        println!("{}", result.out.trim_end_matches('\n'));
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err.trim_end_matches('\n'));
    }
}

fn load_history(rl: &mut Editor<(), DefaultHistory>, path: &Path) {
    if let Err(e) = rl.load_history(path) {
        // Only log if it's not a "file not found" error (expected on first run)
        let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
        if !is_not_found {
            tracing::warn!("Failed to load history: {}", e);
        }
    }
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create history directory: {}", e);
        }
    }
    if let Err(e) = rl.save_history(path) {
        tracing::warn!("Failed to save history: {}", e);
    }
}

/// Run the interactive loop until `exit` or end of input.
pub fn run(mut repl: Repl) -> Result<()> {
    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;
    let history_path = dosh_kernel::paths::history_path();
    load_history(&mut rl, &history_path);

    println!("System boot complete. Welcome to {}!", repl.kernel().name());

    while repl.is_running() {
        let prompt = repl.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                if !repl.awaiting_input() && !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("Failed to add history entry: {}", e);
                    }
                }
                print_result(&repl.process_line(&line));
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use 'exit' to shut down the system.");
            }
            Err(ReadlineError::Eof) => {
                print_result(&repl.process_line("exit"));
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);
    Ok(())
}
