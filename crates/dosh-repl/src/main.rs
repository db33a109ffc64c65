//! dosh CLI entry point.
//!
//! Usage:
//!   dosh                       # Interactive shell
//!   dosh -c <command>          # Run one command line and exit
//!   dosh --root <dir>          # Use another system root
//!   dosh --config <file>       # Load another config.toml

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dosh_kernel::KernelConfig;
use dosh_repl::Repl;

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    root: Option<PathBuf>,
    command: Option<String>,
}

fn run() -> Result<ExitCode> {
    let mut opts = Options::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(ExitCode::SUCCESS);
            }
            "--version" | "-V" => {
                println!("dosh {}", env!("CARGO_PKG_VERSION"));
                return Ok(ExitCode::SUCCESS);
            }
            "--root" => opts.root = Some(args.next().context("--root requires a directory")?.into()),
            "--config" => opts.config = Some(args.next().context("--config requires a file")?.into()),
            "-c" => opts.command = Some(args.next().context("-c requires a command argument")?),
            unknown => bail!("Unknown option: {unknown}. Run 'dosh --help' for usage."),
        }
    }

    let mut config = match &opts.config {
        Some(path) => KernelConfig::load_from(path)?,
        None => KernelConfig::load()?,
    };
    if let Some(root) = opts.root {
        config = config.with_root(root);
    }

    let mut repl = Repl::with_config(config)?;
    match opts.command {
        Some(cmd) => {
            let result = repl.process_line(&cmd);
            if !result.out.is_empty() {
                println!("{}", result.out);
            }
            if !result.err.is_empty() {
                eprintln!("{}", result.err);
            }
            if result.ok() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(result.code.clamp(1, 255) as u8))
            }
        }
        None => {
            dosh_repl::run(repl)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_help() {
    println!(
        r#"dosh v{}

Usage:
  dosh                         Interactive shell
  dosh -c <command>            Run one command line and exit

Options:
  -c <command>                 Run a command line and exit
  --root <dir>                 System root holding devices/ (default: $XDG_DATA_HOME/dosh)
  --config <file>              Config file (default: $XDG_CONFIG_HOME/dosh/config.toml)
  -h, --help                   Show this help
  -V, --version                Show version

Type 'help' inside the shell for the list of commands.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
