// SPDX-License-Identifier: MIT OR Apache-2.0
//! dynjson CLI binary - query decoded JSON by path

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dynjson_cli::{GetOptions, parse_path, read_document, run_get, run_keys, run_type};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dynjson")]
#[command(version, about, long_about = None)]
struct Args {
    /// Log level used when `RUST_LOG` is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for dynjson CLI
#[derive(Subcommand)]
enum Commands {
    /// Print the node at a path as JSON
    Get {
        /// Path expression, e.g. `users[0].name` (`.` for the root)
        path: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Print strings without quotes
        #[arg(short = 'r', long = "raw")]
        raw: bool,
        /// Indent JSON output
        #[arg(short = 'p', long = "pretty")]
        pretty: bool,
        /// Print this instead of failing when the node is absent or null
        #[arg(short = 'd', long = "default")]
        default: Option<String>,
    },
    /// Print the type of the node at a path
    Type {
        /// Path expression
        path: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Print the sorted keys of the object at a path
    Keys {
        /// Path expression
        path: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(command: Commands) -> Result<()> {
    let output = match command {
        Commands::Get {
            path,
            file,
            raw,
            pretty,
            default,
        } => {
            let path = parse_path(&path)?;
            let doc = read_document(file.as_deref())?;
            let options = GetOptions {
                raw,
                pretty,
                default,
            };
            run_get(&doc, &path, &options)?
        }
        Commands::Type { path, file } => {
            let path = parse_path(&path)?;
            let doc = read_document(file.as_deref())?;
            run_type(&doc, &path)
        }
        Commands::Keys { path, file } => {
            let path = parse_path(&path)?;
            let doc = read_document(file.as_deref())?;
            run_keys(&doc, &path)?
        }
    };
    write_output(&output)
}

fn write_output(output: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if !output.is_empty() {
        handle.write_all(output.as_bytes())?;
        handle.write_all(b"\n")?;
    }
    Ok(())
}
