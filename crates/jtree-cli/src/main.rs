//! `jtree` CLI — validate and canonicalize JSON files from the command
//! line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate JSON (stdin → exit code)
//! echo '{"a":1}' | jtree check
//!
//! # Canonicalize: compact output with keys sorted
//! echo '{"b":1, "a":2}' | jtree canon
//!
//! # Canonicalize from file to file
//! jtree canon -i data.json -o data.canonical.json
//!
//! # Show size statistics for the canonical form
//! jtree stats -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jtree", version, about = "JSON validator and canonicalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate JSON; silent on success, parse error on failure
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Canonicalize JSON: compact form, object keys sorted
    Canon {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show input vs canonical size statistics
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            jtree_core::parse(&text)
                .map(|_| ())
                .context("Invalid JSON")?;
        }
        Commands::Canon { input, output } => {
            let text = read_input(input.as_deref())?;
            let tree = jtree_core::parse(&text).context("Failed to parse JSON")?;
            write_output(output.as_deref(), &jtree_core::generate(&tree))?;
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let tree = jtree_core::parse(&text).context("Failed to parse JSON")?;
            let canonical = jtree_core::generate(&tree);
            let input_bytes = text.len();
            let canonical_bytes = canonical.len();
            let ratio = if input_bytes > 0 {
                (1.0 - (canonical_bytes as f64 / input_bytes as f64)) * 100.0
            } else {
                0.0
            };
            println!("Input size:      {} bytes", input_bytes);
            println!("Canonical size:  {} bytes", canonical_bytes);
            println!("Reduction:       {:.1}%", ratio);
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
