mod cmd_exists;
mod cmd_flatten;
mod cmd_resolve;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dotpath")]
#[command(about = "Resolve wildcarded dot-notation paths in JSON documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Expand a pattern such as `users.*.id` into the paths present in a document
    Resolve {
        /// Dot-notation pattern; omit or pass `*` for every leaf
        pattern: Option<String>,

        /// Input file (defaults to stdin, `-` also reads stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output the paths as a JSON array
        #[arg(long)]
        json: bool,

        /// Output a JSON object mapping each path to its value
        #[arg(long, conflicts_with = "json")]
        values: bool,
    },
    /// Flatten a document into a JSON object keyed by dot-path
    Flatten {
        /// Input file (defaults to stdin, `-` also reads stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Check whether a concrete dot-path exists in a document
    Exists {
        /// Concrete dot-path, e.g. `users.0.id`
        path: String,

        /// Input file (defaults to stdin, `-` also reads stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            pattern,
            input,
            json,
            values,
        } => {
            let output = if values {
                cmd_resolve::Output::Values
            } else if json {
                cmd_resolve::Output::Json
            } else {
                cmd_resolve::Output::Lines
            };
            cmd_resolve::run(input, pattern, output, cli.pretty)
        }
        Commands::Flatten { input } => cmd_flatten::run(input, cli.pretty),
        Commands::Exists { path, input } => cmd_exists::run(input, path),
    }
}
