mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, inspect, segment, strategies, InitArgs, InspectArgs, SegmentArgs};

/// Codex CLI - segment literary texts into analysis units
#[derive(Parser, Debug)]
#[command(name = "codex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default codex.config.json
    Init(InitArgs),

    /// Segment a text file or a directory of .txt files
    Segment(SegmentArgs),

    /// Re-validate an export document and show its statistics
    Inspect(InspectArgs),

    /// List the available segmentation strategies
    Strategies,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Segment(args) => segment(args, &cwd),
        Command::Inspect(args) => inspect(args, &cwd),
        Command::Strategies => strategies(),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
