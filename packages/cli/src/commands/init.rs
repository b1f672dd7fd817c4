use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use codex_segmenter::Strategy;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Default strategy name written to the config
    #[arg(short, long, default_value = "balanced")]
    pub strategy: String,

    /// Parameter for the default strategy
    #[arg(short, long)]
    pub param: Option<usize>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let param = match (args.strategy.as_str(), args.param) {
        ("balanced" | "by-letter-count", None) => Some(300),
        ("by-lines", None) => Some(20),
        ("by-sentences", None) => Some(5),
        (_, param) => param,
    };

    let config = Config {
        default_strategy: Strategy::from_name(&args.strategy, param)?,
        ..Config::default()
    };

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;

    println!("{}", "📝 Initializing Codex project...".bright_blue().bold());
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!(
        "  Validity window: {}..={} letters, ideal {}",
        config.segmenter.min_letters, config.segmenter.max_letters, config.segmenter.ideal_letters
    );
    println!("  Default strategy: {}", config.default_strategy);

    Ok(())
}
