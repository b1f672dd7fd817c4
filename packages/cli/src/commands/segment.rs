use super::report::{print_segments, print_statistics};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use codex_segmenter::{SegmentationSession, Source, Strategy};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Text file, or directory of .txt files, to segment
    pub input: PathBuf,

    /// Strategy name (see `codex strategies`); defaults to the config's
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Numeric strategy parameter (lines, letters or sentences); without
    /// --strategy it overrides the config's default strategy
    #[arg(short, long)]
    pub param: Option<usize>,

    /// Write the export document here (a directory when input is a directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Config file (overrides codex.config.json in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn segment(args: SegmentArgs, cwd: &str) -> Result<()> {
    let config = Config::resolve(args.config.as_deref(), cwd)?;
    let strategy = resolve_strategy(&args, &config)?;

    if args.format != "text" && args.format != "json" {
        return Err(anyhow!("Invalid format: {}. Use: text or json", args.format));
    }

    if args.input.is_file() {
        segment_file(&args.input, strategy, &config, &args, args.out.clone())?;
    } else if args.input.is_dir() {
        let files = find_text_files(&args.input);
        if files.is_empty() {
            println!("{}", "⚠️  No .txt files found".yellow());
            return Ok(());
        }

        if let Some(out_dir) = &args.out {
            fs::create_dir_all(out_dir)?;
        }

        for file in &files {
            let out = match &args.out {
                Some(dir) => {
                    let out = export_path(dir, &args.input, file);
                    if let Some(parent) = out.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    Some(out)
                }
                None => None,
            };
            segment_file(file, strategy, &config, &args, out)?;
        }
    } else {
        return Err(anyhow!("Input path does not exist: {}", args.input.display()));
    }

    Ok(())
}

/// `--param` overrides the parameter of the named strategy, or of the
/// config's default strategy when no name is given.
fn resolve_strategy(args: &SegmentArgs, config: &Config) -> Result<Strategy> {
    let name = match &args.strategy {
        Some(name) => name.as_str(),
        None if args.param.is_none() => return Ok(config.default_strategy),
        None => config.default_strategy.name(),
    };

    let strategy = Strategy::from_name(name, args.param)?;
    if args.param.is_some() && strategy.param().is_none() {
        return Err(anyhow!("Strategy {} takes no parameter", name));
    }
    Ok(strategy)
}

fn segment_file(
    path: &Path,
    strategy: Strategy,
    config: &Config,
    args: &SegmentArgs,
    out: Option<PathBuf>,
) -> Result<()> {
    let text = fs::read_to_string(path)?;
    let source = Source::from_text(&text);
    debug!(path = %path.display(), lines = source.line_count(), "Read source");

    let mut session = SegmentationSession::new(source, config.segmenter.clone())?;
    session.apply_strategy(strategy)?;
    let export = session.export();

    if args.format == "json" {
        println!("{}", export.to_json()?);
    } else {
        println!(
            "✂️  {} {} with {}",
            "Segmenting".green().bold(),
            path.display(),
            strategy.to_string().bright_white()
        );
        println!();
        print_segments(&session.segments());
        print_statistics(&export.stats);
        println!();
    }

    if let Some(out) = out {
        fs::write(&out, export.to_json()?)?;
        if args.format == "text" {
            println!("   {} Wrote {}", "✓".green(), out.display());
            println!();
        }
    }

    Ok(())
}

fn find_text_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("txt"))
        .collect();
    files.sort();
    files
}

/// Mirror the file's path under the input root, so same-named files in
/// different subdirectories get distinct exports.
fn export_path(out_dir: &Path, root: &Path, file: &Path) -> PathBuf {
    let relative = file.strip_prefix(root).unwrap_or(file);
    let stem = relative
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "segments".to_string());
    let name = format!("{}.segments.json", stem);

    match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => out_dir.join(parent).join(name),
        _ => out_dir.join(name),
    }
}
