use super::report::{print_segments, print_statistics};
use anyhow::Result;
use clap::Args;
use codex_segmenter::{ExportDocument, SegmentationSession};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Export document written by `codex segment --out`
    pub input: PathBuf,

    /// Print every segment, not just the summary
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn inspect(args: InspectArgs, _cwd: &str) -> Result<()> {
    let json = fs::read_to_string(&args.input)?;
    let document = ExportDocument::from_json(&json)?;
    let restored = document.restore()?;

    let session = SegmentationSession::with_boundaries(restored.source, restored.boundaries, restored.config)?;
    let stats = session.statistics();

    println!("🔍 {} {}", "Inspecting".green().bold(), args.input.display());
    println!("   Lines: {}", session.source().line_count());

    if stats != document.stats {
        println!(
            "   {} Stored statistics are stale; showing recomputed values",
            "⚠️".yellow()
        );
    }

    if args.verbose {
        println!();
        print_segments(&session.segments());
    }
    print_statistics(&stats);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use codex_segmenter::{SegmenterConfig, Source, Strategy};

    #[test]
    fn test_inspect_valid_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut session =
            SegmentationSession::new(Source::from_text("a.\nb.\nc."), SegmenterConfig::default()).unwrap();
        session.apply_strategy(Strategy::ByPunctuation).unwrap();
        fs::write(&path, session.export().to_json().unwrap()).unwrap();

        let args = InspectArgs { input: path, verbose: true };
        assert!(inspect(args, "").is_ok());
    }

    #[test]
    fn test_inspect_rejects_broken_boundaries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let session = SegmentationSession::new(Source::from_text("a\nb"), SegmenterConfig::default()).unwrap();
        let mut document = session.export();
        document.boundaries = vec![0, 5];
        fs::write(&path, document.to_json().unwrap()).unwrap();

        let args = InspectArgs { input: path, verbose: false };
        assert!(inspect(args, "").is_err());
    }
}
