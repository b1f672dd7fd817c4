use codex_segmenter::{Segment, Statistics, ValidationStatus};
use colored::{ColoredString, Colorize};

fn status_label(status: ValidationStatus) -> ColoredString {
    let label = format!("{:<9}", status.as_str());
    match status {
        ValidationStatus::Valid => label.green(),
        ValidationStatus::TooShort => label.yellow(),
        ValidationStatus::TooLong => label.red(),
    }
}

/// One row per segment
pub fn print_segments(segments: &[Segment]) {
    println!(
        "   {}",
        format!(
            "{:>4}  {:>13}  {:>7}  {:>6}  {:<9}  {:>7}",
            "id", "lines", "letters", "words", "status", "quality"
        )
        .dimmed()
    );

    for segment in segments {
        println!(
            "   {:>4}  {:>13}  {:>7}  {:>6}  {}  {:>7.1}",
            segment.id,
            format!("{}..{}", segment.start_line, segment.end_line),
            segment.letter_count,
            segment.word_count,
            status_label(segment.validation_status),
            segment.quality
        );
    }
}

pub fn print_statistics(stats: &Statistics) {
    println!();
    println!("   Segments:        {}", stats.total);
    println!(
        "   Valid:           {} ({:.0}%)",
        stats.valid.to_string().green(),
        stats.valid_ratio() * 100.0
    );
    if stats.too_short > 0 {
        println!("   {}       {}", "Too short:".yellow(), stats.too_short);
    }
    if stats.too_long > 0 {
        println!("   {}        {}", "Too long:".red(), stats.too_long);
    }
    println!(
        "   Letters:         {} total, {:.1} avg, {}..{}",
        stats.total_letters, stats.average_letters, stats.min_letters, stats.max_letters
    );
    println!("   Average quality: {:.1}", stats.average_quality);
}
