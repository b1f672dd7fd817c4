use anyhow::Result;
use codex_segmenter::Strategy;
use colored::Colorize;

pub fn strategies() -> Result<()> {
    println!("{}", "Available strategies".bright_blue().bold());
    for (name, description) in Strategy::catalog() {
        println!("  {} {}", format!("{:<18}", name).bright_white(), description.dimmed());
    }
    Ok(())
}
