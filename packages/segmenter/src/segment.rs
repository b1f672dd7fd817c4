//! # Segment Model
//!
//! Segments are derived views over a boundary list. They are rebuilt from
//! scratch after every boundary change and must not be cached across edits.
//!
//! `id` is positional (1-based) and changes whenever an earlier boundary
//! moves. Use [`Segment::key`] when an identity has to survive an edit.

use crate::source::{count_letters, count_words};
use crate::{Boundaries, SegmenterConfig, Source};
use serde::{Deserialize, Serialize};

/// Letter-count classification against the configured window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationStatus {
    Valid,
    TooShort,
    TooLong,
}

impl ValidationStatus {
    pub fn classify(letter_count: usize, config: &SegmenterConfig) -> Self {
        if letter_count < config.min_letters {
            ValidationStatus::TooShort
        } else if letter_count > config.max_letters {
            ValidationStatus::TooLong
        } else {
            ValidationStatus::Valid
        }
    }

    pub fn is_valid(self) -> bool {
        self == ValidationStatus::Valid
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Valid => "valid",
            ValidationStatus::TooShort => "too-short",
            ValidationStatus::TooLong => "too-long",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contiguous slice of the source plus its metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// 1-based position among the current segments
    pub id: usize,

    /// First line (inclusive)
    pub start_line: usize,

    /// Last line (exclusive)
    pub end_line: usize,

    pub text: String,
    pub letter_count: usize,
    pub word_count: usize,
    pub line_count: usize,
    pub validation_status: ValidationStatus,

    /// Closeness to the ideal length, 0..=100
    pub quality: f64,
}

impl Segment {
    fn new(id: usize, start_line: usize, end_line: usize, source: &Source, config: &SegmenterConfig) -> Self {
        let text = source.slice_text(start_line, end_line);
        let letter_count = count_letters(&text);

        Self {
            id,
            start_line,
            end_line,
            word_count: count_words(&text),
            line_count: end_line - start_line,
            validation_status: ValidationStatus::classify(letter_count, config),
            quality: quality(letter_count, config.ideal_letters),
            letter_count,
            text,
        }
    }

    /// Edit-stable identity: the boundary pair this segment spans
    pub fn key(&self) -> (usize, usize) {
        (self.start_line, self.end_line)
    }

    pub fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line < self.end_line
    }
}

/// `100 - |letters - ideal| / ideal * 100`, clamped to `[0, 100]`
pub fn quality(letter_count: usize, ideal: usize) -> f64 {
    if ideal == 0 {
        return 0.0;
    }
    let ideal = ideal as f64;
    let deviation = (letter_count as f64 - ideal).abs() / ideal * 100.0;
    (100.0 - deviation).clamp(0.0, 100.0)
}

/// Derive every segment from adjacent boundary pairs
pub fn build_segments(source: &Source, boundaries: &Boundaries, config: &SegmenterConfig) -> Vec<Segment> {
    debug_assert_eq!(
        boundaries.line_count(),
        source.line_count(),
        "boundaries do not frame this source"
    );

    boundaries
        .ranges()
        .enumerate()
        .map(|(index, (start, end))| Segment::new(index + 1, start, end, source, config))
        .collect()
}
