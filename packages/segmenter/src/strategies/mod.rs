//! # Segmentation Strategies
//!
//! Pure algorithms that derive an initial boundary list from the source.
//! Every strategy returns through [`Boundaries::from_points`], so output
//! always starts at 0, ends at `line_count`, and is strictly increasing.
//! No strategy ever places a boundary past the final line.

mod balanced;
mod by_letter_count;
mod by_lines;
mod by_paragraph;
mod by_punctuation;
mod by_sentences;

pub use balanced::Balanced;
pub use by_letter_count::ByLetterCount;
pub use by_lines::ByLines;
pub use by_paragraph::ByParagraph;
pub use by_punctuation::ByPunctuation;
pub use by_sentences::BySentences;

use crate::{Boundaries, SegmentError, Source};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Trait for implementing segmentation strategies
pub trait SegmentationStrategy {
    /// Unique identifier for this strategy
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Compute a boundary list for the source
    fn boundaries(&self, source: &Source) -> Boundaries;
}

/// Serializable strategy selection with its parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Strategy {
    /// A boundary every `lines` lines
    ByLines { lines: usize },

    /// A boundary once the running letter count reaches `target`
    ByLetterCount { target: usize },

    /// A boundary after lines ending in `. ! ? ; :`
    ByPunctuation,

    /// A boundary once `sentences` sentence endings have been seen
    BySentences { sentences: usize },

    /// Evenly sized segments of roughly `target` letters
    Balanced { target: usize },

    /// A boundary at the start of each blank-line separated paragraph
    ByParagraph,
}

impl Strategy {
    /// All strategy names accepted by [`Strategy::from_name`]
    pub const NAMES: [&'static str; 6] = [
        "by-lines",
        "by-letter-count",
        "by-punctuation",
        "by-sentences",
        "balanced",
        "by-paragraph",
    ];

    /// Build a strategy from its name and an optional numeric parameter
    pub fn from_name(name: &str, param: Option<usize>) -> Result<Self, SegmentError> {
        let strategy = match name {
            "by-lines" => Strategy::ByLines {
                lines: require_param("by-lines", param)?,
            },
            "by-letter-count" => Strategy::ByLetterCount {
                target: require_param("by-letter-count", param)?,
            },
            "by-punctuation" => Strategy::ByPunctuation,
            "by-sentences" => Strategy::BySentences {
                sentences: require_param("by-sentences", param)?,
            },
            "balanced" => Strategy::Balanced {
                target: require_param("balanced", param)?,
            },
            "by-paragraph" => Strategy::ByParagraph,
            other => return Err(SegmentError::UnknownStrategy(other.to_string())),
        };
        strategy.validate()?;
        Ok(strategy)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::ByLines { .. } => "by-lines",
            Strategy::ByLetterCount { .. } => "by-letter-count",
            Strategy::ByPunctuation => "by-punctuation",
            Strategy::BySentences { .. } => "by-sentences",
            Strategy::Balanced { .. } => "balanced",
            Strategy::ByParagraph => "by-paragraph",
        }
    }

    /// The numeric parameter, if this strategy takes one
    pub fn param(&self) -> Option<usize> {
        match *self {
            Strategy::ByLines { lines } => Some(lines),
            Strategy::ByLetterCount { target } | Strategy::Balanced { target } => Some(target),
            Strategy::BySentences { sentences } => Some(sentences),
            Strategy::ByPunctuation | Strategy::ByParagraph => None,
        }
    }

    /// Reject zero-valued parameters
    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.param() == Some(0) {
            return Err(SegmentError::InvalidParameter {
                strategy: self.name(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// The strategy implementation for this selection
    pub fn segmenter(&self) -> Box<dyn SegmentationStrategy> {
        match *self {
            Strategy::ByLines { lines } => Box::new(ByLines::new(lines)),
            Strategy::ByLetterCount { target } => Box::new(ByLetterCount::new(target)),
            Strategy::ByPunctuation => Box::new(ByPunctuation),
            Strategy::BySentences { sentences } => Box::new(BySentences::new(sentences)),
            Strategy::Balanced { target } => Box::new(Balanced::new(target)),
            Strategy::ByParagraph => Box::new(ByParagraph),
        }
    }

    /// `(name, description)` for every built-in strategy
    pub fn catalog() -> Vec<(&'static str, &'static str)> {
        let samples = [
            Strategy::ByLines { lines: 1 },
            Strategy::ByLetterCount { target: 1 },
            Strategy::ByPunctuation,
            Strategy::BySentences { sentences: 1 },
            Strategy::Balanced { target: 1 },
            Strategy::ByParagraph,
        ];
        samples
            .iter()
            .map(|strategy| {
                let segmenter = strategy.segmenter();
                (segmenter.name(), segmenter.description())
            })
            .collect()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.param() {
            Some(param) => write!(f, "{}({})", self.name(), param),
            None => f.write_str(self.name()),
        }
    }
}

fn require_param(strategy: &'static str, param: Option<usize>) -> Result<usize, SegmentError> {
    param.ok_or_else(|| SegmentError::InvalidParameter {
        strategy,
        reason: "a numeric parameter is required".to_string(),
    })
}

/// Run a strategy over the source
#[instrument(skip(source), fields(lines = source.line_count()))]
pub fn apply_strategy(source: &Source, strategy: &Strategy) -> Result<Boundaries, SegmentError> {
    strategy.validate()?;
    let boundaries = strategy.segmenter().boundaries(source);
    boundaries.debug_assert_valid();

    info!(segments = boundaries.segment_count(), "Strategy applied");
    Ok(boundaries)
}

/// Walk lines accumulating `measure`; emit a boundary after the line where
/// the running total reaches `threshold`, unless that line is the last one.
pub(crate) fn accumulate_boundaries(
    source: &Source,
    threshold: f64,
    measure: impl Fn(&str) -> usize,
) -> Boundaries {
    let last = source.line_count() - 1;
    let mut running = 0usize;
    let mut points = Vec::new();

    for (index, line) in source.lines().iter().enumerate() {
        running += measure(line);
        if running as f64 >= threshold && index < last {
            points.push(index + 1);
            running = 0;
        }
    }

    Boundaries::from_points(source.line_count(), points)
}
