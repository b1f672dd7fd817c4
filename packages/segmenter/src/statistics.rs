use crate::{Segment, ValidationStatus};
use serde::{Deserialize, Serialize};

/// Summary of a segment list, recomputed on every boundary change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub too_short: usize,
    pub too_long: usize,
    pub average_letters: f64,
    pub min_letters: usize,
    pub max_letters: usize,
    pub average_quality: f64,
    pub total_letters: usize,
}

impl Statistics {
    /// Aggregate over segments. An empty list yields all zeros.
    pub fn from_segments(segments: &[Segment]) -> Self {
        if segments.is_empty() {
            return Self::default();
        }

        let mut stats = Statistics {
            total: segments.len(),
            min_letters: usize::MAX,
            ..Default::default()
        };
        let mut quality_sum = 0.0;

        for segment in segments {
            match segment.validation_status {
                ValidationStatus::Valid => stats.valid += 1,
                ValidationStatus::TooShort => stats.too_short += 1,
                ValidationStatus::TooLong => stats.too_long += 1,
            }
            stats.total_letters += segment.letter_count;
            stats.min_letters = stats.min_letters.min(segment.letter_count);
            stats.max_letters = stats.max_letters.max(segment.letter_count);
            quality_sum += segment.quality;
        }

        stats.invalid = stats.too_short + stats.too_long;
        stats.average_letters = stats.total_letters as f64 / stats.total as f64;
        stats.average_quality = quality_sum / stats.total as f64;
        stats
    }

    /// Share of valid segments, 0..=1
    pub fn valid_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.valid as f64 / self.total as f64
        }
    }
}
