use crate::strategies::{accumulate_boundaries, SegmentationStrategy};
use crate::{Boundaries, Source};

/// Boundary once N sentence endings have been seen
pub struct BySentences {
    sentences_per_segment: usize,
}

impl BySentences {
    pub fn new(sentences_per_segment: usize) -> Self {
        Self {
            sentences_per_segment,
        }
    }
}

impl SegmentationStrategy for BySentences {
    fn name(&self) -> &'static str {
        "by-sentences"
    }

    fn description(&self) -> &'static str {
        "Split every N sentences"
    }

    fn boundaries(&self, source: &Source) -> Boundaries {
        accumulate_boundaries(
            source,
            self.sentences_per_segment.max(1) as f64,
            count_sentence_endings,
        )
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Count runs of `. ! ?`; "?!" and "..." each count once
pub fn count_sentence_endings(text: &str) -> usize {
    let mut count = 0;
    let mut in_run = false;

    for c in text.chars() {
        if is_sentence_end(c) {
            if !in_run {
                count += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }

    count
}
