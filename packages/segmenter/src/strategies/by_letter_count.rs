use crate::source::count_letters;
use crate::strategies::{accumulate_boundaries, SegmentationStrategy};
use crate::{Boundaries, Source};

/// Boundary once the running letter count reaches the target
pub struct ByLetterCount {
    target: f64,
}

impl ByLetterCount {
    pub fn new(target: usize) -> Self {
        Self {
            target: target as f64,
        }
    }

    /// Fractional targets are used by [`crate::strategies::Balanced`]
    pub(crate) fn with_fractional_target(target: f64) -> Self {
        Self { target }
    }
}

impl SegmentationStrategy for ByLetterCount {
    fn name(&self) -> &'static str {
        "by-letter-count"
    }

    fn description(&self) -> &'static str {
        "Split once a segment reaches N letters"
    }

    fn boundaries(&self, source: &Source) -> Boundaries {
        accumulate_boundaries(source, self.target, count_letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_after_target_reached() {
        // 4 letters per line, punctuation and digits ignored
        let source = Source::from_text("abcd!\nef gh\nij-kl\nmn12op\nqrst");
        let boundaries = ByLetterCount::new(8).boundaries(&source);
        assert_eq!(boundaries.as_slice(), &[0, 2, 4, 5]);
    }

    #[test]
    fn test_counter_resets_after_boundary() {
        let source = Source::from_text("aaaaaaaaaa\nb\nb\nb\nb");
        let boundaries = ByLetterCount::new(3).boundaries(&source);
        assert_eq!(boundaries.as_slice(), &[0, 1, 4, 5]);
    }

    #[test]
    fn test_last_line_never_gets_trailing_boundary() {
        let source = Source::from_text("aaaaa\naaaaa");
        let boundaries = ByLetterCount::new(5).boundaries(&source);
        assert_eq!(boundaries.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_letterless_text_is_one_segment() {
        let source = Source::from_text("123\n456\n---");
        let boundaries = ByLetterCount::new(1).boundaries(&source);
        assert_eq!(boundaries.as_slice(), &[0, 3]);
    }
}
