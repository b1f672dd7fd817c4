use crate::source::count_letters;
use crate::strategies::{ByLetterCount, SegmentationStrategy};
use crate::{Boundaries, Source};

/// Letter-count segmentation with a target adjusted so segments come out
/// roughly equal instead of leaving a short remainder.
pub struct Balanced {
    target: usize,
}

impl Balanced {
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    /// `total / ceil(total / target)`, or `None` when there is nothing to split
    pub fn derived_target(&self, total_letters: usize) -> Option<f64> {
        if total_letters == 0 || self.target == 0 {
            return None;
        }
        let segments = total_letters.div_ceil(self.target);
        Some(total_letters as f64 / segments as f64)
    }
}

impl SegmentationStrategy for Balanced {
    fn name(&self) -> &'static str {
        "balanced"
    }

    fn description(&self) -> &'static str {
        "Split into evenly sized segments of about N letters"
    }

    fn boundaries(&self, source: &Source) -> Boundaries {
        let total: usize = source.lines().iter().map(|line| count_letters(line)).sum();

        match self.derived_target(total) {
            Some(target) => ByLetterCount::with_fractional_target(target).boundaries(source),
            None => Boundaries::whole(source.line_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_target() {
        let balanced = Balanced::new(300);
        assert_eq!(balanced.derived_target(0), None);
        assert_eq!(balanced.derived_target(600), Some(300.0));
        assert_eq!(balanced.derived_target(700), Some(700.0 / 3.0));
        assert_eq!(balanced.derived_target(100), Some(100.0));
    }

    #[test]
    fn test_avoids_short_remainder() {
        // 14 lines of 50 letters: plain target 300 leaves 300/300/100,
        // balanced uses 700 / 3 = 233.3 and yields 250/250/200
        let source = Source::from_lines(vec!["a".repeat(50); 14]);

        let plain = ByLetterCount::new(300).boundaries(&source);
        assert_eq!(plain.as_slice(), &[0, 6, 12, 14]);

        let balanced = Balanced::new(300).boundaries(&source);
        assert_eq!(balanced.as_slice(), &[0, 5, 10, 14]);
    }

    #[test]
    fn test_target_above_total_is_one_segment() {
        let source = Source::from_lines(vec!["b".repeat(50); 4]);
        assert_eq!(Balanced::new(1000).boundaries(&source).as_slice(), &[0, 4]);
    }

    #[test]
    fn test_letterless_source_is_whole() {
        let source = Source::from_text("1\n2\n3");
        assert_eq!(Balanced::new(10).boundaries(&source).as_slice(), &[0, 3]);
    }
}
