use crate::strategies::SegmentationStrategy;
use crate::{Boundaries, Source};

const TERMINATORS: [char; 5] = ['.', '!', '?', ';', ':'];

/// Boundary after any line whose trimmed text ends in `. ! ? ; :`
pub struct ByPunctuation;

impl SegmentationStrategy for ByPunctuation {
    fn name(&self) -> &'static str {
        "by-punctuation"
    }

    fn description(&self) -> &'static str {
        "Split after lines ending in . ! ? ; :"
    }

    fn boundaries(&self, source: &Source) -> Boundaries {
        let last = source.line_count() - 1;
        let points = source
            .lines()
            .iter()
            .enumerate()
            .filter(|(index, line)| *index < last && line.trim_end().ends_with(TERMINATORS))
            .map(|(index, _)| index + 1);

        Boundaries::from_points(source.line_count(), points)
    }
}
