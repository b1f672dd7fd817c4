use crate::strategies::SegmentationStrategy;
use crate::{Boundaries, Source};

/// Boundary at the first line of each paragraph.
///
/// Blank separator lines stay with the paragraph before them. Blank lines at
/// the top of the source are folded into the first paragraph.
pub struct ByParagraph;

impl SegmentationStrategy for ByParagraph {
    fn name(&self) -> &'static str {
        "by-paragraph"
    }

    fn description(&self) -> &'static str {
        "Split at blank-line separated paragraphs"
    }

    fn boundaries(&self, source: &Source) -> Boundaries {
        let mut points = Vec::new();
        let mut seen_text = false;
        let mut after_blank = false;

        for (index, line) in source.lines().iter().enumerate() {
            if line.trim().is_empty() {
                after_blank = seen_text;
                continue;
            }
            if after_blank {
                points.push(index);
            }
            seen_text = true;
            after_blank = false;
        }

        Boundaries::from_points(source.line_count(), points)
    }
}
