use crate::strategies::SegmentationStrategy;
use crate::{Boundaries, Source};

/// Boundary at every n-th line; the final segment may be shorter
pub struct ByLines {
    lines_per_segment: usize,
}

impl ByLines {
    pub fn new(lines_per_segment: usize) -> Self {
        Self { lines_per_segment }
    }
}

impl SegmentationStrategy for ByLines {
    fn name(&self) -> &'static str {
        "by-lines"
    }

    fn description(&self) -> &'static str {
        "Split every N lines"
    }

    fn boundaries(&self, source: &Source) -> Boundaries {
        let line_count = source.line_count();
        let step = self.lines_per_segment.max(1);
        Boundaries::from_points(line_count, (step..line_count).step_by(step))
    }
}
