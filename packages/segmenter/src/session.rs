//! # Segmentation Session
//!
//! One editor's view of one source text. The session owns the boundary
//! list and its history, and [`SegmentationSession::dispatch`] is the only
//! code path that changes either: it computes the edit, records the prior
//! list, then swaps in the new one. Edits that change nothing never reach
//! the history.
//!
//! Segments and statistics are derived on demand from the current list.
//! Concurrent editors of the same source use separate sessions.

use crate::export::{export_segments, ExportDocument};
use crate::{
    build_segments, Boundaries, Edit, History, SegmentError, Segment, SegmenterConfig, Source,
    Statistics, Strategy,
};
use tracing::{debug, instrument};

/// Single-editor segmentation state
#[derive(Debug)]
pub struct SegmentationSession {
    source: Source,
    boundaries: Boundaries,
    history: History,
    config: SegmenterConfig,
}

impl SegmentationSession {
    /// Open a session with the whole source as one segment
    pub fn new(source: Source, config: SegmenterConfig) -> Result<Self, SegmentError> {
        let boundaries = Boundaries::whole(source.line_count());
        Self::with_boundaries(source, boundaries, config)
    }

    /// Resume from a previously produced boundary list (history starts empty)
    pub fn with_boundaries(
        source: Source,
        boundaries: Boundaries,
        config: SegmenterConfig,
    ) -> Result<Self, SegmentError> {
        config.validate()?;
        if boundaries.line_count() != source.line_count() {
            return Err(SegmentError::InvalidBoundaries(format!(
                "boundaries end at {} but the source has {} lines",
                boundaries.line_count(),
                source.line_count()
            )));
        }

        Ok(Self {
            history: History::with_max_levels(config.history_limit),
            source,
            boundaries,
            config,
        })
    }

    /// Apply an edit, recording the prior list when it changes anything.
    ///
    /// Returns whether the boundary list changed.
    #[instrument(skip(self), fields(segments = self.boundaries.segment_count()))]
    pub fn dispatch(&mut self, edit: Edit) -> Result<bool, SegmentError> {
        let Some(next) = edit.apply(&self.source, &self.boundaries)? else {
            debug!("Edit left boundaries unchanged");
            return Ok(false);
        };

        let prior = std::mem::replace(&mut self.boundaries, next);
        self.history.record(prior, edit.describe());

        debug!(segments = self.boundaries.segment_count(), "Edit applied");
        Ok(true)
    }

    pub fn apply_strategy(&mut self, strategy: Strategy) -> Result<bool, SegmentError> {
        self.dispatch(Edit::ApplyStrategy { strategy })
    }

    pub fn toggle_boundary(&mut self, line: usize) -> Result<bool, SegmentError> {
        self.dispatch(Edit::ToggleBoundary { line })
    }

    pub fn split_segment(&mut self, segment_id: usize, line: usize) -> Result<bool, SegmentError> {
        self.dispatch(Edit::SplitSegment { segment_id, line })
    }

    pub fn merge_segments(&mut self, segment_id: usize) -> Result<bool, SegmentError> {
        self.dispatch(Edit::MergeSegments { segment_id })
    }

    pub fn delete_segment(&mut self, segment_id: usize) -> Result<bool, SegmentError> {
        self.dispatch(Edit::DeleteSegment { segment_id })
    }

    pub fn clear_all(&mut self) -> Result<bool, SegmentError> {
        self.dispatch(Edit::ClearAll)
    }

    /// Group the following edits into a single undo step
    pub fn begin_batch(&mut self, label: impl Into<String>) {
        self.history.begin_batch(label);
    }

    pub fn end_batch(&mut self) {
        self.history.end_batch();
    }

    /// Restore the previous boundary list. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.boundaries) {
            Some(previous) => {
                debug!(segments = previous.segment_count(), "Undo");
                self.boundaries = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone edit. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.boundaries) {
            Some(next) => {
                debug!(segments = next.segment_count(), "Redo");
                self.boundaries = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn segments(&self) -> Vec<Segment> {
        build_segments(&self.source, &self.boundaries, &self.config)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_segments(&self.segments())
    }

    /// Snapshot the current segmentation as an export document
    pub fn export(&self) -> ExportDocument {
        let segments = self.segments();
        let stats = Statistics::from_segments(&segments);
        export_segments(&segments, &self.boundaries, &self.config, &stats)
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }
}
