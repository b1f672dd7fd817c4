//! # Boundary Edits
//!
//! Pure reducers over a boundary list. Each takes the current list and
//! returns a new one; an edit that cannot apply returns an unchanged copy.
//!
//! ## Edit Semantics
//!
//! ### Toggle
//! - Removes an interior boundary, or inserts a missing one
//! - The `0` and `line_count` sentinels are never touched
//!
//! ### Split
//! - Inserts a boundary strictly inside the given segment
//!
//! ### Merge / Delete
//! - Remove the trailing boundary of a segment, absorbing its successor
//! - The last segment has no successor, so both are no-ops there
//! - Deleting never discards lines: segments always cover the whole source
//!
//! ### Clear
//! - Resets to a single segment

use crate::strategies::{apply_strategy, Strategy};
use crate::{Boundaries, SegmentError, Source};
use serde::{Deserialize, Serialize};

/// Toggle a boundary at `line`
pub fn toggle_boundary(boundaries: &Boundaries, line: usize) -> Boundaries {
    let mut next = boundaries.clone();
    if !next.is_interior(line) {
        return next;
    }
    if !next.remove(line) {
        next.insert(line);
    }
    next
}

/// Split segment `segment_id` (1-based) at `line`
pub fn split_segment(boundaries: &Boundaries, segment_id: usize, line: usize) -> Boundaries {
    let mut next = boundaries.clone();
    if let Some((start, end)) = boundaries.segment_range(segment_id) {
        if start < line && line < end {
            next.insert(line);
        }
    }
    next
}

/// Merge segment `segment_id` (1-based) with the one after it
pub fn merge_segments(boundaries: &Boundaries, segment_id: usize) -> Boundaries {
    let mut next = boundaries.clone();
    if segment_id < boundaries.segment_count() {
        if let Some((_, end)) = boundaries.segment_range(segment_id) {
            next.remove(end);
        }
    }
    next
}

/// Stop treating segment `segment_id` as its own unit.
///
/// Same as merging with the next segment; the text is kept.
pub fn delete_segment(boundaries: &Boundaries, segment_id: usize) -> Boundaries {
    merge_segments(boundaries, segment_id)
}

/// Reset to one segment spanning the whole source
pub fn clear_all(boundaries: &Boundaries) -> Boundaries {
    Boundaries::whole(boundaries.line_count())
}

/// A boundary-changing action, as dispatched by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Edit {
    /// Insert or remove the boundary at a line
    #[serde(rename_all = "camelCase")]
    ToggleBoundary { line: usize },

    /// Insert a boundary strictly inside a segment
    #[serde(rename_all = "camelCase")]
    SplitSegment { segment_id: usize, line: usize },

    /// Absorb the following segment
    #[serde(rename_all = "camelCase")]
    MergeSegments { segment_id: usize },

    /// Absorb the following segment (text is kept)
    #[serde(rename_all = "camelCase")]
    DeleteSegment { segment_id: usize },

    /// Back to a single segment
    ClearAll,

    /// Replace all boundaries with a strategy's output
    ApplyStrategy { strategy: Strategy },
}

impl Edit {
    /// Compute the edited list.
    ///
    /// Returns `Ok(None)` when the edit would leave the list unchanged.
    pub fn apply(&self, source: &Source, boundaries: &Boundaries) -> Result<Option<Boundaries>, SegmentError> {
        let next = match self {
            Edit::ToggleBoundary { line } => toggle_boundary(boundaries, *line),
            Edit::SplitSegment { segment_id, line } => split_segment(boundaries, *segment_id, *line),
            Edit::MergeSegments { segment_id } => merge_segments(boundaries, *segment_id),
            Edit::DeleteSegment { segment_id } => delete_segment(boundaries, *segment_id),
            Edit::ClearAll => clear_all(boundaries),
            Edit::ApplyStrategy { strategy } => apply_strategy(source, strategy)?,
        };

        if &next == boundaries {
            Ok(None)
        } else {
            Ok(Some(next))
        }
    }

    /// Short label for history entries
    pub fn describe(&self) -> String {
        match self {
            Edit::ToggleBoundary { line } => format!("Toggle boundary at line {}", line),
            Edit::SplitSegment { segment_id, line } => {
                format!("Split segment {} at line {}", segment_id, line)
            }
            Edit::MergeSegments { segment_id } => format!("Merge segment {} with next", segment_id),
            Edit::DeleteSegment { segment_id } => format!("Delete segment {}", segment_id),
            Edit::ClearAll => "Clear all boundaries".to_string(),
            Edit::ApplyStrategy { strategy } => format!("Apply {}", strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Boundaries {
        Boundaries::from_points(10, vec![3, 6, 9])
    }

    #[test]
    fn test_toggle_removes_existing_boundary() {
        assert_eq!(toggle_boundary(&sample(), 6).as_slice(), &[0, 3, 9, 10]);
    }

    #[test]
    fn test_toggle_inserts_missing_boundary() {
        assert_eq!(toggle_boundary(&sample(), 5).as_slice(), &[0, 3, 5, 6, 9, 10]);
    }

    #[test]
    fn test_toggle_ignores_sentinels_and_out_of_range() {
        assert_eq!(toggle_boundary(&sample(), 0), sample());
        assert_eq!(toggle_boundary(&sample(), 10), sample());
        assert_eq!(toggle_boundary(&sample(), 42), sample());
    }

    #[test]
    fn test_split_inside_segment() {
        assert_eq!(split_segment(&sample(), 2, 4).as_slice(), &[0, 3, 4, 6, 9, 10]);
    }

    #[test]
    fn test_split_rejects_edges_and_outside_lines() {
        assert_eq!(split_segment(&sample(), 2, 3), sample());
        assert_eq!(split_segment(&sample(), 2, 6), sample());
        assert_eq!(split_segment(&sample(), 2, 7), sample());
        assert_eq!(split_segment(&sample(), 0, 1), sample());
        assert_eq!(split_segment(&sample(), 9, 1), sample());
    }

    #[test]
    fn test_split_single_line_segment_is_noop() {
        assert_eq!(split_segment(&sample(), 4, 9), sample());
    }

    #[test]
    fn test_merge_removes_end_boundary() {
        assert_eq!(merge_segments(&sample(), 1).as_slice(), &[0, 6, 9, 10]);
        assert_eq!(merge_segments(&sample(), 3).as_slice(), &[0, 3, 6, 10]);
    }

    #[test]
    fn test_merge_last_segment_is_noop() {
        assert_eq!(merge_segments(&sample(), 4), sample());
        assert_eq!(merge_segments(&sample(), 0), sample());
    }

    #[test]
    fn test_delete_matches_merge() {
        for id in 0..=5 {
            assert_eq!(delete_segment(&sample(), id), merge_segments(&sample(), id));
        }
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let once = clear_all(&sample());
        assert_eq!(once.as_slice(), &[0, 10]);
        assert_eq!(clear_all(&once), once);
    }

    #[test]
    fn test_edit_apply_reports_noop() {
        let source = Source::from_lines(vec!["x".to_string(); 10]);
        let edit = Edit::DeleteSegment { segment_id: 4 };
        assert_eq!(edit.apply(&source, &sample()).unwrap(), None);

        let edit = Edit::ToggleBoundary { line: 6 };
        assert_eq!(
            edit.apply(&source, &sample()).unwrap(),
            Some(Boundaries::from_points(10, vec![3, 9]))
        );
    }

    #[test]
    fn test_edit_apply_strategy_propagates_errors() {
        let source = Source::from_lines(vec!["x".to_string(); 10]);
        let edit = Edit::ApplyStrategy {
            strategy: Strategy::ByLines { lines: 0 },
        };
        assert!(edit.apply(&source, &sample()).is_err());
    }

    #[test]
    fn test_edit_serialization() {
        let edit = Edit::SplitSegment { segment_id: 2, line: 4 };
        let json = serde_json::to_string(&edit).unwrap();
        assert_eq!(json, r#"{"type":"splitSegment","segmentId":2,"line":4}"#);

        let deserialized: Edit = serde_json::from_str(&json).unwrap();
        assert_eq!(edit, deserialized);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Edit::ApplyStrategy { strategy: Strategy::ByLines { lines: 3 } }.describe(),
            "Apply by-lines(3)"
        );
        assert_eq!(Edit::ClearAll.describe(), "Clear all boundaries");
    }
}
