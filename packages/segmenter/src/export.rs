//! # Segment Export
//!
//! The one persisted artifact: a JSON document holding the segments, the
//! boundary list, the scoring config and the statistics.
//!
//! Because segments always cover the whole source, joining the exported
//! texts with newlines reproduces the source exactly. [`ExportDocument::restore`]
//! relies on that to reopen an export without the original file.

use crate::{Boundaries, SegmentError, Segment, SegmenterConfig, Source, Statistics};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSegment {
    pub id: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub text: String,
    pub letter_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub segments: Vec<ExportedSegment>,
    pub boundaries: Vec<usize>,
    pub config: SegmenterConfig,
    pub stats: Statistics,
}

/// Build the export document from already-derived state
pub fn export_segments(
    segments: &[Segment],
    boundaries: &Boundaries,
    config: &SegmenterConfig,
    stats: &Statistics,
) -> ExportDocument {
    ExportDocument {
        segments: segments
            .iter()
            .map(|segment| ExportedSegment {
                id: segment.id,
                start_line: segment.start_line,
                end_line: segment.end_line,
                text: segment.text.clone(),
                letter_count: segment.letter_count,
            })
            .collect(),
        boundaries: boundaries.as_slice().to_vec(),
        config: config.clone(),
        stats: stats.clone(),
    }
}

/// A reopened export
#[derive(Debug)]
pub struct RestoredExport {
    pub source: Source,
    pub boundaries: Boundaries,
    pub config: SegmenterConfig,
}

impl ExportDocument {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SegmentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SegmentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild the source and validate the boundary list against it.
    ///
    /// Each exported segment must span exactly the matching boundary pair
    /// and hold as many lines as that pair covers.
    pub fn restore(&self) -> Result<RestoredExport, SegmentError> {
        self.config.validate()?;

        let text = self
            .segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let source = Source::from_text(&text);
        let boundaries = Boundaries::try_from_vec(source.line_count(), self.boundaries.clone())?;

        if self.segments.len() != boundaries.segment_count() {
            return Err(SegmentError::ExportMismatch(format!(
                "{} segments for {} boundary pairs",
                self.segments.len(),
                boundaries.segment_count()
            )));
        }

        for (segment, (start, end)) in self.segments.iter().zip(boundaries.ranges()) {
            if (segment.start_line, segment.end_line) != (start, end) {
                return Err(SegmentError::ExportMismatch(format!(
                    "segment {} spans {}..{} but boundaries give {}..{}",
                    segment.id, segment.start_line, segment.end_line, start, end
                )));
            }
            let lines = segment.text.split('\n').count();
            if lines != end - start {
                return Err(SegmentError::ExportMismatch(format!(
                    "segment {} holds {} lines but spans {}",
                    segment.id,
                    lines,
                    end - start
                )));
            }
        }

        Ok(RestoredExport {
            source,
            boundaries,
            config: self.config.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_segments, SegmentationSession, Strategy};

    fn exported() -> ExportDocument {
        let source = Source::from_text("one\ntwo\nthree\nfour\nfive");
        let mut session = SegmentationSession::new(source, SegmenterConfig::default()).unwrap();
        session.apply_strategy(Strategy::ByLines { lines: 2 }).unwrap();
        session.export()
    }

    #[test]
    fn test_export_shape() {
        let json: serde_json::Value = serde_json::from_str(&exported().to_json().unwrap()).unwrap();

        assert_eq!(json["boundaries"], serde_json::json!([0, 2, 4, 5]));
        assert_eq!(json["segments"][0]["startLine"], 0);
        assert_eq!(json["segments"][0]["endLine"], 2);
        assert_eq!(json["segments"][0]["text"], "one\ntwo");
        assert_eq!(json["segments"][2]["letterCount"], 4);
        assert_eq!(json["config"]["minLetters"], 100);
        assert_eq!(json["stats"]["total"], 3);
    }

    #[test]
    fn test_restore_rebuilds_source() {
        let restored = exported().restore().unwrap();
        assert_eq!(restored.source.text(), "one\ntwo\nthree\nfour\nfive");
        assert_eq!(restored.boundaries.as_slice(), &[0, 2, 4, 5]);

        let segments = build_segments(&restored.source, &restored.boundaries, &restored.config);
        assert_eq!(segments[1].text, "three\nfour");
    }

    #[test]
    fn test_restore_from_multiline_entries() {
        let source = Source::from_lines(vec![
            "one\ntwo".to_string(),
            "three".to_string(),
            "four\nfive".to_string(),
        ]);
        let mut session = SegmentationSession::new(source, SegmenterConfig::default()).unwrap();
        session.apply_strategy(Strategy::ByLines { lines: 2 }).unwrap();

        let restored = session.export().restore().unwrap();
        assert_eq!(restored.source, *session.source());
        assert_eq!(restored.boundaries.as_slice(), &[0, 2, 4, 5]);
    }

    #[test]
    fn test_restore_rejects_tampered_boundaries() {
        let mut document = exported();
        document.boundaries = vec![0, 3, 4, 5];
        assert!(matches!(document.restore(), Err(SegmentError::ExportMismatch(_))));

        document.boundaries = vec![0, 2, 2, 5];
        assert!(matches!(document.restore(), Err(SegmentError::InvalidBoundaries(_))));
    }

    #[test]
    fn test_restore_rejects_missing_segment() {
        let mut document = exported();
        document.segments.remove(1);
        assert!(document.restore().is_err());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(ExportDocument::from_json("{not json"), Err(SegmentError::Json(_))));
    }
}
