//! # Codex Segmenter
//!
//! Text segmentation and validation engine for Codex.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ source: raw text → line array               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ strategies | edits → Boundaries             │
//! │  - Boundaries are the only stored state     │
//! │  - Session dispatch records undo history    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ segments → statistics → export              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Boundaries are the source of truth**: segments and statistics are derived views
//! 2. **Full coverage**: segments partition the whole source at all times
//! 3. **Pure reducers**: every edit maps a boundary list to a new one
//! 4. **One dispatcher**: only the session mutates boundaries and history
//! 5. **Injected scoring**: validity window and ideal length come from config
//!
//! ## Usage
//!
//! ```rust
//! use codex_segmenter::{SegmentationSession, SegmenterConfig, Source, Strategy};
//!
//! let source = Source::from_text("one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten");
//! let mut session = SegmentationSession::new(source, SegmenterConfig::default())?;
//!
//! session.apply_strategy(Strategy::ByLines { lines: 3 })?;
//! assert_eq!(session.boundaries().as_slice(), &[0, 3, 6, 9, 10]);
//!
//! session.toggle_boundary(6)?;
//! assert_eq!(session.segments().len(), 3);
//!
//! session.undo();
//! assert_eq!(session.boundaries().as_slice(), &[0, 3, 6, 9, 10]);
//!
//! let json = session.export().to_json()?;
//! # let _ = json;
//! # Ok::<(), codex_segmenter::SegmentError>(())
//! ```

mod boundaries;
mod config;
mod edits;
mod errors;
mod export;
mod history;
mod segment;
mod session;
pub mod source;
mod statistics;
pub mod strategies;

pub use boundaries::Boundaries;
pub use config::SegmenterConfig;
pub use edits::{clear_all, delete_segment, merge_segments, split_segment, toggle_boundary, Edit};
pub use errors::{ConfigError, SegmentError};
pub use export::{export_segments, ExportDocument, ExportedSegment, RestoredExport};
pub use history::{History, HistoryEntry};
pub use segment::{build_segments, quality, Segment, ValidationStatus};
pub use session::SegmentationSession;
pub use source::Source;
pub use statistics::Statistics;
pub use strategies::{apply_strategy, SegmentationStrategy, Strategy};
