//! # Boundary Store
//!
//! The single source of truth for segmentation: a strictly increasing list
//! of line indices `0 = b0 < b1 < ... < bn = line_count`. Segments are never
//! stored, only derived from adjacent pairs.
//!
//! Every constructor produces a list that satisfies the invariants. Internal
//! writes re-check them with `debug_assert_valid`, so a broken producer
//! panics in debug builds instead of leaking a malformed list.

use crate::SegmentError;
use serde::Serialize;

/// Ordered, deduplicated segment start indices framed by `0` and `line_count`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Boundaries(Vec<usize>);

impl Boundaries {
    /// A single segment spanning the whole source
    pub fn whole(line_count: usize) -> Self {
        Self(vec![0, line_count])
    }

    /// Build from candidate interior points.
    ///
    /// Points outside `(0, line_count)` are dropped, the rest are sorted and
    /// deduplicated, then framed with `0` and `line_count`.
    pub fn from_points(line_count: usize, points: impl IntoIterator<Item = usize>) -> Self {
        let mut interior: Vec<usize> = points
            .into_iter()
            .filter(|&p| p > 0 && p < line_count)
            .collect();
        interior.sort_unstable();
        interior.dedup();

        let mut list = Vec::with_capacity(interior.len() + 2);
        list.push(0);
        list.extend(interior);
        list.push(line_count);

        let boundaries = Self(list);
        boundaries.debug_assert_valid();
        boundaries
    }

    /// Validate an externally supplied list without repairing it
    pub fn try_from_vec(line_count: usize, list: Vec<usize>) -> Result<Self, SegmentError> {
        if list.len() < 2 {
            return Err(SegmentError::InvalidBoundaries(format!(
                "expected at least 2 entries, got {}",
                list.len()
            )));
        }
        if list[0] != 0 {
            return Err(SegmentError::InvalidBoundaries(format!(
                "first entry must be 0, got {}",
                list[0]
            )));
        }
        let last = list[list.len() - 1];
        if last != line_count {
            return Err(SegmentError::InvalidBoundaries(format!(
                "last entry must be {}, got {}",
                line_count, last
            )));
        }
        if let Some(pair) = list.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(SegmentError::InvalidBoundaries(format!(
                "entries must be strictly increasing, found {} before {}",
                pair[0], pair[1]
            )));
        }

        Ok(Self(list))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Number of boundary entries (segments + 1)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.0.len() - 1
    }

    pub fn line_count(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    pub fn contains(&self, line: usize) -> bool {
        self.0.binary_search(&line).is_ok()
    }

    /// A line strictly between the sentinels
    pub fn is_interior(&self, line: usize) -> bool {
        line > 0 && line < self.line_count()
    }

    /// Half-open line range of a 1-based segment id
    pub fn segment_range(&self, segment_id: usize) -> Option<(usize, usize)> {
        if segment_id == 0 || segment_id > self.segment_count() {
            return None;
        }
        Some((self.0[segment_id - 1], self.0[segment_id]))
    }

    /// 1-based id of the segment containing `line`
    pub fn segment_id_at(&self, line: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        match self.0.binary_search(&line) {
            Ok(index) => Some(index + 1),
            Err(index) => Some(index),
        }
    }

    /// Iterate `(start, end)` pairs in order
    pub fn ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Insert an interior boundary. Returns false if it was already present.
    pub(crate) fn insert(&mut self, line: usize) -> bool {
        debug_assert!(self.is_interior(line), "boundary {} is not interior", line);
        match self.0.binary_search(&line) {
            Ok(_) => false,
            Err(index) => {
                self.0.insert(index, line);
                self.debug_assert_valid();
                true
            }
        }
    }

    /// Remove an interior boundary. Sentinels are never removed.
    pub(crate) fn remove(&mut self, line: usize) -> bool {
        if !self.is_interior(line) {
            return false;
        }
        match self.0.binary_search(&line) {
            Ok(index) => {
                self.0.remove(index);
                self.debug_assert_valid();
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn debug_assert_valid(&self) {
        debug_assert!(self.0.len() >= 2, "boundary list too short: {:?}", self.0);
        debug_assert_eq!(self.0[0], 0, "boundary list must start at 0: {:?}", self.0);
        debug_assert!(
            self.0.windows(2).all(|pair| pair[0] < pair[1]),
            "boundary list must be strictly increasing: {:?}",
            self.0
        );
    }
}

impl AsRef<[usize]> for Boundaries {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}
