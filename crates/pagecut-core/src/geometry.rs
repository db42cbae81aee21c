//! Column ranges on a page.
//!
//! Column arithmetic is signed: anchor offsets may point left of the page,
//! which is only resolved against a concrete page width by [`ColumnRange::clip`]
//! and [`ColumnLayout::check_bounds`].

use crate::error::SkipReason;

/// A horizontal pixel range `start..end`; `end == None` runs to the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRange {
    /// First column (inclusive).
    pub start: i64,
    /// One past the last column, or `None` for open-ended.
    pub end: Option<i64>,
}

impl ColumnRange {
    /// Create a bounded range.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Create a range running from `start` to the right edge of the page.
    pub fn open(start: i64) -> Self {
        Self { start, end: None }
    }

    /// Resolve this range against a page `width`.
    ///
    /// Returns `(x, w)` with `w > 0`, or `None` if no column of the range lies
    /// on the page.
    pub fn clip(&self, width: u32) -> Option<(u32, u32)> {
        let width = i64::from(width);
        let start = self.start.max(0);
        let end = self.end.unwrap_or(width).min(width);
        if start >= end {
            return None;
        }
        Some((start as u32, (end - start) as u32))
    }
}

/// The three column ranges a page is sliced along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnLayout {
    /// Column range holding the record number glyphs.
    pub number: ColumnRange,
    /// Column range holding the per-field marker glyphs.
    pub marker: ColumnRange,
    /// Open-ended range holding the field contents.
    pub sentences: ColumnRange,
}

impl ColumnLayout {
    /// Check that every range starts on a page of the given width.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::ColumnsOutOfBounds`] for the first range starting
    /// left of column 0, at or beyond the right edge, or ending before it
    /// starts.
    pub fn check_bounds(&self, width: u32) -> Result<(), SkipReason> {
        for range in [self.number, self.marker, self.sentences] {
            let empty = range.end.is_some_and(|end| end <= range.start);
            if range.start < 0 || range.start >= i64::from(width) || empty {
                return Err(SkipReason::ColumnsOutOfBounds {
                    start: range.start,
                    width,
                });
            }
        }
        Ok(())
    }
}
