//! Error and skip types for pagecut.
//!
//! Provides [`ConfigError`] for fatal configuration problems that stop a run
//! before any page is touched, [`SkipReason`] for the non-fatal conditions
//! that make a single page contribute no records, and [`PageSkip`] for pairing
//! a reason with the page it happened on.

use std::fmt;

/// Fatal configuration errors.
///
/// These are raised while resolving or validating a layout preset, before any
/// page is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No built-in preset is registered under this document-family key.
    UnknownPreset(String),
    /// A preset definition violates one of its invariants.
    InvalidPreset {
        /// Name of the offending preset.
        name: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Unrecognized anchor mode tag.
    UnknownMode(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownPreset(name) => write!(f, "unknown preset: {name}"),
            ConfigError::InvalidPreset { name, reason } => {
                write!(f, "invalid preset {name}: {reason}")
            }
            ConfigError::UnknownMode(mode) => write!(f, "unknown anchor mode: {mode}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why a page produced no records.
///
/// Each variant is an expected outcome for some pages of a document (title
/// pages, blank pages, pages with a different layout) and never aborts a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The page has no ink at all.
    EmptyPage,
    /// Content starts left of the preset's minimum number column.
    ContentNearEdge {
        /// First column containing ink.
        column: u32,
        /// Smallest accepted first column.
        min_column: u32,
    },
    /// No column is dense enough to be the marker column.
    NoMarkerColumn,
    /// A derived column range does not lie on the page.
    ColumnsOutOfBounds {
        /// Start column of the offending range.
        start: i64,
        /// Page width in pixels.
        width: u32,
    },
    /// Marker band count does not fit the number of blocks.
    BandMismatch {
        /// Marker cuts found (terminal included).
        found: usize,
        /// Marker cuts required by the block count (terminal included).
        expected: usize,
    },
    /// The layout matched but contained no blocks.
    NoRecords,
    /// The page image could not be read.
    Unreadable(String),
}

impl SkipReason {
    /// Returns the machine-readable code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::EmptyPage => "EMPTY_PAGE",
            SkipReason::ContentNearEdge { .. } => "CONTENT_NEAR_EDGE",
            SkipReason::NoMarkerColumn => "NO_MARKER_COLUMN",
            SkipReason::ColumnsOutOfBounds { .. } => "COLUMNS_OUT_OF_BOUNDS",
            SkipReason::BandMismatch { .. } => "BAND_MISMATCH",
            SkipReason::NoRecords => "NO_RECORDS",
            SkipReason::Unreadable(_) => "UNREADABLE",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyPage => write!(f, "empty page"),
            SkipReason::ContentNearEdge { column, min_column } => write!(
                f,
                "not a sentence page: content starts at column {column} (minimum {min_column})"
            ),
            SkipReason::NoMarkerColumn => {
                write!(f, "not a sentence page: no marker column found")
            }
            SkipReason::ColumnsOutOfBounds { start, width } => write!(
                f,
                "column range starting at {start} lies outside the page (width {width})"
            ),
            SkipReason::BandMismatch { found, expected } => write!(
                f,
                "not a sentence page: found {found} marker cuts, expected {expected}"
            ),
            SkipReason::NoRecords => write!(f, "no records on page"),
            SkipReason::Unreadable(msg) => write!(f, "unreadable page image: {msg}"),
        }
    }
}

/// A skipped page together with its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSkip {
    /// Page number as found in the page file name.
    pub page: u32,
    /// Why the page produced no records.
    pub reason: SkipReason,
}

impl PageSkip {
    /// Create a skip entry for `page`.
    pub fn new(page: u32, reason: SkipReason) -> Self {
        Self { page, reason }
    }
}

impl fmt::Display for PageSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (page {})", self.reason.code(), self.reason, self.page)
    }
}
