//! pagecut-core: Backend-independent image algorithms for cutting fixed-layout pages.
//!
//! This crate turns one rendered page image into records of named field
//! images. It knows nothing about files or rendering; everything here works
//! on in-memory [`image::GrayImage`] buffers.
//!
//! # Pipeline
//!
//! 1. threshold the footer-truncated page with the preset's `cut_thresh`
//!    ([`binarize_below`](binarize::binarize_below))
//! 2. locate the page [`Anchor`] according to the preset's [`AnchorMode`]
//! 3. derive the number, marker and field [`ColumnLayout`]
//! 4. [`slice_page`] along the marker bands found by [`find_bands`]
//! 5. [`postprocess`] every field (cleanup, vertical trim, border)
//!
//! [`cut_page`] runs all of it for one page.

pub mod anchor;
pub mod bands;
pub mod binarize;
pub mod error;
pub mod geometry;
pub mod options;
pub mod page;
pub mod postprocess;
pub mod preset;
pub mod slicer;

pub use anchor::{Anchor, column_density, first_content_column};
pub use bands::{BandCuts, Edge, EdgeKind, find_bands, find_edges, row_profile};
pub use binarize::{BLACK, WHITE, binarize, binarize_below, is_binary, whiten_background};
pub use error::{ConfigError, PageSkip, SkipReason};
pub use geometry::{ColumnLayout, ColumnRange};
pub use options::{
    CutOptions, DEFAULT_BORDER, DEFAULT_CLEANUP_THRESHOLD, DEFAULT_VERTICAL_OFFSET, FieldCleanup,
    MAX_BORDER,
};
pub use page::{PageCut, Record, RecordField, cut_page, truncate_footer};
pub use postprocess::{PostProcessed, add_vertical_border, content_extent, postprocess};
pub use preset::{
    AnchorMode, DEFAULT_CUT_FOOTER, DEFAULT_CUT_THRESH, DEFAULT_DPI, DocumentFamily, Geometry,
    LayoutPreset, lookup,
};
pub use slicer::{Block, SliceMismatch, slice_page};
