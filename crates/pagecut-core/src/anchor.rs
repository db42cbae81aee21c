//! Page anchor location.
//!
//! Every page gets a single horizontal reference column (the anchor) from
//! which the number, marker and field column ranges are derived. How the
//! anchor is found depends on the preset's [`AnchorMode`].

use image::GrayImage;

use crate::binarize::WHITE;
use crate::error::SkipReason;
use crate::geometry::{ColumnLayout, ColumnRange};
use crate::preset::{AnchorMode, Geometry};

/// Horizontal pixel offset all column ranges of a page are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Anchor column; may be negative after a horizontal correction.
    pub column: i64,
}

impl Anchor {
    /// Create an anchor at `column`.
    pub fn new(column: i64) -> Self {
        Self { column }
    }
}

/// First column of a binarized page that contains ink.
pub fn first_content_column(binarized: &GrayImage) -> Option<u32> {
    let width = binarized.width() as usize;
    if width == 0 {
        return None;
    }
    let mut first: Option<usize> = None;
    for row in binarized.as_raw().chunks_exact(width) {
        let limit = first.unwrap_or(width);
        if let Some(x) = row[..limit].iter().position(|&v| v < WHITE) {
            first = Some(x);
            if x == 0 {
                break;
            }
        }
    }
    first.map(|x| x as u32)
}

/// Ink density of every column: the sum of `(255 - v) / 255` over its pixels.
///
/// On a binarized page this is the number of black pixels in the column.
pub fn column_density(binarized: &GrayImage) -> Vec<f64> {
    let width = binarized.width() as usize;
    let mut density = vec![0.0; width];
    if width == 0 {
        return density;
    }
    for row in binarized.as_raw().chunks_exact(width) {
        for (sum, &v) in density.iter_mut().zip(row) {
            *sum += f64::from(WHITE - v) / 255.0;
        }
    }
    density
}

impl AnchorMode {
    /// Locate the anchor of a binarized, footer-truncated page.
    ///
    /// All modes first require ink on the page starting at or right of
    /// `min_dist_no`.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] that makes this page unusable:
    /// [`SkipReason::EmptyPage`], [`SkipReason::ContentNearEdge`], or, for
    /// [`AnchorMode::FlexibleMarker`], [`SkipReason::NoMarkerColumn`].
    pub fn locate(&self, binarized: &GrayImage, geometry: &Geometry) -> Result<Anchor, SkipReason> {
        let content = first_content_column(binarized).ok_or(SkipReason::EmptyPage)?;
        if content < geometry.min_dist_no {
            return Err(SkipReason::ContentNearEdge {
                column: content,
                min_column: geometry.min_dist_no,
            });
        }

        match self {
            AnchorMode::Fixed => Ok(Anchor::new(i64::from(geometry.dist_marker))),
            AnchorMode::FlexibleNumber => Ok(Anchor::new(i64::from(content))),
            AnchorMode::FlexibleMarker => {
                let min_density = 2.0 * f64::from(geometry.width_marker);
                let column = column_density(binarized)
                    .iter()
                    .position(|&d| d > min_density)
                    .ok_or(SkipReason::NoMarkerColumn)?;
                Ok(Anchor::new(column as i64 + i64::from(geometry.hori_ma_offset)))
            }
        }
    }

    /// Derive the column ranges of a page from its anchor.
    ///
    /// - `flexible_no`: number column starts at the anchor, marker and fields
    ///   follow at `dist_marker` and `dist_sents`.
    /// - `flexible_ma`: the anchor is the marker column; the number column
    ///   lies `width_no` to its left.
    /// - `fixed`: like `flexible_ma` with the anchor at `dist_marker`, but
    ///   fields start at the absolute column `dist_sents`.
    pub fn columns(&self, anchor: Anchor, geometry: &Geometry) -> ColumnLayout {
        let a = anchor.column;
        let dist_marker = i64::from(geometry.dist_marker);
        let width_marker = i64::from(geometry.width_marker);
        let dist_sents = i64::from(geometry.dist_sents);
        let width_no = i64::from(geometry.width_no);

        match self {
            AnchorMode::FlexibleNumber => ColumnLayout {
                number: ColumnRange::new(a, a + width_no),
                marker: ColumnRange::new(a + dist_marker, a + dist_marker + width_marker),
                sentences: ColumnRange::open(a + dist_sents),
            },
            AnchorMode::FlexibleMarker => ColumnLayout {
                number: ColumnRange::new(a - width_no, a),
                marker: ColumnRange::new(a, a + width_marker),
                sentences: ColumnRange::open(a + dist_sents),
            },
            AnchorMode::Fixed => ColumnLayout {
                number: ColumnRange::new(dist_marker - width_no, dist_marker),
                marker: ColumnRange::new(dist_marker, dist_marker + width_marker),
                sentences: ColumnRange::open(dist_sents),
            },
        }
    }
}
