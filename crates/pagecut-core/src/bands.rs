//! Horizontal band detection along a column range.
//!
//! A column range is collapsed into a one-pixel-wide vertical profile: a row
//! is black if any pixel of the range is black after thresholding. Edges are
//! the rows where that profile changes between consecutive rows, which is the
//! same as convolving the profile with the vertical kernel `[1, -1]`.

use image::GrayImage;
use image::imageops::crop_imm;

use crate::binarize::{BLACK, WHITE, binarize};
use crate::geometry::ColumnRange;

/// Direction of a profile transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// White row followed by a black row (a band starts).
    Entry,
    /// Black row followed by a white row (a band ends).
    Exit,
}

/// A transition in the row profile of a column range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Cut row, with the vertical offset already applied.
    pub row: u32,
    /// Transition direction.
    pub kind: EdgeKind,
}

/// Ordered band start rows plus an implicit terminal cut at the image end.
///
/// Mirrors a cut list whose last element means "to the end of the image": a
/// page with `n` detected bands has `n + 1` cuts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BandCuts {
    rows: Vec<u32>,
}

impl BandCuts {
    /// Create cuts from explicit start rows.
    pub fn from_rows(rows: Vec<u32>) -> Self {
        Self { rows }
    }

    /// Detected band start rows, without the terminal cut.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Number of detected bands.
    pub fn band_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cuts including the terminal one.
    pub fn cut_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Row span `start..end` of band `index` in an image of `height` rows.
    ///
    /// The last band extends to `height`. Returns `None` past the last band.
    pub fn span(&self, index: usize, height: u32) -> Option<(u32, u32)> {
        let start = (*self.rows.get(index)?).min(height);
        let end = self
            .rows
            .get(index + 1)
            .copied()
            .unwrap_or(height)
            .min(height);
        Some((start, end.max(start)))
    }
}

/// Per-row minimum of the binarized pixels inside `columns`.
///
/// Rows of an empty or off-page range are reported white.
pub fn row_profile(image: &GrayImage, columns: ColumnRange, threshold: u8) -> Vec<u8> {
    let height = image.height();
    let Some((x, width)) = columns.clip(image.width()) else {
        return vec![WHITE; height as usize];
    };
    let strip = binarize(&crop_imm(image, x, 0, width, height).to_image(), threshold);
    strip
        .as_raw()
        .chunks_exact(width as usize)
        .map(|row| row.iter().copied().min().unwrap_or(WHITE))
        .collect()
}

fn shift(row: usize, vertical_offset: i32) -> u32 {
    (row as i64 + i64::from(vertical_offset)).max(0) as u32
}

/// Find every transition in the row profile of `columns`.
///
/// A transition between rows `i` and `i + 1` is reported at row `i`, moved by
/// `vertical_offset` and clamped to row 0. Both directions are returned in
/// top-to-bottom order.
pub fn find_edges(
    image: &GrayImage,
    columns: ColumnRange,
    threshold: u8,
    vertical_offset: i32,
) -> Vec<Edge> {
    let profile = row_profile(image, columns, threshold);
    profile
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let kind = match (pair[0], pair[1]) {
                (WHITE, BLACK) => EdgeKind::Entry,
                (BLACK, WHITE) => EdgeKind::Exit,
                _ => return None,
            };
            Some(Edge {
                row: shift(i, vertical_offset),
                kind,
            })
        })
        .collect()
}

/// Find the start rows of the bands in `columns`.
///
/// Only white-to-black transitions delimit bands; each band runs until the
/// next start, the last one to the end of the image.
pub fn find_bands(
    image: &GrayImage,
    columns: ColumnRange,
    threshold: u8,
    vertical_offset: i32,
) -> BandCuts {
    let rows = find_edges(image, columns, threshold, vertical_offset)
        .into_iter()
        .filter(|edge| edge.kind == EdgeKind::Entry)
        .map(|edge| edge.row)
        .collect();
    BandCuts { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn white(width: u32, height: u32) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([WHITE]))
    }

    fn fill(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, value: u8) {
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, Luma([value]));
            }
        }
    }

    const ALL: ColumnRange = ColumnRange {
        start: 0,
        end: None,
    };

    #[test]
    fn all_white_has_only_terminal_cut() {
        let cuts = find_bands(&white(50, 80), ALL, 240, -5);
        assert_eq!(cuts.band_count(), 0);
        assert_eq!(cuts.cut_count(), 1);
        assert!(find_edges(&white(50, 80), ALL, 240, -5).is_empty());
    }

    #[test]
    fn single_stripe_yields_entry_and_exit() {
        let (r, h) = (40u32, 12u32);
        let mut img = white(30, 100);
        fill(&mut img, 5, r, 25, r + h, 0);

        let edges = find_edges(&img, ALL, 240, -5);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].kind, EdgeKind::Entry);
        assert_eq!(edges[1].kind, EdgeKind::Exit);
        let entry = i64::from(edges[0].row);
        let exit = i64::from(edges[1].row);
        assert!((entry - (i64::from(r) - 5)).abs() <= 1, "entry {entry}");
        assert!((exit - (i64::from(r + h) - 5)).abs() <= 1, "exit {exit}");
    }

    #[test]
    fn find_bands_keeps_band_starts_only() {
        let mut img = white(30, 100);
        fill(&mut img, 0, 20, 30, 30, 0);
        fill(&mut img, 0, 60, 30, 65, 0);
        let cuts = find_bands(&img, ALL, 240, -5);
        assert_eq!(cuts.rows(), &[14, 54]);
        assert_eq!(cuts.cut_count(), 3);
    }

    #[test]
    fn zero_offset_reports_last_white_row() {
        let mut img = white(10, 50);
        fill(&mut img, 0, 10, 10, 20, 0);
        let cuts = find_bands(&img, ALL, 240, 0);
        assert_eq!(cuts.rows(), &[9]);
    }

    #[test]
    fn column_range_limits_detection() {
        let mut img = white(100, 60);
        fill(&mut img, 70, 20, 90, 30, 0);
        let cuts = find_bands(&img, ColumnRange::new(0, 50), 240, -5);
        assert_eq!(cuts.band_count(), 0);
        let cuts = find_bands(&img, ColumnRange::new(60, 100), 240, -5);
        assert_eq!(cuts.band_count(), 1);
    }

    #[test]
    fn threshold_decides_what_counts_as_ink() {
        let mut img = white(20, 40);
        fill(&mut img, 0, 10, 20, 15, 200);
        assert_eq!(find_bands(&img, ALL, 240, 0).band_count(), 1);
        assert_eq!(find_bands(&img, ALL, 100, 0).band_count(), 0);
    }

    #[test]
    fn offset_clamps_at_top() {
        let mut img = white(10, 30);
        fill(&mut img, 0, 2, 10, 6, 0);
        let cuts = find_bands(&img, ALL, 240, -5);
        assert_eq!(cuts.rows(), &[0]);
    }

    #[test]
    fn off_page_range_is_white() {
        let mut img = white(10, 30);
        fill(&mut img, 0, 5, 10, 10, 0);
        let profile = row_profile(&img, ColumnRange::new(20, 40), 240);
        assert_eq!(profile, vec![WHITE; 30]);
    }

    #[test]
    fn span_runs_to_next_cut_and_then_to_end() {
        let cuts = BandCuts::from_rows(vec![10, 40, 70]);
        assert_eq!(cuts.span(0, 100), Some((10, 40)));
        assert_eq!(cuts.span(2, 100), Some((70, 100)));
        assert_eq!(cuts.span(3, 100), None);
    }

    #[test]
    fn span_never_inverts() {
        let cuts = BandCuts::from_rows(vec![0, 0, 5]);
        assert_eq!(cuts.span(0, 10), Some((0, 0)));
        assert_eq!(cuts.span(2, 3), Some((3, 3)));
    }
}
