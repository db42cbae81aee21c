//! Block slicing.
//!
//! A page holds a run of records (blocks), each made of one row group per
//! field. Number glyphs mark the start of each block and marker glyphs the
//! start of each field row, so the number bands give the block count and the
//! marker bands give the field cut lines.

use std::fmt;

use image::GrayImage;
use image::imageops::crop_imm;

use crate::bands::find_bands;
use crate::error::SkipReason;
use crate::geometry::ColumnLayout;

/// One record cut from a page: field name to sub-image, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    fields: Vec<(String, GrayImage)>,
}

impl Block {
    /// Number of fields in this block.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the block has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sub-image of the field called `name`.
    pub fn get(&self, name: &str) -> Option<&GrayImage> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, image)| image)
    }

    /// Field names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, image)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GrayImage)> {
        self.fields.iter().map(|(name, image)| (name.as_str(), image))
    }

    /// Consume the block, returning its fields.
    pub fn into_fields(self) -> Vec<(String, GrayImage)> {
        self.fields
    }
}

/// The marker band count did not fit the number of detected blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceMismatch {
    /// Blocks implied by the number bands.
    pub blocks: usize,
    /// Marker cuts found, terminal included.
    pub found: usize,
    /// Marker cuts required, terminal included.
    pub expected: usize,
}

impl fmt::Display for SliceMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} blocks need {} marker cuts, found {}",
            self.blocks, self.expected, self.found
        )
    }
}

impl std::error::Error for SliceMismatch {}

impl From<SliceMismatch> for SkipReason {
    fn from(mismatch: SliceMismatch) -> Self {
        SkipReason::BandMismatch {
            found: mismatch.found,
            expected: mismatch.expected,
        }
    }
}

/// Slice a page into blocks of named fields.
///
/// Bands are detected on thresholded copies; the returned sub-images are
/// cropped from `image` itself, spanning the full width of
/// `columns.sentences`. A page whose layout matches but holds no number band
/// yields an empty vector.
///
/// # Errors
///
/// Returns [`SliceMismatch`] unless the marker cut count (terminal included)
/// equals `field_names.len() * blocks + 1`.
pub fn slice_page<S: AsRef<str>>(
    image: &GrayImage,
    columns: &ColumnLayout,
    field_names: &[S],
    threshold: u8,
    vertical_offset: i32,
) -> Result<Vec<Block>, SliceMismatch> {
    let items = field_names.len();
    let number_cuts = find_bands(image, columns.number, threshold, vertical_offset);
    let blocks_on_page = number_cuts.cut_count() - 1;
    let marker_cuts = find_bands(image, columns.marker, threshold, vertical_offset);

    let expected = items * blocks_on_page + 1;
    if marker_cuts.cut_count() != expected {
        return Err(SliceMismatch {
            blocks: blocks_on_page,
            found: marker_cuts.cut_count(),
            expected,
        });
    }

    let height = image.height();
    let (x, width) = columns
        .sentences
        .clip(image.width())
        .unwrap_or((image.width(), 0));

    let mut blocks = Vec::with_capacity(blocks_on_page);
    for block in 0..blocks_on_page {
        let mut fields = Vec::with_capacity(items);
        for (item, name) in field_names.iter().enumerate() {
            let (top, bottom) = marker_cuts
                .span(block * items + item, height)
                .unwrap_or((height, height));
            let crop = crop_imm(image, x, top, width, bottom - top).to_image();
            fields.push((name.as_ref().to_string(), crop));
        }
        blocks.push(Block { fields });
    }
    Ok(blocks)
}
