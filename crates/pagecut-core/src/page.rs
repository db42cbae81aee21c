//! The per-page cutting pipeline.
//!
//! truncate footer → binarize → locate anchor → derive columns → slice blocks
//! → post-process every field.

use image::GrayImage;
use image::imageops::crop_imm;

use crate::anchor::Anchor;
use crate::binarize::binarize_below;
use crate::error::SkipReason;
use crate::geometry::ColumnLayout;
use crate::options::CutOptions;
use crate::postprocess::{PostProcessed, postprocess};
use crate::preset::LayoutPreset;
use crate::slicer::{Block, slice_page};

/// A post-processed field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    /// Field name (output directory).
    pub name: String,
    /// Trimmed and bordered image.
    pub image: GrayImage,
    /// True if the cut contained no ink.
    pub blank: bool,
}

/// A block whose fields are ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Fields in declared order.
    pub fields: Vec<RecordField>,
}

impl Record {
    /// Post-process every field of `block`.
    pub fn from_block(block: Block, options: &CutOptions) -> Self {
        let fields = block
            .into_fields()
            .into_iter()
            .map(|(name, image)| {
                let PostProcessed { image, blank } = postprocess(&image, options);
                RecordField { name, image, blank }
            })
            .collect();
        Self { fields }
    }

    /// Number of fields that came out blank.
    pub fn blank_count(&self) -> usize {
        self.fields.iter().filter(|field| field.blank).count()
    }
}

/// Everything learned while cutting one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCut {
    /// Anchor the columns were derived from.
    pub anchor: Anchor,
    /// Column ranges used for slicing.
    pub columns: ColumnLayout,
    /// Records in top-to-bottom order.
    pub records: Vec<Record>,
}

/// Keep the top `cut_footer` rows of `page`.
pub fn truncate_footer(page: &GrayImage, cut_footer: u32) -> GrayImage {
    let height = page.height().min(cut_footer);
    crop_imm(page, 0, 0, page.width(), height).to_image()
}

/// Cut one page image into post-processed records.
///
/// # Errors
///
/// Returns the [`SkipReason`] for pages that yield no records: no anchor, a
/// column range off the page, a band count mismatch, or no blocks at all.
pub fn cut_page(
    page: &GrayImage,
    preset: &LayoutPreset,
    options: &CutOptions,
) -> Result<PageCut, SkipReason> {
    let page = truncate_footer(page, preset.cut_footer);
    let binarized = binarize_below(&page, preset.cut_thresh);

    let anchor = preset.mode.locate(&binarized, &preset.geometry)?;
    let columns = preset.mode.columns(anchor, &preset.geometry);
    columns.check_bounds(page.width())?;

    let blocks = slice_page(
        &page,
        &columns,
        &preset.items,
        preset.cut_thresh,
        options.vertical_offset,
    )?;
    if blocks.is_empty() {
        return Err(SkipReason::NoRecords);
    }

    let records = blocks
        .into_iter()
        .map(|block| Record::from_block(block, options))
        .collect();
    Ok(PageCut {
        anchor,
        columns,
        records,
    })
}
