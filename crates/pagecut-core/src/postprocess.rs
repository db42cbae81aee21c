//! Field post-processing: cleanup, vertical trim and border padding.

use image::imageops::{crop_imm, replace};
use image::{GrayImage, Luma};

use crate::binarize::{WHITE, binarize, whiten_background};
use crate::options::{CutOptions, FieldCleanup};

/// A cut field ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostProcessed {
    /// Trimmed and bordered field image.
    pub image: GrayImage,
    /// True if the field had no ink and `image` is an empty canvas.
    pub blank: bool,
}

/// Inclusive row range `(first, last)` of rows containing any non-white pixel.
pub fn content_extent(image: &GrayImage) -> Option<(u32, u32)> {
    let width = image.width() as usize;
    if width == 0 {
        return None;
    }
    let mut inked = image
        .as_raw()
        .chunks_exact(width)
        .enumerate()
        .filter(|(_, row)| row.iter().any(|&v| v != WHITE))
        .map(|(y, _)| y as u32);
    let first = inked.next()?;
    let last = inked.last().unwrap_or(first);
    Some((first, last))
}

/// Pad `image` with `border` white rows above and below.
pub fn add_vertical_border(image: &GrayImage, border: u32) -> GrayImage {
    let mut canvas = GrayImage::from_pixel(
        image.width(),
        image.height().saturating_add(border.saturating_mul(2)),
        Luma([WHITE]),
    );
    replace(&mut canvas, image, 0, i64::from(border));
    canvas
}

/// Clean a cut field, trim it to its ink rows and add the border.
///
/// A field without any ink becomes a white canvas of the field's width and
/// `2 * border` rows, flagged as blank. The canvas is at least 1×1 so it can
/// always be encoded.
pub fn postprocess(field: &GrayImage, options: &CutOptions) -> PostProcessed {
    let cleaned = match options.cleanup {
        FieldCleanup::Binarize => binarize(field, options.threshold),
        FieldCleanup::WhitenBackground => whiten_background(field, options.threshold),
    };

    match content_extent(&cleaned) {
        Some((first, last)) => {
            let trimmed =
                crop_imm(&cleaned, 0, first, cleaned.width(), last - first + 1).to_image();
            PostProcessed {
                image: add_vertical_border(&trimmed, options.border),
                blank: false,
            }
        }
        None => PostProcessed {
            image: GrayImage::from_pixel(
                field.width().max(1),
                options.border.saturating_mul(2).max(1),
                Luma([WHITE]),
            ),
            blank: true,
        },
    }
}
