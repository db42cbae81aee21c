//! Global thresholding of grayscale images.

use image::GrayImage;

/// Pixel value of paper.
pub const WHITE: u8 = 255;
/// Pixel value of ink.
pub const BLACK: u8 = 0;

/// Threshold `image` into pure black and white.
///
/// Every pixel `<= threshold` becomes [`BLACK`], every other pixel becomes
/// [`WHITE`]. The input is left untouched; callers that still need the raw
/// intensities keep using their own buffer.
pub fn binarize(image: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if pixel.0[0] <= threshold { BLACK } else { WHITE };
    }
    out
}

/// Threshold `image` with a strict bound: pixels `< threshold` become
/// [`BLACK`], pixels at or above it [`WHITE`].
///
/// Used for the anchor search, where a pixel exactly at the preset's
/// `cut_thresh` counts as paper. A threshold of 0 yields a white image.
pub fn binarize_below(image: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if pixel.0[0] < threshold { BLACK } else { WHITE };
    }
    out
}

/// Lift every pixel `>= threshold` to [`WHITE`], keeping darker pixels as-is.
pub fn whiten_background(image: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        if pixel.0[0] >= threshold {
            pixel.0[0] = WHITE;
        }
    }
    out
}

/// Returns true if the image only contains [`BLACK`] and [`WHITE`] pixels.
pub fn is_binary(image: &GrayImage) -> bool {
    image.as_raw().iter().all(|&v| v == BLACK || v == WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn strict_bound_keeps_threshold_value_white() {
        let img = GrayImage::from_fn(3, 1, |x, _| Luma([[239, 240, 241][x as usize]]));
        assert_eq!(binarize_below(&img, 240).as_raw(), &vec![BLACK, WHITE, WHITE]);
        assert_eq!(binarize(&img, 240).as_raw(), &vec![BLACK, BLACK, WHITE]);
        assert!(binarize_below(&GrayImage::new(2, 2), 0).pixels().all(|p| p.0[0] == WHITE));
    }

    fn gradient(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]))
    }

    #[test]
    fn output_is_pure_black_and_white() {
        let img = gradient(64, 32);
        for threshold in [0u8, 1, 100, 229, 230, 254, 255] {
            assert!(is_binary(&binarize(&img, threshold)), "threshold {threshold}");
        }
    }

    #[test]
    fn binarize_is_idempotent() {
        let img = gradient(40, 40);
        for threshold in [0u8, 128, 240, 255] {
            let once = binarize(&img, threshold);
            let twice = binarize(&once, threshold);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn threshold_value_itself_turns_black() {
        let img = GrayImage::from_raw(3, 1, vec![239, 240, 241]).unwrap();
        let out = binarize(&img, 240);
        assert_eq!(out.as_raw(), &vec![BLACK, BLACK, WHITE]);
    }

    #[test]
    fn input_is_not_modified() {
        let img = gradient(16, 16);
        let copy = img.clone();
        let _ = binarize(&img, 128);
        assert_eq!(img, copy);
    }

    #[test]
    fn threshold_255_blackens_everything() {
        let img = gradient(8, 8);
        let out = binarize(&img, 255);
        assert!(out.as_raw().iter().all(|&v| v == BLACK));
    }

    #[test]
    fn whiten_keeps_dark_pixels() {
        let img = GrayImage::from_raw(4, 1, vec![10, 200, 230, 250]).unwrap();
        let out = whiten_background(&img, 230);
        assert_eq!(out.as_raw(), &vec![10, 200, WHITE, WHITE]);
    }

    #[test]
    fn is_binary_detects_gray() {
        let img = GrayImage::from_raw(2, 1, vec![0, 128]).unwrap();
        assert!(!is_binary(&img));
    }
}
