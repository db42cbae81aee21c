//! Synthetic page fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

use image::{GrayImage, Luma};
use pagecut::{AnchorMode, Geometry, LayoutPreset};

pub const FIELDS: [&str; 3] = ["english", "pinyin", "phonetic"];

const WIDTH: u32 = 700;
const TOP: u32 = 100;
const ROW_PITCH: u32 = 40;
const GLYPH_HEIGHT: u32 = 12;

/// Fixed-anchor preset matching [`page`]: numbers at 230, markers at 310,
/// text from 400.
pub fn preset() -> LayoutPreset {
    LayoutPreset::new(
        "test-fixed",
        &FIELDS,
        AnchorMode::Fixed,
        Geometry {
            dist_marker: 300,
            width_marker: 70,
            dist_sents: 375,
            min_dist_no: 100,
            width_no: 100,
            hori_ma_offset: 0,
        },
    )
}

fn ink(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Luma([0]));
        }
    }
}

/// A page of `blocks` records with one row per field of [`preset`].
pub fn page(blocks: u32) -> GrayImage {
    let fields = FIELDS.len() as u32;
    let height = TOP + blocks.max(1) * fields * ROW_PITCH + ROW_PITCH;
    let mut img = GrayImage::from_pixel(WIDTH, height, Luma([255]));
    for b in 0..blocks {
        for f in 0..fields {
            let y = TOP + (b * fields + f) * ROW_PITCH;
            if f == 0 {
                ink(&mut img, 230, y, 270, y + GLYPH_HEIGHT);
            }
            ink(&mut img, 310, y, 340, y + GLYPH_HEIGHT);
            ink(&mut img, 400, y, 600, y + GLYPH_HEIGHT);
        }
    }
    img
}

/// Write `pages` as `p-<index>.png` into `dir`.
pub fn write_pages(dir: &Path, pages: &[GrayImage]) {
    std::fs::create_dir_all(dir).unwrap();
    for (index, page) in pages.iter().enumerate() {
        page.save(dir.join(format!("p-{index}.png"))).unwrap();
    }
}

/// Sorted file names of `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
