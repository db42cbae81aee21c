//! Synthetic page images for the CLI tests.

#![allow(dead_code)]

use std::path::Path;

use image::{GrayImage, Luma};

/// Fields of the GLOSSIKA-EBK-ENZH-DLY preset.
pub const DAILY_FIELDS: [&str; 5] = ["english", "traditional", "simplified", "pinyin", "phonetic"];

fn ink(img: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32) {
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Luma([0]));
        }
    }
}

/// A page in the fixed daily layout: numbers at 230, markers at 310, text
/// from 400, one 40-row line per field.
pub fn daily_page(blocks: u32) -> GrayImage {
    let fields = DAILY_FIELDS.len() as u32;
    let height = 100 + blocks.max(1) * fields * 40 + 40;
    let mut img = GrayImage::from_pixel(700, height, Luma([255]));
    for b in 0..blocks {
        for f in 0..fields {
            let y = 100 + (b * fields + f) * 40;
            if f == 0 {
                ink(&mut img, 230, y, 270, y + 12);
            }
            ink(&mut img, 310, y, 340, y + 12);
            ink(&mut img, 400, y, 600, y + 12);
        }
    }
    img
}

pub fn blank_page() -> GrayImage {
    GrayImage::from_pixel(700, 400, Luma([255]))
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
