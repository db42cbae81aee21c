//! Page image enumeration and loading.

use std::path::{Path, PathBuf};

use image::GrayImage;
use tracing::warn;

use crate::error::BatchError;

/// Character offset of the page number in rendered file names (`p-12.png`).
pub const PAGE_NUMBER_OFFSET: usize = 2;

/// A page image on disk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageFile {
    /// Page number parsed from the file name.
    pub number: u32,
    /// Path to the image.
    pub path: PathBuf,
}

/// Parse the page number of a `.png` file name.
///
/// The number spans from `offset` to the extension. Returns `None` for other
/// extensions and for names that carry no number there.
pub fn page_number(file_name: &str, offset: usize) -> Option<u32> {
    let stem = file_name.strip_suffix(".png")?;
    stem.get(offset..)?.parse().ok()
}

/// List the page images of `dir` in page-number order.
///
/// Files that are not `.png` are ignored; `.png` files without a number at
/// `offset` are skipped with a warning.
///
/// # Errors
///
/// Returns [`BatchError::Io`] if the directory cannot be read.
pub fn list_pages(dir: &Path, offset: usize) -> Result<Vec<PageFile>, BatchError> {
    let mut pages = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !name.ends_with(".png") {
            continue;
        }
        match page_number(name, offset) {
            Some(number) => pages.push(PageFile { number, path }),
            None => warn!(file = name, "no page number in file name, skipping"),
        }
    }
    pages.sort();
    Ok(pages)
}

/// Load a page image as 8-bit grayscale.
///
/// # Errors
///
/// Returns [`BatchError::Image`] if the file cannot be opened or decoded.
pub fn load_page(path: &Path) -> Result<GrayImage, BatchError> {
    Ok(image::open(path)?.to_luma8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use std::fs;

    #[test]
    fn page_numbers_from_names() {
        assert_eq!(page_number("p-0.png", 2), Some(0));
        assert_eq!(page_number("p-117.png", 2), Some(117));
        assert_eq!(page_number("p-3.jpg", 2), None);
        assert_eq!(page_number("cover.png", 2), None);
        assert_eq!(page_number("p.png", 2), None);
        assert_eq!(page_number("page-7.png", 5), Some(7));
    }

    #[test]
    fn pages_are_sorted_numerically() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["p-10.png", "p-2.png", "p-1.png", "notes.txt", "p-x.png"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let pages = list_pages(dir.path(), PAGE_NUMBER_OFFSET).unwrap();
        let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, [1, 2, 10]);
        assert!(pages[2].path.ends_with("p-10.png"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_pages(&dir.path().join("temp"), PAGE_NUMBER_OFFSET).unwrap_err();
        assert!(matches!(err, BatchError::Io(_)));
    }

    #[test]
    fn load_converts_to_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p-0.png");
        let rgb = image::RgbImage::from_pixel(4, 3, image::Rgb([255, 255, 255]));
        rgb.save(&path).unwrap();
        let page = load_page(&path).unwrap();
        assert_eq!(page.dimensions(), (4, 3));
        assert_eq!(page.get_pixel(0, 0), &Luma([255]));
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p-0.png");
        fs::write(&path, b"not a png").unwrap();
        assert!(matches!(load_page(&path), Err(BatchError::Image(_))));
    }
}
