//! The output tree of a run.
//!
//! ```text
//! <root>/
//!   temp/             rendered pages (p-0.png, p-1.png, ...)
//!   <field>/0001.png  one directory per field, one file per record
//! ```

use std::path::{Path, PathBuf};

use image::ImageFormat;
use pagecut_core::Record;
use tracing::debug;

use crate::error::BatchError;

/// Directory below the output root holding rendered pages.
pub const TEMP_DIR: &str = "temp";

/// Output root of a document and the field directories below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTree {
    root: PathBuf,
}

impl OutputTree {
    /// Output root for `document`: its path without the extension.
    pub fn root_for(document: &Path) -> PathBuf {
        document.with_extension("")
    }

    /// Create a fresh tree at `root` with the temp directory and one directory
    /// per field.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::OutputExists`] if `root` already exists, or
    /// [`BatchError::Io`] if a directory cannot be created.
    pub fn create<S: AsRef<str>>(root: &Path, fields: &[S]) -> Result<Self, BatchError> {
        let tree = Self::create_fields(root, fields)?;
        std::fs::create_dir(tree.temp_dir())?;
        Ok(tree)
    }

    /// Create a fresh tree holding only the field directories, for pages
    /// rendered elsewhere.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_fields<S: AsRef<str>>(root: &Path, fields: &[S]) -> Result<Self, BatchError> {
        if root.exists() {
            return Err(BatchError::OutputExists(root.to_path_buf()));
        }
        std::fs::create_dir_all(root)?;
        Self::reuse(root, fields)
    }

    /// Open a tree left by an earlier run, creating missing field directories.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Io`] if a directory cannot be created.
    pub fn reuse<S: AsRef<str>>(root: &Path, fields: &[S]) -> Result<Self, BatchError> {
        let tree = Self {
            root: root.to_path_buf(),
        };
        for field in fields {
            std::fs::create_dir_all(tree.field_dir(field.as_ref()))?;
        }
        Ok(tree)
    }

    /// The output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of rendered pages.
    pub fn temp_dir(&self) -> PathBuf {
        self.root.join(TEMP_DIR)
    }

    /// Directory of the field called `field`.
    pub fn field_dir(&self, field: &str) -> PathBuf {
        self.root.join(field)
    }

    /// File of record `counter` in the directory of `field`.
    pub fn record_path(&self, field: &str, counter: u32) -> PathBuf {
        self.field_dir(field).join(format!("{counter:04}.png"))
    }

    /// Write every field of `record` as record number `counter`.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Image`] if a file cannot be written.
    pub fn write_record(&self, counter: u32, record: &Record) -> Result<(), BatchError> {
        for field in &record.fields {
            let path = self.record_path(&field.name, counter);
            debug!(path = %path.display(), "writing field");
            field.image.save_with_format(&path, ImageFormat::Png)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use pagecut_core::RecordField;

    const FIELDS: [&str; 2] = ["english", "pinyin"];

    fn record() -> Record {
        Record {
            fields: FIELDS
                .iter()
                .map(|name| RecordField {
                    name: name.to_string(),
                    image: GrayImage::from_pixel(8, 4, Luma([255])),
                    blank: false,
                })
                .collect(),
        }
    }

    #[test]
    fn root_drops_the_extension() {
        assert_eq!(
            OutputTree::root_for(Path::new("books/GLOSSIKA-EBK-ENZH-DLY.pdf")),
            PathBuf::from("books/GLOSSIKA-EBK-ENZH-DLY")
        );
    }

    #[test]
    fn create_lays_out_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("book");
        let tree = OutputTree::create(&root, &FIELDS).unwrap();
        assert!(tree.temp_dir().is_dir());
        assert!(root.join("english").is_dir());
        assert!(root.join("pinyin").is_dir());
    }

    #[test]
    fn field_only_tree_has_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let tree = OutputTree::create_fields(&root, &FIELDS).unwrap();
        assert!(!tree.temp_dir().exists());
        assert!(root.join("pinyin").is_dir());
        assert!(matches!(
            OutputTree::create_fields(&root, &FIELDS),
            Err(BatchError::OutputExists(_))
        ));
    }

    #[test]
    fn create_refuses_existing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = OutputTree::create(dir.path(), &FIELDS).unwrap_err();
        assert!(matches!(err, BatchError::OutputExists(_)));
    }

    #[test]
    fn reuse_accepts_existing_root() {
        let dir = tempfile::tempdir().unwrap();
        let tree = OutputTree::reuse(dir.path(), &FIELDS).unwrap();
        assert!(tree.field_dir("english").is_dir());
    }

    #[test]
    fn record_paths_are_zero_padded() {
        let tree = OutputTree {
            root: PathBuf::from("out"),
        };
        assert_eq!(
            tree.record_path("english", 7),
            PathBuf::from("out").join("english").join("0007.png")
        );
        assert_eq!(
            tree.record_path("english", 12345),
            PathBuf::from("out").join("english").join("12345.png")
        );
    }

    #[test]
    fn write_record_creates_one_file_per_field() {
        let dir = tempfile::tempdir().unwrap();
        let tree = OutputTree::create(&dir.path().join("book"), &FIELDS).unwrap();
        tree.write_record(1, &record()).unwrap();
        for field in FIELDS {
            let written = image::open(tree.record_path(field, 1)).unwrap().to_luma8();
            assert_eq!(written.dimensions(), (8, 4));
        }
    }
}
