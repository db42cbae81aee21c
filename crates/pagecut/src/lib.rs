//! pagecut: Cut rendered pages of fixed-layout documents into per-field image records.
//!
//! This is the public API facade crate for pagecut. It re-exports the image
//! algorithms of pagecut-core and adds everything that touches the filesystem.
//!
//! # Architecture
//!
//! - **pagecut-core**: Presets, band detection, anchors, slicing, post-processing
//! - **pagecut** (this crate): Rendering, page enumeration, the output tree and
//!   the batch driver
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use pagecut::{BatchDriver, BatchOptions, ImageMagick, lookup, prepare_document};
//!
//! let document = Path::new("GLOSSIKA-EBK-ENZH-DLY.pdf");
//! let preset = lookup("GLOSSIKA-EBK-ENZH-DLY")?;
//! let output = prepare_document(document, &preset, Some(&ImageMagick::default()))?;
//! let pages = output.temp_dir();
//! let mut driver = BatchDriver::new(preset, BatchOptions::default(), output)?;
//! let report = driver.run(&pages)?;
//! println!("{} records", report.records);
//! # Ok::<(), pagecut::BatchError>(())
//! ```

pub mod batch;
pub mod error;
pub mod output;
pub mod pages;
pub mod render;

pub use pagecut_core;

pub use batch::{BatchDriver, BatchOptions, BatchReport, prepare_document};
pub use error::BatchError;
pub use output::{OutputTree, TEMP_DIR};
pub use pages::{PAGE_NUMBER_OFFSET, PageFile, list_pages, load_page, page_number};
pub use pagecut_core::{
    AnchorMode, ConfigError, CutOptions, DocumentFamily, FieldCleanup, Geometry, LayoutPreset,
    PageSkip, Record, SkipReason, cut_page, lookup,
};
pub use render::{ImageMagick, PAGE_PATTERN, PageRenderer};
