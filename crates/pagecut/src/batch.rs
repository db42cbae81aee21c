//! The batch driver: every page of a document through the cutting pipeline.
//!
//! Pages are processed one at a time in page-number order. Each block that
//! survives slicing becomes one record, written under the next value of a
//! counter shared by all field directories, so `english/0042.png` and
//! `pinyin/0042.png` always belong together.

use std::path::Path;

use pagecut_core::{CutOptions, LayoutPreset, PageCut, PageSkip, SkipReason, cut_page};
use tracing::{debug, info, warn};

use crate::error::BatchError;
use crate::output::OutputTree;
use crate::pages::{PAGE_NUMBER_OFFSET, PageFile, list_pages, load_page};
use crate::render::PageRenderer;

/// Options of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Character offset of the page number in page file names (default: 2).
    pub page_number_offset: usize,
    /// Per-page cutting options.
    pub cut: CutOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            page_number_offset: PAGE_NUMBER_OFFSET,
            cut: CutOptions::default(),
        }
    }
}

/// What a batch run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Page images seen.
    pub pages: usize,
    /// Records written.
    pub records: u32,
    /// Pages that contributed no records, in page order.
    pub skipped: Vec<PageSkip>,
    /// Fields written as blank canvases.
    pub blank_fields: usize,
}

/// Runs pages through [`cut_page`] and writes the records.
#[derive(Debug)]
pub struct BatchDriver {
    preset: LayoutPreset,
    options: BatchOptions,
    output: OutputTree,
    next_record: u32,
}

impl BatchDriver {
    /// Create a driver writing into `output`. The record counter starts at 1.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Config`] if `preset` is invalid.
    pub fn new(
        preset: LayoutPreset,
        options: BatchOptions,
        output: OutputTree,
    ) -> Result<Self, BatchError> {
        preset.validate()?;
        Ok(Self {
            preset,
            options,
            output,
            next_record: 1,
        })
    }

    /// The preset pages are cut with.
    pub fn preset(&self) -> &LayoutPreset {
        &self.preset
    }

    /// The output tree records are written to.
    pub fn output(&self) -> &OutputTree {
        &self.output
    }

    /// Number the next record will be written under.
    pub fn next_record(&self) -> u32 {
        self.next_record
    }

    /// List the page images of `dir` in page order.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Io`] if the directory cannot be read.
    pub fn pages(&self, dir: &Path) -> Result<Vec<PageFile>, BatchError> {
        list_pages(dir, self.options.page_number_offset)
    }

    /// Process every page image in `dir`.
    ///
    /// # Errors
    ///
    /// See [`run_pages`](Self::run_pages).
    pub fn run(&mut self, dir: &Path) -> Result<BatchReport, BatchError> {
        let pages = self.pages(dir)?;
        self.run_pages(&pages, |_, _| {})
    }

    /// Process `pages` in order, calling `progress(done, total)` before each.
    ///
    /// # Errors
    ///
    /// Returns the first record write failure. Pages that cannot be read or
    /// cut are skipped and listed in the report instead.
    pub fn run_pages<F>(
        &mut self,
        pages: &[PageFile],
        mut progress: F,
    ) -> Result<BatchReport, BatchError>
    where
        F: FnMut(usize, usize),
    {
        let mut report = BatchReport::default();
        for (index, page) in pages.iter().enumerate() {
            progress(index + 1, pages.len());
            report.pages += 1;
            match self.cut(page) {
                Ok(cut) => self.write_records(page, &cut, &mut report)?,
                Err(reason) => {
                    let skip = PageSkip::new(page.number, reason);
                    warn!(page = page.number, code = skip.reason.code(), "skipped, {}", skip.reason);
                    report.skipped.push(skip);
                }
            }
        }
        info!(
            pages = report.pages,
            records = report.records,
            skipped = report.skipped.len(),
            "batch finished"
        );
        Ok(report)
    }

    fn cut(&self, page: &PageFile) -> Result<PageCut, SkipReason> {
        let image = load_page(&page.path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
        let cut = cut_page(&image, &self.preset, &self.options.cut)?;
        debug!(
            page = page.number,
            anchor = cut.anchor.column,
            columns = ?cut.columns,
            "located page layout"
        );
        Ok(cut)
    }

    fn write_records(
        &mut self,
        page: &PageFile,
        cut: &PageCut,
        report: &mut BatchReport,
    ) -> Result<(), BatchError> {
        for record in &cut.records {
            let counter = self.next_record;
            for field in record.fields.iter().filter(|field| field.blank) {
                warn!(page = page.number, record = counter, field = %field.name, "blank field");
            }
            self.output.write_record(counter, record)?;
            self.next_record += 1;
            report.records += 1;
            report.blank_fields += record.blank_count();
        }
        info!(page = page.number, records = cut.records.len(), "page cut");
        Ok(())
    }
}

/// Prepare the output tree for `document` and its rendered pages.
///
/// With a renderer, a fresh tree is created at the document's output root and
/// the document is rendered into its temp directory. Without one, the tree
/// of an earlier run is reused as is.
///
/// # Errors
///
/// Returns [`BatchError::OutputExists`] when rendering into an existing root,
/// or the renderer's error.
pub fn prepare_document(
    document: &Path,
    preset: &LayoutPreset,
    renderer: Option<&dyn PageRenderer>,
) -> Result<OutputTree, BatchError> {
    let root = OutputTree::root_for(document);
    match renderer {
        Some(renderer) => {
            let tree = OutputTree::create(&root, &preset.items)?;
            renderer.render(document, preset.dpi, &tree.temp_dir())?;
            Ok(tree)
        }
        None => OutputTree::reuse(&root, &preset.items),
    }
}
