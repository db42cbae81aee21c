use std::cell::Cell;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use pagecut::{
    BatchDriver, BatchOptions, BatchReport, CutOptions, LayoutPreset, OutputTree, lookup,
};
use tracing_subscriber::EnvFilter;

use crate::cli::CutArgs;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over the level chosen by `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging disabled: {e}");
    }
}

/// Look up a preset with a user-friendly error message.
pub fn resolve_preset(name: &str) -> Result<LayoutPreset, i32> {
    lookup(name).map_err(|e| {
        eprintln!("Error: {e}");
        eprintln!("Run `pagecut presets` to list the known presets.");
        1
    })
}

/// Batch options from the shared command-line arguments.
pub fn batch_options(args: &CutArgs) -> BatchOptions {
    BatchOptions {
        cut: CutOptions {
            border: args.border,
            cleanup: args.cleanup.into(),
            ..CutOptions::default()
        },
        ..BatchOptions::default()
    }
}

/// Run every page image in `pages` through a new driver writing to `output`.
pub fn run_batch(
    preset: LayoutPreset,
    options: BatchOptions,
    output: OutputTree,
    pages: &Path,
) -> Result<BatchReport, i32> {
    let mut driver = BatchDriver::new(preset, options, output).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    let page_files = driver.pages(pages).map_err(|e| {
        eprintln!("Error: cannot list pages in {}: {e}", pages.display());
        1
    })?;
    if page_files.is_empty() {
        eprintln!("Warning: no page images found in {}", pages.display());
    }

    let reporter = ProgressReporter::new(page_files.len());
    let report = driver
        .run_pages(&page_files, |done, _| reporter.report(done))
        .map_err(|e| {
            reporter.finish();
            eprintln!("Error: {e}");
            1
        })?;
    reporter.finish();
    print_summary(&report, driver.output().root());
    Ok(report)
}

/// Print the outcome of a run to stderr.
pub fn print_summary(report: &BatchReport, root: &Path) {
    for skip in &report.skipped {
        eprintln!("Skipped page {}: {}", skip.page, skip.reason);
    }
    eprintln!(
        "Wrote {} records to {} ({} pages, {} skipped, {} blank fields)",
        report.records,
        root.display(),
        report.pages,
        report.skipped.len(),
        report.blank_fields
    );
}

/// Page progress on stderr. Draws nothing unless stderr is a terminal.
pub struct ProgressReporter {
    total: usize,
    is_tty: bool,
    drawn: Cell<usize>,
}

impl ProgressReporter {
    /// Reporter for a run over `total` page images.
    pub fn new(total: usize) -> Self {
        Self::with_terminal(total, io::stderr().is_terminal())
    }

    fn with_terminal(total: usize, is_tty: bool) -> Self {
        Self {
            total,
            is_tty,
            drawn: Cell::new(0),
        }
    }

    fn line(&self, current: usize) -> String {
        format!("Cutting page {current}/{}...", self.total)
    }

    /// Redraw the progress line for page `current` (1-indexed).
    pub fn report(&self, current: usize) {
        if !self.is_tty {
            return;
        }
        let line = self.line(current);
        eprint!("\r{line}");
        self.drawn.set(line.len());
        let _ = io::stderr().flush();
    }

    /// Erase whatever was drawn.
    pub fn finish(&self) {
        let width = self.drawn.replace(0);
        if width > 0 {
            eprint!("\r{}\r", " ".repeat(width));
            let _ = io::stderr().flush();
        }
    }
}
