use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pagecut::FieldCleanup;
use pagecut::pagecut_core::{DEFAULT_BORDER, MAX_BORDER};

/// Cut the pages of fixed-layout PDF documents into per-field image records.
#[derive(Debug, Parser)]
#[command(name = "pagecut", about, version)]
pub struct Cli {
    /// Log debug diagnostics (anchors, columns, written files)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a PDF and cut every page into records next to it
    Cut {
        /// Path to the PDF file; its name without extension is the output folder
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Preset name. Default: the file name without extension
        #[arg(long)]
        preset: Option<String>,

        /// Reuse the pages rendered by an earlier run instead of rendering again
        #[arg(long)]
        skip_render: bool,

        /// ImageMagick convert program used for rendering
        #[arg(long, value_name = "PROGRAM", default_value = "convert")]
        convert: PathBuf,

        #[command(flatten)]
        cut: CutArgs,
    },

    /// Cut a directory of already rendered page images
    Slice {
        /// Directory holding p-<N>.png page images
        #[arg(value_name = "PAGES_DIR")]
        pages: PathBuf,

        /// Preset name
        #[arg(long)]
        preset: String,

        /// Output folder (must not exist)
        #[arg(long, short, value_name = "DIR")]
        output: PathBuf,

        #[command(flatten)]
        cut: CutArgs,
    },

    /// List the built-in presets
    Presets {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Field post-processing options shared by `cut` and `slice`.
#[derive(Debug, Clone, clap::Args)]
pub struct CutArgs {
    /// How cut fields are cleaned before trimming
    #[arg(long, value_enum, default_value_t = CleanupArg::Binarize)]
    pub cleanup: CleanupArg,

    /// White rows added above and below every field
    #[arg(
        long,
        default_value_t = DEFAULT_BORDER,
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_BORDER)),
    )]
    pub border: u32,
}

/// Output format for listings.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// Field cleanup variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CleanupArg {
    /// Threshold fields into pure black and white
    Binarize,
    /// Only lift light background pixels to white
    Whiten,
}

impl From<CleanupArg> for FieldCleanup {
    fn from(arg: CleanupArg) -> Self {
        match arg {
            CleanupArg::Binarize => FieldCleanup::Binarize,
            CleanupArg::Whiten => FieldCleanup::WhitenBackground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_cut_with_file() {
        let cli = Cli::parse_from(["pagecut", "cut", "GLOSSIKA-EBK-ENZH-DLY.pdf"]);
        match cli.command {
            Commands::Cut {
                ref file,
                ref preset,
                skip_render,
                ref convert,
                ref cut,
            } => {
                assert_eq!(file, &PathBuf::from("GLOSSIKA-EBK-ENZH-DLY.pdf"));
                assert!(preset.is_none());
                assert!(!skip_render);
                assert_eq!(convert, &PathBuf::from("convert"));
                assert_eq!(cut.cleanup, CleanupArg::Binarize);
                assert_eq!(cut.border, 10);
            }
            _ => panic!("expected Cut subcommand"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_cut_with_options() {
        let cli = Cli::parse_from([
            "pagecut",
            "cut",
            "book.pdf",
            "--preset",
            "GLOSSIKA-EBK-ENZH-B1",
            "--skip-render",
            "--cleanup",
            "whiten",
            "--border",
            "4",
            "-v",
        ]);
        match cli.command {
            Commands::Cut {
                ref preset,
                skip_render,
                ref cut,
                ..
            } => {
                assert_eq!(preset.as_deref(), Some("GLOSSIKA-EBK-ENZH-B1"));
                assert!(skip_render);
                assert_eq!(cut.cleanup, CleanupArg::Whiten);
                assert_eq!(cut.border, 4);
            }
            _ => panic!("expected Cut subcommand"),
        }
        assert!(cli.verbose);
    }

    #[test]
    fn parse_slice_requires_preset_and_output() {
        assert!(Cli::try_parse_from(["pagecut", "slice", "pages"]).is_err());
        assert!(Cli::try_parse_from(["pagecut", "slice", "pages", "--preset", "x"]).is_err());
        let cli = Cli::parse_from([
            "pagecut", "slice", "pages", "--preset", "x", "-o", "out",
        ]);
        match cli.command {
            Commands::Slice {
                ref pages,
                ref preset,
                ref output,
                ..
            } => {
                assert_eq!(pages, &PathBuf::from("pages"));
                assert_eq!(preset, "x");
                assert_eq!(output, &PathBuf::from("out"));
            }
            _ => panic!("expected Slice subcommand"),
        }
    }

    #[test]
    fn border_is_bounded() {
        let parse = |border: &str| {
            Cli::try_parse_from(["pagecut", "cut", "book.pdf", "--border", border])
        };
        assert!(parse("0").is_ok());
        assert!(parse("1000").is_ok());
        assert!(parse("1001").is_err());
        assert!(parse("4294967295").is_err());
    }

    #[test]
    fn presets_default_format_is_text() {
        let cli = Cli::parse_from(["pagecut", "presets"]);
        match cli.command {
            Commands::Presets { format } => assert!(matches!(format, OutputFormat::Text)),
            _ => panic!("expected Presets subcommand"),
        }
    }

    #[test]
    fn cleanup_maps_to_field_cleanup() {
        assert_eq!(FieldCleanup::from(CleanupArg::Binarize), FieldCleanup::Binarize);
        assert_eq!(
            FieldCleanup::from(CleanupArg::Whiten),
            FieldCleanup::WhitenBackground
        );
    }
}
