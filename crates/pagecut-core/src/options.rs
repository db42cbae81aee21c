//! Options shared by every preset.

/// Threshold for the cosmetic cleanup of cut fields.
pub const DEFAULT_CLEANUP_THRESHOLD: u8 = 230;
/// White rows added above and below every cut field.
pub const DEFAULT_BORDER: u32 = 10;
/// Largest border accepted from the command line.
pub const MAX_BORDER: u32 = 1000;
/// Shift applied to every detected band cut, in rows.
pub const DEFAULT_VERTICAL_OFFSET: i32 = -5;

/// How a cut field is cleaned before it is trimmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldCleanup {
    /// Threshold the field into pure black and white.
    #[default]
    Binarize,
    /// Only lift light pixels to white, keeping anti-aliased ink.
    WhitenBackground,
}

/// Options controlling band detection and field post-processing.
///
/// Unlike [`LayoutPreset`](crate::LayoutPreset) values these are not tied to
/// a document family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutOptions {
    /// Cleanup threshold applied to cut fields (default: 230).
    pub threshold: u8,
    /// Border rows added above and below each field (default: 10).
    pub border: u32,
    /// Row shift applied to detected cuts (default: -5).
    pub vertical_offset: i32,
    /// Cleanup variant (default: [`FieldCleanup::Binarize`]).
    pub cleanup: FieldCleanup,
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_CLEANUP_THRESHOLD,
            border: DEFAULT_BORDER,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            cleanup: FieldCleanup::default(),
        }
    }
}
