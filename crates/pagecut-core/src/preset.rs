//! Layout presets and the built-in document-family registry.
//!
//! A [`LayoutPreset`] bundles every hand-tuned constant needed to cut one
//! family of documents. The built-in families are the closed enum
//! [`DocumentFamily`]; [`lookup`] resolves a family key and validates the
//! resulting preset.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Rows kept from the top of every page; the footer below is discarded.
pub const DEFAULT_CUT_FOOTER: u32 = 2333;
/// Resolution pages are rendered at.
pub const DEFAULT_DPI: u32 = 300;
/// Binarization threshold used while slicing.
pub const DEFAULT_CUT_THRESH: u8 = 240;

/// Field directory names that would collide with run bookkeeping.
const RESERVED_ITEMS: &[&str] = &["temp"];

/// How the anchor column of a page is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorMode {
    /// The anchor is the constant `dist_marker` for every page.
    #[cfg_attr(feature = "serde", serde(rename = "fixed"))]
    Fixed,
    /// The anchor is the first column containing ink (the number glyphs).
    #[cfg_attr(feature = "serde", serde(rename = "flexible_no"))]
    FlexibleNumber,
    /// The anchor is the first column dense enough to be the marker column.
    #[cfg_attr(feature = "serde", serde(rename = "flexible_ma"))]
    FlexibleMarker,
}

impl AnchorMode {
    /// Returns the preset tag for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorMode::Fixed => "fixed",
            AnchorMode::FlexibleNumber => "flexible_no",
            AnchorMode::FlexibleMarker => "flexible_ma",
        }
    }
}

impl fmt::Display for AnchorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(AnchorMode::Fixed),
            "flexible_no" => Ok(AnchorMode::FlexibleNumber),
            "flexible_ma" => Ok(AnchorMode::FlexibleMarker),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Pixel geometry of a layout, relative to the anchor or the page edge
/// depending on the [`AnchorMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Distance to the start of the marker column.
    pub dist_marker: u32,
    /// Width of the marker column.
    pub width_marker: u32,
    /// Distance to the start of the field contents.
    pub dist_sents: u32,
    /// Smallest accepted first ink column, measured from the left edge.
    pub min_dist_no: u32,
    /// Maximum width of a record number.
    pub width_no: u32,
    /// Horizontal correction added to a density-located marker anchor.
    pub hori_ma_offset: i32,
}

/// Immutable cutting configuration for one document family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPreset {
    /// Document-family key.
    pub name: String,
    /// Rows kept per page.
    pub cut_footer: u32,
    /// Render resolution.
    pub dpi: u32,
    /// Binarization threshold for anchor search and band detection.
    pub cut_thresh: u8,
    /// Field names in on-page order; also the output directory names.
    pub items: Vec<String>,
    /// Anchor strategy.
    pub mode: AnchorMode,
    /// Mode-specific pixel geometry.
    pub geometry: Geometry,
}

impl LayoutPreset {
    /// Create a preset with the default footer, resolution and threshold.
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        items: &[S],
        mode: AnchorMode,
        geometry: Geometry,
    ) -> Self {
        Self {
            name: name.into(),
            cut_footer: DEFAULT_CUT_FOOTER,
            dpi: DEFAULT_DPI,
            cut_thresh: DEFAULT_CUT_THRESH,
            items: items.iter().map(|s| s.as_ref().to_string()).collect(),
            mode,
            geometry,
        }
    }

    /// Set the number of rows kept per page (builder pattern).
    pub fn with_cut_footer(mut self, cut_footer: u32) -> Self {
        self.cut_footer = cut_footer;
        self
    }

    /// Set the slicing threshold (builder pattern).
    pub fn with_cut_thresh(mut self, cut_thresh: u8) -> Self {
        self.cut_thresh = cut_thresh;
        self
    }

    /// Number of fields per record.
    pub fn field_count(&self) -> usize {
        self.items.len()
    }

    /// Check the preset's invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPreset`] if the item list is empty, has
    /// duplicates or names unusable as directories, if a width or the footer
    /// is zero, or if a fixed layout would put the number column left of the
    /// page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidPreset {
            name: self.name.clone(),
            reason,
        };

        if self.items.is_empty() {
            return Err(invalid("items must not be empty".to_string()));
        }
        let mut seen = HashSet::new();
        for item in &self.items {
            if item.is_empty()
                || item.contains(['/', '\\'])
                || item == "."
                || item == ".."
                || RESERVED_ITEMS.contains(&item.as_str())
            {
                return Err(invalid(format!("unusable item name '{item}'")));
            }
            if !seen.insert(item.as_str()) {
                return Err(invalid(format!("duplicate item '{item}'")));
            }
        }
        if self.cut_footer == 0 {
            return Err(invalid("cut_footer must be positive".to_string()));
        }
        if self.dpi == 0 {
            return Err(invalid("dpi must be positive".to_string()));
        }
        if self.geometry.width_marker == 0 || self.geometry.width_no == 0 {
            return Err(invalid("column widths must be positive".to_string()));
        }
        if self.mode == AnchorMode::Fixed && self.geometry.dist_marker < self.geometry.width_no {
            return Err(invalid(format!(
                "dist_marker ({}) is smaller than width_no ({})",
                self.geometry.dist_marker, self.geometry.width_no
            )));
        }
        Ok(())
    }
}

const ITEMS_BASIC1: &[&str] = &[
    "english",
    "literal",
    "simplified",
    "traditional",
    "pinyin",
    "phonetic",
];
const ITEMS_BASIC2: &[&str] = &["english", "simplified", "traditional", "pinyin", "phonetic"];
const ITEMS_DAILY: &[&str] = &["english", "traditional", "simplified", "pinyin", "phonetic"];
const ITEMS_BUSINESS: &[&str] = &["english", "traditional", "simplified", "pinyin"];

const BASIC_GEOMETRY: Geometry = Geometry {
    dist_marker: 90,
    width_marker: 50,
    dist_sents: 155,
    min_dist_no: 100,
    width_no: 70,
    hori_ma_offset: 0,
};

const FIXED_GEOMETRY: Geometry = Geometry {
    dist_marker: 300,
    width_marker: 70,
    dist_sents: 375,
    min_dist_no: 100,
    width_no: 100,
    hori_ma_offset: 0,
};

const MARKER_GEOMETRY: Geometry = Geometry {
    dist_marker: 0,
    width_marker: 50,
    dist_sents: 65,
    min_dist_no: 100,
    width_no: 95,
    hori_ma_offset: 0,
};

/// Built-in document families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFamily {
    /// GLOSSIKA-EBK-ENZH-B1
    EnzhBasic1,
    /// GLOSSIKA-EBK-ENZH-B2
    EnzhBasic2,
    /// GLOSSIKA-EBK-ENZH-B3
    EnzhBasic3,
    /// GLOSSIKA-EBK-ENZH-DLY
    EnzhDaily,
    /// GLOSSIKA-EBK-ENZH-BIZINTRO
    EnzhBusinessIntro,
    /// GLOSSIKA-EBK-BIZ1-ENZH
    Business1Enzh,
}

impl DocumentFamily {
    /// Every registered family, in registry order.
    pub const ALL: [DocumentFamily; 6] = [
        DocumentFamily::EnzhBasic1,
        DocumentFamily::EnzhBasic2,
        DocumentFamily::EnzhBasic3,
        DocumentFamily::EnzhDaily,
        DocumentFamily::EnzhBusinessIntro,
        DocumentFamily::Business1Enzh,
    ];

    /// Returns the document-family key (the source file stem).
    pub fn key(&self) -> &'static str {
        match self {
            DocumentFamily::EnzhBasic1 => "GLOSSIKA-EBK-ENZH-B1",
            DocumentFamily::EnzhBasic2 => "GLOSSIKA-EBK-ENZH-B2",
            DocumentFamily::EnzhBasic3 => "GLOSSIKA-EBK-ENZH-B3",
            DocumentFamily::EnzhDaily => "GLOSSIKA-EBK-ENZH-DLY",
            DocumentFamily::EnzhBusinessIntro => "GLOSSIKA-EBK-ENZH-BIZINTRO",
            DocumentFamily::Business1Enzh => "GLOSSIKA-EBK-BIZ1-ENZH",
        }
    }

    /// Build the preset for this family.
    pub fn preset(&self) -> LayoutPreset {
        let key = self.key();
        match self {
            DocumentFamily::EnzhBasic1 => LayoutPreset::new(
                key,
                ITEMS_BASIC1,
                AnchorMode::FlexibleNumber,
                BASIC_GEOMETRY,
            ),
            DocumentFamily::EnzhBasic2 | DocumentFamily::EnzhBasic3 => LayoutPreset::new(
                key,
                ITEMS_BASIC2,
                AnchorMode::FlexibleNumber,
                BASIC_GEOMETRY,
            ),
            DocumentFamily::EnzhDaily => {
                LayoutPreset::new(key, ITEMS_DAILY, AnchorMode::Fixed, FIXED_GEOMETRY)
            }
            DocumentFamily::EnzhBusinessIntro => LayoutPreset::new(
                key,
                ITEMS_DAILY,
                AnchorMode::FlexibleMarker,
                MARKER_GEOMETRY,
            ),
            DocumentFamily::Business1Enzh => LayoutPreset::new(
                key,
                ITEMS_BUSINESS,
                AnchorMode::FlexibleMarker,
                Geometry {
                    width_no: 150,
                    hori_ma_offset: -5,
                    dist_sents: 70,
                    ..MARKER_GEOMETRY
                },
            ),
        }
    }
}

impl fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DocumentFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentFamily::ALL
            .into_iter()
            .find(|family| family.key() == s)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Resolve a document-family key to its validated preset.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownPreset`] for keys outside the registry and
/// [`ConfigError::InvalidPreset`] if the registered preset fails validation.
pub fn lookup(name: &str) -> Result<LayoutPreset, ConfigError> {
    let preset = name.parse::<DocumentFamily>()?.preset();
    preset.validate()?;
    Ok(preset)
}
