//! Parsed query settings.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::paper::{Orientation, PaperSize};

/// What the labels contain.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AppMode {
    /// Images repeated by count.
    #[default]
    Image,
    /// Auto-numbered text, optionally with a QR code.
    Text,
}

/// Settings parsed from a query string. `None` means "not given".
///
/// Produced by [`crate::query::parse()`], applied with
/// [`layout_config()`](Self::layout_config) and
/// [`text_config()`](Self::text_config).
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Settings {
    /// `rows`, `r`.
    pub rows: Option<i32>,
    /// `cols`, `columns`, `c`.
    pub cols: Option<i32>,
    /// `margin`, `margin_mm`.
    pub margin_mm: Option<f64>,
    /// `spacing`, `spacing_mm`, `gap`.
    pub spacing_mm: Option<f64>,
    /// `orientation`, `orient`.
    pub orientation: Option<Orientation>,
    /// `paper`: named paper size.
    pub paper: Option<PaperSize>,
    /// `page_width`, `pw` in mm. Overrides `paper`.
    pub page_width_mm: Option<f64>,
    /// `page_height`, `ph` in mm. Overrides `paper`.
    pub page_height_mm: Option<f64>,
    /// `mode`: `image` or `text`.
    pub mode: Option<AppMode>,
    /// `prefix`.
    pub prefix: Option<String>,
    /// `start`, `start_number`.
    pub start_number: Option<u64>,
    /// `digits`.
    pub digits: Option<usize>,
    /// `count`, `n`.
    pub count: Option<usize>,
    /// `qr`, `show_qr`.
    pub show_qr_code: Option<bool>,
    /// `qr_ratio`, `qr_size`.
    pub qr_size_ratio: Option<f64>,
    /// `qr_prefix`.
    pub qr_content_prefix: Option<String>,
    /// Non-geometry application parameters.
    pub extras: BTreeMap<String, String>,
}

impl Settings {
    /// Empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Non-geometry parameters preserved during parsing.
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }
}
