//! URL-query-style configuration parsing.
//!
//! Parses strings like `?rows=3&cols=4&margin=5&paper=letter&prefix=SN-&qr=on`
//! into [`Settings`], which overlay onto a [`LayoutConfig`](crate::LayoutConfig)
//! and [`TextConfig`](crate::TextConfig).
//!
//! # Example
//!
//! ```
//! use labelgrid::{LayoutConfig, Orientation, TextConfig, query};
//!
//! let result = query::parse("rows=4&cols=2&margin=8&orientation=portrait&digits=5");
//! assert!(result.warnings.is_empty());
//!
//! let layout = result.settings.layout_config(&LayoutConfig::default());
//! assert_eq!((layout.rows, layout.cols), (4, 2));
//! assert_eq!(layout.orientation, Orientation::Portrait);
//!
//! let text = result.settings.text_config(&TextConfig::default());
//! assert_eq!(text.label_text(0), "SN-00001");
//! ```
//!
//! # Non-layout parameters
//!
//! Application keys that do not affect geometry (`theme`, `lang`) are kept in
//! [`Settings::extras()`] without warnings. Only unknown keys produce
//! [`ParseWarning::KeyNotRecognized`].

mod convert;
mod parse;
pub mod settings;

pub use settings::{AppMode, Settings};

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed settings.
    pub settings: Settings,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// The key is not a known setting.
    KeyNotRecognized { key: String, value: String },
    /// The key is known but its value could not be parsed; the setting is left unset.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (settings, warnings) = parse::parse_query(query);
    #[cfg(feature = "tracing")]
    for w in &warnings {
        crate::log::warn!(warning = ?w, "query parameter ignored or overridden");
    }
    ParseResult { settings, warnings }
}
