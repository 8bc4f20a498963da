//! Paper sizes, page orientation, and orientation-invariant page dimensions.
//!
//! Base page dimensions are stored without orientation. The rendered width
//! and height are derived from the orientation alone, so toggling orientation
//! swaps the axes without knowing which dimension was originally "width".

use alloc::format;
use alloc::string::String;
use core::fmt;

use num_traits::Float;

/// Page orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Long edge vertical.
    Portrait,
    /// Long edge horizontal.
    #[default]
    Landscape,
}

impl Orientation {
    /// The other orientation.
    pub fn toggle(self) -> Self {
        match self {
            Self::Portrait => Self::Landscape,
            Self::Landscape => Self::Portrait,
        }
    }

    /// Orientation implied by rendered dimensions. Square pages are portrait.
    pub fn of(width: f64, height: f64) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Lowercase name, as used in persisted configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Width × height in millimeters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    /// Width in millimeters.
    pub width: f64,
    /// Height in millimeters.
    pub height: f64,
}

impl PageSize {
    /// Create a new page size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rendered dimensions for `orientation`.
    ///
    /// Landscape takes the longer edge as width, portrait the shorter.
    /// The result does not depend on which field held the longer edge.
    pub fn oriented(self, orientation: Orientation) -> Self {
        let long = self.width.max(self.height);
        let short = self.width.min(self.height);
        match orientation {
            Orientation::Landscape => Self::new(long, short),
            Orientation::Portrait => Self::new(short, long),
        }
    }

    /// Normalized base form: shorter edge first.
    pub fn normalized(self) -> Self {
        self.oriented(Orientation::Portrait)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PaperSize::A4.dimensions()
    }
}

/// A4 width in millimeters.
pub const A4_WIDTH_MM: f64 = 210.0;
/// A4 height in millimeters.
pub const A4_HEIGHT_MM: f64 = 297.0;
/// A3 width in millimeters.
pub const A3_WIDTH_MM: f64 = 297.0;
/// A3 height in millimeters.
pub const A3_HEIGHT_MM: f64 = 420.0;
/// A5 width in millimeters.
pub const A5_WIDTH_MM: f64 = 148.0;
/// A5 height in millimeters.
pub const A5_HEIGHT_MM: f64 = 210.0;
/// US Letter width in millimeters.
pub const LETTER_WIDTH_MM: f64 = 215.9;
/// US Letter height in millimeters.
pub const LETTER_HEIGHT_MM: f64 = 279.4;

/// Named paper sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    Letter,
    /// Anything not in the table.
    Custom,
}

impl PaperSize {
    /// Standard sizes in match order.
    pub const STANDARD: [Self; 4] = [Self::A4, Self::A3, Self::A5, Self::Letter];

    /// Portrait dimensions. `Custom` has none and falls back to A4.
    pub const fn dimensions(self) -> PageSize {
        match self {
            Self::A4 | Self::Custom => PageSize::new(A4_WIDTH_MM, A4_HEIGHT_MM),
            Self::A3 => PageSize::new(A3_WIDTH_MM, A3_HEIGHT_MM),
            Self::A5 => PageSize::new(A5_WIDTH_MM, A5_HEIGHT_MM),
            Self::Letter => PageSize::new(LETTER_WIDTH_MM, LETTER_HEIGHT_MM),
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A4 => "A4",
            Self::A3 => "A3",
            Self::A5 => "A5",
            Self::Letter => "Letter",
            Self::Custom => "Custom",
        }
    }

    /// Parse a case-insensitive name. `"custom"` is not accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::STANDARD
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Round to one decimal place, half away from zero.
pub(crate) fn round1(v: f64) -> f64 {
    Float::round(v * 10.0) / 10.0
}

/// Identify a standard paper size from base dimensions.
///
/// Both sides are compared after rounding to one decimal place, in the
/// order given (width against width). Rotated dimensions do not match.
pub fn paper_size_label(width: f64, height: f64) -> PaperSize {
    let (w, h) = (round1(width), round1(height));
    PaperSize::STANDARD
        .into_iter()
        .find(|p| {
            let d = p.dimensions();
            w == round1(d.width) && h == round1(d.height)
        })
        .unwrap_or(PaperSize::Custom)
}

/// Human-readable summary such as `"A4, 210×297mm"`.
pub fn paper_size_info(width: f64, height: f64) -> String {
    format!(
        "{}, {}×{}mm",
        paper_size_label(width, height),
        round1(width),
        round1(height)
    )
}
