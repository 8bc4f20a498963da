//! Grid layout computation for one label page.
//!
//! Computes the rectangle of every label slot from page size, margins,
//! spacing, and row/column counts. All values are millimeters in a
//! top-left-origin coordinate system. Renderers with a bottom-left origin
//! flip `y` themselves.
//!
//! # Example
//!
//! ```
//! use labelgrid::{LayoutConfig, Orientation};
//!
//! let layout = LayoutConfig::new(3, 3)
//!     .margin_mm(20.0)
//!     .spacing_mm(10.0)
//!     .orientation(Orientation::Portrait)
//!     .compute();
//!
//! assert_eq!(layout.positions.len(), 9);
//! assert_eq!(layout.label_width, 50.0);
//! assert_eq!(layout.positions[1].x, 80.0);
//! ```

use alloc::vec::Vec;

use crate::paper::{Orientation, PageSize, PaperSize};

/// Upper bound for the long axis of the grid (rows in portrait, cols in landscape).
pub const MAX_LONG_AXIS: i32 = 20;
/// Upper bound for the short axis of the grid (cols in portrait, rows in landscape).
pub const MAX_SHORT_AXIS: i32 = 10;

/// Grid intent for one page.
///
/// `page_width_mm` / `page_height_mm` are the base, orientation-free
/// dimensions. Unset (or non-positive) values fall back to A4 per axis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LayoutConfig {
    /// Slots per column.
    pub rows: i32,
    /// Slots per row.
    pub cols: i32,
    /// Inset on all four sides.
    pub margin_mm: f64,
    /// Gap between adjacent slots.
    pub spacing_mm: f64,
    pub orientation: Orientation,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub page_width_mm: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub page_height_mm: Option<f64>,
}

impl Default for LayoutConfig {
    /// 3×3 on landscape A4 with 10mm margin and spacing.
    fn default() -> Self {
        let a4 = PaperSize::A4.dimensions();
        Self {
            rows: 3,
            cols: 3,
            margin_mm: 10.0,
            spacing_mm: 10.0,
            orientation: Orientation::Landscape,
            page_width_mm: Some(a4.width),
            page_height_mm: Some(a4.height),
        }
    }
}

impl LayoutConfig {
    /// A `rows × cols` grid with the default margin, spacing, orientation, and paper.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the margin in millimeters.
    pub fn margin_mm(mut self, margin: f64) -> Self {
        self.margin_mm = margin;
        self
    }

    /// Set the inter-slot spacing in millimeters.
    pub fn spacing_mm(mut self, spacing: f64) -> Self {
        self.spacing_mm = spacing;
        self
    }

    /// Set the page orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set base page dimensions in millimeters.
    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_width_mm = Some(size.width);
        self.page_height_mm = Some(size.height);
        self
    }

    /// Set base page dimensions from a named paper size.
    pub fn paper(self, paper: PaperSize) -> Self {
        self.page_size(paper.dimensions())
    }

    /// Base dimensions with A4 substituted for unset axes.
    pub fn base_page(&self) -> PageSize {
        let a4 = PaperSize::A4.dimensions();
        let usable = |v: Option<f64>| v.filter(|v| *v > 0.0);
        PageSize::new(
            usable(self.page_width_mm).unwrap_or(a4.width),
            usable(self.page_height_mm).unwrap_or(a4.height),
        )
    }

    /// Rendered page dimensions for the configured orientation.
    pub fn page(&self) -> PageSize {
        self.base_page().oriented(self.orientation)
    }

    /// Largest row count allowed for the configured orientation.
    pub fn max_rows(&self) -> i32 {
        match self.orientation {
            Orientation::Portrait => MAX_LONG_AXIS,
            Orientation::Landscape => MAX_SHORT_AXIS,
        }
    }

    /// Largest column count allowed for the configured orientation.
    pub fn max_cols(&self) -> i32 {
        match self.orientation {
            Orientation::Portrait => MAX_SHORT_AXIS,
            Orientation::Landscape => MAX_LONG_AXIS,
        }
    }

    /// Clamp rows and cols into `1..=max` for the configured orientation.
    ///
    /// Margin and spacing are left alone; out-of-range values still surface
    /// as a [`LayoutError`] from [`compute`](Self::compute).
    pub fn sanitized(mut self) -> Self {
        self.rows = self.rows.clamp(1, self.max_rows());
        self.cols = self.cols.clamp(1, self.max_cols());
        self
    }

    /// Compute slot rectangles. Never panics; failures are in [`GridLayout::error`].
    pub fn compute(&self) -> GridLayout {
        compute_layout(self)
    }

    /// Like [`compute`](Self::compute), with the validation failure as `Err`.
    pub fn try_compute(&self) -> Result<GridLayout, LayoutError> {
        let layout = self.compute();
        match layout.error {
            Some(e) => Err(e),
            None => Ok(layout),
        }
    }
}

/// One label slot on a page, in millimeters from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Zero-based row.
    pub row: u32,
    /// Zero-based column.
    pub col: u32,
}

impl SlotRect {
    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Computed page layout.
///
/// On failure `positions` is empty, label dimensions are zero, `error` is
/// set, and the page dimensions are still the resolved ones.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridLayout {
    /// Slot rectangles in row-major order.
    pub positions: Vec<SlotRect>,
    pub label_width: f64,
    pub label_height: f64,
    /// Rendered page width.
    pub page_width: f64,
    /// Rendered page height.
    pub page_height: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub error: Option<LayoutError>,
}

impl GridLayout {
    fn failed(page: PageSize, error: LayoutError) -> Self {
        crate::log::debug!(code = error.code(), "grid layout rejected");
        Self {
            positions: Vec::new(),
            label_width: 0.0,
            label_height: 0.0,
            page_width: page.width,
            page_height: page.height,
            error: Some(error),
        }
    }

    /// Whether the layout validated.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Number of slots on each page. Zero for failed layouts.
    pub fn slots_per_page(&self) -> usize {
        self.positions.len()
    }

    /// Rendered page dimensions.
    pub fn page(&self) -> PageSize {
        PageSize::new(self.page_width, self.page_height)
    }
}

/// Layout validation failure.
///
/// Checked in declaration order; the first failing check wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LayoutError {
    /// Rows or columns is zero or negative.
    #[error("rows and columns must be positive")]
    RowsColsPositive,
    /// Margin or spacing is negative (or not a number).
    #[error("margin and spacing must not be negative")]
    MarginSpacingPositive,
    /// Margins leave no usable width or height.
    #[error("margin is too large for the page")]
    MarginTooLarge,
    /// Spacing leaves no room for labels, or the grid has too many slots
    /// to allocate.
    #[error("labels would have no width or height")]
    LabelTooSmall,
}

impl LayoutError {
    /// Stable code used by persisted state and UI message lookup.
    pub const fn code(self) -> &'static str {
        match self {
            Self::RowsColsPositive => "ROWS_COLS_POSITIVE",
            Self::MarginSpacingPositive => "MARGIN_SPACING_POSITIVE",
            Self::MarginTooLarge => "MARGIN_TOO_LARGE",
            Self::LabelTooSmall => "LABEL_TOO_SMALL",
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: &str) -> Option<Self> {
        [
            Self::RowsColsPositive,
            Self::MarginSpacingPositive,
            Self::MarginTooLarge,
            Self::LabelTooSmall,
        ]
        .into_iter()
        .find(|e| e.code() == code)
    }
}

/// Compute slot rectangles for one page.
pub fn compute_layout(config: &LayoutConfig) -> GridLayout {
    // Step 1: Resolve rendered page size.
    let page = config.page();

    // Step 2: Validate, short-circuiting in order.
    if config.rows <= 0 || config.cols <= 0 {
        return GridLayout::failed(page, LayoutError::RowsColsPositive);
    }
    let (margin, spacing) = (config.margin_mm, config.spacing_mm);
    // NaN fails here rather than leaking into every rectangle.
    if !(margin >= 0.0 && spacing >= 0.0) {
        return GridLayout::failed(page, LayoutError::MarginSpacingPositive);
    }

    let usable_w = page.width - 2.0 * margin;
    let usable_h = page.height - 2.0 * margin;
    if usable_w <= 0.0 || usable_h <= 0.0 {
        return GridLayout::failed(page, LayoutError::MarginTooLarge);
    }

    let (rows, cols) = (config.rows as u32, config.cols as u32);
    let label_w = (usable_w - f64::from(cols - 1) * spacing) / f64::from(cols);
    let label_h = (usable_h - f64::from(rows - 1) * spacing) / f64::from(rows);
    if label_w <= 0.0 || label_h <= 0.0 {
        return GridLayout::failed(page, LayoutError::LabelTooSmall);
    }

    // Step 3: Row-major rectangles. A grid too large to allocate has
    // sub-micron labels, so it is rejected the same way.
    let mut positions = Vec::new();
    let reserved = (rows as usize)
        .checked_mul(cols as usize)
        .is_some_and(|n| positions.try_reserve_exact(n).is_ok());
    if !reserved {
        return GridLayout::failed(page, LayoutError::LabelTooSmall);
    }
    for row in 0..rows {
        for col in 0..cols {
            positions.push(SlotRect {
                x: margin + f64::from(col) * (label_w + spacing),
                y: margin + f64::from(row) * (label_h + spacing),
                width: label_w,
                height: label_h,
                row,
                col,
            });
        }
    }

    GridLayout {
        positions,
        label_width: label_w,
        label_height: label_h,
        page_width: page.width,
        page_height: page.height,
        error: None,
    }
}
