//! Apply parsed [`Settings`] onto layout and text configurations.

use crate::grid::LayoutConfig;
use crate::text::TextConfig;

use super::settings::{AppMode, Settings};

impl Settings {
    /// `base` with every given layout setting applied.
    ///
    /// `paper` is applied before `page_width` / `page_height`, so explicit
    /// dimensions win. Values are not clamped; call
    /// [`LayoutConfig::sanitized`] before computing to keep the grid within
    /// the editor's limits. Unclamped grids still compute without panicking.
    pub fn layout_config(&self, base: &LayoutConfig) -> LayoutConfig {
        let mut c = base.clone();
        if let Some(rows) = self.rows {
            c.rows = rows;
        }
        if let Some(cols) = self.cols {
            c.cols = cols;
        }
        if let Some(margin) = self.margin_mm {
            c.margin_mm = margin;
        }
        if let Some(spacing) = self.spacing_mm {
            c.spacing_mm = spacing;
        }
        if let Some(orientation) = self.orientation {
            c.orientation = orientation;
        }
        if let Some(paper) = self.paper {
            c = c.paper(paper);
        }
        if let Some(w) = self.page_width_mm {
            c.page_width_mm = Some(w);
        }
        if let Some(h) = self.page_height_mm {
            c.page_height_mm = Some(h);
        }
        c
    }

    /// `base` with every given text setting applied.
    pub fn text_config(&self, base: &TextConfig) -> TextConfig {
        let mut c = base.clone();
        if let Some(prefix) = &self.prefix {
            c.prefix.clone_from(prefix);
        }
        if let Some(start) = self.start_number {
            c.start_number = start;
        }
        if let Some(digits) = self.digits {
            c.digits = digits;
        }
        if let Some(count) = self.count {
            c.count = count;
        }
        if let Some(show) = self.show_qr_code {
            c.show_qr_code = show;
        }
        if let Some(ratio) = self.qr_size_ratio {
            c.qr_size_ratio = ratio;
        }
        if let Some(prefix) = &self.qr_content_prefix {
            c.qr_content_prefix.clone_from(prefix);
        }
        c
    }

    /// Content mode, defaulting to images.
    pub fn app_mode(&self) -> AppMode {
        self.mode.unwrap_or_default()
    }
}
