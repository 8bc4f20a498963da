//! Content sizing inside a slot: text auto-fit, QR/text boxes, image
//! contain-fit, and text placement.
//!
//! Preview and document generation call the same functions with the same
//! [`SlotRect`], so what is previewed is what gets printed.
//!
//! ```text
//!     with QR                      text only
//!     ┌──────────────┐             ┌──────────────┐
//!     │   10% inset  │             │              │
//!     │   ┌──────┐   │             │  ┌────────┐  │
//!     │   │  QR  │   │             │  │  text  │  │  ≤ 50% height
//!     │   └──────┘   │             │  └────────┘  │  ≤ 80% width
//!     │ ┌──────────┐ │             │              │
//!     │ │   text   │ │ ≤ 20% h     └──────────────┘
//!     │ └──────────┘ │ ≤ 90% w
//!     └──────────────┘
//! ```

use crate::grid::SlotRect;

/// Millimeters per PostScript point.
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Convert millimeters to points.
pub fn mm_to_pt(mm: f64) -> f64 {
    mm / MM_PER_PT
}

/// Convert points to millimeters.
pub fn pt_to_mm(pt: f64) -> f64 {
    pt * MM_PER_PT
}

/// Fraction of the slot the text line may occupy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextBudget {
    /// Fraction of slot width.
    pub width: f64,
    /// Fraction of slot height.
    pub height: f64,
}

/// Font-dependent fitting constants.
///
/// [`MONOSPACE`](Self::MONOSPACE) is calibrated for a bold Courier-style
/// face. Other fonts need their own advance ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitMetrics {
    /// Character advance width as a fraction of font size.
    pub char_advance: f64,
    /// Text budget when the label is text only.
    pub text_only: TextBudget,
    /// Text budget when a QR code sits above the text.
    pub with_qr: TextBudget,
    /// Gap above the QR code as a fraction of slot height.
    pub qr_top_inset: f64,
}

impl FitMetrics {
    /// Courier-style monospace metrics.
    pub const MONOSPACE: Self = Self {
        char_advance: 0.6,
        text_only: TextBudget {
            width: 0.8,
            height: 0.5,
        },
        with_qr: TextBudget {
            width: 0.9,
            height: 0.2,
        },
        qr_top_inset: 0.1,
    };

    fn budget(&self, show_qr: bool) -> TextBudget {
        if show_qr { self.with_qr } else { self.text_only }
    }

    /// Largest font size (mm) at which `text` fits both budgets.
    ///
    /// Empty text gets 0.
    pub fn font_size_mm(&self, text: &str, slot: &SlotRect, show_qr: bool) -> f64 {
        let len = text.chars().count();
        if len == 0 {
            return 0.0;
        }
        let budget = self.budget(show_qr);
        let by_width = (slot.width * budget.width) / (len as f64 * self.char_advance);
        let by_height = slot.height * budget.height;
        by_width.min(by_height).max(0.0)
    }

    /// QR and text sub-regions, relative to the slot's top-left corner.
    pub fn text_layout_boxes(&self, slot: &SlotRect, show_qr: bool, qr_size_ratio: f64) -> TextBoxes {
        if !show_qr {
            return TextBoxes {
                qr_dim_mm: 0.0,
                qr_top_mm: 0.0,
                qr_left_mm: 0.0,
                text_box_top_mm: 0.0,
                text_box_height_mm: slot.height,
            };
        }
        let qr_dim = slot.width.min(slot.height) * qr_size_ratio;
        let qr_top = slot.height * self.qr_top_inset;
        let text_top = qr_top + qr_dim;
        TextBoxes {
            qr_dim_mm: qr_dim,
            qr_top_mm: qr_top,
            qr_left_mm: (slot.width - qr_dim) / 2.0,
            text_box_top_mm: text_top,
            text_box_height_mm: (slot.height - text_top).max(0.0),
        }
    }

    /// Width (mm) of `text` at `font_size_mm` under these metrics.
    pub fn text_width_mm(&self, text: &str, font_size_mm: f64) -> f64 {
        text.chars().count() as f64 * self.char_advance * font_size_mm
    }
}

impl Default for FitMetrics {
    fn default() -> Self {
        Self::MONOSPACE
    }
}

/// QR and text regions inside a slot, in mm relative to the slot origin.
///
/// Without a QR code the QR fields are zero and the text box is the whole slot.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextBoxes {
    /// QR side length (always square).
    pub qr_dim_mm: f64,
    pub qr_top_mm: f64,
    pub qr_left_mm: f64,
    /// Text region starts directly below the QR code.
    pub text_box_top_mm: f64,
    /// Never negative.
    pub text_box_height_mm: f64,
}

/// Font size for `text` in `slot` with [`FitMetrics::MONOSPACE`].
pub fn label_font_size_mm(text: &str, slot: &SlotRect, show_qr: bool) -> f64 {
    FitMetrics::MONOSPACE.font_size_mm(text, slot, show_qr)
}

/// QR/text boxes for `slot` with [`FitMetrics::MONOSPACE`].
pub fn text_layout_boxes(slot: &SlotRect, show_qr: bool, qr_size_ratio: f64) -> TextBoxes {
    FitMetrics::MONOSPACE.text_layout_boxes(slot, show_qr, qr_size_ratio)
}

/// Where to draw a text line, in page millimeters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextPlacement {
    /// Left edge of the line, centring it horizontally in the slot.
    pub x: f64,
    /// Baseline, centring a one-line box of `font_size_mm` in the text box.
    pub baseline_y: f64,
}

/// Centre a text line of `text_width_mm` in the slot's text box.
///
/// `text_width_mm` is the renderer's measured width; use
/// [`FitMetrics::text_width_mm`] when no measurement is available.
pub fn place_text(slot: &SlotRect, boxes: &TextBoxes, text_width_mm: f64, font_size_mm: f64) -> TextPlacement {
    TextPlacement {
        x: slot.x + (slot.width - text_width_mm) / 2.0,
        baseline_y: slot.y + boxes.text_box_top_mm + (boxes.text_box_height_mm + font_size_mm) / 2.0,
    }
}

/// An image scaled to fit inside a slot, in page millimeters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImagePlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Millimeters per source pixel.
    pub scale: f64,
}

/// Scale an `image_w × image_h` pixel image to fit inside `slot`, preserving
/// aspect ratio, and centre it. One axis always matches the slot.
///
/// Returns `None` for zero-sized images.
pub fn fit_image(slot: &SlotRect, image_w: u32, image_h: u32) -> Option<ImagePlacement> {
    if image_w == 0 || image_h == 0 {
        return None;
    }
    let (iw, ih) = (f64::from(image_w), f64::from(image_h));
    let scale = (slot.width / iw).min(slot.height / ih);
    let (w, h) = (iw * scale, ih * scale);
    Some(ImagePlacement {
        x: slot.x + (slot.width - w) / 2.0,
        y: slot.y + (slot.height - h) / 2.0,
        width: w,
        height: h,
        scale,
    })
}
