//! Auto-numbered label text and QR payloads.

use alloc::string::{String, ToString};

/// Smallest QR size ratio accepted by [`TextConfig::sanitized`].
pub const MIN_QR_SIZE_RATIO: f64 = 0.1;
/// Largest QR size ratio accepted by [`TextConfig::sanitized`].
pub const MAX_QR_SIZE_RATIO: f64 = 0.6;
/// QR size ratio used when none (or NaN) is given.
pub const DEFAULT_QR_SIZE_RATIO: f64 = 0.35;

/// Text-mode configuration: numbering, label count, and optional QR code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TextConfig {
    /// Literal text before the number.
    pub prefix: String,
    /// Number shown on the first label.
    pub start_number: u64,
    /// Minimum digit count; shorter numbers are zero-padded.
    pub digits: usize,
    /// Number of labels to produce.
    pub count: usize,
    pub show_qr_code: bool,
    /// QR side as a fraction of the slot's shorter side.
    pub qr_size_ratio: f64,
    /// Prepended to the label text to form the QR payload.
    pub qr_content_prefix: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            prefix: String::from("SN-"),
            start_number: 1,
            digits: 3,
            count: 10,
            show_qr_code: false,
            qr_size_ratio: DEFAULT_QR_SIZE_RATIO,
            qr_content_prefix: String::new(),
        }
    }
}

impl TextConfig {
    /// Set the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the first number.
    pub fn start_number(mut self, start: u64) -> Self {
        self.start_number = start;
        self
    }

    /// Set the minimum digit count.
    pub fn digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Set the label count.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Show a QR code of `ratio` × the slot's shorter side above the text.
    pub fn qr_code(mut self, ratio: f64) -> Self {
        self.show_qr_code = true;
        self.qr_size_ratio = ratio;
        self
    }

    /// Set the QR payload prefix.
    pub fn qr_content_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.qr_content_prefix = prefix.into();
        self
    }

    /// Clamp into the accepted ranges: `digits ≥ 1`, `count ≥ 1`, QR ratio
    /// in `[0.1, 0.6]`.
    pub fn sanitized(mut self) -> Self {
        self.digits = self.digits.max(1);
        self.count = self.count.max(1);
        self.qr_size_ratio = if self.qr_size_ratio.is_nan() {
            DEFAULT_QR_SIZE_RATIO
        } else {
            self.qr_size_ratio
                .clamp(MIN_QR_SIZE_RATIO, MAX_QR_SIZE_RATIO)
        };
        self
    }

    /// Label text for a global slot index.
    pub fn label_text(&self, index: usize) -> String {
        format_label_text(index, self)
    }

    /// QR payload for a global slot index: QR prefix followed by the label text.
    pub fn qr_content(&self, index: usize) -> String {
        let mut out = self.qr_content_prefix.clone();
        out.push_str(&self.label_text(index));
        out
    }
}

/// `prefix` followed by `start_number + index`, zero-padded to `digits`.
///
/// Padding is a minimum width; longer numbers are never truncated. Any
/// `digits` works, including widths past the formatter's `u16` limit.
pub fn format_label_text(index: usize, config: &TextConfig) -> String {
    let number = config
        .start_number
        .saturating_add(index as u64)
        .to_string();
    let zeros = config.digits.saturating_sub(number.len());
    let mut out = config.prefix.clone();
    out.extend(core::iter::repeat_n('0', zeros));
    out.push_str(&number);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc(digits: usize) -> TextConfig {
        TextConfig::default().prefix("ABC").start_number(1).digits(digits)
    }

    #[test]
    fn zero_padded() {
        assert_eq!(format_label_text(0, &abc(3)), "ABC001");
        assert_eq!(format_label_text(98, &abc(3)), "ABC099");
    }

    #[test]
    fn padding_is_minimum_width() {
        assert_eq!(format_label_text(99, &abc(3)), "ABC100");
        assert_eq!(format_label_text(9, &abc(1)), "ABC10");
        assert_eq!(format_label_text(12_344, &abc(2)), "ABC12345");
    }

    #[test]
    fn start_number_zero() {
        let c = TextConfig::default().prefix("").start_number(0).digits(4);
        assert_eq!(c.label_text(0), "0000");
        assert_eq!(c.label_text(7), "0007");
    }

    #[test]
    fn zero_digits_means_no_padding() {
        assert_eq!(format_label_text(4, &abc(0)), "ABC5");
    }

    #[test]
    fn padding_wider_than_u16() {
        let text = format_label_text(0, &abc(70_000));
        assert_eq!(text.len(), 3 + 70_000);
        assert!(text.starts_with("ABC000"));
        assert!(text.ends_with("0001"));
        assert_eq!(text[3..].bytes().filter(|&b| b == b'0').count(), 69_999);
    }

    #[test]
    fn huge_numbers_saturate() {
        let c = TextConfig::default().prefix("").start_number(u64::MAX).digits(1);
        assert_eq!(c.label_text(5), alloc::format!("{}", u64::MAX));
    }

    #[test]
    fn qr_payload() {
        let c = abc(3).qr_content_prefix("https://inv.example/");
        assert_eq!(c.qr_content(4), "https://inv.example/ABC005");
        assert_eq!(abc(3).qr_content(0), "ABC001");
    }

    #[test]
    fn defaults() {
        let c = TextConfig::default();
        assert_eq!(c.label_text(0), "SN-001");
        assert_eq!(c.count, 10);
        assert!(!c.show_qr_code);
        assert_eq!(c.qr_size_ratio, 0.35);
    }

    #[test]
    fn sanitize_clamps() {
        let c = TextConfig::default().digits(0).count(0).qr_code(0.9).sanitized();
        assert_eq!(c.digits, 1);
        assert_eq!(c.count, 1);
        assert_eq!(c.qr_size_ratio, MAX_QR_SIZE_RATIO);

        let c = TextConfig::default().qr_code(0.0).sanitized();
        assert_eq!(c.qr_size_ratio, MIN_QR_SIZE_RATIO);

        let c = TextConfig::default().qr_code(f64::NAN).sanitized();
        assert_eq!(c.qr_size_ratio, DEFAULT_QR_SIZE_RATIO);
    }
}
