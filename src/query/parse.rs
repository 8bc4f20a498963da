//! Query string tokenizer and value parsers.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::settings::{AppMode, Settings};
use crate::paper::{Orientation, PaperSize};

/// Application keys kept in `extras` without warnings. Sorted for binary search.
const KNOWN_EXTRAS: &[&str] = &["lang", "theme"];

/// Parse a query string into Settings + warnings.
pub(crate) fn parse_query(query: &str) -> (Settings, Vec<ParseWarning>) {
    let mut settings = Settings::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(&key, &value, &mut settings, &mut warnings);
    }

    (settings, warnings)
}

fn dispatch_key(key: &str, value: &str, s: &mut Settings, warnings: &mut Vec<ParseWarning>) {
    let mut w = Setter {
        key,
        value,
        warnings,
    };
    match key {
        // Grid
        "rows" | "r" => w.set(&mut s.rows, "rows", parse_int(value), "expected an integer"),
        "cols" | "columns" | "c" => {
            w.set(&mut s.cols, "cols", parse_int(value), "expected an integer");
        }
        "margin" | "margin_mm" => {
            w.set(&mut s.margin_mm, "margin", parse_mm(value), "expected a number of mm");
        }
        "spacing" | "spacing_mm" | "gap" => {
            w.set(&mut s.spacing_mm, "spacing", parse_mm(value), "expected a number of mm");
        }

        // Page
        "orientation" | "orient" => w.set(
            &mut s.orientation,
            "orientation",
            parse_orientation(value),
            "expected portrait|landscape",
        ),
        "paper" => w.set(
            &mut s.paper,
            "paper",
            PaperSize::from_name(value),
            "expected a4|a3|a5|letter",
        ),
        "page_width" | "pw" => w.set(
            &mut s.page_width_mm,
            "page_width",
            parse_mm(value).filter(|&v| v > 0.0),
            "expected a positive number of mm",
        ),
        "page_height" | "ph" => w.set(
            &mut s.page_height_mm,
            "page_height",
            parse_mm(value).filter(|&v| v > 0.0),
            "expected a positive number of mm",
        ),
        "page" => match parse_page(value) {
            Some((pw, ph)) => {
                w.set(&mut s.page_width_mm, "page", Some(pw), "");
                s.page_height_mm = Some(ph);
            }
            None => w.invalid("page", "expected WIDTHxHEIGHT in mm"),
        },

        // Content
        "mode" => w.set(&mut s.mode, "mode", parse_mode(value), "expected image|text"),
        "prefix" => w.set(&mut s.prefix, "prefix", Some(String::from(value)), ""),
        "start" | "start_number" => w.set(
            &mut s.start_number,
            "start",
            value.trim().parse::<u64>().ok(),
            "expected a non-negative integer",
        ),
        "digits" => w.set(
            &mut s.digits,
            "digits",
            value.trim().parse::<usize>().ok(),
            "expected a non-negative integer",
        ),
        "count" | "n" => w.set(
            &mut s.count,
            "count",
            value.trim().parse::<usize>().ok(),
            "expected a non-negative integer",
        ),

        // QR
        "qr" | "show_qr" => w.set(
            &mut s.show_qr_code,
            "qr",
            parse_bool(value),
            "expected true|false|1|0|yes|no|on|off",
        ),
        "qr_ratio" | "qr_size" => w.set(
            &mut s.qr_size_ratio,
            "qr_ratio",
            parse_ratio(value),
            "expected a fraction such as 0.35 or 35%",
        ),
        "qr_prefix" => w.set(
            &mut s.qr_content_prefix,
            "qr_prefix",
            Some(String::from(value)),
            "",
        ),

        _ => {
            if KNOWN_EXTRAS.binary_search(&key).is_ok() {
                s.extras.insert(String::from(key), String::from(value));
            } else {
                w.warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        }
    }
}

/// Assigns parsed values for one key, collecting warnings.
struct Setter<'k, 'w> {
    key: &'k str,
    value: &'k str,
    warnings: &'w mut Vec<ParseWarning>,
}

impl Setter<'_, '_> {
    /// Store `parsed`, warning on duplicates; warn with `reason` when it failed to parse.
    fn set<T>(&mut self, field: &mut Option<T>, canonical: &'static str, parsed: Option<T>, reason: &'static str) {
        match parsed {
            Some(v) => {
                if field.is_some() {
                    self.warnings.push(ParseWarning::DuplicateKey {
                        key: String::from(self.key),
                        value: String::from(self.value),
                    });
                }
                *field = Some(v);
            }
            None => self.invalid(canonical, reason),
        }
    }

    fn invalid(&mut self, canonical: &'static str, reason: &'static str) {
        self.warnings.push(ParseWarning::ValueInvalid {
            key: canonical,
            value: String::from(self.value),
            reason,
        });
    }
}

// ---- Value parsers ----

fn parse_int(s: &str) -> Option<i32> {
    s.trim().parse::<i32>().ok()
}

/// Millimeters, with an optional `mm` suffix.
fn parse_mm(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s
        .strip_suffix("mm")
        .or_else(|| s.strip_suffix("MM"))
        .unwrap_or(s);
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A fraction (`0.35`) or a percentage (`35%`).
fn parse_ratio(s: &str) -> Option<f64> {
    let s = s.trim();
    let v = match s.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => s.parse::<f64>().ok()?,
    };
    v.is_finite().then_some(v)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_orientation(s: &str) -> Option<Orientation> {
    match s.trim().to_ascii_lowercase().as_str() {
        "portrait" | "p" => Some(Orientation::Portrait),
        "landscape" | "l" => Some(Orientation::Landscape),
        _ => None,
    }
}

fn parse_mode(s: &str) -> Option<AppMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "image" | "images" => Some(AppMode::Image),
        "text" | "number" | "numbers" => Some(AppMode::Text),
        _ => None,
    }
}

/// `WIDTHxHEIGHT` in mm, e.g. `100x150` or `215.9×279.4`.
fn parse_page(s: &str) -> Option<(f64, f64)> {
    let s = s.trim();
    let (w, h) = s.split_once(['x', 'X', '×'])?;
    let w = parse_mm(w).filter(|&v| v > 0.0)?;
    let h = parse_mm(h).filter(|&v| v > 0.0)?;
    Some((w, h))
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component as UTF-8. Also handles '+' as space.
/// Malformed escapes are kept literally.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
