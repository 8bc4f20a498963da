//! Filename timestamps for generated documents.

use alloc::format;
use alloc::string::String;

/// Local wall-clock time, as supplied by the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp {
    pub year: i32,
    /// 1–12.
    pub month: u8,
    /// 1–31.
    pub day: u8,
    /// 0–23.
    pub hour: u8,
    /// 0–59.
    pub minute: u8,
}

/// `YYMMDD_hhmm`, every field two digits.
pub fn filename_stamp(ts: Timestamp) -> String {
    format!(
        "{:02}{:02}{:02}_{:02}{:02}",
        ts.year.rem_euclid(100),
        ts.month,
        ts.day,
        ts.hour,
        ts.minute
    )
}

/// Download name for a generated sheet: `label_YYMMDD_hhmm.pdf`.
pub fn document_file_name(ts: Timestamp) -> String {
    format!("label_{}.pdf", filename_stamp(ts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Timestamp {
        Timestamp {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    #[test]
    fn stamp_pads_fields() {
        assert_eq!(filename_stamp(ts(2026, 3, 7, 9, 5)), "260307_0905");
        assert_eq!(filename_stamp(ts(1999, 12, 31, 23, 59)), "991231_2359");
    }

    #[test]
    fn century_boundary() {
        assert_eq!(filename_stamp(ts(2000, 1, 1, 0, 0)), "000101_0000");
    }

    #[test]
    fn document_name() {
        assert_eq!(document_file_name(ts(2026, 10, 19, 18, 45)), "label_261019_1845.pdf");
    }
}
