//! Query string → settings → layout/text configuration.

#![cfg(feature = "query")]

use labelgrid::query::{self, AppMode, ParseWarning};
use labelgrid::{LayoutConfig, Orientation, Pagination, PaperSize, TextConfig, paper::paper_size_info};

/// Parse, assert no invalid values, and apply onto the defaults.
fn configs(q: &str) -> (LayoutConfig, TextConfig) {
    let result = query::parse(q);
    assert!(
        result
            .warnings
            .iter()
            .all(|w| !matches!(w, ParseWarning::ValueInvalid { .. })),
        "unexpected parse errors for {q:?}: {:?}",
        result.warnings
    );
    (
        result.settings.layout_config(&LayoutConfig::default()),
        result.settings.text_config(&TextConfig::default()),
    )
}

#[test]
fn defaults_without_parameters() {
    let (layout, text) = configs("");
    let l = layout.compute();
    assert_eq!((l.page_width, l.page_height), (297.0, 210.0));
    assert_eq!(l.positions.len(), 9);
    assert_eq!(text.label_text(0), "SN-001");
}

#[test]
fn a5_portrait_sheet() {
    let (layout, _) = configs("?paper=a5&orientation=portrait&rows=4&cols=2&margin=4&spacing=2");
    let l = layout.compute();
    assert_eq!((l.page_width, l.page_height), (148.0, 210.0));
    assert!((l.label_width - (148.0 - 8.0 - 2.0) / 2.0).abs() < 1e-9);
    assert!((l.label_height - (210.0 - 8.0 - 6.0) / 4.0).abs() < 1e-9);
    let base = layout.base_page();
    assert_eq!(paper_size_info(base.width, base.height), "A5, 148×210mm");
}

#[test]
fn custom_page_from_query() {
    let (layout, _) = configs("page=100x150&orient=l&rows=1&cols=2&margin=0&spacing=0");
    assert_eq!(layout.orientation, Orientation::Landscape);
    let l = layout.compute();
    assert_eq!((l.page_width, l.page_height), (150.0, 100.0));
    assert_eq!(l.label_width, 75.0);
    let base = layout.base_page();
    assert_eq!(
        labelgrid::paper_size_label(base.width, base.height),
        PaperSize::Custom
    );
}

#[test]
fn text_mode_run() {
    let q = "mode=text&rows=5&cols=4&prefix=LOT%2F&start=7&digits=4&count=45&qr=yes&qr_ratio=0.3";
    let result = query::parse(q);
    assert_eq!(result.settings.app_mode(), AppMode::Text);
    let (layout, text) = configs(q);
    let layout = layout.compute();
    let pages = Pagination::for_text(&layout, &text);
    assert_eq!(pages.total_pages(), 3);
    assert_eq!(text.label_text(44), "LOT/0051");
    assert_eq!(text.qr_content(0), "LOT/0007");
}

#[test]
fn warnings_do_not_block_other_keys() {
    let result = query::parse("rows=2&rows=4&orientation=sideways&shoe=9&theme=dark");
    assert_eq!(result.settings.rows, Some(4));
    assert_eq!(result.settings.orientation, None);
    assert_eq!(result.warnings.len(), 3);
    assert!(matches!(result.warnings[0], ParseWarning::DuplicateKey { .. }));
    assert!(matches!(
        result.warnings[1],
        ParseWarning::ValueInvalid { key: "orientation", .. }
    ));
    assert!(matches!(result.warnings[2], ParseWarning::KeyNotRecognized { .. }));
}
