//! Pagination driver shared by preview and document generation.
//!
//! Maps page `p`, local slot `i` to global index `p × slots_per_page + i`
//! and resolves that index to image or text content. Slots at or past the
//! total count are [`SlotContent::Empty`].
//!
//! # Example
//!
//! ```
//! use labelgrid::{ImageItem, LayoutConfig, Pagination, SlotContent};
//!
//! let layout = LayoutConfig::new(2, 2).compute();
//! let items = [ImageItem::new("a", (), 3), ImageItem::new("b", (), 3)];
//! let pages = Pagination::for_images(&layout, &items);
//!
//! assert_eq!(pages.total_pages(), 2);
//! let ids: Vec<_> = pages
//!     .page(1)
//!     .map(|slot| match slot.content {
//!         SlotContent::Image(item) => item.id.as_str(),
//!         _ => "-",
//!     })
//!     .collect();
//! assert_eq!(ids, ["b", "b", "-", "-"]);
//! ```

use alloc::string::String;

use num_traits::Float;

use crate::fit::{FitMetrics, TextBoxes};
use crate::grid::{GridLayout, SlotRect};
use crate::slot::{Counted, resolve_item_at_slot, total_count};
use crate::text::TextConfig;

/// Progress reported when item loading is complete.
pub const PROGRESS_LOADED: u8 = 30;
/// Progress reported when every slot is drawn.
pub const PROGRESS_DRAWN: u8 = 90;
/// Progress reported while the finished document is serialized.
pub const PROGRESS_FINALIZING: u8 = 95;
/// Slot progress is reported every this many global indices.
pub const PROGRESS_EVERY: usize = 5;

/// `ceil(total_count / slots_per_page)`, at least 1.
///
/// A failed layout (zero slots per page) still has one (empty) page.
pub fn total_pages(total_count: usize, slots_per_page: usize) -> usize {
    if slots_per_page == 0 {
        return 1;
    }
    total_count.div_ceil(slots_per_page).max(1)
}

/// Clamp a zero-based page number into `0..total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}

/// Percent complete while loading item `loaded` of `total` (0–30).
pub fn load_progress_percent(loaded: usize, total: usize) -> u8 {
    if total == 0 {
        return PROGRESS_LOADED;
    }
    let frac = (loaded.min(total) as f64) / (total as f64);
    Float::round(frac * f64::from(PROGRESS_LOADED)) as u8
}

/// Percent complete when drawing global slot `index` of `total` (30–90).
pub fn draw_progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return PROGRESS_DRAWN;
    }
    let frac = (index.min(total) as f64) / (total as f64);
    let span = f64::from(PROGRESS_DRAWN - PROGRESS_LOADED);
    PROGRESS_LOADED + Float::round(frac * span) as u8
}

/// Whether slot progress should be reported at global `index`.
pub fn reports_progress_at(index: usize) -> bool {
    index % PROGRESS_EVERY == 0
}

/// Item type for text-mode pagination, which has no items.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoImage {}

impl Counted for NoImage {
    fn count(&self) -> usize {
        match *self {}
    }
}

#[derive(Debug)]
enum Source<'a, T> {
    Images(&'a [T]),
    Text(&'a TextConfig),
}

/// Resolved text label: content plus sizing from the fit engine.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// QR payload, when the QR code is shown.
    pub qr_content: Option<String>,
    pub font_size_mm: f64,
    /// Relative to the slot origin.
    pub boxes: TextBoxes,
}

/// What a slot renders.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotContent<'a, T> {
    Image(&'a T),
    Text(TextLabel),
    /// Past the end of the content; rendered as a blank placeholder.
    Empty,
}

impl<T> SlotContent<'_, T> {
    /// Whether nothing is drawn here.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One slot of one page, with its resolved content.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedSlot<'a, T> {
    /// Zero-based page number.
    pub page: usize,
    /// Index within the page (row-major).
    pub local_index: usize,
    /// Index across all pages.
    pub global_index: usize,
    pub rect: SlotRect,
    pub content: SlotContent<'a, T>,
}

impl<T> PlacedSlot<'_, T> {
    /// One-based label number, for placeholders such as "Label 7".
    pub fn ordinal(&self) -> usize {
        self.global_index + 1
    }

    /// Drop the QR code from a text label and re-fit the text to the
    /// whole slot. Used when the QR code cannot be produced.
    pub fn without_qr(mut self, metrics: &FitMetrics) -> Self {
        if let SlotContent::Text(label) = &mut self.content
            && label.qr_content.is_some()
        {
            label.qr_content = None;
            label.font_size_mm = metrics.font_size_mm(&label.text, &self.rect, false);
            label.boxes = metrics.text_layout_boxes(&self.rect, false, 0.0);
        }
        self
    }
}

/// Pagination over a computed page layout.
///
/// Borrow-only; recreate it whenever the layout or content changes.
#[derive(Debug)]
pub struct Pagination<'a, T = NoImage> {
    layout: &'a GridLayout,
    source: Source<'a, T>,
    metrics: FitMetrics,
    total_count: usize,
}

impl<'a> Pagination<'a, NoImage> {
    /// Text mode: `text.count` auto-numbered labels.
    pub fn for_text(layout: &'a GridLayout, text: &'a TextConfig) -> Self {
        Self::new(layout, Source::Text(text), text.count)
    }
}

impl<'a, T: Counted> Pagination<'a, T> {
    /// Image mode: each item repeated `count` times in list order.
    pub fn for_images(layout: &'a GridLayout, items: &'a [T]) -> Self {
        Self::new(layout, Source::Images(items), total_count(items))
    }

    fn new(layout: &'a GridLayout, source: Source<'a, T>, total_count: usize) -> Self {
        crate::log::debug!(
            total_count,
            slots_per_page = layout.slots_per_page(),
            "pagination"
        );
        Self {
            layout,
            source,
            metrics: FitMetrics::MONOSPACE,
            total_count,
        }
    }

    /// Use different font metrics for text sizing.
    pub fn with_metrics(mut self, metrics: FitMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Font metrics used for text labels.
    pub fn metrics(&self) -> &FitMetrics {
        &self.metrics
    }

    /// Labels to produce across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Slots on each page.
    pub fn slots_per_page(&self) -> usize {
        self.layout.slots_per_page()
    }

    /// Page count, at least 1.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.slots_per_page())
    }

    /// Clamp a zero-based page number to an existing page.
    pub fn clamp_page(&self, page: usize) -> usize {
        clamp_page(page, self.total_pages())
    }

    /// Global index of `local` on `page`.
    pub fn global_index(&self, page: usize, local: usize) -> usize {
        page.saturating_mul(self.slots_per_page()).saturating_add(local)
    }

    /// Content for a global index rendered into `rect`.
    pub fn content_at(&self, global_index: usize, rect: &SlotRect) -> SlotContent<'a, T> {
        if global_index >= self.total_count {
            return SlotContent::Empty;
        }
        match self.source {
            Source::Images(items) => resolve_item_at_slot(global_index, items)
                .map_or(SlotContent::Empty, SlotContent::Image),
            Source::Text(text) => SlotContent::Text(self.text_label(text, global_index, rect)),
        }
    }

    fn text_label(&self, text: &TextConfig, index: usize, rect: &SlotRect) -> TextLabel {
        let label = text.label_text(index);
        let show_qr = text.show_qr_code;
        TextLabel {
            font_size_mm: self.metrics.font_size_mm(&label, rect, show_qr),
            boxes: self
                .metrics
                .text_layout_boxes(rect, show_qr, text.qr_size_ratio),
            qr_content: show_qr.then(|| text.qr_content(index)),
            text: label,
        }
    }

    /// One slot, or `None` when `local` is not on the page.
    pub fn slot(&self, page: usize, local: usize) -> Option<PlacedSlot<'a, T>> {
        let rect = *self.layout.positions.get(local)?;
        let global_index = self.global_index(page, local);
        Some(PlacedSlot {
            page,
            local_index: local,
            global_index,
            rect,
            content: self.content_at(global_index, &rect),
        })
    }

    /// Every slot of `page`, empty ones included.
    pub fn page(&self, page: usize) -> PageSlots<'_, 'a, T> {
        PageSlots {
            pagination: self,
            page,
            next: 0,
        }
    }

    /// Every page in order.
    pub fn pages(&self) -> impl Iterator<Item = PageSlots<'_, 'a, T>> {
        (0..self.total_pages()).map(move |p| self.page(p))
    }
}

/// Iterator over the slots of one page.
#[derive(Debug)]
pub struct PageSlots<'p, 'a, T> {
    pagination: &'p Pagination<'a, T>,
    page: usize,
    next: usize,
}

impl<'a, T: Counted> PageSlots<'_, 'a, T> {
    /// Zero-based page number.
    pub fn page_number(&self) -> usize {
        self.page
    }

    /// Only slots with something to draw.
    pub fn filled(self) -> impl Iterator<Item = PlacedSlot<'a, T>> {
        self.filter(|s| !s.content.is_empty())
    }
}

impl<'a, T: Counted> Iterator for PageSlots<'_, 'a, T> {
    type Item = PlacedSlot<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.pagination.slot(self.page, self.next)?;
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.pagination.slots_per_page().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl<T: Counted> ExactSizeIterator for PageSlots<'_, '_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::LayoutConfig;
    use crate::slot::ImageItem;
    use alloc::vec::Vec;

    // ── arithmetic ──────────────────────────────────────────────────────

    #[test]
    fn page_count() {
        assert_eq!(total_pages(0, 9), 1);
        assert_eq!(total_pages(1, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(27, 9), 3);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn page_clamp() {
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(4, 0), 0);
    }

    #[test]
    fn progress_bands() {
        assert_eq!(load_progress_percent(0, 4), 0);
        assert_eq!(load_progress_percent(2, 4), 15);
        assert_eq!(load_progress_percent(4, 4), 30);
        assert_eq!(load_progress_percent(0, 0), 30);
        assert_eq!(draw_progress_percent(0, 10), 30);
        assert_eq!(draw_progress_percent(5, 10), 60);
        assert_eq!(draw_progress_percent(10, 10), 90);
        assert!(reports_progress_at(0));
        assert!(reports_progress_at(10));
        assert!(!reports_progress_at(3));
    }

    // ── image mode ──────────────────────────────────────────────────────

    #[test]
    fn image_pages_follow_run_lengths() {
        let layout = LayoutConfig::new(2, 2).compute();
        let items = [ImageItem::new("a", (), 3), ImageItem::new("b", (), 2)];
        let p = Pagination::for_images(&layout, &items);
        assert_eq!(p.total_count(), 5);
        assert_eq!(p.total_pages(), 2);
        let globals: Vec<usize> = p.page(1).map(|s| s.global_index).collect();
        assert_eq!(globals, [4, 5, 6, 7]);
        let filled: Vec<&str> = p
            .pages()
            .flat_map(|page| page.filled())
            .map(|s| match s.content {
                SlotContent::Image(i) => i.id.as_str(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(filled, ["a", "a", "a", "b", "b"]);
    }

    #[test]
    fn no_items_gives_one_blank_page() {
        let layout = LayoutConfig::new(3, 3).compute();
        let items: [ImageItem<()>; 0] = [];
        let p = Pagination::for_images(&layout, &items);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.page(0).len(), 9);
        assert!(p.page(0).all(|s| s.content.is_empty()));
    }

    #[test]
    fn failed_layout_has_no_slots() {
        let layout = LayoutConfig::new(0, 3).compute();
        let items = [ImageItem::new("a", (), 3)];
        let p = Pagination::for_images(&layout, &items);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.page(0).count(), 0);
    }

    // ── text mode ───────────────────────────────────────────────────────

    #[test]
    fn text_labels_numbered_across_pages() {
        let layout = LayoutConfig::new(2, 3).compute();
        let text = TextConfig::default().prefix("ABC").count(8);
        let p = Pagination::for_text(&layout, &text);
        assert_eq!(p.total_pages(), 2);
        let second: Vec<String> = p
            .page(1)
            .filled()
            .map(|s| match s.content {
                SlotContent::Text(l) => l.text,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(second, ["ABC007", "ABC008"]);
    }

    #[test]
    fn text_label_carries_fit_results() {
        let layout = LayoutConfig::new(3, 3).compute();
        let text = TextConfig::default().qr_code(0.4).qr_content_prefix("id:");
        let p = Pagination::for_text(&layout, &text);
        let slot = p.slot(0, 4).unwrap();
        let SlotContent::Text(label) = &slot.content else {
            panic!("expected text");
        };
        assert_eq!(label.qr_content.as_deref(), Some("id:SN-005"));
        let m = FitMetrics::MONOSPACE;
        assert_eq!(label.font_size_mm, m.font_size_mm("SN-005", &slot.rect, true));
        assert_eq!(label.boxes, m.text_layout_boxes(&slot.rect, true, 0.4));
    }

    #[test]
    fn qr_fallback_refits_text() {
        let layout = LayoutConfig::new(3, 3).compute();
        let text = TextConfig::default().qr_code(0.4);
        let p = Pagination::for_text(&layout, &text);
        let slot = p.slot(0, 0).unwrap().without_qr(p.metrics());
        let SlotContent::Text(label) = &slot.content else {
            panic!("expected text");
        };
        assert!(label.qr_content.is_none());
        assert_eq!(label.boxes.text_box_top_mm, 0.0);
        assert_eq!(
            label.font_size_mm,
            FitMetrics::MONOSPACE.font_size_mm("SN-001", &slot.rect, false)
        );
    }

    #[test]
    fn slot_out_of_page_is_none() {
        let layout = LayoutConfig::new(1, 2).compute();
        let text = TextConfig::default();
        let p = Pagination::for_text(&layout, &text);
        assert!(p.slot(0, 2).is_none());
        assert_eq!(p.slot(3, 1).unwrap().ordinal(), 8);
    }
}
