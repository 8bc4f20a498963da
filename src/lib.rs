//! Label sheet layout: grid geometry, slot resolution, and text/QR auto-fit.
//!
//! Pure geometry in millimeters — no rendering, no I/O, `no_std` compatible
//! (needs `alloc`).
//!
//! # Modules
//!
//! - [`paper`] — Paper sizes, page orientation, orientation-invariant page dimensions
//! - [`grid`] — Slot rectangles for one page, with typed validation errors
//! - [`slot`] — Run-length mapping from global slot index to content item
//! - [`text`] — Auto-numbered label text and QR payloads
//! - [`fit`] — Font sizing, QR/text boxes, image contain-fit, text placement
//! - [`plan`] — Pagination driver shared by preview and document generation
//! - [`zoom`] — Preview zoom slider mapping
//! - [`format`] — Filename timestamps
//! - `query` — URL-query-style configuration parsing (feature `query`)
//!
//! # Example
//!
//! ```
//! use labelgrid::{LayoutConfig, Orientation, TextConfig, Pagination, SlotContent};
//!
//! let config = LayoutConfig::new(3, 3).margin_mm(20.0).spacing_mm(10.0)
//!     .orientation(Orientation::Portrait);
//! let layout = config.compute();
//! assert!(layout.error.is_none());
//! assert_eq!(layout.positions.len(), 9);
//!
//! let text = TextConfig::default().prefix("ABC").count(12);
//! let pages = Pagination::for_text(&layout, &text);
//! assert_eq!(pages.total_pages(), 2);
//!
//! let first = pages.page(0).next().unwrap();
//! match first.content {
//!     SlotContent::Text(label) => assert_eq!(label.text, "ABC001"),
//!     _ => unreachable!(),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub(crate) mod log;

pub mod fit;
pub mod format;
pub mod grid;
pub mod paper;
pub mod plan;
pub mod slot;
pub mod text;
pub mod zoom;

#[cfg(feature = "query")]
pub mod query;

// Re-exports: core types
pub use fit::{FitMetrics, ImagePlacement, TextBoxes, TextPlacement};
pub use grid::{GridLayout, LayoutConfig, LayoutError, SlotRect, compute_layout};
pub use paper::{Orientation, PageSize, PaperSize, paper_size_label};
pub use plan::{Pagination, PlacedSlot, SlotContent, TextLabel, total_pages};
pub use slot::{Counted, ImageItem, resolve_item_at_slot, total_count};
pub use text::{TextConfig, format_label_text};
