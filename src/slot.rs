//! Run-length mapping from global slot index to content item.
//!
//! Item `k` repeats into `items[k].count()` consecutive slots, in list order.
//! Preview and document generation both resolve slots through
//! [`resolve_item_at_slot`], so the two never disagree about which item lands
//! where.

use alloc::string::String;
use core::ops::Range;

/// Anything that repeats into a number of consecutive slots.
pub trait Counted {
    /// Number of slots this item occupies. Zero means it is skipped.
    fn count(&self) -> usize;
}

impl<T: Counted + ?Sized> Counted for &T {
    fn count(&self) -> usize {
        (**self).count()
    }
}

/// An image repeated into `count` slots.
///
/// `source` is an opaque, caller-owned handle to the image bytes; nothing in
/// this crate reads it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageItem<H> {
    pub id: String,
    pub source: H,
    pub count: usize,
}

impl<H> ImageItem<H> {
    /// Create an item.
    pub fn new(id: impl Into<String>, source: H, count: usize) -> Self {
        Self {
            id: id.into(),
            source,
            count,
        }
    }
}

impl<H> Counted for ImageItem<H> {
    fn count(&self) -> usize {
        self.count
    }
}

/// The item whose span contains `index`, or `None` past the last span.
///
/// Single pass, O(items).
pub fn resolve_item_at_slot<T: Counted>(index: usize, items: &[T]) -> Option<&T> {
    let mut end = 0usize;
    for item in items {
        end = end.saturating_add(item.count());
        if index < end {
            return Some(item);
        }
    }
    None
}

/// Sum of all item counts.
pub fn total_count<T: Counted>(items: &[T]) -> usize {
    items
        .iter()
        .fold(0usize, |acc, item| acc.saturating_add(item.count()))
}

/// Global slot range occupied by `items[position]`. Empty for zero counts
/// and for positions past the end.
pub fn slot_span<T: Counted>(items: &[T], position: usize) -> Range<usize> {
    let Some(item) = items.get(position) else {
        let end = total_count(items);
        return end..end;
    };
    let start = total_count(&items[..position]);
    start..start.saturating_add(item.count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(counts: &[usize]) -> alloc::vec::Vec<ImageItem<()>> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| ImageItem::new(alloc::format!("{}", i + 1), (), c))
            .collect()
    }

    fn id_at(index: usize, list: &[ImageItem<()>]) -> Option<&str> {
        resolve_item_at_slot(index, list).map(|i| i.id.as_str())
    }

    #[test]
    fn run_length_decode() {
        let list = items(&[2, 3]);
        assert_eq!(id_at(0, &list), Some("1"));
        assert_eq!(id_at(1, &list), Some("1"));
        assert_eq!(id_at(2, &list), Some("2"));
        assert_eq!(id_at(3, &list), Some("2"));
        assert_eq!(id_at(4, &list), Some("2"));
        assert_eq!(id_at(5, &list), None);
    }

    #[test]
    fn empty_list_resolves_nothing() {
        let list = items(&[]);
        for i in [0, 1, 100] {
            assert_eq!(id_at(i, &list), None);
        }
    }

    #[test]
    fn zero_count_items_skipped() {
        let list = items(&[0, 1, 0, 0, 2, 0]);
        assert_eq!(id_at(0, &list), Some("2"));
        assert_eq!(id_at(1, &list), Some("5"));
        assert_eq!(id_at(2, &list), Some("5"));
        assert_eq!(id_at(3, &list), None);
    }

    #[test]
    fn all_zero_counts() {
        let list = items(&[0, 0]);
        assert_eq!(id_at(0, &list), None);
        assert_eq!(total_count(&list), 0);
    }

    #[test]
    fn total_matches_resolvable_slots() {
        let list = items(&[4, 0, 7, 1]);
        let total = total_count(&list);
        assert_eq!(total, 12);
        assert!((0..total).all(|i| resolve_item_at_slot(i, &list).is_some()));
        assert!(resolve_item_at_slot(total, &list).is_none());
    }

    #[test]
    fn works_through_references() {
        let list = items(&[1, 1]);
        let refs: alloc::vec::Vec<&ImageItem<()>> = list.iter().collect();
        assert_eq!(resolve_item_at_slot(1, &refs).map(|i| i.id.as_str()), Some("2"));
    }

    #[test]
    fn spans() {
        let list = items(&[2, 0, 3]);
        assert_eq!(slot_span(&list, 0), 0..2);
        assert_eq!(slot_span(&list, 1), 2..2);
        assert_eq!(slot_span(&list, 2), 2..5);
        assert_eq!(slot_span(&list, 9), 5..5);
    }
}
