//! Pagination state for the carousel
//!
//! A `Pager` slices a fixed, ordered catalog into pages of `page_size`
//! items and tracks the page currently on screen. Arrow navigation wraps
//! around the ends; the dot indicator jumps directly.

use std::ops::Range;

/// Default number of cards per carousel page
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Cyclic pager over `item_count` items in pages of `page_size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    item_count: usize,
    current_page: usize,
}

impl Pager {
    /// Create a pager starting on the first page. A zero `page_size` is
    /// treated as 1.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            item_count,
            current_page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Total number of pages (ceiling division). Zero for an empty catalog.
    pub fn total_pages(&self) -> usize {
        self.item_count.div_ceil(self.page_size)
    }

    /// Page currently on screen. Meaningless (always 0) when the catalog
    /// is empty.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Advance one page, wrapping from the last page back to the first.
    /// No-op on an empty catalog.
    pub fn next(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        self.current_page = if self.current_page >= total - 1 {
            0
        } else {
            self.current_page + 1
        };
    }

    /// Step back one page, wrapping from the first page to the last.
    /// No-op on an empty catalog.
    pub fn previous(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            return;
        }
        self.current_page = if self.current_page == 0 {
            total - 1
        } else {
            self.current_page - 1
        };
    }

    /// Jump directly to `page`. Out-of-range targets are refused and the
    /// current page is left untouched.
    pub fn go_to(&mut self, page: usize) {
        if page < self.total_pages() {
            self.current_page = page;
        }
    }

    pub fn first(&mut self) {
        self.go_to(0);
    }

    pub fn last(&mut self) {
        let total = self.total_pages();
        if total > 0 {
            self.current_page = total - 1;
        }
    }

    /// Index range of the items on the current page. Empty for an empty
    /// catalog; shorter than `page_size` on a ragged final page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(self.item_count);
        start..end.max(start)
    }

    /// Slice of `items` on the current page. `items` is expected to be the
    /// catalog this pager was sized for; a shorter slice is handled by
    /// clamping rather than panicking.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let start = range.start.min(items.len());
        let end = range.end.min(items.len());
        &items[start..end]
    }

    /// Resize for a new item count, keeping the current page in range.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let total = self.total_pages();
        if total == 0 {
            self.current_page = 0;
        } else {
            self.current_page = self.current_page.min(total - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(Pager::new(0, 3).total_pages(), 0);
        assert_eq!(Pager::new(1, 3).total_pages(), 1);
        assert_eq!(Pager::new(3, 3).total_pages(), 1);
        assert_eq!(Pager::new(4, 3).total_pages(), 2);
        assert_eq!(Pager::new(7, 3).total_pages(), 3);
        assert_eq!(Pager::new(9, 3).total_pages(), 3);
    }

    #[test]
    fn test_next_wraps_on_last_page() {
        let mut pager = Pager::new(7, 3); // pages 0, 1, 2
        pager.go_to(2);
        pager.next();
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_previous_wraps_on_first_page() {
        let mut pager = Pager::new(7, 3);
        assert_eq!(pager.current_page(), 0);
        pager.previous();
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        // Calling next() total_pages times must return to the origin,
        // from any starting page.
        for start in 0..3 {
            let mut pager = Pager::new(7, 3);
            pager.go_to(start);
            for _ in 0..pager.total_pages() {
                pager.next();
            }
            assert_eq!(pager.current_page(), start);
        }
    }

    #[test]
    fn test_previous_cycles_back_to_start() {
        for start in 0..3 {
            let mut pager = Pager::new(7, 3);
            pager.go_to(start);
            for _ in 0..pager.total_pages() {
                pager.previous();
            }
            assert_eq!(pager.current_page(), start);
        }
    }

    #[test]
    fn test_visible_slices_seven_items() {
        let items: Vec<u32> = (0..7).collect();
        let mut pager = Pager::new(items.len(), 3);

        assert_eq!(pager.visible(&items), &[0, 1, 2]);
        pager.next();
        assert_eq!(pager.visible(&items), &[3, 4, 5]);
        pager.next();
        // Ragged final page holds the remainder
        assert_eq!(pager.visible(&items), &[6]);
    }

    #[test]
    fn test_full_pages_have_page_size_items() {
        let items: Vec<u32> = (0..10).collect();
        let mut pager = Pager::new(items.len(), 3);
        let total = pager.total_pages();
        for page in 0..total {
            pager.go_to(page);
            let expected = if page == total - 1 {
                items.len() - 3 * (total - 1)
            } else {
                3
            };
            assert_eq!(pager.visible(&items).len(), expected);
        }
    }

    #[test]
    fn test_empty_catalog_is_inert() {
        let items: Vec<u32> = Vec::new();
        let mut pager = Pager::new(0, 3);

        assert_eq!(pager.total_pages(), 0);
        assert!(pager.is_empty());

        pager.next();
        assert_eq!(pager.current_page(), 0);
        pager.previous();
        assert_eq!(pager.current_page(), 0);
        pager.go_to(1);
        assert_eq!(pager.current_page(), 0);

        assert!(pager.visible(&items).is_empty());
        assert!(pager.visible_range().is_empty());
    }

    #[test]
    fn test_go_to_in_range() {
        let mut pager = Pager::new(7, 3);
        pager.go_to(2);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn test_go_to_out_of_range_is_refused() {
        let mut pager = Pager::new(7, 3);
        pager.go_to(1);
        pager.go_to(3); // only pages 0..=2 exist
        assert_eq!(pager.current_page(), 1);
        pager.go_to(usize::MAX);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_first_and_last() {
        let mut pager = Pager::new(7, 3);
        pager.last();
        assert_eq!(pager.current_page(), 2);
        pager.first();
        assert_eq!(pager.current_page(), 0);

        // No-ops when empty
        let mut empty = Pager::new(0, 3);
        empty.last();
        assert_eq!(empty.current_page(), 0);
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let pager = Pager::new(4, 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(), 4);
    }

    #[test]
    fn test_set_item_count_clamps_current_page() {
        let mut pager = Pager::new(9, 3);
        pager.go_to(2);
        pager.set_item_count(4); // now 2 pages, last valid index 1
        assert_eq!(pager.current_page(), 1);

        pager.set_item_count(0);
        assert_eq!(pager.total_pages(), 0);
        assert_eq!(pager.current_page(), 0);
    }

    #[test]
    fn test_single_page_wraps_to_itself() {
        let mut pager = Pager::new(2, 3);
        pager.next();
        assert_eq!(pager.current_page(), 0);
        pager.previous();
        assert_eq!(pager.current_page(), 0);
    }
}
