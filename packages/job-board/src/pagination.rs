//! Page-number pagination over a server-side total count.

/// Pagination controller.
///
/// `current_page` is always >= 1. Navigation is clamped to `1..=total_pages`
/// where `total_pages` comes from the last successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_count: u64,
    page_size: u32,
    window_size: u32,
    current_page: u32,
}

impl Pagination {
    pub fn new(page_size: u32, window_size: u32) -> Self {
        Self {
            total_count: 0,
            page_size: page_size.max(1),
            window_size: window_size.max(1),
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// `ceil(total_count / page_size)`, zero for an empty result.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn set_total_count(&mut self, total_count: u64) {
        self.total_count = total_count;
    }

    /// Back to page 1, regardless of the known total.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Move to page `n` if it exists. Returns true if the page changed.
    pub fn go_to_page(&mut self, n: u32) -> bool {
        if n < 1 || n > self.total_pages() || n == self.current_page {
            return false;
        }
        self.current_page = n;
        true
    }

    pub fn first(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn previous(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn next(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn last(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Contiguous run of at most `window_size` page numbers around the
    /// current page, shifted left when it would run past the last page.
    pub fn window(&self) -> Vec<u32> {
        let size = i64::from(self.window_size);
        let current = i64::from(self.current_page);
        let total = i64::from(self.total_pages());

        let mut start = (current - size / 2).max(1);
        let end = total.min(start + size - 1);
        if end - start < size - 1 {
            start = (end - size + 1).max(1);
        }

        (start..=end)
            .filter_map(|page| u32::try_from(page).ok())
            .collect()
    }

    /// "Page 3 of 10 (95 total jobs)"
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} total jobs)",
            self.current_page,
            self.total_pages(),
            self.total_count
        )
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_total(total: u64) -> Pagination {
        let mut pagination = Pagination::default();
        pagination.set_total_count(total);
        pagination
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(with_total(0).total_pages(), 0);
        assert_eq!(with_total(1).total_pages(), 1);
        assert_eq!(with_total(10).total_pages(), 1);
        assert_eq!(with_total(11).total_pages(), 2);
        assert_eq!(with_total(95).total_pages(), 10);
    }

    #[test]
    fn test_go_to_page_clamps_at_last() {
        let mut pagination = with_total(95);
        assert!(pagination.go_to_page(10));
        assert!(!pagination.go_to_page(11));
        assert_eq!(pagination.current_page(), 10);
    }

    #[test]
    fn test_go_to_page_below_one_is_noop() {
        let mut pagination = with_total(95);
        pagination.go_to_page(4);
        assert!(!pagination.go_to_page(0));
        assert_eq!(pagination.current_page(), 4);
    }

    #[test]
    fn test_empty_result_cannot_navigate() {
        let mut pagination = with_total(0);
        assert!(!pagination.next());
        assert!(!pagination.last());
        assert!(!pagination.has_next());
        assert!(!pagination.has_previous());
        assert!(pagination.window().is_empty());
        assert_eq!(pagination.summary(), "Page 1 of 0 (0 total jobs)");
    }

    #[test]
    fn test_window_positions() {
        let mut pagination = with_total(95);
        assert_eq!(pagination.window(), vec![1, 2, 3, 4, 5]);

        pagination.go_to_page(2);
        assert_eq!(pagination.window(), vec![1, 2, 3, 4, 5]);

        pagination.go_to_page(6);
        assert_eq!(pagination.window(), vec![4, 5, 6, 7, 8]);

        pagination.go_to_page(9);
        assert_eq!(pagination.window(), vec![6, 7, 8, 9, 10]);

        pagination.go_to_page(10);
        assert_eq!(pagination.window(), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_with_few_pages() {
        let mut pagination = with_total(30);
        pagination.go_to_page(3);
        assert_eq!(pagination.window(), vec![1, 2, 3]);
    }

    #[test]
    fn test_step_navigation() {
        let mut pagination = with_total(35);
        assert!(!pagination.previous());
        assert!(pagination.next());
        assert!(pagination.last());
        assert_eq!(pagination.current_page(), 4);
        assert!(!pagination.next());
        assert!(pagination.first());
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_reset_ignores_total() {
        let mut pagination = with_total(95);
        pagination.go_to_page(7);
        pagination.set_total_count(0);
        pagination.reset();
        assert_eq!(pagination.current_page(), 1);
    }

    proptest! {
        #[test]
        fn prop_total_pages_is_ceiling(total in 0u64..1_000_000) {
            let pagination = with_total(total);
            prop_assert_eq!(u64::from(pagination.total_pages()), (total + 9) / 10);
        }

        #[test]
        fn prop_go_to_page_bounds(total in 0u64..500, start in 1u32..60, target in 0u32..80) {
            let mut pagination = with_total(total);
            pagination.go_to_page(start);
            let before = pagination.current_page();
            pagination.go_to_page(target);

            if target >= 1 && target <= pagination.total_pages() {
                prop_assert_eq!(pagination.current_page(), target);
            } else {
                prop_assert_eq!(pagination.current_page(), before);
            }
        }

        #[test]
        fn prop_window_is_bounded_run_containing_current(
            total in 1u64..2_000,
            target in 1u32..250,
            window_size in 1u32..9,
        ) {
            let mut pagination = Pagination::new(10, window_size);
            pagination.set_total_count(total);
            pagination.go_to_page(target);

            let window = pagination.window();
            prop_assert!(!window.is_empty());
            prop_assert!(window.len() <= window_size as usize);
            prop_assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
            prop_assert!(window.contains(&pagination.current_page()));
            prop_assert!(*window.last().unwrap() <= pagination.total_pages());
        }
    }
}
