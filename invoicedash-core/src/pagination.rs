//! Pagination for the invoice table

use serde::{Deserialize, Serialize};

/// Rows shown per invoice table page.
pub const ITEMS_PER_PAGE: u32 = 6;

/// A page of the invoice table expressed as a row window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Page number (1-indexed)
    pub page: u32,
    pub per_page: u32,
}

impl PageWindow {
    /// Window for `page` at [`ITEMS_PER_PAGE`]. Page is clamped to a minimum of 1.
    pub fn new(page: u32) -> Self {
        Self::with_size(page, ITEMS_PER_PAGE)
    }

    /// Window with an explicit page size (clamped to at least 1).
    pub fn with_size(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Index of the first row on this page.
    pub fn start(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Index of the last row on this page (inclusive).
    pub fn end(&self) -> u64 {
        self.start() + u64::from(self.per_page) - 1
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.start() as i64
    }

    /// SQL LIMIT value covering `start()..=end()`.
    pub fn limit(&self) -> i64 {
        (self.end() - self.start() + 1) as i64
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Query parameters for the invoice table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InvoiceSearchParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<u32>,
}

impl InvoiceSearchParams {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page.unwrap_or(1))
    }
}

/// Number of pages needed to show `count` rows, `per_page` at a time.
///
/// Zero rows means zero pages. A negative count (never produced by COUNT)
/// is treated as zero.
pub fn total_pages(count: i64, per_page: u32) -> u32 {
    let count = count.max(0) as u64;
    let per_page = u64::from(per_page.max(1));
    count.div_ceil(per_page) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_window() {
        let w = PageWindow::new(1);
        assert_eq!(w.start(), 0);
        assert_eq!(w.end(), 5);
        assert_eq!(w.offset(), 0);
        assert_eq!(w.limit(), 6);
    }

    #[test]
    fn later_page_windows() {
        let w = PageWindow::new(2);
        assert_eq!((w.start(), w.end()), (6, 11));

        let w = PageWindow::new(5);
        assert_eq!((w.start(), w.end()), (24, 29));
        assert_eq!(w.offset(), 24);
    }

    #[test]
    fn clamps_page_zero() {
        let w = PageWindow::new(0);
        assert_eq!(w.page, 1);
        assert_eq!(w.start(), 0);
    }

    #[test]
    fn custom_size() {
        let w = PageWindow::with_size(3, 10);
        assert_eq!((w.start(), w.end()), (20, 29));

        let w = PageWindow::with_size(3, 0);
        assert_eq!(w.per_page, 1);
        assert_eq!((w.start(), w.end()), (2, 2));
    }

    #[test]
    fn zero_rows_is_zero_pages() {
        assert_eq!(total_pages(0, ITEMS_PER_PAGE), 0);
    }

    #[test]
    fn page_counts_round_up() {
        assert_eq!(total_pages(1, ITEMS_PER_PAGE), 1);
        assert_eq!(total_pages(6, ITEMS_PER_PAGE), 1);
        assert_eq!(total_pages(7, ITEMS_PER_PAGE), 2);
        assert_eq!(total_pages(15, ITEMS_PER_PAGE), 3);
    }

    #[test]
    fn negative_count_is_zero_pages() {
        assert_eq!(total_pages(-3, ITEMS_PER_PAGE), 0);
    }

    #[test]
    fn search_params_default_to_first_page() {
        let params = InvoiceSearchParams::default();
        assert_eq!(params.window(), PageWindow::new(1));

        let params = InvoiceSearchParams {
            query: "lee".into(),
            page: Some(3),
        };
        assert_eq!(params.window().start(), 12);
    }
}
