//! Fixed-size paging over the tracked list.

use std::ops::RangeInclusive;

/// Rows per page.
pub const ITEMS_PER_PAGE: usize = 8;

/// Number of pages needed for `count` rows.
pub fn total_pages(count: usize) -> usize {
    match count % ITEMS_PER_PAGE {
        0 => count / ITEMS_PER_PAGE,
        _ => count / ITEMS_PER_PAGE + 1,
    }
}

/// List indices rendered for `page`.
///
/// The window holds one row more than a page: row [`ITEMS_PER_PAGE`] is the
/// advisory row, which shows the first entry of the next page or the
/// accuracy banner.
pub fn page_window(page: usize) -> RangeInclusive<usize> {
    let start = page * ITEMS_PER_PAGE;
    start..=start + ITEMS_PER_PAGE
}

/// Clamp a requested page into `[0, total)`; `0` when there are no pages.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.min(total.saturating_sub(1))
}
