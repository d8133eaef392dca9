//! Pagination arithmetic: page counts, slice bounds, and the abbreviated
//! page-number strip rendered under the browse grid.

/// One element of the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number (1-indexed).
    Page(usize),
    /// A collapsed gap, rendered as "…".
    Ellipsis,
}

/// Number of pages needed for `total_matches` items.
///
/// An empty result set still reports one page, so the strip always has
/// something to render ("page 1 of 1, zero shown").
pub fn page_count(total_matches: usize, page_size: usize) -> usize {
    if total_matches == 0 {
        1
    } else {
        total_matches.div_ceil(page_size)
    }
}

/// Half-open slice bounds `[start, end)` into the matched sequence for a
/// 1-indexed `page`. A page past the end yields `start >= end`, i.e. an
/// empty slice; page 0 is a caller contract violation.
pub fn slice_bounds(page: usize, total_matches: usize, page_size: usize) -> (usize, usize) {
    debug_assert!(page >= 1, "page numbers are 1-indexed");
    let start = page.saturating_sub(1) * page_size;
    let end = (start + page_size).min(total_matches);
    (start, end)
}

/// The abbreviated page-number sequence: always page 1 and the last
/// page, every page within one of `current`, and a single ellipsis per
/// collapsed gap.
///
/// Guarantees: no duplicate page numbers, no adjacent ellipses, pages in
/// ascending order.
pub fn page_window(total_pages: usize, current: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    for page in 1..=total_pages {
        let shown = page == 1 || page == total_pages || page.abs_diff(current) <= 1;
        if shown {
            items.push(PageItem::Page(page));
        } else if !matches!(items.last(), Some(PageItem::Ellipsis)) {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}
