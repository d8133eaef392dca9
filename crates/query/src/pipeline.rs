//! The query pipeline: filter → sort → paginate.
//!
//! `execute` is a pure function over the listing set it is given: no
//! I/O, no shared state, nothing mutated but its own working copy. It
//! is safe to call repeatedly and from anywhere.

use crate::filter_pipeline::FilterPipeline;
use crate::filter_spec::{FilterSpec, PAGE_SIZE};
use crate::page::{PageItem, page_count, page_window, slice_bounds};
use crate::sort::{SortKey, apply_sort};
use anyhow::Result;
use catalog::Listing;

/// One displayed page of listings plus its display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// The listings to render, in final order.
    pub items: Vec<Listing>,
    /// The requested 1-indexed page.
    pub page: usize,
    /// Total listings matching the filter spec.
    pub total_matches: usize,
    /// Total pages (at least 1, even for zero matches).
    pub total_pages: usize,
    /// 1-indexed ordinal of the first shown record ("Showing X–Y of Z");
    /// 0 when the page is empty.
    pub start_record: usize,
    /// 1-indexed ordinal of the last shown record; 0 when empty.
    pub end_record: usize,
    /// The abbreviated page-number strip.
    pub window: Vec<PageItem>,
}

/// Run the full pipeline over `listings`.
///
/// Steps: compose and apply the spec's filters, order by the spec's sort
/// key (stable; unknown keys leave input order), then slice out the
/// requested page.
///
/// A `page` beyond the last page returns an empty `items` with the same
/// metadata; it is the caller's contract to reset to page 1 whenever
/// the spec or the listing set changes. `page == 0` is a caller bug.
pub fn execute(listings: Vec<Listing>, spec: &FilterSpec, page: usize) -> Result<PageResult> {
    debug_assert!(page >= 1, "page numbers are 1-indexed");

    let mut matched = FilterPipeline::from_spec(spec).apply(listings)?;
    apply_sort(&mut matched, SortKey::parse(&spec.sort_by));

    let total_matches = matched.len();
    let total_pages = page_count(total_matches, PAGE_SIZE);
    let (start, end) = slice_bounds(page, total_matches, PAGE_SIZE);

    let items = if start < end {
        matched[start..end].to_vec()
    } else {
        Vec::new()
    };
    let (start_record, end_record) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    tracing::debug!(
        total_matches,
        total_pages,
        page,
        shown = items.len(),
        "query pipeline executed"
    );

    Ok(PageResult {
        items,
        page,
        total_matches,
        total_pages,
        start_record,
        end_record,
        window: page_window(total_pages, page),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Category, Extension, ListingStatus};

    fn listing(id: u32, name: &str, price: u64, created_at: i64) -> Listing {
        Listing {
            id,
            name: name.to_string(),
            category: Category::Technology,
            extension: Extension::Com,
            price,
            description: String::new(),
            status: ListingStatus::Approved,
            seller_id: "seller-123".to_string(),
            created_at,
            updated_at: None,
        }
    }

    #[test]
    fn test_min_price_excludes_and_sorts() {
        // listings = [apple.com @ 100 (older), banana.io @ 50 (newer)],
        // minPrice 60, price-low: banana excluded, apple included.
        let listings = vec![
            listing(1, "apple.com", 100, 1_672_531_200),
            listing(2, "banana.io", 50, 1_704_067_200),
        ];
        let spec = FilterSpec {
            min_price: "60".to_string(),
            sort_by: "price-low".to_string(),
            ..Default::default()
        };

        let result = execute(listings, &spec, 1).unwrap();
        assert_eq!(result.total_matches, 1);
        assert_eq!(result.items[0].name, "apple.com");
    }

    #[test]
    fn test_empty_result_still_reports_one_page() {
        let spec = FilterSpec {
            search: "nomatch".to_string(),
            ..Default::default()
        };
        let result = execute(vec![listing(1, "apple.com", 100, 0)], &spec, 1).unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.total_pages, 1);
        assert_eq!((result.start_record, result.end_record), (0, 0));
        assert_eq!(result.window, vec![PageItem::Page(1)]);
    }

    #[test]
    fn test_page_past_the_end_is_empty_with_metadata() {
        let listings: Vec<Listing> = (1..=12)
            .map(|i| listing(i, &format!("name{i}.com"), 100, i as i64))
            .collect();

        let result = execute(listings, &FilterSpec::unconstrained(), 5).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total_matches, 12);
        assert_eq!(result.total_pages, 2);
        assert_eq!((result.start_record, result.end_record), (0, 0));
    }

    #[test]
    fn test_showing_x_to_y_of_z() {
        let listings: Vec<Listing> = (1..=23)
            .map(|i| listing(i, &format!("name{i}.com"), 100, 0))
            .collect();

        let result = execute(listings, &FilterSpec::unconstrained(), 3).unwrap();
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.total_pages, 3);
        assert_eq!((result.start_record, result.end_record), (19, 23));
    }
}
