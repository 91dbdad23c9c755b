//! Pure derivation of the Assets table view from the store and query state.
//!
//! Deterministic and side-effect free: filter, then a stable sort, then a
//! page slice. Callers feed the resulting `total_pages` back into
//! [`QueryState::clamp_page`] after a transition.

use std::cmp::Ordering;

use super::query::{QueryState, SortDir, SortKey};
use super::store::Asset;

/// The filtered/sorted/paginated subset plus count metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    /// Rows of the current page, at most `rows_per_page` of them.
    pub rows: Vec<&'a Asset>,
    /// Matching rows before pagination.
    pub total_count: usize,
    /// `max(1, ceil(total_count / rows_per_page))`; 1 even with no matches.
    pub total_pages: usize,
    /// The page actually sliced, after clamping into `[1, total_pages]`.
    pub page: usize,
}

/// Filter and sort the store without paginating. Export uses this directly;
/// [`derive`] slices it into a page.
pub fn filter_sort<'a>(store: &'a [Asset], query: &QueryState) -> Vec<&'a Asset> {
    let needle = query.query.to_lowercase();
    let mut matched: Vec<&Asset> = store
        .iter()
        .filter(|asset| matches(asset, query, &needle))
        .collect();

    // Vec::sort_by is stable, so equal keys keep the store's relative order.
    // Reversing the Ordering (not the slice) preserves that for descending.
    matched.sort_by(|a, b| {
        let ord = compare_by(a, b, query.sort_key);
        match query.sort_dir {
            SortDir::Ascending => ord,
            SortDir::Descending => ord.reverse(),
        }
    });
    matched
}

pub fn derive<'a>(store: &'a [Asset], query: &QueryState) -> DerivedView<'a> {
    let matched = filter_sort(store, query);

    let total_count = matched.len();
    let total_pages = total_pages(total_count, query.rows_per_page);
    let page = query.page.clamp(1, total_pages);

    let start = (page - 1) * query.rows_per_page;
    let rows = matched
        .into_iter()
        .skip(start)
        .take(query.rows_per_page)
        .collect();

    DerivedView {
        rows,
        total_count,
        total_pages,
        page,
    }
}

pub fn total_pages(total_count: usize, rows_per_page: usize) -> usize {
    total_count.div_ceil(rows_per_page.max(1)).max(1)
}

fn matches(asset: &Asset, query: &QueryState, needle_lower: &str) -> bool {
    let text_ok = needle_lower.is_empty()
        || contains_case_insensitive(&asset.id, needle_lower)
        || contains_case_insensitive(&asset.name, needle_lower)
        || contains_case_insensitive(&asset.site, needle_lower);
    text_ok && query.status_filter.matches(asset.status)
}

fn contains_case_insensitive(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Column values compare as strings; statuses compare by their label.
fn compare_by(a: &Asset, b: &Asset, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Site => a.site.cmp(&b.site),
        SortKey::Status => a.status.title().cmp(b.status.title()),
        SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assets::store::{mock_assets, Status};
    use crate::domain::assets::StatusFilter;

    #[test]
    fn test_empty_query_matches_everything() {
        let store = mock_assets();
        let view = derive(&store, &QueryState::default());
        assert_eq!(view.total_count, store.len());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_site_substring_is_case_insensitive() {
        let store = mock_assets();
        let mut query = QueryState::default();
        query.set_query("helsinki");
        let view = derive(&store, &query);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].site, "Helsinki");
    }

    #[test]
    fn test_status_sorts_by_label() {
        let store = mock_assets();
        let mut query = QueryState::default();
        query.toggle_sort(SortKey::Status);
        let view = derive(&store, &query);
        assert_eq!(view.rows.first().map(|a| a.status), Some(Status::Alert));
        assert_eq!(
            view.rows.last().map(|a| a.status),
            Some(Status::Operational),
        );
    }

    #[test]
    fn test_filter_and_query_combine() {
        let store = mock_assets();
        let mut query = QueryState::default();
        query.set_query("wind");
        query.set_status_filter(StatusFilter::Operational);
        let view = derive(&store, &query);
        assert_eq!(view.total_count, 2);
        assert!(view.rows.iter().all(|a| a.status == Status::Operational));
    }

    #[test]
    fn test_no_matches_still_has_one_page() {
        let store = mock_assets();
        let mut query = QueryState::default();
        query.set_query("reykjavik");
        let view = derive(&store, &query);
        assert_eq!(view.total_count, 0);
        assert_eq!(view.total_pages, 1);
        assert!(view.rows.is_empty());
    }
}
