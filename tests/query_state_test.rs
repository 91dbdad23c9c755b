//! Query state transitions: page resets, sort toggling, clamping.

use gridwatch::domain::assets::{
    derive, QueryState, SortDir, SortKey, StatusFilter, ROWS_PER_PAGE_CHOICES,
};
use gridwatch::domain::assets::{Asset, Status};

fn numbered_store(count: usize) -> Vec<Asset> {
    (0..count)
        .map(|i| Asset {
            id: format!("AST-{i:03}"),
            name: format!("Asset {i}"),
            site: if i % 2 == 0 { "Helsinki" } else { "Vaasa" }.to_string(),
            status: match i % 3 {
                0 => Status::Operational,
                1 => Status::Maintenance,
                _ => Status::Alert,
            },
            updated_at: format!("2025-12-{:02} 10:00", (i % 28) + 1),
        })
        .collect()
}

#[test]
fn test_set_query_resets_page() {
    let mut query = QueryState::default();
    query.page = 2;
    query.set_query("turbine");
    assert_eq!(query.page, 1);
    assert_eq!(query.query, "turbine");
}

#[test]
fn test_set_status_filter_resets_page() {
    let mut query = QueryState::default();
    query.page = 3;
    query.set_status_filter(StatusFilter::Alert);
    assert_eq!(query.page, 1);
    assert_eq!(query.status_filter, StatusFilter::Alert);
}

#[test]
fn test_toggle_sort_new_key_starts_ascending() {
    let mut query = QueryState::default();
    query.toggle_sort(SortKey::Site);
    assert_eq!(query.sort_key, SortKey::Site);
    assert_eq!(query.sort_dir, SortDir::Ascending);
}

#[test]
fn test_toggle_sort_twice_returns_to_original_direction() {
    let mut query = QueryState::default();
    query.toggle_sort(SortKey::Name);
    assert_eq!(query.sort_dir, SortDir::Ascending);
    query.toggle_sort(SortKey::Name);
    assert_eq!(query.sort_dir, SortDir::Descending);
    query.toggle_sort(SortKey::Name);
    assert_eq!(query.sort_dir, SortDir::Ascending);
}

#[test]
fn test_rows_per_page_change_recomputes_pages() {
    // Page 2 of a 15-item result at 10 rows per page
    let store = numbered_store(15);
    let mut query = QueryState::default();
    let view = derive(&store, &query);
    assert_eq!(view.total_pages, 2);
    query.set_page(2, view.total_pages);
    assert_eq!(query.page, 2);

    // Widening to 25 rows collapses everything onto one page
    query.set_rows_per_page(25);
    let view = derive(&store, &query);
    assert_eq!(view.total_pages, 1);
    assert_eq!(query.page, 1);
    assert_eq!(view.rows.len(), 15);
}

#[test]
fn test_set_page_clamps_into_range() {
    let mut query = QueryState::default();
    query.set_page(99, 3);
    assert_eq!(query.page, 3);
    query.set_page(0, 3);
    assert_eq!(query.page, 1);
}

#[test]
fn test_clear_filters_leaves_sort_untouched() {
    let mut query = QueryState::default();
    query.set_query("turku");
    query.set_status_filter(StatusFilter::Alert);
    query.toggle_sort(SortKey::Site);
    query.toggle_sort(SortKey::Site);
    query.page = 2;

    query.clear_filters();
    assert_eq!(query.query, "");
    assert_eq!(query.status_filter, StatusFilter::All);
    assert_eq!(query.page, 1);
    assert_eq!(query.sort_key, SortKey::Site);
    assert_eq!(query.sort_dir, SortDir::Descending);
}

#[test]
fn test_page_invariant_holds_across_transition_sequences() {
    let store = numbered_store(37);
    let mut query = QueryState::default();

    let check = |query: &mut QueryState, store: &[Asset]| {
        let view = derive(store, query);
        query.clamp_page(view.total_pages);
        assert!(query.page >= 1);
        assert!(query.page <= view.total_pages);
    };

    for choice in ROWS_PER_PAGE_CHOICES {
        query.set_rows_per_page(choice);
        check(&mut query, &store);
    }
    query.set_page(4, derive(&store, &query).total_pages);
    check(&mut query, &store);
    query.set_query("AST-00");
    check(&mut query, &store);
    query.set_status_filter(StatusFilter::Maintenance);
    check(&mut query, &store);
    query.toggle_sort(SortKey::UpdatedAt);
    check(&mut query, &store);
    query.set_query("no such asset");
    check(&mut query, &store);
    query.clear_filters();
    check(&mut query, &store);
}
