//! Query state for the Assets table: search, filter, sort, pagination.
//!
//! All of the user's table configuration lives in one [`QueryState`] value so
//! the page-clamp invariant can be enforced in one place. Every transition
//! except [`QueryState::set_page`] resets pagination to the first page: a
//! changed result set invalidates the meaning of the prior page.

use super::store::Status;

/// Allowed page sizes, in the order the `r` key cycles them.
pub const ROWS_PER_PAGE_CHOICES: [usize; 3] = [10, 25, 50];

/// Status filter over the asset list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Operational,
    Maintenance,
    Alert,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Operational,
        StatusFilter::Maintenance,
        StatusFilter::Alert,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Operational => "Operational",
            StatusFilter::Maintenance => "Maintenance",
            StatusFilter::Alert => "Alert",
        }
    }

    /// Parse a textual filter value. Unrecognized input falls back to `All`
    /// rather than producing an invalid state.
    pub fn parse_lenient(input: &str) -> StatusFilter {
        match input.trim().to_lowercase().as_str() {
            "operational" | "ok" => StatusFilter::Operational,
            "maintenance" => StatusFilter::Maintenance,
            "alert" => StatusFilter::Alert,
            _ => StatusFilter::All,
        }
    }

    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Operational => status == Status::Operational,
            StatusFilter::Maintenance => status == Status::Maintenance,
            StatusFilter::Alert => status == Status::Alert,
        }
    }

    /// Next filter in cycle order, wrapping after `Alert`.
    pub fn next(&self) -> StatusFilter {
        let idx = StatusFilter::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or(0);
        StatusFilter::ALL[(idx + 1) % StatusFilter::ALL.len()]
    }
}

/// Sortable column of the Assets table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Site,
    Status,
    UpdatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Site,
        SortKey::Status,
        SortKey::UpdatedAt,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "Name",
            SortKey::Site => "Site",
            SortKey::Status => "Status",
            SortKey::UpdatedAt => "Last update",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Ascending,
    Descending,
}

impl SortDir {
    pub fn flip(&self) -> SortDir {
        match self {
            SortDir::Ascending => SortDir::Descending,
            SortDir::Descending => SortDir::Ascending,
        }
    }

    /// Marker shown next to the sorted column header.
    pub fn marker(&self) -> &'static str {
        match self {
            SortDir::Ascending => "▲",
            SortDir::Descending => "▼",
        }
    }
}

/// The user's current search/filter/sort/page configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub query: String,
    pub status_filter: StatusFilter,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    /// 1-based; always within `[1, total_pages]` after a transition.
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            query: String::new(),
            status_filter: StatusFilter::All,
            sort_key: SortKey::Id,
            sort_dir: SortDir::Ascending,
            page: 1,
            rows_per_page: ROWS_PER_PAGE_CHOICES[0],
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.page = 1;
    }

    /// New key sorts ascending; the already-active key flips direction.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_dir = self.sort_dir.flip();
        } else {
            self.sort_key = key;
            self.sort_dir = SortDir::Ascending;
        }
        self.page = 1;
    }

    pub fn set_rows_per_page(&mut self, n: usize) {
        self.rows_per_page = normalize_rows_per_page(n);
        self.page = 1;
    }

    /// Advance to the next allowed page size, wrapping after the largest.
    pub fn cycle_rows_per_page(&mut self) {
        let idx = ROWS_PER_PAGE_CHOICES
            .iter()
            .position(|n| *n == self.rows_per_page)
            .unwrap_or(0);
        self.set_rows_per_page(ROWS_PER_PAGE_CHOICES[(idx + 1) % ROWS_PER_PAGE_CHOICES.len()]);
    }

    /// Clamps into `[1, total_pages]`; the only transition that keeps the
    /// current result set's meaning instead of resetting to the first page.
    pub fn set_page(&mut self, n: usize, total_pages: usize) {
        self.page = n.clamp(1, total_pages.max(1));
    }

    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    /// Reset query text and status filter, leaving the sort untouched.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.status_filter = StatusFilter::All;
        self.page = 1;
    }
}

/// Page sizes outside the allowed set fall back to the default, mirroring
/// the lenient status-filter parse.
pub fn normalize_rows_per_page(n: usize) -> usize {
    if ROWS_PER_PAGE_CHOICES.contains(&n) {
        n
    } else {
        ROWS_PER_PAGE_CHOICES[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_falls_back_to_all() {
        assert_eq!(StatusFilter::parse_lenient("alert"), StatusFilter::Alert);
        assert_eq!(
            StatusFilter::parse_lenient("Maintenance"),
            StatusFilter::Maintenance,
        );
        assert_eq!(StatusFilter::parse_lenient("bogus"), StatusFilter::All);
        assert_eq!(StatusFilter::parse_lenient(""), StatusFilter::All);
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = StatusFilter::All;
        for _ in 0..StatusFilter::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, StatusFilter::All);
    }

    #[test]
    fn test_rows_per_page_normalized() {
        assert_eq!(normalize_rows_per_page(25), 25);
        assert_eq!(normalize_rows_per_page(7), 10);
    }
}
