//! Asset records, query state, and the pure view derivation.

pub mod query;
pub mod store;
pub mod view;

pub use query::{QueryState, SortDir, SortKey, StatusFilter, ROWS_PER_PAGE_CHOICES};
pub use store::{mock_assets, Asset, Status};
pub use view::{derive, filter_sort, DerivedView};
