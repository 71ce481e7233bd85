//! Filtering, sorting, and statistics over an in-memory table.
//!
//! This crate is the engine behind sift's grid: it parses the small filter
//! commands typed into column fields ([`filter`]), combines them with a
//! global search and a sort key, and maintains the ordered set of visible
//! row indices ([`TableView`]). Everything runs synchronously on the
//! caller's thread; a pass over the data is triggered only when the filter
//! set actually changes.
//!
//! # Example
//!
//! ```
//! use sift_data::Table;
//! use sift_view::{SortOrder, TableView};
//!
//! let table = Table::new(
//!     vec!["name".into(), "age".into()],
//!     vec![
//!         vec!["Alice".into(), "30".into()],
//!         vec!["bob".into(), "25".into()],
//!     ],
//! );
//!
//! let mut view = TableView::new(&table);
//! view.set_column_filter(1, "#range: 28,40");
//! assert_eq!(view.visible_rows(), &[0]);
//!
//! view.set_column_filter(1, "");
//! view.set_sort(0, SortOrder::Ascending);
//! assert_eq!(view.visible_rows(), &[0, 1]);
//! ```

pub mod filter;
mod stats;
mod view;

pub use stats::{column_stats, ColumnStats, ColumnSummary};
pub use view::{SortKey, SortOrder, TableView};
