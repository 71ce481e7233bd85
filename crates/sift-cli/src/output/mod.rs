//! Output formatting utilities for the sift CLI.
//!
//! This module provides functions for formatting data as tables or JSON:
//!
//! - [`table`] - Grid rendering of the visible rows
//! - [`stats`] - Column statistics rendering
//! - [`helpers`] - Common formatting utilities (truncation, row counts)

pub mod helpers;
mod stats;
mod table;

pub use stats::{format_stats_json, format_stats_table, stats_csv_records, STATS_CSV_HEADER};
pub use table::{format_view_json, format_view_table};
