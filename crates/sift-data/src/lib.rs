//! In-memory tabular data model and file I/O for sift.
//!
//! This crate provides the [`Table`] type that the rest of sift works
//! against, together with loaders for delimited text and JSON files and
//! export writers that emit a subset of rows in a chosen format.
//!
//! A table is loaded eagerly and never mutated afterwards; filtering and
//! sorting elsewhere operate on row indices into it.

pub mod error;
pub mod read;
pub mod write;

pub use error::{DataError, DataResult};

/// Maximum Levenshtein distance to consider a column name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A fully loaded tabular dataset: an ordered list of column headers plus
/// rows of string cells.
///
/// Rows are identified by their load-order index for the lifetime of the
/// table. Short rows are permitted (delimited files are read flexibly);
/// consumers must treat a missing cell as absent rather than empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// The column headers, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All rows, in load order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// One row by load-order index.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// A single cell, or `None` when the row is missing or too short.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a header name to its column index (case-insensitive).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .position(|h| h.to_lowercase() == name_lower)
    }

    /// Finds the closest existing column name to `name`, for "did you mean"
    /// diagnostics. Returns `None` when nothing is close enough.
    pub fn similar_column(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();

        let (best_match, best_distance) = self
            .headers
            .iter()
            .filter(|h| !h.is_empty())
            .map(|h| {
                let distance = strsim::levenshtein(&name_lower, &h.to_lowercase());
                (h.as_str(), distance)
            })
            .min_by_key(|(_, d)| *d)?;

        if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
            Some(best_match)
        } else {
            None
        }
    }
}
