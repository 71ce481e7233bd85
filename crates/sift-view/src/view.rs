//! The row-set filter engine.
//!
//! [`TableView`] owns the active filter set (per-column descriptors plus an
//! optional global search) and a sort key, and derives the ordered list of
//! visible row indices from a borrowed [`Table`]. Rows themselves are never
//! copied or mutated.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use sift_data::Table;

use crate::filter::{FilterDescriptor, FilterParser};

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// The active sort: a column index and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Column the rows are ordered by.
    pub column: usize,
    /// Sort direction.
    pub order: SortOrder,
}

/// One installed column filter: the raw string as typed (used to skip
/// recomputation on no-op edits) plus its parsed descriptor.
#[derive(Debug)]
struct ColumnFilter {
    raw: String,
    descriptor: FilterDescriptor,
}

/// Filtered, sorted view over a table.
///
/// The view recomputes its visible row set whenever a filter, the global
/// search, or the sort key actually changes. Recomputation walks every row
/// once, in load order, and then stable-sorts, so the result is
/// deterministic and identical calls to [`TableView::visible_rows`] return
/// identical sequences.
///
/// # Example
///
/// ```
/// use sift_data::Table;
/// use sift_view::{SortOrder, TableView};
///
/// let table = Table::new(
///     vec!["name".into(), "age".into()],
///     vec![
///         vec!["Alice".into(), "30".into()],
///         vec!["bob".into(), "25".into()],
///         vec!["Cara".into(), "30".into()],
///     ],
/// );
///
/// let mut view = TableView::new(&table);
/// view.set_column_filter(1, "#range: 28,40");
/// assert_eq!(view.visible_rows(), &[0, 2]);
///
/// view.set_sort(0, SortOrder::Descending);
/// assert_eq!(view.visible_rows(), &[2, 0]);
/// ```
#[derive(Debug)]
pub struct TableView<'a> {
    table: &'a Table,
    filters: BTreeMap<usize, ColumnFilter>,
    global: Option<String>,
    sort: Option<SortKey>,
    visible: Vec<usize>,
}

impl<'a> TableView<'a> {
    /// Creates a view showing every row of `table` in load order.
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            filters: BTreeMap::new(),
            global: None,
            sort: None,
            visible: (0..table.row_count()).collect(),
        }
    }

    /// The underlying table.
    pub fn table(&self) -> &'a Table {
        self.table
    }

    /// Parses `raw` and installs it as the filter for `column`, replacing
    /// any previous one. An empty or whitespace-only string removes the
    /// constraint. Re-installing the identical string is a no-op.
    pub fn set_column_filter(&mut self, column: usize, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if self.filters.remove(&column).is_some() {
                self.recompute();
            }
            return;
        }

        if self
            .filters
            .get(&column)
            .is_some_and(|filter| filter.raw == trimmed)
        {
            return;
        }

        let descriptor = FilterParser::parse(trimmed);
        self.filters.insert(
            column,
            ColumnFilter {
                raw: trimmed.to_string(),
                descriptor,
            },
        );
        self.recompute();
    }

    /// Installs or replaces the global search text, matched case-
    /// insensitively against every cell of a row. Empty removes it.
    pub fn set_global_search(&mut self, raw: &str) {
        let needle = raw.trim().to_lowercase();
        let next = (!needle.is_empty()).then_some(needle);
        if next == self.global {
            return;
        }
        self.global = next;
        self.recompute();
    }

    /// Sorts the visible rows by `column` in the given direction.
    ///
    /// Only the order changes, so the current visible list is re-sorted in
    /// place: ties under the new key keep their current relative order,
    /// whether that came from load order or from a previous sort.
    pub fn set_sort(&mut self, column: usize, order: SortOrder) {
        let key = SortKey { column, order };
        if Some(key) == self.sort {
            return;
        }
        self.sort = Some(key);
        self.sort_visible(key);
    }

    /// Returns to load order.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.recompute();
        }
    }

    /// Removes every column filter and the global search.
    pub fn clear_filters(&mut self) {
        if self.filters.is_empty() && self.global.is_none() {
            return;
        }
        self.filters.clear();
        self.global = None;
        self.recompute();
    }

    /// The current sort key, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    /// Ordered indices of the rows that satisfy the current filter set.
    pub fn visible_rows(&self) -> &[usize] {
        &self.visible
    }

    /// Number of visible rows.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Number of rows in the underlying table.
    pub fn total_len(&self) -> usize {
        self.table.row_count()
    }

    /// Rebuilds the visible set: filter every row in load order, then
    /// stable-sort. Runs inline on the caller's thread; the filter set is
    /// read once per pass.
    fn recompute(&mut self) {
        self.visible = (0..self.table.row_count())
            .filter(|&index| self.row_accepted(index))
            .collect();

        if let Some(key) = self.sort {
            self.sort_visible(key);
        }
    }

    /// A row is visible iff every active column descriptor matches its
    /// cell AND, when a global search is set, some cell contains the
    /// needle. A filtered column missing from a short row rejects the row.
    fn row_accepted(&self, index: usize) -> bool {
        let Some(row) = self.table.row(index) else {
            return false;
        };

        for (&column, filter) in &self.filters {
            let Some(cell) = row.get(column) else {
                return false;
            };
            if !filter.descriptor.matches(cell) {
                return false;
            }
        }

        if let Some(needle) = &self.global {
            return row.iter().any(|cell| cell.to_lowercase().contains(needle));
        }

        true
    }

    /// Stable sort of the visible indices. Descending reverses the
    /// comparator rather than the sorted list, so equal keys keep their
    /// current relative positions either way.
    fn sort_visible(&mut self, key: SortKey) {
        let table = self.table;
        self.visible.sort_by(|&a, &b| {
            let ordering = sort_cell(table, a, key.column).cmp(&sort_cell(table, b, key.column));
            match key.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
}

/// Sort key for one cell: numeric cells order before text, numbers compare
/// by value, text compares lowercased. Rows missing the column sort as
/// empty text.
#[derive(Debug)]
enum CellKey {
    Number(f64),
    Text(String),
}

impl PartialEq for CellKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellKey {}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CellKey::Number(a), CellKey::Number(b)) => a.total_cmp(b),
            (CellKey::Number(_), CellKey::Text(_)) => Ordering::Less,
            (CellKey::Text(_), CellKey::Number(_)) => Ordering::Greater,
            (CellKey::Text(a), CellKey::Text(b)) => a.cmp(b),
        }
    }
}

fn sort_cell(table: &Table, row: usize, column: usize) -> CellKey {
    let cell = table.cell(row, column).unwrap_or("");
    match cell.trim().parse::<f64>() {
        Ok(value) => CellKey::Number(value),
        Err(_) => CellKey::Text(cell.to_lowercase()),
    }
}
