//! Per-column statistics over the visible row set.

use sift_data::Table;

/// Summary of one column, computed over the visible rows only.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    /// Column header.
    pub name: String,
    /// Numeric or text summary.
    pub summary: ColumnSummary,
}

/// What a column's visible cells look like.
///
/// A column counts as numeric when at least one visible cell parses as a
/// number; the aggregates then cover exactly the cells that parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnSummary {
    /// At least one visible cell parsed as a number.
    Numeric {
        /// How many visible cells parsed.
        count: usize,
        /// Smallest parsed value.
        min: f64,
        /// Largest parsed value.
        max: f64,
        /// Arithmetic mean of the parsed values.
        mean: f64,
    },
    /// No visible cell parsed as a number.
    Text {
        /// Number of visible rows.
        count: usize,
    },
}

/// Computes statistics for every column of `table` over the rows named by
/// `visible`, in column order.
pub fn column_stats(table: &Table, visible: &[usize]) -> Vec<ColumnStats> {
    table
        .headers()
        .iter()
        .enumerate()
        .map(|(column, name)| ColumnStats {
            name: name.clone(),
            summary: summarize_column(table, visible, column),
        })
        .collect()
}

fn summarize_column(table: &Table, visible: &[usize], column: usize) -> ColumnSummary {
    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0f64;

    for &row in visible {
        let Some(cell) = table.cell(row, column) else {
            continue;
        };
        if let Ok(value) = cell.trim().parse::<f64>() {
            count += 1;
            min = min.min(value);
            max = max.max(value);
            sum += value;
        }
    }

    if count > 0 {
        ColumnSummary::Numeric {
            count,
            min,
            max,
            mean: sum / count as f64,
        }
    } else {
        ColumnSummary::Text {
            count: visible.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_table() -> Table {
        Table::new(
            vec!["name".to_string(), "score".to_string()],
            vec![
                vec!["Alice".to_string(), "10".to_string()],
                vec!["bob".to_string(), "n/a".to_string()],
                vec!["Cara".to_string(), "20".to_string()],
            ],
        )
    }

    #[test]
    fn test_numeric_column_aggregates() {
        let table = mixed_table();
        let stats = column_stats(&table, &[0, 1, 2]);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[1].name, "score");
        // Only the two parseable cells count.
        assert_eq!(
            stats[1].summary,
            ColumnSummary::Numeric {
                count: 2,
                min: 10.0,
                max: 20.0,
                mean: 15.0,
            }
        );
    }

    #[test]
    fn test_text_column_counts_visible_rows() {
        let table = mixed_table();
        let stats = column_stats(&table, &[0, 1, 2]);
        assert_eq!(stats[0].summary, ColumnSummary::Text { count: 3 });
    }

    #[test]
    fn test_stats_respect_visible_subset() {
        let table = mixed_table();
        let stats = column_stats(&table, &[2]);

        assert_eq!(stats[0].summary, ColumnSummary::Text { count: 1 });
        assert_eq!(
            stats[1].summary,
            ColumnSummary::Numeric {
                count: 1,
                min: 20.0,
                max: 20.0,
                mean: 20.0,
            }
        );
    }

    #[test]
    fn test_stats_empty_visible_set() {
        let table = mixed_table();
        let stats = column_stats(&table, &[]);
        assert_eq!(stats[0].summary, ColumnSummary::Text { count: 0 });
        assert_eq!(stats[1].summary, ColumnSummary::Text { count: 0 });
    }
}
