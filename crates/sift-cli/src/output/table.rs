//! Grid rendering of the visible rows.

use owo_colors::OwoColorize;
use serde::Serialize;
use sift_data::Table;

use super::helpers::{display_width, truncate_cell};

/// Rows sampled per column when fitting widths, matching the sampled
/// auto-resize of the desktop grid this replaces.
const SAMPLE_ROWS: usize = 100;

/// Narrowest a rendered column may be.
const MIN_COL_WIDTH: usize = 4;

/// Header of the source-row-index column.
const INDEX_HEADER: &str = "#";

/// JSON output structure for the view command.
#[derive(Serialize)]
pub struct ViewOutput<'a> {
    pub columns: &'a [String],
    pub rows: Vec<RowOutput<'a>>,
    pub visible: usize,
    pub total: usize,
}

/// JSON output structure for a single visible row.
#[derive(Serialize)]
pub struct RowOutput<'a> {
    /// Load-order index in the source file.
    pub index: usize,
    /// Cells in column order (padded with empty strings for short rows).
    pub cells: Vec<&'a str>,
}

/// Formats the visible rows as JSON.
///
/// `rows` is the (possibly limited) slice to emit; `visible` and `total`
/// are the full counts before limiting.
pub fn format_view_json(
    table: &Table,
    rows: &[usize],
    visible: usize,
    total: usize,
) -> serde_json::Result<String> {
    let rows = rows
        .iter()
        .map(|&index| RowOutput {
            index,
            cells: (0..table.column_count())
                .map(|column| table.cell(index, column).unwrap_or_default())
                .collect(),
        })
        .collect();

    serde_json::to_string_pretty(&ViewOutput {
        columns: table.headers(),
        rows,
        visible,
        total,
    })
}

/// Formats the visible rows as a padded text grid: a source-index column,
/// then one column per header, widths fitted to a sample of the content.
pub fn format_view_table(
    table: &Table,
    rows: &[usize],
    use_colors: bool,
    max_col_width: usize,
) -> String {
    if table.column_count() == 0 {
        return "No columns found.\n".to_string();
    }

    let widths = fit_widths(table, rows, max_col_width);
    let index_width = rows
        .iter()
        .max()
        .map(|&max| max.to_string().len())
        .unwrap_or(1)
        .max(display_width(INDEX_HEADER));

    let mut output = String::new();

    let header = render_line(
        index_width,
        INDEX_HEADER,
        &widths,
        |column| table.headers()[column].as_str(),
        max_col_width,
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    if rows.is_empty() {
        output.push_str("(no rows)\n");
        return output;
    }

    for &index in rows {
        let line = render_line(
            index_width,
            &index.to_string(),
            &widths,
            |column| table.cell(index, column).unwrap_or_default(),
            max_col_width,
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Fits each column's width to its header and a sample of the rows being
/// shown, clamped to `[MIN_COL_WIDTH, max_col_width]`.
fn fit_widths(table: &Table, rows: &[usize], max_col_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .headers()
        .iter()
        .map(|h| display_width(h))
        .collect();

    for &index in rows.iter().take(SAMPLE_ROWS) {
        for (column, width) in widths.iter_mut().enumerate() {
            if let Some(cell) = table.cell(index, column) {
                *width = (*width).max(display_width(cell));
            }
        }
    }

    let floor = MIN_COL_WIDTH.min(max_col_width);
    widths
        .into_iter()
        .map(|w| w.clamp(floor, max_col_width))
        .collect()
}

/// Renders one output line: the index cell plus each data cell truncated
/// and left-padded to its column width.
fn render_line<'v>(
    index_width: usize,
    index_cell: &str,
    widths: &[usize],
    cell: impl Fn(usize) -> &'v str,
    max_col_width: usize,
) -> String {
    let mut line = format!("{index_cell:>index_width$}");
    for (column, &width) in widths.iter().enumerate() {
        let text = truncate_cell(cell(column), max_col_width);
        line.push_str("  ");
        line.push_str(&format!("{text:<width$}"));
    }
    line.trim_end().to_string()
}
