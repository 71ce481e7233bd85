//! Column statistics rendering.

use owo_colors::OwoColorize;
use serde::Serialize;
use sift_view::{ColumnStats, ColumnSummary};

use super::helpers::display_width;

/// Header row used for both the rendered table and the CSV export.
pub const STATS_CSV_HEADER: [&str; 6] = ["Column", "Type", "Count", "Min", "Max", "Average"];

/// JSON output structure for the stats command.
#[derive(Serialize)]
pub struct StatsOutput {
    pub columns: Vec<StatRow>,
}

/// JSON output structure for one column's statistics.
#[derive(Serialize)]
pub struct StatRow {
    pub name: String,
    pub kind: &'static str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

impl From<&ColumnStats> for StatRow {
    fn from(stats: &ColumnStats) -> Self {
        match stats.summary {
            ColumnSummary::Numeric {
                count,
                min,
                max,
                mean,
            } => StatRow {
                name: stats.name.clone(),
                kind: "numeric",
                count,
                min: Some(min),
                max: Some(max),
                mean: Some(mean),
            },
            ColumnSummary::Text { count } => StatRow {
                name: stats.name.clone(),
                kind: "text",
                count,
                min: None,
                max: None,
                mean: None,
            },
        }
    }
}

/// Formats statistics as JSON.
pub fn format_stats_json(stats: &[ColumnStats]) -> serde_json::Result<String> {
    let output = StatsOutput {
        columns: stats.iter().map(StatRow::from).collect(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats statistics as a padded text table.
pub fn format_stats_table(stats: &[ColumnStats], use_colors: bool) -> String {
    if stats.is_empty() {
        return "No columns found.\n".to_string();
    }

    let records = stats_csv_records(stats);
    let mut widths: Vec<usize> = STATS_CSV_HEADER.iter().map(|h| display_width(h)).collect();
    for record in &records {
        for (slot, cell) in record.iter().enumerate() {
            widths[slot] = widths[slot].max(display_width(cell));
        }
    }

    let mut output = String::new();

    let header = render_line(&STATS_CSV_HEADER.map(String::from), &widths);
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for record in &records {
        output.push_str(&render_line(record, &widths));
        output.push('\n');
    }

    output
}

/// The statistics as display strings, one record per column, in the
/// `STATS_CSV_HEADER` layout. Shared by the table renderer and the CSV
/// export.
pub fn stats_csv_records(stats: &[ColumnStats]) -> Vec<[String; 6]> {
    stats
        .iter()
        .map(|column| match column.summary {
            ColumnSummary::Numeric {
                count,
                min,
                max,
                mean,
            } => [
                column.name.clone(),
                "Numeric".to_string(),
                count.to_string(),
                format!("{min:.2}"),
                format!("{max:.2}"),
                format!("{mean:.2}"),
            ],
            ColumnSummary::Text { count } => [
                column.name.clone(),
                "Text".to_string(),
                count.to_string(),
                "-".to_string(),
                "-".to_string(),
                "-".to_string(),
            ],
        })
        .collect()
}

fn render_line(record: &[String; 6], widths: &[usize]) -> String {
    let mut line = String::new();
    for (slot, cell) in record.iter().enumerate() {
        if slot > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}", width = widths[slot]));
    }
    line.trim_end().to_string()
}
