//! Export writers for the visible portion of a table.
//!
//! Exports always write the header row plus the rows named by an index
//! list, in the order given. The caller decides what is visible; nothing
//! here filters or sorts.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::DataResult;
use crate::read::extension_of;
use crate::{DataError, Table};

/// Writes `rows` of `table` to `path`, choosing the format from the output
/// extension: `.json` and `.tsv` are special-cased, `.xlsx` is rejected,
/// anything else is written as comma-separated text.
///
/// # Errors
///
/// Returns a [`DataError`] when the file cannot be created or written.
pub fn export_path(path: &Path, table: &Table, rows: &[usize]) -> DataResult<()> {
    let extension = extension_of(path);
    if extension == "xlsx" {
        return Err(DataError::UnsupportedFormat { extension });
    }

    let file = fs::File::create(path)?;
    match extension.as_str() {
        "json" => write_json(file, table, rows),
        "tsv" => write_delimited(file, table, rows, b'\t'),
        _ => write_delimited(file, table, rows, b','),
    }
}

/// Writes the header plus the named rows as delimited text.
pub fn write_delimited<W: Write>(
    writer: W,
    table: &Table,
    rows: &[usize],
    delimiter: u8,
) -> DataResult<()> {
    let mut out = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_writer(writer);

    out.write_record(table.headers())?;
    for &index in rows {
        if let Some(row) = table.row(index) {
            out.write_record(row)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes the named rows as a pretty-printed JSON array of objects keyed by
/// header. Cells missing from short rows become empty strings.
pub fn write_json<W: Write>(writer: W, table: &Table, rows: &[usize]) -> DataResult<()> {
    let mut records = Vec::with_capacity(rows.len());
    for &index in rows {
        let Some(row) = table.row(index) else {
            continue;
        };
        let mut record = Map::new();
        for (slot, header) in table.headers().iter().enumerate() {
            let cell = row.get(slot).map(String::as_str).unwrap_or_default();
            record.insert(header.clone(), Value::String(cell.to_string()));
        }
        records.push(Value::Object(record));
    }

    serde_json::to_writer_pretty(writer, &Value::Array(records))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::load_path;
    use tempfile::TempDir;

    fn sample_table() -> Table {
        Table::new(
            vec!["name".to_string(), "age".to_string()],
            vec![
                vec!["Alice".to_string(), "30".to_string()],
                vec!["bob".to_string(), "25".to_string()],
                vec!["Cara".to_string(), "30".to_string()],
            ],
        )
    }

    #[test]
    fn test_write_csv_subset_in_order() {
        let table = sample_table();
        let mut buffer = Vec::new();
        write_delimited(&mut buffer, &table, &[2, 0], b',').unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "name,age\nCara,30\nAlice,30\n");
    }

    #[test]
    fn test_write_tsv() {
        let table = sample_table();
        let mut buffer = Vec::new();
        write_delimited(&mut buffer, &table, &[1], b'\t').unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "name\tage\nbob\t25\n");
    }

    #[test]
    fn test_write_json_keeps_column_order() {
        let table = sample_table();
        let mut buffer = Vec::new();
        write_json(&mut buffer, &table, &[0]).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        // Header order must survive into the object keys.
        assert!(text.find("\"name\"").unwrap() < text.find("\"age\"").unwrap());

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "Alice");
        assert_eq!(value[0]["age"], "30");
    }

    #[test]
    fn test_write_json_pads_short_rows() {
        let table = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string()]],
        );
        let mut buffer = Vec::new();
        write_json(&mut buffer, &table, &[0]).unwrap();

        let value: Value = serde_json::from_str(std::str::from_utf8(&buffer).unwrap()).unwrap();
        assert_eq!(value[0]["b"], "");
    }

    #[test]
    fn test_export_path_round_trip() {
        let dir = TempDir::new().unwrap();
        let table = sample_table();
        let path = dir.path().join("out.csv");

        export_path(&path, &table, &[0, 2]).unwrap();
        let reloaded = load_path(&path).unwrap();

        assert_eq!(reloaded.headers(), table.headers());
        assert_eq!(reloaded.row_count(), 2);
        assert_eq!(reloaded.cell(1, 0), Some("Cara"));
    }

    #[test]
    fn test_export_path_rejects_xlsx() {
        let dir = TempDir::new().unwrap();
        let table = sample_table();
        let path = dir.path().join("out.xlsx");

        assert!(matches!(
            export_path(&path, &table, &[0]),
            Err(DataError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_export_ignores_out_of_range_indices() {
        let table = sample_table();
        let mut buffer = Vec::new();
        write_delimited(&mut buffer, &table, &[0, 99], b',').unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
