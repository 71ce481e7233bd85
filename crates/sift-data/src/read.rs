//! File loaders for delimited text and JSON.
//!
//! Files are read eagerly and in full; every cell becomes a string. The
//! delimiter of a `.csv`/`.txt` file is sniffed from a sample of the input,
//! `.tsv` always means tab, and `.json` expects an array of objects (with
//! some leniency for a wrapping object, matching common API dumps).

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::DataResult;
use crate::{DataError, Table};

/// How many bytes of the file the delimiter sniffer looks at.
const SNIFF_BYTES: usize = 8192;

/// Delimiter candidates, in tie-breaking order.
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Loads a tabular file, choosing the reader from the file extension.
///
/// Unrecognized extensions are read as delimited text with a sniffed
/// delimiter. `.xlsx` is recognized but not supported.
///
/// # Errors
///
/// Returns a [`DataError`] when the file cannot be read or parsed.
pub fn load_path(path: &Path) -> DataResult<Table> {
    match extension_of(path).as_str() {
        "json" => load_json(path),
        "tsv" => load_delimited(path, Some(b'\t')),
        "xlsx" => Err(DataError::UnsupportedFormat {
            extension: "xlsx".to_string(),
        }),
        _ => load_delimited(path, None),
    }
}

/// The lowercased file extension, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Reads a delimited text file. When `delimiter` is `None` it is sniffed
/// from the first [`SNIFF_BYTES`] bytes.
///
/// The reader is flexible: rows may have fewer or more cells than the
/// header. Non-UTF-8 bytes are replaced rather than rejected.
pub fn load_delimited(path: &Path, delimiter: Option<u8>) -> DataResult<Table> {
    let bytes = fs::read(path)?;
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(&bytes));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut records = reader.byte_records();
    let Some(first) = records.next() else {
        return Ok(Table::default());
    };
    let headers = record_to_cells(&first?);

    let mut rows = Vec::new();
    for record in records {
        rows.push(record_to_cells(&record?));
    }

    Ok(Table::new(headers, rows))
}

fn record_to_cells(record: &csv::ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

/// Picks the most frequent delimiter candidate in the sample, falling back
/// to a comma when nothing stands out.
fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let sample = &bytes[..bytes.len().min(SNIFF_BYTES)];

    let mut counts = [0usize; DELIMITER_CANDIDATES.len()];
    for byte in sample {
        if let Some(slot) = DELIMITER_CANDIDATES.iter().position(|c| c == byte) {
            counts[slot] += 1;
        }
    }

    let mut best = b',';
    let mut best_count = 0;
    for (slot, &count) in counts.iter().enumerate() {
        if count > best_count {
            best = DELIMITER_CANDIDATES[slot];
            best_count = count;
        }
    }
    best
}

/// Reads a JSON file as an array of objects.
///
/// A top-level object is unwrapped to its first array-valued member, or
/// treated as a single record when it has none. Headers are the union of
/// keys across records in first-seen order; non-object array entries are
/// skipped. Anything else yields an empty table.
pub fn load_json(path: &Path) -> DataResult<Table> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;

    let records = match value {
        Value::Array(entries) => entries,
        Value::Object(map) => {
            let nested = map.values().find_map(|v| v.as_array().cloned());
            match nested {
                Some(entries) => entries,
                None => vec![Value::Object(map)],
            }
        }
        _ => return Ok(Table::default()),
    };

    let mut headers: Vec<String> = Vec::new();
    for record in &records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    let mut rows = Vec::new();
    for record in &records {
        if let Value::Object(map) = record {
            rows.push(
                headers
                    .iter()
                    .map(|h| map.get(h).map(value_to_cell).unwrap_or_default())
                    .collect(),
            );
        }
    }

    Ok(Table::new(headers, rows))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        path
    }

    #[test]
    fn test_load_csv() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "people.csv", "name,age\nAlice,30\nbob,25\n");

        let table = load_path(&path).unwrap();
        assert_eq!(table.headers(), ["name", "age"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some("Alice"));
        assert_eq!(table.cell(1, 1), Some("25"));
    }

    #[test]
    fn test_load_csv_quoted_fields() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "q.csv", "name,notes\n\"Smith, Jane\",\"says \"\"hi\"\"\"\n");

        let table = load_path(&path).unwrap();
        assert_eq!(table.cell(0, 0), Some("Smith, Jane"));
        assert_eq!(table.cell(0, 1), Some("says \"hi\""));
    }

    #[test]
    fn test_load_sniffs_semicolon() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.csv", "name;age\nAlice;30\n");

        let table = load_path(&path).unwrap();
        assert_eq!(table.headers(), ["name", "age"]);
        assert_eq!(table.cell(0, 1), Some("30"));
    }

    #[test]
    fn test_load_sniffs_pipe() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.txt", "a|b|c\n1|2|3\n");

        let table = load_path(&path).unwrap();
        assert_eq!(table.headers(), ["a", "b", "c"]);
    }

    #[test]
    fn test_load_tsv_forces_tab() {
        let dir = TempDir::new().unwrap();
        // The commas in the cells must not be taken as delimiters.
        let path = write_file(&dir, "data.tsv", "name\tnotes\nAlice\ta,b,c\n");

        let table = load_path(&path).unwrap();
        assert_eq!(table.headers(), ["name", "notes"]);
        assert_eq!(table.cell(0, 1), Some("a,b,c"));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "");

        let table = load_path(&path).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_load_short_rows_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "short.csv", "a,b,c\n1,2\n");

        let table = load_path(&path).unwrap();
        assert_eq!(table.row(0).unwrap().len(), 2);
    }

    #[test]
    fn test_load_json_array_of_objects() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "data.json",
            r#"[{"name": "Alice", "age": 30}, {"name": "bob", "city": "Oslo"}]"#,
        );

        let table = load_path(&path).unwrap();
        // Union of keys in first-seen order.
        assert_eq!(table.headers(), ["name", "age", "city"]);
        assert_eq!(table.cell(0, 0), Some("Alice"));
        assert_eq!(table.cell(0, 1), Some("30"));
        // Missing key becomes an empty cell.
        assert_eq!(table.cell(1, 1), Some(""));
        assert_eq!(table.cell(1, 2), Some("Oslo"));
    }

    #[test]
    fn test_load_json_wrapping_object() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "wrapped.json",
            r#"{"count": 1, "results": [{"id": "a"}, {"id": "b"}]}"#,
        );

        let table = load_path(&path).unwrap();
        assert_eq!(table.headers(), ["id"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_load_json_single_object() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "one.json", r#"{"name": "Alice", "age": 30}"#);

        let table = load_path(&path).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.cell(0, 0), Some("Alice"));
    }

    #[test]
    fn test_load_json_null_and_nested_values() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "mixed.json",
            r#"[{"a": null, "b": true, "c": {"x": 1}}]"#,
        );

        let table = load_path(&path).unwrap();
        assert_eq!(table.cell(0, 0), Some(""));
        assert_eq!(table.cell(0, 1), Some("true"));
        assert_eq!(table.cell(0, 2), Some(r#"{"x":1}"#));
    }

    #[test]
    fn test_load_json_scalar_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "scalar.json", "42");

        let table = load_path(&path).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_json_invalid_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.json", "{not json");

        assert!(matches!(load_path(&path), Err(DataError::Json(_))));
    }

    #[test]
    fn test_load_xlsx_unsupported() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "sheet.xlsx", "");

        let err = load_path(&path).unwrap_err();
        assert!(matches!(
            err,
            DataError::UnsupportedFormat { ref extension } if extension == "xlsx"
        ));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        assert!(matches!(load_path(&path), Err(DataError::Io(_))));
    }

    #[test]
    fn test_sniff_prefers_comma_on_empty_input() {
        assert_eq!(sniff_delimiter(b""), b',');
        assert_eq!(sniff_delimiter(b"no delimiters here"), b',');
    }

    #[test]
    fn test_sniff_counts_candidates() {
        assert_eq!(sniff_delimiter(b"a;b;c\n1;2;3"), b';');
        assert_eq!(sniff_delimiter(b"a\tb\n1\t2"), b'\t');
        assert_eq!(sniff_delimiter(b"a,b;c,d"), b',');
    }
}
