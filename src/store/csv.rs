//! CSV-backed result store.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::Record;
use crate::space::Assignment;
use crate::store::ResultStore;

/// A result store backed by a single CSV file.
///
/// Each row is one [`Record`]. Columns are the union of parameter names
/// seen across the history (sorted), followed by `error` and `info`.
/// Cells hold compact JSON so that structured candidate values and the
/// auxiliary `info` payload survive the round trip exactly — a string
/// `"10"` reads back as a string, not a number.
///
/// [`write_all`](ResultStore::write_all) replaces the whole file;
/// [`read_all`](ResultStore::read_all) returns an empty history if the
/// file does not exist yet.
///
/// # Examples
///
/// ```no_run
/// use paramsweep::store::CsvStore;
///
/// let store = CsvStore::new("reports/hpo_results.csv");
/// ```
#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Creates a store that writes to the given path.
    ///
    /// The file does not need to exist yet; parent directories are
    /// created on the first write.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path the store writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultStore for CsvStore {
    fn write_all(&self, records: &[Record]) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::Storage(e.to_string()))?;
            }
        }
        let contents = render_csv(records)?;
        std::fs::write(&self.path, contents).map_err(|e| Error::Storage(e.to_string()))?;
        Ok(self.path.clone())
    }

    fn read_all(&self) -> Result<Vec<Record>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Storage(e.to_string())),
        };
        parse_csv(&contents)
    }
}

/// Render records as CSV text with JSON-encoded cells.
fn render_csv(records: &[Record]) -> Result<String> {
    use core::fmt::Write as _;

    // Union of parameter names across the history, sorted for a
    // deterministic column order.
    let mut param_names: BTreeSet<&str> = BTreeSet::new();
    for record in records {
        for name in record.params.keys() {
            param_names.insert(name);
        }
    }

    let mut out = String::new();
    for name in &param_names {
        let _ = write!(out, "{},", csv_escape(name));
    }
    out.push_str("error,info\n");

    for record in records {
        for name in &param_names {
            if let Some(value) = record.params.get(*name) {
                let cell = serde_json::to_string(value)
                    .map_err(|e| Error::Storage(e.to_string()))?;
                let _ = write!(out, "{}", csv_escape(&cell));
            }
            out.push(',');
        }
        let info_cell =
            serde_json::to_string(&record.info).map_err(|e| Error::Storage(e.to_string()))?;
        let _ = write!(out, "{},{}", record.error, csv_escape(&info_cell));
        out.push('\n');
    }

    Ok(out)
}

/// Parse CSV text produced by [`render_csv`] back into records.
fn parse_csv(contents: &str) -> Result<Vec<Record>> {
    let mut rows = split_rows(contents).into_iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    // The last two columns are always `error` and `info`.
    if header.len() < 2 {
        return Err(Error::Storage("malformed CSV header".to_string()));
    }
    let n_params = header.len() - 2;
    let param_names = &header[..n_params];

    let mut records = Vec::new();
    for row in rows {
        if row.len() != header.len() {
            return Err(Error::Storage(format!(
                "CSV row has {} cells, expected {}",
                row.len(),
                header.len()
            )));
        }

        let mut params = Assignment::new();
        for (name, cell) in param_names.iter().zip(&row) {
            if cell.is_empty() {
                continue;
            }
            let value: Value = serde_json::from_str(cell)
                .map_err(|e| Error::Storage(format!("bad cell for '{name}': {e}")))?;
            params.insert(name.clone(), value);
        }

        let error: f64 = row[n_params]
            .parse()
            .map_err(|e| Error::Storage(format!("bad error cell: {e}")))?;
        let info: Value = serde_json::from_str(&row[n_params + 1])
            .map_err(|e| Error::Storage(format!("bad info cell: {e}")))?;

        records.push(Record::new(params, error, info));
    }

    Ok(records)
}

/// Split CSV text into rows of unescaped cells.
///
/// Handles RFC 4180 quoting: quoted cells may contain commas, doubled
/// quotes, and newlines.
fn split_rows(contents: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = contents.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(core::mem::take(&mut cell)),
                '\n' => {
                    row.push(core::mem::take(&mut cell));
                    rows.push(core::mem::take(&mut row));
                }
                '\r' => {}
                _ => cell.push(c),
            }
        }
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}

/// Escape a string for CSV output. If the value contains a comma, quote,
/// or newline, wrap it in double-quotes and double any embedded quotes.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(x: Value, error: f64, info: Value) -> Record {
        Record::new([("x".to_string(), x)].into(), error, info)
    }

    fn temp_store(name: &str) -> CsvStore {
        CsvStore::new(std::env::temp_dir().join(name))
    }

    #[test]
    fn test_read_after_write_is_identical() {
        let store = temp_store("paramsweep_csv_round_trip.csv");
        let records = vec![
            record(json!(0.5), 1.25, json!({"epoch": 3})),
            record(json!("relu"), 0.75, json!(null)),
            record(json!([1, 2, 3]), 0.5, json!("converged")),
        ];

        store.write_all(&records).unwrap();
        assert_eq!(store.read_all().unwrap(), records);
    }

    #[test]
    fn test_write_all_is_idempotent() {
        let store = temp_store("paramsweep_csv_idempotent.csv");
        let records = vec![record(json!(1), 2.0, Value::Null)];

        store.write_all(&records).unwrap();
        store.write_all(&records).unwrap();
        assert_eq!(store.read_all().unwrap(), records);
    }

    #[test]
    fn test_string_and_number_cells_stay_distinct() {
        let store = temp_store("paramsweep_csv_typed.csv");
        let records = vec![record(json!("10"), 0.0, Value::Null), record(json!(10), 0.0, Value::Null)];

        store.write_all(&records).unwrap();
        let restored = store.read_all().unwrap();
        assert_eq!(restored[0].params["x"], json!("10"));
        assert_eq!(restored[1].params["x"], json!(10));
    }

    #[test]
    fn test_cells_with_commas_quotes_and_newlines() {
        let store = temp_store("paramsweep_csv_escaping.csv");
        let records = vec![record(
            json!("a,b \"quoted\"\nline two"),
            0.5,
            json!({"msg": "x,y"}),
        )];

        store.write_all(&records).unwrap();
        assert_eq!(store.read_all().unwrap(), records);
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = temp_store("paramsweep_csv_never_written.csv");
        let _ = std::fs::remove_file(store.path());
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_empty_history_round_trips() {
        let store = temp_store("paramsweep_csv_empty.csv");
        store.write_all(&[]).unwrap();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let store = temp_store("paramsweep_csv_order.csv");
        let records: Vec<Record> = (0..20)
            .map(|i| record(json!(i), f64::from(100 - i), Value::Null))
            .collect();

        store.write_all(&records).unwrap();
        let restored = store.read_all().unwrap();
        let xs: Vec<i64> = restored
            .iter()
            .map(|r| r.params["x"].as_i64().unwrap())
            .collect();
        assert_eq!(xs, (0..20).collect::<Vec<i64>>());
    }

    #[test]
    fn test_heterogeneous_param_sets_union_columns() {
        let store = temp_store("paramsweep_csv_union.csv");
        let records = vec![
            Record::new([("a".to_string(), json!(1))].into(), 0.1, Value::Null),
            Record::new([("b".to_string(), json!(2))].into(), 0.2, Value::Null),
        ];

        store.write_all(&records).unwrap();
        let restored = store.read_all().unwrap();
        assert_eq!(restored, records);
        assert!(!restored[0].params.contains_key("b"));
    }

    #[test]
    fn test_csv_escape_plain_string_unchanged() {
        assert_eq!(csv_escape("plain"), "plain");
    }

    #[test]
    fn test_csv_escape_quotes_doubled() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
