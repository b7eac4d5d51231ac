use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::columns::{resolve_diagnosis, resolve_radius};
use super::error::LoadError;
use super::model::{CellValue, Column, ColumnKind, Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a diagnostic dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – delimited text with a header row (the primary format)
/// * `.json` – `[{ "Diagnosis": "...", "Radius_Mean": 14.2, ... }, ...]`
///
/// Any failure is fatal: no partial dataset is ever returned.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match ext.as_str() {
        "csv" => load_csv(bytes.as_slice()),
        "json" => load_json(bytes.as_slice()),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a CSV table from any reader. Header row gives the schema; every
/// cell's type is guessed individually, and column kinds are inferred from
/// the cells afterwards.
pub fn load_csv<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let cells = row.iter().map(guess_cell_type).collect();
        records.push(Record { cells });
    }

    build_dataset(headers, records)
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
/// a top-level array of flat objects sharing the same keys. The schema is
/// the key order of the first record.
pub fn load_json<R: Read>(mut reader: R) -> Result<Dataset, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|source| LoadError::Read {
        path: "<json>".into(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root.as_array().ok_or(LoadError::JsonShape)?;
    let first = match rows.first() {
        Some(JsonValue::Object(obj)) => obj,
        Some(_) => return Err(LoadError::JsonShape),
        None => return Err(LoadError::EmptyTable),
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let obj = row.as_object().ok_or(LoadError::JsonShape)?;
        let cells = headers
            .iter()
            .map(|h| json_to_cell(obj.get(h).unwrap_or(&JsonValue::Null)))
            .collect();
        records.push(Record { cells });
    }

    build_dataset(headers, records)
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::Text(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::Text(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Text(b.to_string()),
        JsonValue::Null => CellValue::Null,
        other => CellValue::Text(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Dataset assembly + schema validation
// ---------------------------------------------------------------------------

/// Infer column kinds, resolve the required columns, and fail fast when the
/// schema cannot support the dashboard.
fn build_dataset(headers: Vec<String>, records: Vec<Record>) -> Result<Dataset, LoadError> {
    if records.is_empty() || headers.is_empty() {
        return Err(LoadError::EmptyTable);
    }

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| Column {
            name: name.clone(),
            kind: infer_column_kind(&records, idx),
        })
        .collect();

    let diagnosis_idx = resolve_diagnosis(&columns)
        .ok_or_else(|| LoadError::MissingDiagnosisColumn(headers.clone()))?;

    // Required at load so the session fails fast, not at first filter.
    if resolve_radius(&columns, diagnosis_idx).is_none() {
        return Err(LoadError::NoNumericColumn);
    }

    let categories: BTreeSet<String> = records
        .iter()
        .filter_map(|r| match r.cell(diagnosis_idx) {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Null => None,
            other => Some(other.to_string()),
        })
        .collect();

    Ok(Dataset {
        columns,
        records,
        diagnosis_idx,
        categories,
    })
}

/// A column is numeric when every non-null cell is numeric and at least one
/// cell is non-null; integer-only columns stay `Integer`.
fn infer_column_kind(records: &[Record], idx: usize) -> ColumnKind {
    let mut seen_number = false;
    let mut seen_float = false;
    for record in records {
        match record.cell(idx) {
            CellValue::Integer(_) => seen_number = true,
            CellValue::Float(_) => {
                seen_number = true;
                seen_float = true;
            }
            CellValue::Null => {}
            CellValue::Text(_) => return ColumnKind::Text,
        }
    }
    match (seen_number, seen_float) {
        (true, true) => ColumnKind::Float,
        (true, false) => ColumnKind::Integer,
        (false, _) => ColumnKind::Text,
    }
}
