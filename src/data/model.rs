use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. The loader guesses the type per cell;
/// `Ord`/`Hash` are implemented manually so values can live in `BTreeSet`s.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                Text(_) => 3,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::Text(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            // Shortest round-trip form so exported values keep their precision.
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for range filtering and plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Column / Record
// ---------------------------------------------------------------------------

/// Declared type of a column, inferred from its cells at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

/// A named column of the schema, in original file order.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// A single case (one row of the source table). Cells are positionally
/// aligned with the dataset's schema. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Record {
    pub cells: Vec<CellValue>,
}

impl Record {
    pub fn cell(&self, idx: usize) -> &CellValue {
        &self.cells[idx]
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with the resolved diagnosis column and the sorted
/// set of diagnosis categories. Read-only after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Schema in original file order (preserved for display and export).
    pub columns: Vec<Column>,
    /// All cases (rows).
    pub records: Vec<Record>,
    /// Index of the diagnosis column.
    pub diagnosis_idx: usize,
    /// Sorted unique diagnosis labels; this ordering is the canonical one
    /// for aggregation output.
    pub categories: BTreeSet<String>,
}

impl Dataset {
    /// Number of cases.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The diagnosis label of a row, or `""` for a non-text cell.
    pub fn diagnosis(&self, row: usize) -> &str {
        match self.records[row].cell(self.diagnosis_idx) {
            CellValue::Text(s) => s,
            _ => "",
        }
    }

    /// Numeric value of `col` in `row`, if the cell holds one.
    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        self.records[row].cell(col).as_f64()
    }

    /// Observed min/max of a numeric column, ignoring non-numeric cells.
    pub fn column_range(&self, col: usize) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for row in 0..self.len() {
            if let Some(v) = self.number(row, col) {
                range = Some(match range {
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    None => (v, v),
                });
            }
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ordering_is_total_over_floats() {
        let mut vals = vec![
            CellValue::Float(2.0),
            CellValue::Float(f64::NAN),
            CellValue::Float(1.0),
        ];
        vals.sort();
        assert_eq!(vals[0], CellValue::Float(1.0));
        assert_eq!(vals[1], CellValue::Float(2.0));
    }

    #[test]
    fn float_display_round_trips() {
        let v = CellValue::Float(17.99);
        assert_eq!(v.to_string(), "17.99");
        assert_eq!(v.to_string().parse::<f64>().unwrap(), 17.99);
    }

    #[test]
    fn as_f64_covers_both_numeric_kinds() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Float(3.5).as_f64(), Some(3.5));
        assert_eq!(CellValue::Text("3".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }
}
