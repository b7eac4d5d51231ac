use super::model::Dataset;

/// Suggested filename for the exported filtered view.
pub const EXPORT_FILENAME: &str = "filtered_cases.csv";

/// Serialize the filtered view to CSV bytes: header row in the dataset's
/// original column order, standard quoting, floats in shortest round-trip
/// form, nulls as empty fields. Re-loading the output yields value-equal
/// records.
pub fn to_csv_bytes(dataset: &Dataset, rows: &[usize]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(dataset.columns.iter().map(|c| c.name.as_str()))?;
    for &row in rows {
        writer.write_record(
            dataset.records[row]
                .cells
                .iter()
                .map(|cell| cell.to_string()),
        )?;
    }

    writer
        .into_inner()
        .map_err(|e| e.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;

    const SOURCE: &str = "\
Diagnosis,Radius,Area,Notes
Malignant,17.99,1001.5,\"needs follow-up, urgent\"
Benign,13.54,566.3,
Benign,12.45,477.1,ok
";

    #[test]
    fn header_keeps_original_column_order() {
        let ds = load_csv(SOURCE.as_bytes()).unwrap();
        let bytes = to_csv_bytes(&ds, &[0]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Diagnosis,Radius,Area,Notes\n"));
    }

    #[test]
    fn fields_containing_the_delimiter_are_quoted() {
        let ds = load_csv(SOURCE.as_bytes()).unwrap();
        let text = String::from_utf8(to_csv_bytes(&ds, &[0]).unwrap()).unwrap();
        assert!(text.contains("\"needs follow-up, urgent\""));
    }

    #[test]
    fn round_trip_yields_value_equal_records() {
        let ds = load_csv(SOURCE.as_bytes()).unwrap();
        let all: Vec<usize> = (0..ds.len()).collect();
        let bytes = to_csv_bytes(&ds, &all).unwrap();
        let reloaded = load_csv(bytes.as_slice()).unwrap();

        assert_eq!(reloaded.len(), ds.len());
        for (a, b) in ds.records.iter().zip(reloaded.records.iter()) {
            assert_eq!(a.cells, b.cells);
        }
    }

    #[test]
    fn exports_only_the_given_rows_in_order() {
        let ds = load_csv(SOURCE.as_bytes()).unwrap();
        let bytes = to_csv_bytes(&ds, &[1, 2]).unwrap();
        let reloaded = load_csv(bytes.as_slice()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.diagnosis(0), "Benign");
        assert_eq!(reloaded.number(0, 1), Some(13.54));
        assert_eq!(reloaded.number(1, 1), Some(12.45));
    }
}
