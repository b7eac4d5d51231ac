use super::model::Column;

// ---------------------------------------------------------------------------
// Column resolution heuristics
// ---------------------------------------------------------------------------
//
// Column names are a stable external contract but arrive in more than one
// locale ("Diagnosis" vs "Diagnóstico", "Radius_Mean" vs "Radio_Medio_1"),
// so resolution goes by case-insensitive substring. First match wins;
// declaration order breaks ties.

/// Index of the diagnosis column: first name containing "diagn".
pub fn resolve_diagnosis(columns: &[Column]) -> Option<usize> {
    find_by_substrings(columns, &["diagn"])
}

/// Index of the radius-proxy column used for range filtering: first name
/// containing "radio" or "radius", else the first numeric column that is
/// not the diagnosis column.
pub fn resolve_radius(columns: &[Column], diagnosis_idx: usize) -> Option<usize> {
    find_by_substrings(columns, &["radio", "radius"]).or_else(|| {
        columns
            .iter()
            .enumerate()
            .find(|(i, c)| *i != diagnosis_idx && c.kind.is_numeric())
            .map(|(i, _)| i)
    })
}

/// Index of the area column backing severity classification and the scatter
/// plot. Absence is not an error; those features are skipped.
pub fn resolve_area(columns: &[Column]) -> Option<usize> {
    // "área" covers the Spanish header, whose accented vowel survives
    // lowercasing but never matches the ASCII needle.
    find_by_substrings(columns, &["area", "área"])
}

fn find_by_substrings(columns: &[Column], needles: &[&str]) -> Option<usize> {
    columns.iter().position(|c| {
        let lower = c.name.to_lowercase();
        needles.iter().any(|n| lower.contains(n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ColumnKind;

    fn cols(spec: &[(&str, ColumnKind)]) -> Vec<Column> {
        spec.iter()
            .map(|(name, kind)| Column {
                name: name.to_string(),
                kind: *kind,
            })
            .collect()
    }

    #[test]
    fn diagnosis_matches_both_locales() {
        let c = cols(&[("ID", ColumnKind::Integer), ("Diagnóstico", ColumnKind::Text)]);
        assert_eq!(resolve_diagnosis(&c), Some(1));
        let c = cols(&[("Diagnosis", ColumnKind::Text)]);
        assert_eq!(resolve_diagnosis(&c), Some(0));
    }

    #[test]
    fn radius_prefers_name_match_over_first_numeric() {
        let c = cols(&[
            ("Diagnóstico", ColumnKind::Text),
            ("Edad", ColumnKind::Integer),
            ("Radio_Medio_1", ColumnKind::Float),
        ]);
        assert_eq!(resolve_radius(&c, 0), Some(2));
    }

    #[test]
    fn radius_falls_back_to_first_numeric() {
        let c = cols(&[
            ("Diagnosis", ColumnKind::Text),
            ("Texture", ColumnKind::Float),
            ("Perimeter", ColumnKind::Float),
        ]);
        assert_eq!(resolve_radius(&c, 0), Some(1));
    }

    #[test]
    fn radius_is_none_without_numeric_columns() {
        let c = cols(&[("Diagnosis", ColumnKind::Text), ("Notes", ColumnKind::Text)]);
        assert_eq!(resolve_radius(&c, 0), None);
    }

    #[test]
    fn area_matches_accented_header() {
        let c = cols(&[
            ("Radio_Medio_1", ColumnKind::Float),
            ("Área_Media_1", ColumnKind::Float),
        ]);
        assert_eq!(resolve_area(&c), Some(1));
        let c = cols(&[("Area_Mean", ColumnKind::Float)]);
        assert_eq!(resolve_area(&c), Some(0));
    }

    #[test]
    fn area_absence_is_not_an_error() {
        let c = cols(&[("Radius", ColumnKind::Float)]);
        assert_eq!(resolve_area(&c), None);
    }

    #[test]
    fn first_match_wins_in_declaration_order() {
        let c = cols(&[
            ("Radius_A", ColumnKind::Float),
            ("Radius_B", ColumnKind::Float),
        ]);
        assert_eq!(resolve_radius(&c, usize::MAX), Some(0));
    }
}
