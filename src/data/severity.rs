use std::fmt;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Severity – three-level ordinal bucket over tumor area
// ---------------------------------------------------------------------------

/// Ordinal severity bucket derived from tumor area relative to dataset-wide
/// percentile thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    /// Classify a value against the two thresholds. Strict below `q1`,
    /// strict below `q2`, everything else (including exactly `q2`) Severe.
    pub fn classify(value: f64, q1: f64, q2: f64) -> Severity {
        if value < q1 {
            Severity::Mild
        } else if value < q2 {
            Severity::Moderate
        } else {
            Severity::Severe
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        };
        write!(f, "{label}")
    }
}

// ---------------------------------------------------------------------------
// Quantile thresholds
// ---------------------------------------------------------------------------

/// Linear-interpolation quantile over sorted values (`h = (n-1)p`, the
/// pandas/NumPy default). `sorted` must be non-empty and ascending.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// 33rd/66th percentile thresholds of `col` over the ENTIRE dataset. The
/// thresholds are intentionally global even though severity is only shown
/// for the filtered view. Returns `None` when the column has no numeric
/// values, in which case the severity feature is skipped.
pub fn compute_thresholds(dataset: &Dataset, col: usize) -> Option<(f64, f64)> {
    let mut values: Vec<f64> = (0..dataset.len())
        .filter_map(|row| dataset.number(row, col))
        .collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    Some((quantile(&values, 0.33), quantile(&values, 0.66)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn quantile_interpolates_between_order_statistics() {
        let vals = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        approx(quantile(&vals, 0.33), 3.64);
        approx(quantile(&vals, 0.66), 6.28);
        approx(quantile(&vals, 0.0), 1.0);
        approx(quantile(&vals, 1.0), 9.0);
    }

    #[test]
    fn classify_matches_worked_example() {
        let (q1, q2) = (3.64, 6.28);
        assert_eq!(Severity::classify(3.0, q1, q2), Severity::Mild);
        assert_eq!(Severity::classify(5.0, q1, q2), Severity::Moderate);
        assert_eq!(Severity::classify(9.0, q1, q2), Severity::Severe);
    }

    #[test]
    fn threshold_ties_go_to_the_higher_bucket() {
        assert_eq!(Severity::classify(3.64, 3.64, 6.28), Severity::Moderate);
        assert_eq!(Severity::classify(6.28, 3.64, 6.28), Severity::Severe);
    }

    #[test]
    fn classify_is_monotonic() {
        let (q1, q2) = (2.0, 5.0);
        let mut last = Severity::Mild;
        for i in 0..100 {
            let s = Severity::classify(i as f64 * 0.1, q1, q2);
            assert!(s >= last);
            last = s;
        }
    }

    #[test]
    fn thresholds_are_ordered_and_global() {
        let ds = load_csv(
            "Diagnosis,Area\nBenign,1\nBenign,2\nBenign,3\nMalignant,4\nMalignant,5\nMalignant,6\nMalignant,7\nMalignant,8\nMalignant,9\n"
                .as_bytes(),
        )
        .unwrap();
        let (q1, q2) = compute_thresholds(&ds, 1).unwrap();
        approx(q1, 3.64);
        approx(q2, 6.28);
        assert!(q1 <= q2);
    }

    #[test]
    fn thresholds_unavailable_without_numeric_values() {
        let ds = load_csv("Diagnosis,Radius,Notes\nBenign,1.0,a\nBenign,2.0,b\n".as_bytes())
            .unwrap();
        assert_eq!(compute_thresholds(&ds, 2), None);
    }

    #[test]
    fn single_value_column_collapses_thresholds() {
        let ds = load_csv("Diagnosis,Area\nBenign,5\nBenign,5\n".as_bytes()).unwrap();
        assert_eq!(compute_thresholds(&ds, 1), Some((5.0, 5.0)));
    }
}
