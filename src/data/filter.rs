use std::collections::BTreeSet;

use super::error::InvalidRangeError;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter criteria: selected diagnoses + inclusive radius range
// ---------------------------------------------------------------------------

/// Current filter selections, rebuilt from the UI on every evaluation.
/// Stateless and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Diagnosis labels to keep. An empty set keeps nothing; there is no
    /// implicit "match all".
    pub categories: BTreeSet<String>,
    /// Inclusive lower bound on the radius-proxy column.
    pub min: f64,
    /// Inclusive upper bound on the radius-proxy column.
    pub max: f64,
}

impl FilterCriteria {
    /// Criteria matching everything currently observable: all categories,
    /// full observed range of `radius_idx` (the UI's default state).
    pub fn covering(dataset: &Dataset, radius_idx: usize) -> Self {
        let (min, max) = dataset.column_range(radius_idx).unwrap_or((0.0, 0.0));
        FilterCriteria {
            categories: dataset.categories.clone(),
            min,
            max,
        }
    }

    /// `min == max` is a legal single-point range; `min > max` is not.
    pub fn validate(&self) -> Result<(), InvalidRangeError> {
        if self.min > self.max {
            return Err(InvalidRangeError {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Filter evaluation
// ---------------------------------------------------------------------------

/// Return indices of records passing the criteria, in original row order.
///
/// A record passes when its diagnosis is in the selected set AND its
/// radius-proxy value lies inside the inclusive range. Rows whose radius
/// cell holds no number are excluded. The dataset is never mutated.
pub fn filter(
    dataset: &Dataset,
    radius_idx: usize,
    criteria: &FilterCriteria,
) -> Result<Vec<usize>, InvalidRangeError> {
    criteria.validate()?;

    Ok((0..dataset.len())
        .filter(|&row| {
            if !criteria.categories.contains(dataset.diagnosis(row)) {
                return false;
            }
            match dataset.number(row, radius_idx) {
                Some(v) => criteria.min <= v && v <= criteria.max,
                None => false,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;

    fn dataset() -> Dataset {
        load_csv(
            "Diagnosis,Radius\nMalignant,15.0\nBenign,10.0\nBenign,20.0\n".as_bytes(),
        )
        .unwrap()
    }

    fn criteria(cats: &[&str], min: f64, max: f64) -> FilterCriteria {
        FilterCriteria {
            categories: cats.iter().map(|s| s.to_string()).collect(),
            min,
            max,
        }
    }

    #[test]
    fn selects_matching_rows_in_original_order() {
        let ds = dataset();
        let rows = filter(&ds, 1, &criteria(&["Benign"], 0.0, 25.0)).unwrap();
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn full_coverage_returns_every_row() {
        let ds = dataset();
        let c = FilterCriteria::covering(&ds, 1);
        assert_eq!(c.min, 10.0);
        assert_eq!(c.max, 20.0);
        let rows = filter(&ds, 1, &c).unwrap();
        assert_eq!(rows, vec![0, 1, 2]);
    }

    #[test]
    fn empty_category_set_yields_empty_view() {
        let ds = dataset();
        let rows = filter(&ds, 1, &criteria(&[], 0.0, 25.0)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn bounds_are_inclusive_on_both_sides() {
        let ds = dataset();
        let rows = filter(&ds, 1, &criteria(&["Benign", "Malignant"], 10.0, 15.0)).unwrap();
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn single_point_range_matches_exact_value() {
        let ds = dataset();
        let rows = filter(&ds, 1, &criteria(&["Benign"], 10.0, 10.0)).unwrap();
        assert_eq!(rows, vec![1]);
    }

    #[test]
    fn min_above_max_is_rejected() {
        let ds = dataset();
        let err = filter(&ds, 1, &criteria(&["Benign"], 30.0, 10.0)).unwrap_err();
        assert_eq!(err, InvalidRangeError { min: 30.0, max: 10.0 });
    }
}
