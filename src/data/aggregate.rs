use std::collections::BTreeMap;

use super::model::Dataset;
use super::severity::Severity;

// ---------------------------------------------------------------------------
// Chart-input aggregations over a filtered view (row indices)
// ---------------------------------------------------------------------------

/// Case counts per diagnosis, ordered by the full dataset's sorted category
/// order. Categories absent from the view are omitted.
pub fn count_by_category(dataset: &Dataset, rows: &[usize]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &row in rows {
        *counts.entry(dataset.diagnosis(row)).or_default() += 1;
    }
    dataset
        .categories
        .iter()
        .filter_map(|cat| {
            counts
                .get(cat.as_str())
                .map(|&n| (cat.clone(), n))
        })
        .collect()
}

/// Severity × diagnosis counts for the grouped bar chart, ordered by
/// (severity, category). Zero-count combinations are omitted; dense axes
/// are the chart layer's concern.
pub fn severity_by_category(
    dataset: &Dataset,
    rows: &[usize],
    area_idx: usize,
    q1: f64,
    q2: f64,
) -> Vec<((Severity, String), usize)> {
    let mut counts: BTreeMap<(Severity, String), usize> = BTreeMap::new();
    for &row in rows {
        let Some(area) = dataset.number(row, area_idx) else {
            continue;
        };
        let severity = Severity::classify(area, q1, q2);
        *counts
            .entry((severity, dataset.diagnosis(row).to_string()))
            .or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Per-record severity labels for the filtered table, aligned with `rows`.
/// `None` entries are rows whose area cell holds no number.
pub fn severity_labels(
    dataset: &Dataset,
    rows: &[usize],
    area_idx: usize,
    q1: f64,
    q2: f64,
) -> Vec<Option<Severity>> {
    rows.iter()
        .map(|&row| {
            dataset
                .number(row, area_idx)
                .map(|area| Severity::classify(area, q1, q2))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter pairs
// ---------------------------------------------------------------------------

/// One point of the radius-vs-area scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
}

/// (x, y) pairs per record with the diagnosis label as color key. Rows
/// missing either coordinate are skipped.
pub fn scatter_points(
    dataset: &Dataset,
    rows: &[usize],
    x_idx: usize,
    y_idx: usize,
) -> Vec<ScatterPoint> {
    rows.iter()
        .filter_map(|&row| {
            let x = dataset.number(row, x_idx)?;
            let y = dataset.number(row, y_idx)?;
            Some(ScatterPoint {
                x,
                y,
                category: dataset.diagnosis(row).to_string(),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram of one numeric column, counted per diagnosis so
/// the chart can color bars by category.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Inclusive lower edge of the first bin.
    pub start: f64,
    /// Width of every bin.
    pub width: f64,
    /// Per-category bin counts, ordered by the dataset's category order.
    pub series: Vec<(String, Vec<usize>)>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.series.first().map_or(0, |(_, bins)| bins.len())
    }

    /// Center of bin `i`, for bar chart placement.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.width
    }
}

/// Default bin count for the radius histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Bin the column's values over the filtered rows into `bins` equal-width
/// bins spanning the observed min..max. A single-valued column collapses to
/// one bin. Returns `None` when no row has a numeric value.
pub fn histogram(
    dataset: &Dataset,
    rows: &[usize],
    col: usize,
    bins: usize,
) -> Option<Histogram> {
    let values: Vec<(f64, &str)> = rows
        .iter()
        .filter_map(|&row| {
            dataset
                .number(row, col)
                .map(|v| (v, dataset.diagnosis(row)))
        })
        .collect();
    if values.is_empty() || bins == 0 {
        return None;
    }

    let lo = values.iter().map(|(v, _)| *v).fold(f64::INFINITY, f64::min);
    let hi = values
        .iter()
        .map(|(v, _)| *v)
        .fold(f64::NEG_INFINITY, f64::max);

    // Degenerate single-point range: one bin holding everything.
    let (bins, width) = if hi - lo <= f64::EPSILON * lo.abs().max(1.0) {
        (1, 1.0)
    } else {
        (bins, (hi - lo) / bins as f64)
    };

    let mut series: Vec<(String, Vec<usize>)> = dataset
        .categories
        .iter()
        .map(|cat| (cat.clone(), vec![0; bins]))
        .collect();

    for (v, cat) in values {
        let mut bin = ((v - lo) / width) as usize;
        if bin >= bins {
            bin = bins - 1; // the maximum lands in the last bin
        }
        if let Some((_, counts)) = series.iter_mut().find(|(c, _)| c.as_str() == cat) {
            counts[bin] += 1;
        }
    }

    Some(Histogram {
        start: lo,
        width,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;

    fn dataset() -> Dataset {
        load_csv(
            "Diagnosis,Radius,Area\nMalignant,15.0,700.0\nBenign,10.0,300.0\nBenign,20.0,900.0\n"
                .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn counts_follow_sorted_category_order() {
        let ds = dataset();
        let counts = count_by_category(&ds, &[0, 1, 2]);
        assert_eq!(
            counts,
            vec![("Benign".to_string(), 2), ("Malignant".to_string(), 1)]
        );
    }

    #[test]
    fn filtered_scenario_counts_only_benign() {
        let ds = dataset();
        let counts = count_by_category(&ds, &[1, 2]);
        assert_eq!(counts, vec![("Benign".to_string(), 2)]);
    }

    #[test]
    fn severity_groups_by_bucket_then_category() {
        let ds = dataset();
        let grouped = severity_by_category(&ds, &[0, 1, 2], 2, 400.0, 800.0);
        assert_eq!(
            grouped,
            vec![
                ((Severity::Mild, "Benign".to_string()), 1),
                ((Severity::Moderate, "Malignant".to_string()), 1),
                ((Severity::Severe, "Benign".to_string()), 1),
            ]
        );
    }

    #[test]
    fn scatter_pairs_carry_the_color_key() {
        let ds = dataset();
        let pts = scatter_points(&ds, &[1, 2], 1, 2);
        assert_eq!(
            pts,
            vec![
                ScatterPoint { x: 10.0, y: 300.0, category: "Benign".into() },
                ScatterPoint { x: 20.0, y: 900.0, category: "Benign".into() },
            ]
        );
    }

    #[test]
    fn histogram_spans_observed_range() {
        let ds = dataset();
        let h = histogram(&ds, &[0, 1, 2], 1, 20).unwrap();
        assert_eq!(h.start, 10.0);
        assert_eq!(h.width, 0.5);
        assert_eq!(h.bin_count(), 20);
        let benign = &h.series[0];
        assert_eq!(benign.0, "Benign");
        assert_eq!(benign.1[0], 1); // 10.0 in the first bin
        assert_eq!(benign.1[19], 1); // 20.0 (the max) lands in the last bin
        let malignant = &h.series[1];
        assert_eq!(malignant.1[10], 1); // 15.0
    }

    #[test]
    fn histogram_single_value_collapses_to_one_bin() {
        let ds = load_csv("Diagnosis,Radius\nBenign,5.0\nBenign,5.0\n".as_bytes()).unwrap();
        let h = histogram(&ds, &[0, 1], 1, 20).unwrap();
        assert_eq!(h.bin_count(), 1);
        assert_eq!(h.series[0].1[0], 2);
    }

    #[test]
    fn histogram_of_empty_view_is_none() {
        let ds = dataset();
        assert!(histogram(&ds, &[], 1, 20).is_none());
    }
}
