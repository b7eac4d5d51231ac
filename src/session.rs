use crate::data::aggregate::{
    self, Histogram, ScatterPoint, HISTOGRAM_BINS,
};
use crate::data::columns::{resolve_area, resolve_radius};
use crate::data::error::InvalidRangeError;
use crate::data::filter::{self, FilterCriteria};
use crate::data::model::Dataset;
use crate::data::severity::{self, Severity};

// ---------------------------------------------------------------------------
// Session – one immutable dataset + the current filter selections
// ---------------------------------------------------------------------------

/// Owns the loaded dataset and everything resolved from it once at load
/// time. Only `criteria` changes after construction; every interaction
/// recomputes the whole view from scratch via [`render`].
pub struct Session {
    dataset: Dataset,
    /// Index of the radius-proxy column (guaranteed by the loader).
    radius_idx: usize,
    /// Index of the area column, when one exists.
    area_idx: Option<usize>,
    /// Dataset-wide 33rd/66th area percentiles, computed once at load.
    /// Deliberately NOT recomputed per filtered view.
    thresholds: Option<(f64, f64)>,
    /// Current filter selections, mutated by the UI.
    pub criteria: FilterCriteria,
}

impl Session {
    /// Build a session around a freshly loaded dataset. Default criteria
    /// cover every category and the full observed radius range.
    pub fn new(dataset: Dataset) -> Self {
        // The loader guarantees a numeric column resolves.
        let radius_idx =
            resolve_radius(&dataset.columns, dataset.diagnosis_idx).unwrap_or(0);
        let area_idx = resolve_area(&dataset.columns);
        let thresholds = area_idx.and_then(|col| severity::compute_thresholds(&dataset, col));

        if area_idx.is_none() {
            log::warn!("no area column found; severity and scatter views disabled");
        }

        let criteria = FilterCriteria::covering(&dataset, radius_idx);
        Session {
            dataset,
            radius_idx,
            area_idx,
            thresholds,
            criteria,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn radius_idx(&self) -> usize {
        self.radius_idx
    }

    pub fn radius_column_name(&self) -> &str {
        &self.dataset.columns[self.radius_idx].name
    }

    /// Observed full range of the radius-proxy column (slider bounds).
    pub fn radius_range(&self) -> (f64, f64) {
        self.dataset.column_range(self.radius_idx).unwrap_or((0.0, 0.0))
    }
}

// ---------------------------------------------------------------------------
// ViewModel – everything the rendering layer consumes
// ---------------------------------------------------------------------------

/// Severity-derived outputs, present only when the dataset has a usable
/// area column.
pub struct SeverityView {
    /// Per-row severity aligned with `ViewModel::rows`; `None` entries are
    /// rows with a non-numeric area cell.
    pub labels: Vec<Option<Severity>>,
    /// (severity, diagnosis) → count for the grouped bar chart.
    pub grouped: Vec<((Severity, String), usize)>,
    pub q1: f64,
    pub q2: f64,
}

/// One full recomputation of the dashboard's data, derived from the session
/// without mutating it.
pub struct ViewModel {
    /// Filtered row indices into the dataset, in original order.
    pub rows: Vec<usize>,
    /// Diagnosis → count, in the dataset's sorted category order.
    pub category_counts: Vec<(String, usize)>,
    /// Severity outputs, absent when there is no area column.
    pub severity: Option<SeverityView>,
    /// Radius-vs-area points, absent when there is no area column.
    pub scatter: Option<Vec<ScatterPoint>>,
    /// 20-bin radius histogram split by diagnosis; absent for empty views.
    pub histogram: Option<Histogram>,
}

/// Recompute the filtered view and every derived summary. Pure with respect
/// to the session; rejects invalid ranges without touching prior state.
pub fn render(session: &Session) -> Result<ViewModel, InvalidRangeError> {
    let dataset = &session.dataset;
    let rows = filter::filter(dataset, session.radius_idx, &session.criteria)?;

    let category_counts = aggregate::count_by_category(dataset, &rows);

    let severity = match (session.area_idx, session.thresholds) {
        (Some(col), Some((q1, q2))) => Some(SeverityView {
            labels: aggregate::severity_labels(dataset, &rows, col, q1, q2),
            grouped: aggregate::severity_by_category(dataset, &rows, col, q1, q2),
            q1,
            q2,
        }),
        _ => None,
    };

    let scatter = session
        .area_idx
        .map(|col| aggregate::scatter_points(dataset, &rows, session.radius_idx, col));

    let histogram = aggregate::histogram(dataset, &rows, session.radius_idx, HISTOGRAM_BINS);

    Ok(ViewModel {
        rows,
        category_counts,
        severity,
        scatter,
        histogram,
    })
}
