use std::path::Path;

use crate::color::ColorMap;
use crate::data::loader;
use crate::data::model::Dataset;
use crate::session::{render, Session, ViewModel};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Active session (None until a file is loaded).
    pub session: Option<Session>,

    /// Last successfully rendered view. Kept as-is when a criteria change
    /// is rejected, so the user never loses a valid view.
    pub view: Option<ViewModel>,

    /// Diagnosis → colour mapping for the loaded dataset.
    pub color_map: Option<ColorMap>,

    /// Scratch values for the min/max range widgets; only committed into
    /// the session's criteria when they validate.
    pub range_input: (f64, f64),

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            view: None,
            color_map: None,
            range_input: (0.0, 0.0),
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a dataset file and replace the session. On failure the previous
    /// session (if any) is kept and the error is surfaced.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} cases, {} columns, categories {:?}",
                    dataset.len(),
                    dataset.columns.len(),
                    dataset.categories
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset; criteria default to full coverage.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.color_map = Some(ColorMap::new(&dataset.categories));
        let session = Session::new(dataset);
        self.range_input = session.radius_range();
        self.view = render(&session).ok();
        self.session = Some(session);
        self.status_message = None;
    }

    /// Recompute the view after a criteria change. An invalid range leaves
    /// the previous view and criteria-backed widgets untouched.
    pub fn refresh(&mut self) {
        let Some(session) = &mut self.session else {
            return;
        };

        let (min, max) = self.range_input;
        let previous = (session.criteria.min, session.criteria.max);
        session.criteria.min = min;
        session.criteria.max = max;

        match render(session) {
            Ok(view) => {
                self.view = Some(view);
                self.status_message = None;
            }
            Err(e) => {
                (session.criteria.min, session.criteria.max) = previous;
                self.range_input = previous;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Toggle one diagnosis label in the category selection.
    pub fn toggle_category(&mut self, label: &str) {
        if let Some(session) = &mut self.session {
            if !session.criteria.categories.remove(label) {
                session.criteria.categories.insert(label.to_string());
            }
        }
        self.refresh();
    }

    /// Select every category present in the dataset.
    pub fn select_all_categories(&mut self) {
        if let Some(session) = &mut self.session {
            session.criteria.categories = session.dataset().categories.clone();
        }
        self.refresh();
    }

    /// Clear the category selection (hides every row).
    pub fn select_no_categories(&mut self) {
        if let Some(session) = &mut self.session {
            session.criteria.categories.clear();
        }
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_csv;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        let ds = load_csv(
            "Diagnosis,Radius\nMalignant,15.0\nBenign,10.0\nBenign,20.0\n".as_bytes(),
        )
        .unwrap();
        state.set_dataset(ds);
        state
    }

    #[test]
    fn loading_defaults_to_the_full_view() {
        let state = loaded_state();
        assert_eq!(state.range_input, (10.0, 20.0));
        assert_eq!(state.view.as_ref().unwrap().rows, vec![0, 1, 2]);
    }

    #[test]
    fn invalid_range_keeps_the_prior_view_and_criteria() {
        let mut state = loaded_state();
        state.range_input = (30.0, 10.0);
        state.refresh();

        assert!(state.status_message.is_some());
        assert_eq!(state.range_input, (10.0, 20.0));
        assert_eq!(state.view.as_ref().unwrap().rows, vec![0, 1, 2]);
    }

    #[test]
    fn toggling_a_category_refilters() {
        let mut state = loaded_state();
        state.toggle_category("Malignant");
        assert_eq!(state.view.as_ref().unwrap().rows, vec![1, 2]);
        state.toggle_category("Malignant");
        assert_eq!(state.view.as_ref().unwrap().rows, vec![0, 1, 2]);
    }

    #[test]
    fn deselecting_everything_empties_the_view() {
        let mut state = loaded_state();
        state.select_no_categories();
        assert!(state.view.as_ref().unwrap().rows.is_empty());
        state.select_all_categories();
        assert_eq!(state.view.as_ref().unwrap().rows.len(), 3);
    }
}
