use std::sync::Arc;

use crate::data::chart::ChartSpec;
use crate::data::filter::{restrict_to_catalog, Selection};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Filter-chart binding
// ---------------------------------------------------------------------------

/// Selection state for one viewer, independent of rendering.
///
/// The dataset is shared read-only; each binding owns its own selection,
/// so several bindings can sit on top of one `Arc<Dataset>`.
pub struct ChartBinding {
    dataset: Arc<Dataset>,

    /// Checked categories, always a subset of the catalog.
    selection: Selection,

    /// Chart for `selection`, rebuilt whenever the selection is replaced.
    spec: ChartSpec,
}

impl ChartBinding {
    /// Start with `defaults ∩ catalog` selected.
    pub fn new<I, S>(dataset: Arc<Dataset>, defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selection = restrict_to_catalog(&dataset, defaults);
        let spec = ChartSpec::build(&dataset, &selection);
        log::debug!(
            "Initial selection: {} of {} categories",
            selection.len(),
            dataset.catalog().len()
        );
        Self {
            dataset,
            selection,
            spec,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selection.contains(label)
    }

    /// Replace the whole selection. Labels outside the catalog are ignored.
    /// The chart spec is rebuilt before this returns.
    pub fn set_selection<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selection = restrict_to_catalog(&self.dataset, labels);
        let spec = ChartSpec::build(&self.dataset, &selection);
        log::debug!(
            "Selection changed: {} categories, {} points",
            selection.len(),
            spec.points.len()
        );
        self.selection = selection;
        self.spec = spec;
    }

    /// Chart for the current selection.
    pub fn current_chart_spec(&self) -> &ChartSpec {
        &self.spec
    }

    /// Flip one checkbox.
    pub fn toggle(&mut self, label: &str) {
        let mut next = self.selection.clone();
        if !next.remove(label) {
            next.insert(label.to_string());
        }
        self.set_selection(next);
    }

    /// Check every category.
    pub fn select_all(&mut self) {
        let dataset = Arc::clone(&self.dataset);
        self.set_selection(dataset.catalog());
    }

    /// Uncheck every category.
    pub fn select_none(&mut self) {
        self.set_selection(Selection::new());
    }
}
