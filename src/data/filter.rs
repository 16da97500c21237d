use std::collections::BTreeSet;

use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Selection: which categories are currently checked
// ---------------------------------------------------------------------------

/// Set of checked `source` labels. Always a subset of the dataset catalog
/// once it has passed through [`restrict_to_catalog`].
pub type Selection = BTreeSet<String>;

/// Keep only the labels that exist in the dataset catalog.
///
/// Unknown labels are dropped without complaint; they can only come from a
/// caller that is out of sync with the catalog.
pub fn restrict_to_catalog<I, S>(dataset: &Dataset, labels: I) -> Selection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let catalog = dataset.catalog();
    labels
        .into_iter()
        .filter_map(|label| {
            let label = label.as_ref();
            if catalog.contains(label) {
                Some(label.to_string())
            } else {
                log::debug!("ignoring label outside the catalog: {label:?}");
                None
            }
        })
        .collect()
}

/// Rows whose `source` is selected, in dataset order.
///
/// An empty selection yields an empty view, never "show everything".
pub fn filtered_view<'a>(dataset: &'a Dataset, selection: &Selection) -> Vec<&'a Row> {
    dataset
        .rows()
        .iter()
        .filter(|row| selection.contains(&row.source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Measure;

    fn sample() -> Dataset {
        Dataset::from_rows(vec![
            Row::new("Carbon Dioxide", Measure::Relative, 1.5),
            Row::new("Albedo (Land use)", Measure::Relative, -0.2),
            Row::new("Net total", Measure::Total, 1.3),
        ])
    }

    #[test]
    fn unknown_labels_are_dropped() {
        let ds = sample();
        let sel = restrict_to_catalog(&ds, ["Net total", "Water vapour", ""]);
        assert_eq!(sel, Selection::from(["Net total".to_string()]));
    }

    #[test]
    fn view_preserves_dataset_order() {
        let ds = sample();
        let sel = restrict_to_catalog(&ds, ["Net total", "Carbon Dioxide"]);
        let sources: Vec<&str> = filtered_view(&ds, &sel)
            .iter()
            .map(|r| r.source.as_str())
            .collect();
        assert_eq!(sources, ["Carbon Dioxide", "Net total"]);
    }

    #[test]
    fn empty_selection_gives_empty_view() {
        let ds = sample();
        assert!(filtered_view(&ds, &Selection::new()).is_empty());
    }
}
