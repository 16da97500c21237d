use serde::Serialize;

use super::filter::{filtered_view, Selection};
use super::model::{Dataset, Measure, Row};

/// Vertical axis title: radiative forcing is an energy flux per area.
pub const UNIT_LABEL: &str = "W/m²";

// ---------------------------------------------------------------------------
// Chart specification
// ---------------------------------------------------------------------------

/// How a point is drawn in the waterfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Increase,
    Decrease,
    Total,
}

impl Role {
    /// Relative rows split by sign (zero counts as an increase); totals and
    /// absolutes are drawn as totals.
    pub fn of(row: &Row) -> Self {
        match row.measure {
            Measure::Relative if row.contribution < 0.0 => Role::Decrease,
            Measure::Relative => Role::Increase,
            Measure::Total | Measure::Absolute => Role::Total,
        }
    }
}

/// One bar of the waterfall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub category: String,
    pub measure: Measure,
    pub role: Role,
    pub value: f64,
    /// Text shown inside the bar.
    pub label: String,
}

impl ChartPoint {
    fn from_row(row: &Row) -> Self {
        ChartPoint {
            category: row.source.clone(),
            measure: row.measure,
            role: Role::of(row),
            value: row.contribution,
            label: row.contribution.to_string(),
        }
    }
}

/// Everything the renderer needs to draw the chart for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Bars in dataset order, left to right.
    pub points: Vec<ChartPoint>,
    pub y_axis_title: &'static str,
}

impl ChartSpec {
    /// Pure function of `(dataset, selection)`. Values are passed through
    /// as loaded; totals are not recomputed.
    pub fn build(dataset: &Dataset, selection: &Selection) -> Self {
        let points = filtered_view(dataset, selection)
            .into_iter()
            .map(ChartPoint::from_row)
            .collect();

        ChartSpec {
            points,
            y_axis_title: UNIT_LABEL,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::restrict_to_catalog;

    fn sample() -> Dataset {
        Dataset::from_rows(vec![
            Row::new("Carbon Dioxide", Measure::Relative, 1.5),
            Row::new("Albedo (Land use)", Measure::Relative, -0.2),
            Row::new("Net total", Measure::Total, 1.3),
        ])
    }

    #[test]
    fn worked_example() {
        let ds = sample();
        let sel = restrict_to_catalog(&ds, ["Carbon Dioxide", "Net total"]);
        let spec = ChartSpec::build(&ds, &sel);

        assert_eq!(
            spec.points,
            vec![
                ChartPoint {
                    category: "Carbon Dioxide".into(),
                    measure: Measure::Relative,
                    role: Role::Increase,
                    value: 1.5,
                    label: "1.5".into(),
                },
                ChartPoint {
                    category: "Net total".into(),
                    measure: Measure::Total,
                    role: Role::Total,
                    value: 1.3,
                    label: "1.3".into(),
                },
            ]
        );
        assert_eq!(spec.y_axis_title, UNIT_LABEL);
    }

    #[test]
    fn roles_follow_measure_and_sign() {
        assert_eq!(Role::of(&Row::new("a", Measure::Relative, 0.4)), Role::Increase);
        assert_eq!(Role::of(&Row::new("a", Measure::Relative, -0.4)), Role::Decrease);
        assert_eq!(Role::of(&Row::new("a", Measure::Relative, 0.0)), Role::Increase);
        assert_eq!(Role::of(&Row::new("a", Measure::Total, -1.0)), Role::Total);
        assert_eq!(Role::of(&Row::new("a", Measure::Absolute, 2.0)), Role::Total);
    }

    #[test]
    fn negative_labels_keep_their_sign() {
        let ds = sample();
        let sel = restrict_to_catalog(&ds, ["Albedo (Land use)"]);
        let spec = ChartSpec::build(&ds, &sel);
        assert_eq!(spec.points[0].label, "-0.2");
        assert_eq!(spec.points[0].role, Role::Decrease);
    }

    #[test]
    fn totals_are_not_recomputed() {
        let ds = Dataset::from_rows(vec![
            Row::new("A", Measure::Relative, 1.0),
            Row::new("B", Measure::Relative, 1.0),
            Row::new("Net total", Measure::Total, 5.0),
        ]);
        let sel = restrict_to_catalog(&ds, ds.catalog());
        let spec = ChartSpec::build(&ds, &sel);
        assert_eq!(spec.points[2].value, 5.0);
    }

    #[test]
    fn empty_selection_still_has_an_axis_title() {
        let spec = ChartSpec::build(&sample(), &Selection::new());
        assert!(spec.is_empty());
        assert_eq!(spec.y_axis_title, "W/m²");
    }

    #[test]
    fn serializes_roles_in_lowercase() {
        let ds = sample();
        let sel = restrict_to_catalog(&ds, ["Albedo (Land use)"]);
        let json = serde_json::to_value(ChartSpec::build(&ds, &sel)).expect("serializable");
        assert_eq!(json["points"][0]["role"], "decrease");
        assert_eq!(json["points"][0]["measure"], "relative");
        assert_eq!(json["y_axis_title"], "W/m²");
    }
}
