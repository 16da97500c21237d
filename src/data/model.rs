use indexmap::IndexSet;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Measure – how the chart should treat a row
// ---------------------------------------------------------------------------

/// Row classification taken verbatim from the dataset's `Measure` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Incremental delta on top of the running level.
    Relative,
    /// Running total, plotted from zero.
    Total,
    /// Absolute value, plotted from zero.
    Absolute,
}

impl Measure {
    /// Parse a `Measure` cell. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relative" => Some(Measure::Relative),
            "total" => Some(Measure::Total),
            "absolute" => Some(Measure::Absolute),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row – one record of the forcing table
// ---------------------------------------------------------------------------

/// A single forcing agent and its contribution (W/m²).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub source: String,
    pub measure: Measure,
    pub contribution: f64,
}

impl Row {
    pub fn new(source: impl Into<String>, measure: Measure, contribution: f64) -> Self {
        Self {
            source: source.into(),
            measure,
            contribution,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table plus its category catalog.
///
/// Never mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<Row>,
    /// Distinct `source` labels in first-occurrence order.
    catalog: IndexSet<String>,
}

impl Dataset {
    /// Build the catalog from the rows, keeping row order untouched.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let catalog = rows.iter().map(|r| r.source.clone()).collect();
        Dataset { rows, catalog }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Selectable categories, in the order they first appear in the table.
    pub fn catalog(&self) -> &IndexSet<String> {
        &self.catalog
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_parse_is_case_insensitive() {
        assert_eq!(Measure::parse("relative"), Some(Measure::Relative));
        assert_eq!(Measure::parse(" Total "), Some(Measure::Total));
        assert_eq!(Measure::parse("ABSOLUTE"), Some(Measure::Absolute));
        assert_eq!(Measure::parse("subtotal"), None);
        assert_eq!(Measure::parse(""), None);
    }

    #[test]
    fn catalog_keeps_first_occurrence_order() {
        let ds = Dataset::from_rows(vec![
            Row::new("Methane", Measure::Relative, 0.97),
            Row::new("Carbon Dioxide", Measure::Relative, 1.68),
            Row::new("Methane", Measure::Relative, 0.1),
            Row::new("Net total", Measure::Total, 2.29),
        ]);

        let catalog: Vec<&str> = ds.catalog().iter().map(String::as_str).collect();
        assert_eq!(catalog, ["Methane", "Carbon Dioxide", "Net total"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn empty_dataset_has_empty_catalog() {
        let ds = Dataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.catalog().is_empty());
    }
}
