/// Data layer: core types, loading, filtering and chart derivation.
///
/// Architecture:
/// ```text
///  rfdata.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Row>, category catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  Selection → ordered subsequence of rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  chart    │  rows → ChartSpec (waterfall points)
///   └──────────┘
/// ```

pub mod chart;
pub mod filter;
pub mod loader;
pub mod model;
