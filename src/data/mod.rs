/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  Demographics.csv     Education.csv
///        │                    │
///        └─────────┬──────────┘
///                  ▼
///   ┌────────────────────────┐
///   │ schema + loader        │  map columns, inner join on Town → TownDataset
///   └────────────────────────┘
///                  │
///                  ▼
///   ┌──────────┐
///   │  filter   │  minimum illiteracy rate → filtered indices
///   └──────────┘
///                  │
///                  ▼
///   ┌──────────┐
///   │ summary   │  metrics, family size sums, education means
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod schema;
pub mod summary;

#[cfg(test)]
pub mod fixtures;
