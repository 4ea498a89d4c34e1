/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  Vec<Row>, ordered header
///   └──────────┘
///        │
///        ▼
///    panel projectors / extractors (read-only views)
/// ```
pub mod loader;
pub mod model;
