/// Data layer: upload types and CSV ingestion.
///
/// Architecture:
/// ```text
///   uploaded .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  UTF-8 check, header validation, malformed-row skipping
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ IngestOutcome │  Dataset (Vec<Record>) + skipped rows
///   └───────────────┘
/// ```

pub mod loader;
pub mod model;
