/// Data layer: core types, loading, aggregation and table ordering.
///
/// Architecture:
/// ```text
///   salaries.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → SalaryDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SalaryDataset │  Vec<Row>, immutable snapshot
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐     year selected
///   │ aggregate  │ ───────────────────▶ title_counts(rows, year)
///   └───────────┘
///        │ year_summaries(rows)
///        ▼
///   ┌──────────┐
///   │   view    │  stable sort + paging for the tables
///   └──────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod loader;
pub mod model;
pub mod view;
