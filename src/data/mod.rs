/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   .csv (or any delimited text)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  --where column<op>value → matching rows, same order
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  --aggregate column=avg|min|max → Option<f64>
///   └───────────┘
/// ```
///
/// Every step returns [`error::QueryError`] on the first inconsistency;
/// deciding what to do with it is left to the caller.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
