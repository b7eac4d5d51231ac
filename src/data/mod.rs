/// Data layer: core types, loading, filtering, and derivation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (schema validated, fail fast)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, columns in file order, read-only
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  diagnosis + radius-range predicates → row indices
///   └──────────┘
///        │
///        ▼
///   severity / aggregate / export  →  chart inputs, CSV bytes
/// ```
pub mod aggregate;
pub mod columns;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod severity;
