//! Frequency aggregation
//!
//! Counts token occurrences and derives a descending-frequency ranking
//! with deterministic tie-breaking.

pub mod table;

pub use table::FrequencyTable;
