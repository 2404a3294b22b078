//! Mock adapter implementations for testing.
//!
//! These adapters implement the core traits with configurable in-memory
//! behavior, allowing tests to run without network access.

pub mod row_store;

pub use row_store::{MockRowStore, RecordedCall};
