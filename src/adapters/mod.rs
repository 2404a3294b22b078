//! Adapter implementations of the core traits.
//!
//! Adapters are the only code that touches the outside world. The
//! production adapter speaks the row API over HTTP; the mock adapter backs
//! tests with in-memory maps.

pub mod mock;
pub mod postgrest;

pub use postgrest::{PostgrestStore, StoreConfig};
