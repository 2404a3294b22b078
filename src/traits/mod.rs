//! Trait abstractions for the remote store seams.
//!
//! Engagement writes and dashboard reads go through these traits so the core
//! can run against the production row API or an in-memory double.
//!
//! # Traits
//!
//! - [`RowStore`] - engagement relation rows and post counters
//! - [`DashboardReader`] - read models for the dashboard (profile, posts, activity)

pub mod dashboard;
pub mod row_store;

pub use dashboard::DashboardReader;
pub use row_store::{RelationKind, RowStore, StoreError};
