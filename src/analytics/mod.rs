//! Pure aggregations for the creator dashboard.
//!
//! Everything here computes over rows already fetched through
//! [`crate::traits::DashboardReader`]; there is no server-side pipeline.
//! [`load_overview`] is the one async entry point, fanning out the reads
//! and assembling the panels.

pub mod overview;
pub mod stats;
pub mod top_posts;

pub use overview::{load_overview, DashboardOverview, RECENT_ACTIVITY_LIMIT, TOP_POSTS_LIMIT};
pub use stats::{format_count, DashboardStats};
pub use top_posts::{rank_top_posts, TopPost};
