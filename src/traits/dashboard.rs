//! Read-side contract for the dashboard views.

use async_trait::async_trait;

use crate::models::{ActivityItem, Post, Profile};
use crate::traits::row_store::StoreError;

/// Trait for the remote reads the dashboard aggregates over.
///
/// These are plain row fetches; all aggregation happens client-side in
/// [`crate::analytics`].
#[async_trait]
pub trait DashboardReader: Send + Sync {
    /// Fetch one profile row by user id.
    async fn fetch_profile(&self, user_id: &str) -> Result<Profile, StoreError>;

    /// Fetch all posts authored by a user.
    async fn fetch_posts_by_author(&self, user_id: &str) -> Result<Vec<Post>, StoreError>;

    /// Fetch a user's most-liked posts, the ranking input for the top-posts
    /// panel. Ordered by like count descending, at most `limit`.
    async fn fetch_top_posts(&self, user_id: &str, limit: usize)
        -> Result<Vec<Post>, StoreError>;

    /// Fetch a user's most recent activity rows, newest first, at most
    /// `limit`.
    async fn fetch_recent_activity(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityItem>, StoreError>;
}
