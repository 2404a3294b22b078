//! Dashboard overview orchestration.

use crate::analytics::stats::DashboardStats;
use crate::analytics::top_posts::{rank_top_posts, TopPost};
use crate::models::ActivityItem;
use crate::traits::{DashboardReader, StoreError};

/// How many posts the top-posts panel shows.
pub const TOP_POSTS_LIMIT: usize = 5;
/// How many rows the recent-activity panel shows.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Everything the dashboard renders in one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub top_posts: Vec<TopPost>,
    pub recent_activity: Vec<ActivityItem>,
}

/// Fetch and assemble the dashboard for one author.
///
/// The four reads run concurrently. Unlike engagement loading this is
/// all-or-nothing: a dashboard without its profile row has nothing to show,
/// so any failed read propagates.
pub async fn load_overview(
    reader: &dyn DashboardReader,
    user_id: &str,
) -> Result<DashboardOverview, StoreError> {
    let (profile, posts, top, activity) = tokio::join!(
        reader.fetch_profile(user_id),
        reader.fetch_posts_by_author(user_id),
        reader.fetch_top_posts(user_id, TOP_POSTS_LIMIT),
        reader.fetch_recent_activity(user_id, RECENT_ACTIVITY_LIMIT),
    );
    let profile = profile?;
    let posts = posts?;
    let top = top?;
    let activity = activity?;

    Ok(DashboardOverview {
        stats: DashboardStats::compute(&profile, &posts),
        top_posts: rank_top_posts(&top, TOP_POSTS_LIMIT),
        recent_activity: activity,
    })
}
