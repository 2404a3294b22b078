//! Aggregate statistics for the creator dashboard.

use crate::models::{Post, Profile};

// ============================================================================
// DashboardStats
// ============================================================================

/// Totals shown in the dashboard stat cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub followers: u64,
    pub following: u64,
    pub total_posts: u64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
    pub total_saves: u64,
    /// Likes + comments + shares per follower, as a percentage rounded to
    /// one decimal. `0.0` when the author has no followers.
    pub engagement_rate: f64,
}

impl DashboardStats {
    /// Compute totals over an author's profile and fetched posts.
    pub fn compute(profile: &Profile, posts: &[Post]) -> Self {
        let mut total_likes = 0u64;
        let mut total_comments = 0u64;
        let mut total_shares = 0u64;
        let mut total_saves = 0u64;

        for post in posts {
            total_likes += post.like_count;
            total_comments += post.comment_count;
            total_shares += post.share_count;
            total_saves += post.save_count;
        }

        let engagement_rate = if profile.follower_count == 0 {
            0.0
        } else {
            let interactions = (total_likes + total_comments + total_shares) as f64;
            let rate = interactions / profile.follower_count as f64 * 100.0;
            (rate * 10.0).round() / 10.0
        };

        Self {
            followers: profile.follower_count,
            following: profile.following_count,
            total_posts: posts.len() as u64,
            total_likes,
            total_comments,
            total_shares,
            total_saves,
            engagement_rate,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Format a counter for compact display.
///
/// Returns formats like: "999", "1.5K", "2.3M"
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
