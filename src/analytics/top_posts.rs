//! Ranking for the top-posts dashboard panel.

use crate::models::{Post, PostCounters};

/// One row of the top-posts panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPost {
    pub id: String,
    /// Body preview, truncated for the panel
    pub preview: String,
    pub counts: PostCounters,
    pub total_engagement: u64,
}

impl TopPost {
    fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            preview: preview(post.text.as_deref()),
            counts: post.counters(),
            total_engagement: post.total_engagement(),
        }
    }
}

/// Rank posts by total engagement descending, keeping the first `limit`.
///
/// The input is typically the author's most-liked posts; re-ranking by total
/// engagement lets a heavily-commented post outrank a merely-liked one.
pub fn rank_top_posts(posts: &[Post], limit: usize) -> Vec<TopPost> {
    let mut ranked: Vec<TopPost> = posts.iter().map(TopPost::from_post).collect();
    ranked.sort_by(|a, b| b.total_engagement.cmp(&a.total_engagement));
    ranked.truncate(limit);
    ranked
}

/// Body preview capped at 50 characters, with a "..." suffix when truncated.
/// Posts with no body preview as "Post".
fn preview(text: Option<&str>) -> String {
    let text = text.unwrap_or("");
    if text.is_empty() {
        return "Post".to_string();
    }

    let mut chars = text.chars();
    let head: String = chars.by_ref().take(50).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
