//! Per-(post, viewer) engagement state.

use serde::{Deserialize, Serialize};

use crate::models::{Post, PostCounters};

/// Engagement state for one post as seen by one viewer.
///
/// Constructed lazily on first interaction (or pre-fetched for visible
/// posts) and discarded when the viewer navigates away; never persisted
/// across sessions. `counts` is a local cache of the authoritative remote
/// values. `shared` is sticky: no operation reverts it to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementState {
    pub post_id: String,
    /// Acting viewer, `None` when browsing anonymously.
    pub viewer_id: Option<String>,
    pub liked: bool,
    pub bookmarked: bool,
    pub shared: bool,
    pub counts: PostCounters,
}

impl EngagementState {
    /// Seed state from a cached post snapshot: flags down, counts from the
    /// snapshot. Authoritative values are reconciled afterwards.
    pub fn from_post(post: &Post, viewer_id: Option<String>) -> Self {
        Self {
            post_id: post.id.clone(),
            viewer_id,
            liked: false,
            bookmarked: false,
            shared: false,
            counts: post.counters(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.viewer_id.is_none()
    }
}
