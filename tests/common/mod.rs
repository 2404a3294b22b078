//! Common test utilities for integration tests.
//!
//! Provides reusable row fixtures and a pre-seeded mock store so individual
//! tests only state what they care about.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//!
//! let mock = common::seeded_store();
//! let post = common::make_post("post-1", 5);
//! ```

use chrono::{Duration, Utc};

use connectsphere::adapters::mock::MockRowStore;
use connectsphere::models::{ActivityItem, ActivityKind, Post, PostCounters, Profile};

/// Author id used by every fixture.
pub const AUTHOR_ID: &str = "author-1";
/// Viewer id used by every fixture.
pub const VIEWER_ID: &str = "viewer-1";

/// Creates a post with the given like count and small fixed other counters.
pub fn make_post(id: &str, like_count: u64) -> Post {
    Post {
        id: id.to_string(),
        user_id: AUTHOR_ID.to_string(),
        text: Some(format!("body of {}", id)),
        created_at: Utc::now(),
        like_count,
        comment_count: 2,
        share_count: 1,
        save_count: 3,
    }
}

/// Creates counters matching [`make_post`]'s fixed fields.
pub fn make_counters(likes: u64) -> PostCounters {
    PostCounters {
        likes,
        comments: 2,
        shares: 1,
        saves: 3,
    }
}

/// Creates the fixture author profile.
pub fn make_profile(follower_count: u64) -> Profile {
    Profile {
        id: AUTHOR_ID.to_string(),
        username: "casey".to_string(),
        display_name: Some("Casey R".to_string()),
        follower_count,
        following_count: 12,
    }
}

/// Creates an activity row `minutes_ago` minutes in the past.
pub fn make_activity(id: &str, kind: ActivityKind, minutes_ago: i64) -> ActivityItem {
    ActivityItem {
        id: id.to_string(),
        kind,
        title: format!("activity {}", id),
        body: None,
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        actor_id: Some(VIEWER_ID.to_string()),
    }
}

/// Creates a mock store seeded with one post's counters.
pub fn seeded_store() -> MockRowStore {
    let mock = MockRowStore::new();
    mock.set_counters("post-1", make_counters(5));
    mock
}
