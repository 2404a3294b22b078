//! Post rows and their aggregate engagement counters.
//!
//! Posts are owned by the remote store; this crate only ever holds a cached
//! snapshot. Counter columns may arrive null or (after a desync) negative,
//! so they are clamped to zero at the deserialization boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_count, deserialize_id};

/// A post row as served by the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Row id. The row API serves it as a number or a string depending on
    /// the column type; normalized to a string here.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Author id.
    pub user_id: String,
    /// Post body. Absent for media-only posts.
    #[serde(default)]
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub like_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub comment_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub share_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub save_count: u64,
}

impl Post {
    /// Snapshot of the four aggregate counters.
    pub fn counters(&self) -> PostCounters {
        PostCounters {
            likes: self.like_count,
            comments: self.comment_count,
            shares: self.share_count,
            saves: self.save_count,
        }
    }

    /// Sum of all four counters, the ranking key for top-post lists.
    pub fn total_engagement(&self) -> u64 {
        self.like_count + self.comment_count + self.share_count + self.save_count
    }
}

/// The four aggregate counters kept in lockstep with relation rows.
///
/// Counters are unsigned: decrements saturate at zero, so a desynced remote
/// can never drive a local count negative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCounters {
    #[serde(rename = "like_count", default, deserialize_with = "deserialize_count")]
    pub likes: u64,
    #[serde(
        rename = "comment_count",
        default,
        deserialize_with = "deserialize_count"
    )]
    pub comments: u64,
    #[serde(
        rename = "share_count",
        default,
        deserialize_with = "deserialize_count"
    )]
    pub shares: u64,
    #[serde(rename = "save_count", default, deserialize_with = "deserialize_count")]
    pub saves: u64,
}

impl PostCounters {
    pub fn total(&self) -> u64 {
        self.likes + self.comments + self.shares + self.saves
    }
}
