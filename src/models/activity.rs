//! Recent-activity rows from the notifications table.
//!
//! Activity kinds form a closed set. There is no catch-all variant: a wire
//! row with an unknown `type` string fails to deserialize instead of being
//! silently folded into a default, and adding a kind forces every match in
//! the crate to handle it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;

/// Kind of an activity/notification row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Like,
    Comment,
    Follow,
    Share,
    System,
}

impl ActivityKind {
    /// Short display label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Like => "Like",
            ActivityKind::Comment => "Comment",
            ActivityKind::Follow => "Follow",
            ActivityKind::Share => "Share",
            ActivityKind::System => "System",
        }
    }

    /// Whether the row was caused by another user acting on the viewer's
    /// content (as opposed to a system announcement).
    pub fn has_actor(&self) -> bool {
        !matches!(self, ActivityKind::System)
    }
}

/// One row of the viewer's recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub actor_id: Option<String>,
}

impl ActivityItem {
    /// Title for display, with the generic fallback for rows that carry none.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Activity"
        } else {
            &self.title
        }
    }

    /// Coarse age of this row relative to `now`, newest bucket first:
    /// "<1m", "12m", "3h", "2d".
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let diff = now.signed_duration_since(self.created_at);

        if diff < chrono::Duration::zero() {
            return "<1m".to_string();
        }

        let minutes = diff.num_minutes();
        let hours = diff.num_hours();
        let days = diff.num_days();

        if days > 0 {
            format!("{}d", days)
        } else if hours > 0 {
            format!("{}h", hours)
        } else if minutes > 0 {
            format!("{}m", minutes)
        } else {
            "<1m".to_string()
        }
    }
}
