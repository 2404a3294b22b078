//! Viewer and author profile rows.

use serde::{Deserialize, Serialize};

use super::deserialize_count;

/// A profiles row subset: identity plus the denormalized social counters
/// the dashboard aggregates over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    /// Optional display name; rendering falls back to the username.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub follower_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub following_count: u64,
}

impl Profile {
    /// Name used when attributing content to this profile, e.g. in share
    /// titles: the display name when set, otherwise the username.
    pub fn attribution_name(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}
