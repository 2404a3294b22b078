//! Share payload assembly and outbound share URLs.
//!
//! Sharing itself happens outside this crate (a browser window, a mail
//! client); this module only builds the payload and the target URLs.
//! Completing a share is what gates the caller's
//! [`crate::engagement::EngagementStore::record_share`] call.

use crate::models::{Post, Profile};

/// The three pieces every share target works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContent {
    /// Canonical post URL; also what a copy-link action copies
    pub url: String,
    /// Post body, or a stock line for posts without one
    pub text: String,
    /// Attribution line, e.g. `Post by casey`
    pub title: String,
}

impl ShareContent {
    /// Assemble the share payload for a post.
    ///
    /// `origin` is the site origin without a trailing slash, e.g.
    /// `https://connectsphere.example`.
    pub fn for_post(origin: &str, post: &Post, author: &Profile) -> Self {
        let text = match post.text.as_deref() {
            Some(body) if !body.is_empty() => body.to_string(),
            _ => "Check out this post!".to_string(),
        };

        Self {
            url: format!("{}/post/{}", origin, post.id),
            text,
            title: format!("Post by {}", author.attribution_name()),
        }
    }
}

/// Outbound share targets that are plain URL builders.
///
/// Native share and copy-to-clipboard are platform capabilities, not URLs,
/// so they stay with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareTarget {
    Twitter,
    Facebook,
    LinkedIn,
    Email,
}

impl ShareTarget {
    /// Every target, in display order.
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::LinkedIn,
        ShareTarget::Email,
    ];

    /// Display label for the share menu.
    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::LinkedIn => "LinkedIn",
            ShareTarget::Email => "Email",
        }
    }

    /// Build the URL that opens this target primed with `content`.
    ///
    /// Every interpolated piece is percent-encoded.
    pub fn share_url(&self, content: &ShareContent) -> String {
        match self {
            ShareTarget::Twitter => format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                urlencoding::encode(&content.url),
                urlencoding::encode(&format!("{} - {}", content.text, content.title)),
            ),
            ShareTarget::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                urlencoding::encode(&content.url),
            ),
            ShareTarget::LinkedIn => format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                urlencoding::encode(&content.url),
            ),
            ShareTarget::Email => format!(
                "mailto:?subject={}&body={}",
                urlencoding::encode(&format!("Check out this post: {}", content.title)),
                urlencoding::encode(&format!("{}\n\n{}", content.text, content.url)),
            ),
        }
    }
}
