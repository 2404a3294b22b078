//! Remote row-store contract for engagement relations.
//!
//! A relation is one row recording that one viewer performed one engagement
//! action on one post. Any networked data store that can check, create, and
//! delete such rows and serve post counters satisfies this contract.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::PostCounters;

/// The engagement relation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Like,
    Bookmark,
    Share,
}

impl RelationKind {
    /// Remote table holding rows of this kind.
    pub fn table(&self) -> &'static str {
        match self {
            RelationKind::Like => "likes",
            RelationKind::Bookmark => "bookmarks",
            RelationKind::Share => "shares",
        }
    }
}

/// Errors surfaced by row-store implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store rejected a create because the row already exists. The
    /// per-(post, viewer) uniqueness constraint is the store's, not ours.
    #[error("relation already exists")]
    Conflict,
    /// The store could not be reached or answered outside its contract.
    #[error("remote store unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict)
    }
}

/// Trait for the remote engagement row-store.
///
/// Implementations include the production PostgREST-backed store and the
/// in-memory mock used in tests. All operations are keyed by
/// `(table, post_id, viewer_id)`; existence is boolean, never counted.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Check whether a relation row exists for `(post_id, viewer_id)`.
    async fn exists_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<bool, StoreError>;

    /// Create the relation row for `(post_id, viewer_id)`.
    ///
    /// # Returns
    /// `Err(StoreError::Conflict)` when the row already exists.
    async fn create_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<(), StoreError>;

    /// Delete the relation row for `(post_id, viewer_id)`. Deleting a row
    /// that does not exist is a success.
    async fn delete_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<(), StoreError>;

    /// Fetch the authoritative aggregate counters for a post.
    async fn get_post_counters(&self, post_id: &str) -> Result<PostCounters, StoreError>;
}
