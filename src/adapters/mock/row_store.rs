//! Mock row store for testing.
//!
//! Provides an in-memory [`RowStore`] and [`DashboardReader`] backed by
//! hash maps. Relation uniqueness is enforced the same way the remote
//! store enforces it: creating a row that already exists fails with
//! [`StoreError::Conflict`]. Calls are recorded for verification and any
//! operation can be made to fail.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::models::{ActivityItem, Post, PostCounters, Profile};
use crate::traits::{DashboardReader, RelationKind, RowStore, StoreError};

/// A recorded store call for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Operation name ("exists_relation", "create_relation", ...)
    pub op: String,
    /// Relation table, for relation operations
    pub table: Option<String>,
    /// Post id, for post-keyed operations
    pub post_id: Option<String>,
    /// Viewer or author id
    pub user_id: Option<String>,
}

/// Mock row store for testing.
///
/// Clones share the same underlying state, so a test can hand one clone to
/// the code under test and keep another for seeding and inspection.
///
/// # Example
///
/// ```ignore
/// use connectsphere::adapters::mock::MockRowStore;
/// use connectsphere::traits::{RelationKind, RowStore};
///
/// let store = MockRowStore::new();
/// store.set_relation(RelationKind::Like, "post-1", "viewer-1");
///
/// let exists = store
///     .exists_relation(RelationKind::Like, "post-1", "viewer-1")
///     .await?;
/// assert!(exists);
///
/// let calls = store.get_calls();
/// assert_eq!(calls[0].op, "exists_relation");
/// ```
#[derive(Debug, Clone)]
pub struct MockRowStore {
    /// Relation rows keyed by (table kind, post id, viewer id)
    relations: Arc<Mutex<HashSet<(RelationKind, String, String)>>>,
    /// Counters by post id; missing posts read as all-zero
    counters: Arc<Mutex<HashMap<String, PostCounters>>>,
    /// Profiles by user id
    profiles: Arc<Mutex<HashMap<String, Profile>>>,
    /// Posts by author id
    posts: Arc<Mutex<HashMap<String, Vec<Post>>>>,
    /// Activity rows by user id, newest first
    activity: Arc<Mutex<HashMap<String, Vec<ActivityItem>>>>,
    /// When set, every operation fails with a clone of this error
    failure: Arc<Mutex<Option<StoreError>>>,
    /// When set, `create_relation` fails with `Conflict` regardless of state
    create_conflicts: Arc<Mutex<bool>>,
    /// Recorded calls for verification
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockRowStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self {
            relations: Arc::new(Mutex::new(HashSet::new())),
            counters: Arc::new(Mutex::new(HashMap::new())),
            profiles: Arc::new(Mutex::new(HashMap::new())),
            posts: Arc::new(Mutex::new(HashMap::new())),
            activity: Arc::new(Mutex::new(HashMap::new())),
            failure: Arc::new(Mutex::new(None)),
            create_conflicts: Arc::new(Mutex::new(false)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed the counters returned for a post.
    pub fn set_counters(&self, post_id: &str, counters: PostCounters) {
        self.counters
            .lock()
            .unwrap()
            .insert(post_id.to_string(), counters);
    }

    /// Seed a relation row directly, bypassing `create_relation`.
    pub fn set_relation(&self, kind: RelationKind, post_id: &str, viewer_id: &str) {
        self.relations
            .lock()
            .unwrap()
            .insert((kind, post_id.to_string(), viewer_id.to_string()));
    }

    /// Check whether a relation row is present, without recording a call.
    pub fn relation_exists(&self, kind: RelationKind, post_id: &str, viewer_id: &str) -> bool {
        self.relations.lock().unwrap().contains(&(
            kind,
            post_id.to_string(),
            viewer_id.to_string(),
        ))
    }

    /// Seed the profile returned for a user.
    pub fn set_profile(&self, profile: Profile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id.clone(), profile);
    }

    /// Seed the posts returned for an author.
    pub fn set_posts(&self, author_id: &str, posts: Vec<Post>) {
        self.posts
            .lock()
            .unwrap()
            .insert(author_id.to_string(), posts);
    }

    /// Seed the activity rows returned for a user, newest first.
    pub fn set_activity(&self, user_id: &str, items: Vec<ActivityItem>) {
        self.activity
            .lock()
            .unwrap()
            .insert(user_id.to_string(), items);
    }

    /// Make every subsequent operation fail with a clone of `error`.
    pub fn fail_with(&self, error: StoreError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Clear an injected failure.
    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Make `create_relation` fail with `Conflict` even when no row exists,
    /// simulating a row inserted elsewhere between check and create.
    pub fn force_create_conflict(&self) {
        *self.create_conflicts.lock().unwrap() = true;
    }

    /// Get all recorded calls.
    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clear all recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Record a call.
    fn record_call(
        &self,
        op: &str,
        table: Option<&str>,
        post_id: Option<&str>,
        user_id: Option<&str>,
    ) {
        self.calls.lock().unwrap().push(RecordedCall {
            op: op.to_string(),
            table: table.map(str::to_string),
            post_id: post_id.map(str::to_string),
            user_id: user_id.map(str::to_string),
        });
    }

    fn injected_failure(&self) -> Option<StoreError> {
        self.failure.lock().unwrap().clone()
    }
}

impl Default for MockRowStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowStore for MockRowStore {
    async fn exists_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<bool, StoreError> {
        self.record_call(
            "exists_relation",
            Some(kind.table()),
            Some(post_id),
            Some(viewer_id),
        );
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        Ok(self.relations.lock().unwrap().contains(&(
            kind,
            post_id.to_string(),
            viewer_id.to_string(),
        )))
    }

    async fn create_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<(), StoreError> {
        self.record_call(
            "create_relation",
            Some(kind.table()),
            Some(post_id),
            Some(viewer_id),
        );
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        if *self.create_conflicts.lock().unwrap() {
            return Err(StoreError::Conflict);
        }
        let inserted = self.relations.lock().unwrap().insert((
            kind,
            post_id.to_string(),
            viewer_id.to_string(),
        ));
        if inserted {
            Ok(())
        } else {
            Err(StoreError::Conflict)
        }
    }

    async fn delete_relation(
        &self,
        kind: RelationKind,
        post_id: &str,
        viewer_id: &str,
    ) -> Result<(), StoreError> {
        self.record_call(
            "delete_relation",
            Some(kind.table()),
            Some(post_id),
            Some(viewer_id),
        );
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        // Deleting an absent row succeeds, matching the remote contract.
        self.relations.lock().unwrap().remove(&(
            kind,
            post_id.to_string(),
            viewer_id.to_string(),
        ));
        Ok(())
    }

    async fn get_post_counters(&self, post_id: &str) -> Result<PostCounters, StoreError> {
        self.record_call("get_post_counters", None, Some(post_id), None);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        Ok(self
            .counters
            .lock()
            .unwrap()
            .get(post_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl DashboardReader for MockRowStore {
    async fn fetch_profile(&self, user_id: &str) -> Result<Profile, StoreError> {
        self.record_call("fetch_profile", None, None, Some(user_id));
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        self.profiles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| StoreError::unavailable(format!("no profile row for {}", user_id)))
    }

    async fn fetch_posts_by_author(&self, user_id: &str) -> Result<Vec<Post>, StoreError> {
        self.record_call("fetch_posts_by_author", None, None, Some(user_id));
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        Ok(self
            .posts
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_top_posts(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Post>, StoreError> {
        self.record_call("fetch_top_posts", None, None, Some(user_id));
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        let mut posts = self
            .posts
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default();
        posts.sort_by(|a, b| b.like_count.cmp(&a.like_count));
        posts.truncate(limit);
        Ok(posts)
    }

    async fn fetch_recent_activity(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ActivityItem>, StoreError> {
        self.record_call("fetch_recent_activity", None, None, Some(user_id));
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        let mut items = self
            .activity
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(limit);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_row_store_new() {
        let store = MockRowStore::new();
        assert!(store.get_calls().is_empty());
        assert!(!store.relation_exists(RelationKind::Like, "p", "v"));
    }

    #[tokio::test]
    async fn test_create_then_exists() {
        let store = MockRowStore::new();

        store
            .create_relation(RelationKind::Like, "post-1", "viewer-1")
            .await
            .unwrap();

        let exists = store
            .exists_relation(RelationKind::Like, "post-1", "viewer-1")
            .await
            .unwrap();
        assert!(exists);

        // Other tables are untouched.
        let exists = store
            .exists_relation(RelationKind::Bookmark, "post-1", "viewer-1")
            .await
            .unwrap();
        assert!(!exists);
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let store = MockRowStore::new();

        store
            .create_relation(RelationKind::Share, "post-1", "viewer-1")
            .await
            .unwrap();
        let result = store
            .create_relation(RelationKind::Share, "post-1", "viewer-1")
            .await;

        assert_eq!(result, Err(StoreError::Conflict));
    }

    #[tokio::test]
    async fn test_delete_absent_row_succeeds() {
        let store = MockRowStore::new();

        let result = store
            .delete_relation(RelationKind::Like, "post-1", "viewer-1")
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_counters_default_to_zero() {
        let store = MockRowStore::new();

        let counters = store.get_post_counters("unseen-post").await.unwrap();

        assert_eq!(counters, PostCounters::default());
    }

    #[tokio::test]
    async fn test_failure_injection_covers_all_ops() {
        let store = MockRowStore::new();
        store.fail_with(StoreError::unavailable("down"));

        assert!(store
            .exists_relation(RelationKind::Like, "p", "v")
            .await
            .is_err());
        assert!(store
            .create_relation(RelationKind::Like, "p", "v")
            .await
            .is_err());
        assert!(store
            .delete_relation(RelationKind::Like, "p", "v")
            .await
            .is_err());
        assert!(store.get_post_counters("p").await.is_err());

        store.clear_failure();
        assert!(store.get_post_counters("p").await.is_ok());
    }

    #[tokio::test]
    async fn test_calls_recorded() {
        let store = MockRowStore::new();

        store
            .create_relation(RelationKind::Bookmark, "post-1", "viewer-1")
            .await
            .unwrap();

        let calls = store.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].op, "create_relation");
        assert_eq!(calls[0].table.as_deref(), Some("bookmarks"));
        assert_eq!(calls[0].post_id.as_deref(), Some("post-1"));
        assert_eq!(calls[0].user_id.as_deref(), Some("viewer-1"));

        store.clear_calls();
        assert!(store.get_calls().is_empty());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = MockRowStore::new();
        let cloned = store.clone();

        store.set_relation(RelationKind::Like, "post-1", "viewer-1");

        let exists = cloned
            .exists_relation(RelationKind::Like, "post-1", "viewer-1")
            .await
            .unwrap();
        assert!(exists);
        assert_eq!(store.get_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_top_posts_orders_by_likes() {
        use chrono::Utc;

        let store = MockRowStore::new();
        let mut posts = Vec::new();
        for (id, likes) in [("a", 3u64), ("b", 9), ("c", 5)] {
            posts.push(Post {
                id: id.to_string(),
                user_id: "author-1".to_string(),
                text: None,
                created_at: Utc::now(),
                like_count: likes,
                comment_count: 0,
                share_count: 0,
                save_count: 0,
            });
        }
        store.set_posts("author-1", posts);

        let top = store.fetch_top_posts("author-1", 2).await.unwrap();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, "b");
        assert_eq!(top[1].id, "c");
    }

    #[tokio::test]
    async fn test_fetch_profile_missing_is_error() {
        let store = MockRowStore::new();

        let result = store.fetch_profile("nobody").await;

        assert!(matches!(result, Err(StoreError::Unavailable { .. })));
    }
}
