//! The engagement store: like/bookmark/share operations for one post.
//!
//! Transitions are confirm-then-apply. A mutating operation asks the remote
//! store first and only touches local state once the call succeeds, so a
//! failure leaves the previous state intact and there is nothing to roll
//! back. The remote's per-(post, viewer) uniqueness constraint is the one
//! hard consistency guarantee; a uniqueness violation surfaces as
//! [`Effect::Conflict`] and callers reconcile with [`EngagementStore::refresh_counts`].

use std::sync::Arc;

use tracing::warn;

use crate::engagement::effect::Effect;
use crate::engagement::state::EngagementState;
use crate::models::{Post, Session};
use crate::traits::row_store::{RelationKind, RowStore, StoreError};

/// Result of one mutating operation: the new state snapshot plus an
/// optional effect for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub state: EngagementState,
    pub effect: Option<Effect>,
}

/// Mediates engagement operations for one post and one viewer.
///
/// Operations take `&mut self`, so a caller cannot start a second operation
/// on the same store until the in-flight one completes; that is the whole
/// serialization story. Stores for different posts are independent and may
/// run concurrently. There is no cancellation: dropping an operation future
/// discards its result, and since nothing was applied locally before remote
/// confirmation, no cleanup is needed.
pub struct EngagementStore {
    remote: Arc<dyn RowStore>,
    session: Session,
    state: EngagementState,
}

impl EngagementStore {
    /// Build the store for one post, reconciling against the remote store.
    ///
    /// Counts seed from the cached `post` snapshot and are then refreshed
    /// from the authoritative counters; for an authenticated viewer the
    /// like/bookmark relation flags are fetched alongside. Every remote
    /// failure degrades to the snapshot value and a `warn` log line, so
    /// `load` always yields a usable store. `shared` starts false and is
    /// resolved lazily by [`EngagementStore::record_share`].
    pub async fn load(remote: Arc<dyn RowStore>, session: Session, post: &Post) -> Self {
        let mut state = EngagementState::from_post(post, session.viewer_id().map(str::to_string));

        if let Some(viewer) = session.viewer_id() {
            let (counters, liked, bookmarked) = tokio::join!(
                remote.get_post_counters(&post.id),
                remote.exists_relation(RelationKind::Like, &post.id, viewer),
                remote.exists_relation(RelationKind::Bookmark, &post.id, viewer),
            );

            match counters {
                Ok(c) => state.counts = c,
                Err(err) => warn!("counter refresh failed for post {}: {}", post.id, err),
            }
            match liked {
                Ok(v) => state.liked = v,
                Err(err) => warn!("like lookup failed for post {}: {}", post.id, err),
            }
            match bookmarked {
                Ok(v) => state.bookmarked = v,
                Err(err) => warn!("bookmark lookup failed for post {}: {}", post.id, err),
            }
        } else {
            // Counters are public data; only relation lookups need identity.
            match remote.get_post_counters(&post.id).await {
                Ok(c) => state.counts = c,
                Err(err) => warn!("counter refresh failed for post {}: {}", post.id, err),
            }
        }

        Self {
            remote,
            session,
            state,
        }
    }

    /// Current state for rendering.
    pub fn current_state(&self) -> &EngagementState {
        &self.state
    }

    /// Toggle the viewer's like relation, strict two-way.
    ///
    /// Creating applies `liked=true, likes+=1`; deleting applies
    /// `liked=false` with the count saturating at zero. On failure the state
    /// is unchanged and the outcome carries the effect. A create conflict
    /// (relation already present remotely) sets the flag without touching
    /// the count.
    pub async fn toggle_like(&mut self) -> Outcome {
        let viewer = match self.session.viewer_id() {
            Some(v) => v.to_string(),
            None => return self.outcome(Some(Effect::Unauthenticated)),
        };

        if self.state.liked {
            match self
                .remote
                .delete_relation(RelationKind::Like, &self.state.post_id, &viewer)
                .await
            {
                Ok(()) => {
                    self.state.liked = false;
                    self.state.counts.likes = self.state.counts.likes.saturating_sub(1);
                    self.outcome(None)
                }
                Err(err) => self.remote_failure("unlike", err),
            }
        } else {
            match self
                .remote
                .create_relation(RelationKind::Like, &self.state.post_id, &viewer)
                .await
            {
                Ok(()) => {
                    self.state.liked = true;
                    self.state.counts.likes += 1;
                    self.outcome(None)
                }
                Err(StoreError::Conflict) => {
                    self.state.liked = true;
                    self.outcome(Some(Effect::Conflict))
                }
                Err(err) => self.remote_failure("like", err),
            }
        }
    }

    /// Toggle the viewer's bookmark relation; same shape as
    /// [`EngagementStore::toggle_like`], operating on the saves counter.
    pub async fn toggle_bookmark(&mut self) -> Outcome {
        let viewer = match self.session.viewer_id() {
            Some(v) => v.to_string(),
            None => return self.outcome(Some(Effect::Unauthenticated)),
        };

        if self.state.bookmarked {
            match self
                .remote
                .delete_relation(RelationKind::Bookmark, &self.state.post_id, &viewer)
                .await
            {
                Ok(()) => {
                    self.state.bookmarked = false;
                    self.state.counts.saves = self.state.counts.saves.saturating_sub(1);
                    self.outcome(None)
                }
                Err(err) => self.remote_failure("unbookmark", err),
            }
        } else {
            match self
                .remote
                .create_relation(RelationKind::Bookmark, &self.state.post_id, &viewer)
                .await
            {
                Ok(()) => {
                    self.state.bookmarked = true;
                    self.state.counts.saves += 1;
                    self.outcome(None)
                }
                Err(StoreError::Conflict) => {
                    self.state.bookmarked = true;
                    self.outcome(Some(Effect::Conflict))
                }
                Err(err) => self.remote_failure("bookmark", err),
            }
        }
    }

    /// Record the viewer's first share of this post.
    ///
    /// Invoked after the viewer completes a share action, never on mere
    /// button press. The share count reflects first shares: once `shared`
    /// is set this is a no-op, and a relation that already exists remotely
    /// (found by the existence check, or reported as a create conflict)
    /// sets the flag without incrementing. Recording is best-effort
    /// bookkeeping; the share action itself is not gated on it.
    pub async fn record_share(&mut self) -> Outcome {
        let viewer = match self.session.viewer_id() {
            Some(v) => v.to_string(),
            None => return self.outcome(Some(Effect::Unauthenticated)),
        };

        if self.state.shared {
            return self.outcome(None);
        }

        match self
            .remote
            .exists_relation(RelationKind::Share, &self.state.post_id, &viewer)
            .await
        {
            Ok(true) => {
                self.state.shared = true;
                self.outcome(None)
            }
            Ok(false) => {
                match self
                    .remote
                    .create_relation(RelationKind::Share, &self.state.post_id, &viewer)
                    .await
                {
                    Ok(()) => {
                        self.state.shared = true;
                        self.state.counts.shares += 1;
                        self.outcome(None)
                    }
                    Err(StoreError::Conflict) => {
                        self.state.shared = true;
                        self.outcome(Some(Effect::Conflict))
                    }
                    Err(err) => self.remote_failure("share", err),
                }
            }
            Err(err) => self.remote_failure("share lookup", err),
        }
    }

    /// Replace the cached counters with the remote's authoritative values.
    pub async fn refresh_counts(&mut self) -> Option<Effect> {
        match self.remote.get_post_counters(&self.state.post_id).await {
            Ok(counters) => {
                self.state.counts = counters;
                None
            }
            Err(err) => {
                warn!(
                    "counter refresh failed for post {}: {}",
                    self.state.post_id, err
                );
                Some(Effect::from(err))
            }
        }
    }

    fn outcome(&self, effect: Option<Effect>) -> Outcome {
        Outcome {
            state: self.state.clone(),
            effect,
        }
    }

    fn remote_failure(&self, action: &str, err: StoreError) -> Outcome {
        warn!("{} failed for post {}: {}", action, self.state.post_id, err);
        self.outcome(Some(Effect::from(err)))
    }
}
