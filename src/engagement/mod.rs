//! Per-post engagement: state, toggle operations, and the effects they raise.
//!
//! One [`EngagementStore`] mediates likes, bookmarks, and shares for one
//! post and one viewer, deferring to the remote row-store as source of
//! truth. Transitions are confirm-then-apply: local state only changes after
//! the remote call succeeds, so there is no rollback path.

pub mod effect;
pub mod state;
pub mod store;

pub use effect::Effect;
pub use state::EngagementState;
pub use store::{EngagementStore, Outcome};
