//! User-facing effects raised by engagement operations.
//!
//! Effects are reported to the presentation layer for display (e.g. a toast
//! notification). None of them poison the store; every operation leaves it
//! usable for the next attempt.

use std::fmt;

use crate::traits::row_store::StoreError;

/// What went sideways during an engagement operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A mutating operation was attempted with no signed-in viewer. The
    /// remote store was not contacted.
    Unauthenticated,

    /// The remote store could not be reached or failed the request.
    RemoteUnavailable { message: String },

    /// The remote store disagreed with the expected precondition, e.g. the
    /// relation already existed on create. The operation's transition was
    /// applied in its success-equivalent form (flag set, counter untouched).
    Conflict,
}

impl Effect {
    /// Check if retrying the same action can reasonably succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Effect::Unauthenticated => false,
            Effect::RemoteUnavailable { .. } => true,
            Effect::Conflict => false,
        }
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            Effect::Unauthenticated => {
                "Please log in. You need to be logged in to interact with posts.".to_string()
            }
            Effect::RemoteUnavailable { .. } => {
                "Something went wrong talking to the server. Please try again.".to_string()
            }
            Effect::Conflict => {
                "This action was already recorded. Displayed counts may be briefly out of date."
                    .to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            Effect::Unauthenticated => "E_ENG_AUTH",
            Effect::RemoteUnavailable { .. } => "E_ENG_REMOTE",
            Effect::Conflict => "E_ENG_CONFLICT",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Unauthenticated => write!(f, "authentication required"),
            Effect::RemoteUnavailable { message } => {
                write!(f, "remote store unavailable: {}", message)
            }
            Effect::Conflict => write!(f, "conflicting remote state"),
        }
    }
}

impl From<StoreError> for Effect {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Effect::Conflict,
            StoreError::Unavailable { message } => Effect::RemoteUnavailable { message },
        }
    }
}
