//! Viewer session identity, passed into the core explicitly.

use serde::{Deserialize, Serialize};

/// Identity of the acting viewer. Constructed by the host once (from its own
/// auth layer) and handed to every component that needs it; nothing in this
/// crate reads session state from ambient context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    viewer_id: Option<String>,
}

impl Session {
    /// Session for a logged-in viewer.
    pub fn authenticated(viewer_id: impl Into<String>) -> Self {
        Self {
            viewer_id: Some(viewer_id.into()),
        }
    }

    /// Session for a viewer who is not logged in.
    pub fn anonymous() -> Self {
        Self { viewer_id: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.viewer_id.is_some()
    }

    pub fn viewer_id(&self) -> Option<&str> {
        self.viewer_id.as_deref()
    }
}
