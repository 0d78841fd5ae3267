//! Identity records held by the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionUser` is the profile the fetch collaborator hands to the store;
//! `SessionState` is what subscribers and readers observe. Both are plain
//! values: snapshots are cloned out of the store, never borrowed.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use serde::{Deserialize, Serialize};

/// The currently known user of this application instance.
///
/// Every field defaults to empty. Missing JSON fields deserialize to the
/// default so a partial profile still yields a well-formed entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionUser {
    /// Opaque identifier; empty when no user is loaded.
    pub id: String,
    /// Login name.
    pub login: String,
    /// Display name.
    pub name: String,
    /// Free-form role label (e.g. `"admin"`).
    pub role: String,
    /// Document identifiers associated with the user, in order.
    pub documents: Vec<String>,
}

impl SessionUser {
    /// True when every field still holds its default value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Session snapshot: the user entity plus the authentication flag.
///
/// The two parts are set independently. Nothing here ties
/// `is_authenticated` to whether `user` is populated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionState {
    pub user: SessionUser,
    pub is_authenticated: bool,
}
