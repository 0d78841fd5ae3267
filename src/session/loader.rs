//! Profile fetch seam feeding the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call [`load_user`] on mount. Where the profile actually comes from
//! is behind [`UserSource`], so the store never models in-flight fetches,
//! retries, or timeouts. On failure the store keeps its last-known state.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::path::PathBuf;

use tracing::{info, warn};

use super::entity::SessionUser;
use super::store::SessionStore;

/// Error returned by a [`UserSource`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The profile file could not be read.
    #[error("failed to read user profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The profile was not a well-formed user record.
    #[error("failed to parse user profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The source has no user to offer.
    #[error("no user profile available")]
    NotFound,
}

/// Something that can produce the current user's profile.
#[async_trait::async_trait]
pub trait UserSource {
    async fn fetch_user(&self) -> Result<SessionUser, LoadError>;
}

/// In-memory source returning a fixed profile, or `NotFound` when empty.
#[derive(Clone, Debug, Default)]
pub struct StaticUserSource {
    user: Option<SessionUser>,
}

impl StaticUserSource {
    #[must_use]
    pub fn new(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { user: None }
    }
}

#[async_trait::async_trait]
impl UserSource for StaticUserSource {
    async fn fetch_user(&self) -> Result<SessionUser, LoadError> {
        self.user.clone().ok_or(LoadError::NotFound)
    }
}

/// Reads a JSON profile from disk.
#[derive(Clone, Debug)]
pub struct FixtureUserSource {
    path: PathBuf,
}

impl FixtureUserSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl UserSource for FixtureUserSource {
    async fn fetch_user(&self) -> Result<SessionUser, LoadError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io { path: self.path.clone(), source })?;
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse { path: self.path.clone(), source })
    }
}

/// Fetch the profile and publish it: `set_user`, then `set_authenticated(true)`.
///
/// # Errors
///
/// Returns the source's error unchanged. The store is not touched in that case.
pub async fn load_user<S>(store: &SessionStore, source: &S) -> Result<(), LoadError>
where
    S: UserSource + ?Sized,
{
    let user = match source.fetch_user().await {
        Ok(user) => user,
        Err(e) => {
            warn!(error = %e, "user profile fetch failed; keeping current session");
            return Err(e);
        }
    };

    info!(user_id = %user.id, login = %user.login, role = %user.role, "user profile loaded");
    store.set_user(user);
    store.set_authenticated(true);
    Ok(())
}
