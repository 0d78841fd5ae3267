//! Application context shared by every page.
//!
//! DESIGN
//! ======
//! `PortalContext` is constructed once at startup and owns the single session
//! store for the application. Pages receive the context (or a store clone
//! from it) instead of reaching for a global.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use tracing::info;

use crate::config::PortalConfig;
use crate::documents::DocumentForm;
use crate::nav::{NavMenu, default_items};
use crate::session::{LoadError, SessionStore, UserSource, load_user};

#[derive(Debug)]
pub struct PortalContext {
    config: PortalConfig,
    session: SessionStore,
}

impl PortalContext {
    #[must_use]
    pub fn new(config: PortalConfig) -> Self {
        Self { config, session: SessionStore::new() }
    }

    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Handle to the application's session store.
    #[must_use]
    pub fn session(&self) -> SessionStore {
        self.session.clone()
    }

    /// Dashboard mount: fetch the profile and publish it to the session.
    ///
    /// # Errors
    ///
    /// Propagates the source's `LoadError`; the session keeps its state.
    pub async fn load_dashboard<S>(&self, source: &S) -> Result<(), LoadError>
    where
        S: UserSource + ?Sized,
    {
        load_user(&self.session, source).await
    }

    /// Sign out: drop the user and authentication together.
    pub fn logout(&self) {
        info!(user_id = %self.session.user().id, "logging out");
        self.session.clear_user();
    }

    /// Header navigation bound to this context's session.
    #[must_use]
    pub fn nav_menu(&self) -> NavMenu {
        NavMenu::attach(&self.session, default_items(), self.config.start_path.clone())
    }

    /// Fresh create-document form using the configured latencies.
    #[must_use]
    pub fn new_document_form(&self) -> DocumentForm {
        DocumentForm::new(self.config.delays)
    }
}
