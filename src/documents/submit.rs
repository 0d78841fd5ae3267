//! Save-draft and submit actions for the create-document form.
//!
//! DESIGN
//! ======
//! There is no document backend: both actions wait a configured latency,
//! then hand back the route to navigate to. While either action runs the
//! form reports itself busy and refuses a second action, mirroring the
//! disabled buttons in the page.
//!
//! TRADE-OFFS
//! ==========
//! The busy flag is reset by a drop guard, so a cancelled action (its future
//! dropped mid-wait) does not leave the form stuck.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use tracing::info;
use uuid::Uuid;

use super::draft::{DocumentDraft, DraftError};

/// Route shown after either action completes.
pub const DOCUMENTS_ROUTE: &str = "/documents";

/// What the form is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Saving,
    Submitting,
}

/// Simulated latencies for the two actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormDelays {
    pub save: Duration,
    pub submit: Duration,
}

impl Default for FormDelays {
    fn default() -> Self {
        Self { save: Duration::from_millis(1000), submit: Duration::from_millis(1000) }
    }
}

/// Acknowledgement for a submitted document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub id: Uuid,
    pub redirect: &'static str,
}

/// Create-document form: the draft being edited plus action state.
#[derive(Debug, Default)]
pub struct DocumentForm {
    draft: RefCell<DocumentDraft>,
    status: Cell<FormStatus>,
    delays: FormDelays,
}

impl DocumentForm {
    #[must_use]
    pub fn new(delays: FormDelays) -> Self {
        Self { draft: RefCell::new(DocumentDraft::default()), status: Cell::new(FormStatus::Idle), delays }
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status.get()
    }

    /// Whether the save and submit buttons are enabled.
    #[must_use]
    pub fn can_act(&self) -> bool {
        self.status.get() == FormStatus::Idle
    }

    /// Snapshot of the current draft.
    #[must_use]
    pub fn draft(&self) -> DocumentDraft {
        self.draft.borrow().clone()
    }

    /// Edit the draft in place. Fields stay editable while an action runs.
    pub fn edit<R>(&self, f: impl FnOnce(&mut DocumentDraft) -> R) -> R {
        f(&mut *self.draft.borrow_mut())
    }

    /// Save the draft as-is, without validation.
    ///
    /// # Errors
    ///
    /// `Busy` if another action is running.
    pub async fn save_draft(&self) -> Result<&'static str, DraftError> {
        let _busy = self.begin(FormStatus::Saving)?;
        tokio::time::sleep(self.delays.save).await;
        info!(title = %self.draft.borrow().title, "document draft saved");
        Ok(DOCUMENTS_ROUTE)
    }

    /// Submit the document for review. Requires a valid draft.
    ///
    /// # Errors
    ///
    /// `Busy` if another action is running, or the first validation failure.
    pub async fn submit(&self) -> Result<SubmitReceipt, DraftError> {
        if !self.can_act() {
            return Err(DraftError::Busy);
        }
        self.draft.borrow().validate()?;

        let _busy = self.begin(FormStatus::Submitting)?;
        tokio::time::sleep(self.delays.submit).await;

        let receipt = SubmitReceipt { id: Uuid::new_v4(), redirect: DOCUMENTS_ROUTE };
        let draft = self.draft.borrow();
        info!(
            receipt = %receipt.id,
            title = %draft.title,
            document_type = draft.document_type.map_or("", |kind| kind.slug()),
            attachments = draft.attachments.len(),
            "document submitted for review"
        );
        Ok(receipt)
    }

    fn begin(&self, status: FormStatus) -> Result<BusyGuard<'_>, DraftError> {
        if !self.can_act() {
            return Err(DraftError::Busy);
        }
        self.status.set(status);
        Ok(BusyGuard { status: &self.status })
    }
}

struct BusyGuard<'a> {
    status: &'a Cell<FormStatus>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.status.set(FormStatus::Idle);
    }
}
