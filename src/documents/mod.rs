//! Create-document page model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form collects a title, type, client, assignee, description and
//! attachments. Saving and submitting are simulated; nothing is persisted.

pub mod catalog;
pub mod draft;
pub mod submit;

pub use catalog::DocumentType;
pub use draft::{Attachment, DocumentDraft, DraftError};
pub use submit::{DOCUMENTS_ROUTE, DocumentForm, FormDelays, FormStatus, SubmitReceipt};
