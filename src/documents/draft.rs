//! Create-document form fields and their validation.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

use super::catalog::{ASSIGNEES, CLIENTS, DocumentType, SelectOption, label_for};

/// Error returned by draft edits and form actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// A required field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// The slug is not offered by the named select box.
    #[error("unknown {field} option: {slug}")]
    UnknownOption { field: &'static str, slug: String },
    /// No attachment at that position.
    #[error("attachment index {index} out of range (have {len})")]
    AttachmentOutOfRange { index: usize, len: usize },
    /// A save or submit is already running.
    #[error("form is busy")]
    Busy,
}

/// A file picked in the attachments input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

/// In-progress document as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDraft {
    pub title: String,
    pub document_type: Option<DocumentType>,
    pub client: Option<String>,
    pub assigned_to: Option<String>,
    pub description: String,
    pub attachments: Vec<Attachment>,
}

impl DocumentDraft {
    /// Replace the attachment list with a fresh file selection.
    pub fn set_attachments(&mut self, files: Vec<Attachment>) {
        self.attachments = files;
    }

    /// Remove the attachment at `index`, returning it.
    ///
    /// # Errors
    ///
    /// `AttachmentOutOfRange` when `index` is past the end.
    pub fn remove_attachment(&mut self, index: usize) -> Result<Attachment, DraftError> {
        let len = self.attachments.len();
        if index >= len {
            return Err(DraftError::AttachmentOutOfRange { index, len });
        }
        Ok(self.attachments.remove(index))
    }

    /// Select a client by slug.
    ///
    /// # Errors
    ///
    /// `UnknownOption` when the slug is not in the client list.
    pub fn set_client(&mut self, slug: &str) -> Result<(), DraftError> {
        self.client = Some(checked_option(CLIENTS, "client", slug)?);
        Ok(())
    }

    /// Select an assignee by slug.
    ///
    /// # Errors
    ///
    /// `UnknownOption` when the slug is not in the assignee list.
    pub fn set_assignee(&mut self, slug: &str) -> Result<(), DraftError> {
        self.assigned_to = Some(checked_option(ASSIGNEES, "assigned_to", slug)?);
        Ok(())
    }

    /// Select a document type by slug.
    ///
    /// # Errors
    ///
    /// `UnknownOption` when the slug names no document type.
    pub fn set_document_type(&mut self, slug: &str) -> Result<(), DraftError> {
        let kind = DocumentType::from_slug(slug)
            .ok_or_else(|| DraftError::UnknownOption { field: "document_type", slug: slug.to_owned() })?;
        self.document_type = Some(kind);
        Ok(())
    }

    /// Check the fields required for submission, in form order.
    ///
    /// Description and attachments are optional.
    ///
    /// # Errors
    ///
    /// `MissingField` naming the first empty required field.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingField("title"));
        }
        if self.document_type.is_none() {
            return Err(DraftError::MissingField("document_type"));
        }
        if self.client.is_none() {
            return Err(DraftError::MissingField("client"));
        }
        if self.assigned_to.is_none() {
            return Err(DraftError::MissingField("assigned_to"));
        }
        Ok(())
    }
}

fn checked_option(options: &[SelectOption], field: &'static str, slug: &str) -> Result<String, DraftError> {
    label_for(options, slug)
        .map(|_| slug.to_owned())
        .ok_or_else(|| DraftError::UnknownOption { field, slug: slug.to_owned() })
}
