//! # bankdocs
//!
//! Headless core of the BankDocs document portal: the observable session
//! store holding the current user, plus the page models that consume it
//! (navigation, dashboard load / logout, create-document form).
//!
//! Rendering is left to whichever UI layer embeds this crate; everything
//! here runs on a single UI thread.

pub mod app;
pub mod config;
pub mod documents;
pub mod nav;
pub mod session;
