use std::time::Duration;

use super::*;
use crate::documents::draft::Attachment;

fn filled_form(delays: FormDelays) -> DocumentForm {
    let form = DocumentForm::new(delays);
    form.edit(|draft| {
        draft.title = "Mortgage for Emily Parker".to_owned();
        draft.set_document_type("mortgage-contract").unwrap();
        draft.set_client("emily-parker").unwrap();
        draft.set_assignee("sarah-williams").unwrap();
        draft.set_attachments(vec![Attachment { name: "deed.pdf".to_owned(), size_bytes: 2048 }]);
    });
    form
}

#[test]
fn new_form_is_idle() {
    let form = DocumentForm::default();
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(form.can_act());
    assert_eq!(form.draft(), DocumentDraft::default());
}

#[test]
fn default_delays_are_one_second() {
    let delays = FormDelays::default();
    assert_eq!(delays.save, Duration::from_secs(1));
    assert_eq!(delays.submit, Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn save_draft_skips_validation_and_redirects() {
    let form = DocumentForm::new(FormDelays::default());
    let route = form.save_draft().await.unwrap();
    assert_eq!(route, DOCUMENTS_ROUTE);
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn submit_returns_receipt() {
    let form = filled_form(FormDelays::default());
    let receipt = form.submit().await.unwrap();
    assert_eq!(receipt.redirect, "/documents");
    assert!(form.can_act());
}

#[tokio::test(start_paused = true)]
async fn submit_rejects_incomplete_draft_without_going_busy() {
    let form = DocumentForm::new(FormDelays::default());
    let err = form.submit().await.unwrap_err();
    assert_eq!(err, DraftError::MissingField("title"));
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn second_action_while_busy_is_refused() {
    let form = filled_form(FormDelays { save: Duration::from_millis(500), submit: Duration::from_millis(500) });

    let observe = async {
        tokio::task::yield_now().await;
        let during = form.status();
        let refused = form.submit().await;
        (during, refused)
    };
    let (saved, (during, refused)) = tokio::join!(form.save_draft(), observe);

    assert_eq!(saved, Ok(DOCUMENTS_ROUTE));
    assert_eq!(during, FormStatus::Saving);
    assert_eq!(refused, Err(DraftError::Busy));
    assert_eq!(form.status(), FormStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn submit_waits_configured_delay() {
    let form = filled_form(FormDelays { save: Duration::ZERO, submit: Duration::from_secs(3) });
    let started = tokio::time::Instant::now();
    form.submit().await.unwrap();
    assert!(started.elapsed() >= Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn cancelled_action_releases_busy_flag() {
    let form = filled_form(FormDelays { save: Duration::from_secs(10), submit: Duration::from_secs(10) });
    let outcome = tokio::time::timeout(Duration::from_secs(1), form.submit()).await;
    assert!(outcome.is_err());
    assert!(form.can_act());
}

#[tokio::test(start_paused = true)]
async fn fields_stay_editable_while_saving() {
    let form = DocumentForm::new(FormDelays::default());
    let edit = async {
        tokio::task::yield_now().await;
        form.edit(|draft| draft.description = "late edit".to_owned());
    };
    let (saved, ()) = tokio::join!(form.save_draft(), edit);
    assert!(saved.is_ok());
    assert_eq!(form.draft().description, "late edit");
}
