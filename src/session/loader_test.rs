use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::session::entity::SessionState;

fn clerk() -> SessionUser {
    SessionUser {
        id: "u-1".to_owned(),
        login: "clerk".to_owned(),
        name: "Front Desk".to_owned(),
        role: "clerk".to_owned(),
        documents: vec!["doc-1".to_owned()],
    }
}

fn temp_profile(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bankdocs-{}-{name}.json", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

// =============================================================
// StaticUserSource
// =============================================================

#[tokio::test]
async fn static_source_returns_user() {
    let source = StaticUserSource::new(clerk());
    assert_eq!(source.fetch_user().await.unwrap(), clerk());
}

#[tokio::test]
async fn empty_static_source_is_not_found() {
    let err = StaticUserSource::empty().fetch_user().await.unwrap_err();
    assert!(matches!(err, LoadError::NotFound));
}

// =============================================================
// FixtureUserSource
// =============================================================

#[tokio::test]
async fn fixture_source_reads_json_profile() {
    let path = temp_profile(
        "ok",
        r#"{"id":"42","login":"jdoe","name":"Jane Doe","role":"admin","documents":["d1","d2"]}"#,
    );
    let user = FixtureUserSource::new(&path).fetch_user().await.unwrap();
    assert_eq!(user.login, "jdoe");
    assert_eq!(user.documents, vec!["d1".to_owned(), "d2".to_owned()]);
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn fixture_source_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("bankdocs-definitely-missing-profile.json");
    let err = FixtureUserSource::new(&path).fetch_user().await.unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("definitely-missing"));
}

#[tokio::test]
async fn fixture_source_malformed_json_is_parse_error() {
    let path = temp_profile("bad", "{not json");
    let err = FixtureUserSource::new(&path).fetch_user().await.unwrap_err();
    assert!(matches!(&err, LoadError::Parse { path: p, .. } if *p == path));
    assert!(err.to_string().contains("bad.json"));
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn fixture_source_reads_shipped_profile() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/jane.json");
    let user = FixtureUserSource::new(path).fetch_user().await.unwrap();
    assert_eq!(
        user,
        SessionUser {
            id: "42".to_owned(),
            login: "jdoe".to_owned(),
            name: "Jane Doe".to_owned(),
            role: "admin".to_owned(),
            documents: vec!["d1".to_owned(), "d2".to_owned()],
        }
    );
}

// =============================================================
// load_user
// =============================================================

#[tokio::test]
async fn load_user_sets_user_then_authenticates() {
    let store = SessionStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = store.subscribe(move |next, _| sink.borrow_mut().push(next.clone()));

    load_user(&store, &StaticUserSource::new(clerk())).await.unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], SessionState { user: clerk(), is_authenticated: false });
    assert_eq!(seen[1], SessionState { user: clerk(), is_authenticated: true });
}

#[tokio::test]
async fn load_user_failure_keeps_last_known_state() {
    let store = SessionStore::new();
    store.set_user(clerk());
    store.set_authenticated(true);
    let before = store.state();

    let err = load_user(&store, &StaticUserSource::empty()).await.unwrap_err();
    assert!(matches!(err, LoadError::NotFound));
    assert_eq!(store.state(), before);
}

#[tokio::test]
async fn load_user_accepts_trait_objects() {
    let store = SessionStore::new();
    let source: Box<dyn UserSource> = Box::new(StaticUserSource::new(clerk()));
    load_user(&store, source.as_ref()).await.unwrap();
    assert!(store.is_authenticated());
}
