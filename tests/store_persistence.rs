//! Integration tests for on-disk persistence
//!
//! The store must survive handle reopen: a verdict written through one
//! connection is visible through a fresh one.

use trustgate::core::{start_session, submit_session, SessionStore};
use trustgate::types::{SessionStatus, SubmitRequest};

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("sessions.db");

    let started = {
        let store = SessionStore::open(&db_path).unwrap();
        let started = start_session(&store).unwrap();

        let request = SubmitRequest {
            session_id: Some(started.session_id.clone()),
            blink_count: Some(1),
            emotion: Some("fear".to_string()),
            panic: Some(false),
            duration_sec: Some(10),
        };
        submit_session(&store, &request).unwrap();
        started
    };

    // Fresh handle on the same file
    let store = SessionStore::open(&db_path).unwrap();
    let record = store.fetch(&started.session_id).unwrap();

    assert!(record.is_finalized());
    assert_eq!(record.phrase, started.phrase);
    assert_eq!(record.trust_score, Some(50));
    assert_eq!(record.status, Some(SessionStatus::Failed));
}

#[test]
fn test_schema_init_is_idempotent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("sessions.db");

    let first = SessionStore::open(&db_path).unwrap();
    start_session(&first).unwrap();
    drop(first);

    // Reopening runs schema creation again without clobbering data
    let second = SessionStore::open(&db_path).unwrap();
    assert_eq!(second.count().unwrap(), 1);
}
