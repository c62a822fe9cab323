//! Session lifecycle: the start and submit flows
//!
//! `submit_session` runs the whole read → score → seal → finalize
//! sequence against one borrowed store handle. Callers that share the
//! store behind a lock therefore serialize competing submissions for
//! the same id.

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::core::phrases::draw_phrase;
use crate::core::seal::seal_digest;
use crate::core::store::{SessionStore, StoreError};
use crate::core::trust::evaluate;
use crate::types::{SessionStatus, SubmitRequest};

/// Fields returned by start. The shape is a frozen wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct StartOutcome {
    pub session_id: String,
    pub phrase: String,
    pub start_time: i64,
}

/// Fields returned by submit. The shape is a frozen wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub trust_score: i64,
    pub status: SessionStatus,
    pub hash: String,
    pub timestamp: i64,
}

/// The two submit failures the wire contract distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Missing, empty, or unknown session id. The caller cannot tell
    /// which; that is deliberate.
    #[error("invalid session")]
    InvalidSession,
    /// Catch-all boundary for storage and internal faults
    #[error("server error")]
    Server,
}

/// Create a new open session: fresh id, random phrase, current time.
pub fn start_session(store: &SessionStore) -> Result<StartOutcome, StoreError> {
    let session_id = Uuid::new_v4().to_string();
    let phrase = draw_phrase().to_string();
    let start_time = Utc::now().timestamp();

    store.create(&session_id, &phrase, start_time)?;

    Ok(StartOutcome {
        session_id,
        phrase,
        start_time,
    })
}

/// Finalize a session from a submitted behavioral report.
///
/// Normalizes the report, scores it, seals the verdict, and writes the
/// finalized record. Store faults never escape; they come back as
/// [`SubmitError::Server`].
pub fn submit_session(
    store: &SessionStore,
    request: &SubmitRequest,
) -> Result<SubmitOutcome, SubmitError> {
    let session_id = match request.session_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(SubmitError::InvalidSession),
    };

    let open = match store.read(session_id) {
        Ok(open) => open,
        Err(StoreError::NotFound) => return Err(SubmitError::InvalidSession),
        Err(e) => {
            warn!(error = %e, "session read failed");
            return Err(SubmitError::Server);
        }
    };

    let report = request.report();
    let verdict = evaluate(report.blink_count, report.emotion, report.panic);

    let end_time = Utc::now().timestamp();
    let hash = seal_digest(session_id, &open.phrase, verdict.score, end_time);

    if let Err(e) = store.finalize(
        session_id,
        end_time,
        report.duration_sec,
        report.blink_count,
        report.emotion,
        report.panic,
        verdict.score,
        verdict.status,
        &hash,
    ) {
        warn!(error = %e, "session finalize failed");
        return Err(SubmitError::Server);
    }

    Ok(SubmitOutcome {
        trust_score: verdict.score,
        status: verdict.status,
        hash,
        timestamp: end_time,
    })
}

// =============================================================================
// TESTS
// =============================================================================
