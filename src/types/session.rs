//! Session record types

use serde::{Deserialize, Serialize};

use crate::types::{Emotion, SessionStatus};

/// The two fields submit needs from an open session
#[derive(Debug, Clone)]
pub struct OpenSession {
    pub phrase: String,
    pub start_time: i64,
}

/// A full session row.
///
/// A session is either open (only id, phrase, and start_time populated)
/// or finalized (every field populated). The verdict fields are written
/// exactly once per submit; a later submit overwrites them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque unique identifier, fixed at creation
    pub id: String,
    /// Server-chosen challenge phrase, bound into the seal
    pub phrase: String,
    /// Epoch seconds at creation
    pub start_time: i64,
    /// Epoch seconds at finalization
    pub end_time: Option<i64>,
    /// Caller-reported capture duration
    pub duration_sec: Option<i64>,
    /// Caller-reported blink count
    pub blink_count: Option<i64>,
    /// Normalized emotion label
    pub emotion: Option<Emotion>,
    /// Caller-asserted panic flag
    pub panic: Option<bool>,
    /// Computed trust score, 0-100
    pub trust_score: Option<i64>,
    /// Terminal classification
    pub status: Option<SessionStatus>,
    /// Seal digest over (id, phrase, trust_score, end_time)
    pub hash: Option<String>,
}

impl SessionRecord {
    /// A session is finalized once a verdict has been written.
    pub fn is_finalized(&self) -> bool {
        self.status.is_some()
    }
}
