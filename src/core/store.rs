//! SQLite-backed session store
//!
//! One connection is opened at process start and injected wherever the
//! lifecycle needs it; each operation commits before returning. The
//! schema is created on open if absent.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;
use tracing::debug;

use crate::types::{Emotion, OpenSession, SessionRecord, SessionStatus};

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// create() hit an id that already exists
    #[error("session id already exists")]
    Duplicate,
    /// No row for the given id
    #[error("no session with the given id")]
    NotFound,
    /// Anything SQLite-level
    #[error("storage failure: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

const SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS consent_sessions (
        id TEXT PRIMARY KEY,
        phrase TEXT NOT NULL,
        start_time INTEGER NOT NULL,
        end_time INTEGER,
        duration_sec INTEGER,
        blink_count INTEGER,
        emotion TEXT,
        panic INTEGER,
        trust_score INTEGER,
        status TEXT,
        hash TEXT,
        created_at INTEGER NOT NULL
    );
";

/// Keyed store for consent-session records
pub struct SessionStore {
    db: Connection,
}

impl SessionStore {
    /// Open (or create) the store at `path` and ensure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Connection::open(path.as_ref())?;
        db.execute_batch(SCHEMA)?;
        debug!(path = %path.as_ref().display(), "session store opened");
        Ok(Self { db })
    }

    /// In-memory store, mostly for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let db = Connection::open_in_memory()?;
        db.execute_batch(SCHEMA)?;
        Ok(Self { db })
    }

    /// Insert a new open session.
    ///
    /// Rejects an existing id with [`StoreError::Duplicate`] rather than
    /// overwriting the record.
    pub fn create(&self, id: &str, phrase: &str, start_time: i64) -> Result<(), StoreError> {
        let inserted = self.db.execute(
            "INSERT OR IGNORE INTO consent_sessions (id, phrase, start_time, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![id, phrase, start_time, start_time],
        )?;
        if inserted == 0 {
            return Err(StoreError::Duplicate);
        }
        Ok(())
    }

    /// Read the fields submit needs from an open session.
    pub fn read(&self, id: &str) -> Result<OpenSession, StoreError> {
        self.db
            .query_row(
                "SELECT phrase, start_time FROM consent_sessions WHERE id = ?1",
                params![id],
                |row| {
                    Ok(OpenSession {
                        phrase: row.get(0)?,
                        start_time: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or(StoreError::NotFound)
    }

    /// Write the verdict fields of an existing session.
    ///
    /// This is a full overwrite of every mutable column, not a merge; a
    /// second finalize replaces the earlier verdict wholesale.
    #[allow(clippy::too_many_arguments)]
    pub fn finalize(
        &self,
        id: &str,
        end_time: i64,
        duration_sec: i64,
        blink_count: i64,
        emotion: Emotion,
        panic: bool,
        trust_score: i64,
        status: SessionStatus,
        hash: &str,
    ) -> Result<(), StoreError> {
        let updated = self.db.execute(
            "UPDATE consent_sessions
             SET end_time = ?1,
                 duration_sec = ?2,
                 blink_count = ?3,
                 emotion = ?4,
                 panic = ?5,
                 trust_score = ?6,
                 status = ?7,
                 hash = ?8
             WHERE id = ?9",
            params![
                end_time,
                duration_sec,
                blink_count,
                emotion.as_str(),
                panic as i64,
                trust_score,
                status.as_str(),
                hash,
                id
            ],
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Fetch the full row, for inspection and diagnostics.
    pub fn fetch(&self, id: &str) -> Result<SessionRecord, StoreError> {
        self.db
            .query_row(
                "SELECT id, phrase, start_time, end_time, duration_sec, blink_count,
                        emotion, panic, trust_score, status, hash
                 FROM consent_sessions WHERE id = ?1",
                params![id],
                |row| {
                    Ok(SessionRecord {
                        id: row.get(0)?,
                        phrase: row.get(1)?,
                        start_time: row.get(2)?,
                        end_time: row.get(3)?,
                        duration_sec: row.get(4)?,
                        blink_count: row.get(5)?,
                        emotion: row
                            .get::<_, Option<String>>(6)?
                            .map(|label| Emotion::normalize(&label)),
                        panic: row.get::<_, Option<i64>>(7)?.map(|flag| flag != 0),
                        trust_score: row.get(8)?,
                        status: row
                            .get::<_, Option<String>>(9)?
                            .and_then(|label| SessionStatus::from_label(&label)),
                        hash: row.get(10)?,
                    })
                },
            )
            .optional()?
            .ok_or(StoreError::NotFound)
    }

    /// Number of sessions ever created.
    pub fn count(&self) -> Result<i64, StoreError> {
        Ok(self
            .db
            .query_row("SELECT COUNT(*) FROM consent_sessions", [], |row| {
                row.get(0)
            })?)
    }
}

// =============================================================================
// TESTS
// =============================================================================
