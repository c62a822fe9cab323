//! Submit payload types

use serde::Deserialize;

use crate::types::Emotion;

/// Raw submit payload as it arrives over the wire.
///
/// Every field is optional; defaults are applied by [`SubmitRequest::report`].
/// The session id is validated separately because its absence is a contract
/// error, not a defaultable field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub blink_count: Option<i64>,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub panic: Option<bool>,
    #[serde(default)]
    pub duration_sec: Option<i64>,
}

impl SubmitRequest {
    /// Apply the documented defaults and normalize the emotion label.
    ///
    /// Absent integers default to 0, panic defaults to false, and any
    /// emotion label outside the fixed vocabulary reads as neutral.
    pub fn report(&self) -> BehaviorReport {
        BehaviorReport {
            blink_count: self.blink_count.unwrap_or(0),
            emotion: Emotion::normalize(self.emotion.as_deref().unwrap_or("neutral")),
            panic: self.panic.unwrap_or(false),
            duration_sec: self.duration_sec.unwrap_or(0),
        }
    }
}

/// Normalized behavioral report, ready for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorReport {
    pub blink_count: i64,
    pub emotion: Emotion,
    pub panic: bool,
    pub duration_sec: i64,
}
