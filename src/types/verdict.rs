//! Trust verdict

use serde::{Deserialize, Serialize};

use crate::types::SessionStatus;

/// Result of scoring one behavioral report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustVerdict {
    /// Trust score, 0-100
    pub score: i64,
    /// Terminal classification
    pub status: SessionStatus,
}
