//! Session verdict definitions

use serde::{Deserialize, Serialize};

/// Terminal classification of a consent session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Behavioral report looks plausible, score above threshold
    Verified,
    /// Score fell below the verification threshold
    Failed,
    /// Caller asserted the panic flag
    Blocked,
}

impl SessionStatus {
    /// Wire and storage label
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Verified => "VERIFIED",
            SessionStatus::Failed => "FAILED",
            SessionStatus::Blocked => "BLOCKED",
        }
    }

    /// Parse a stored label back into a status
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "VERIFIED" => Some(SessionStatus::Verified),
            "FAILED" => Some(SessionStatus::Failed),
            "BLOCKED" => Some(SessionStatus::Blocked),
            _ => None,
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            SessionStatus::Verified => "\x1b[32m", // Green
            SessionStatus::Failed => "\x1b[33m",   // Orange/Yellow
            SessionStatus::Blocked => "\x1b[31m",  // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
