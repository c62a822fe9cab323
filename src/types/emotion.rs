//! Emotion label vocabulary

use serde::{Deserialize, Serialize};

/// The fixed set of emotion labels the scorer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Fear,
}

impl Emotion {
    /// Normalize a wire label. Anything outside the vocabulary reads as neutral.
    pub fn normalize(label: &str) -> Self {
        match label {
            "happy" => Emotion::Happy,
            "fear" => Emotion::Fear,
            _ => Emotion::Neutral,
        }
    }

    /// Wire and storage label
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Happy => "happy",
            Emotion::Fear => "fear",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
