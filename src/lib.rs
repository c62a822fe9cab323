//! TrustGate: consent-verification backend
//!
//! Issues challenge sessions, scores client-submitted behavioral reports,
//! and seals each verdict into a persisted session record.

pub mod core;
pub mod types;

// =============================================================================
// SCORING CONSTANTS [C]
// =============================================================================

/// Starting score before penalties
pub const SCORE_BASE: i64 = 100;

/// Penalty when the blink count falls below the natural minimum
pub const LOW_BLINK_PENALTY: i64 = 20;

/// Blink counts below this are penalized
pub const BLINK_MIN_NATURAL: i64 = 2;

/// Blink counts above this fail outright, before any emotion penalty
pub const BLINK_MAX_NATURAL: i64 = 5;

/// Penalty for a fear reading
pub const FEAR_PENALTY: i64 = 30;

/// Minimum score for a VERIFIED verdict
pub const VERIFY_THRESHOLD: i64 = 60;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.1.0";
