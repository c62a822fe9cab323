//! Trust evaluation: behavioral report in, verdict out
//!
//! Decision order:
//! - panic blocks before any scoring
//! - a high blink count fails before the fear penalty applies

use crate::types::{Emotion, SessionStatus, TrustVerdict};
use crate::{
    BLINK_MAX_NATURAL, BLINK_MIN_NATURAL, FEAR_PENALTY, LOW_BLINK_PENALTY, SCORE_BASE,
    VERIFY_THRESHOLD,
};

/// Score one behavioral report.
///
/// Pure and deterministic; inputs are assumed normalized by the caller.
pub fn evaluate(blink_count: i64, emotion: Emotion, panic: bool) -> TrustVerdict {
    if panic {
        return TrustVerdict {
            score: 0,
            status: SessionStatus::Blocked,
        };
    }

    let mut score = SCORE_BASE;

    if blink_count < BLINK_MIN_NATURAL {
        score -= LOW_BLINK_PENALTY;
    }

    if blink_count > BLINK_MAX_NATURAL {
        return TrustVerdict {
            score: score.max(0),
            status: SessionStatus::Failed,
        };
    }

    if emotion == Emotion::Fear {
        score -= FEAR_PENALTY;
    }

    score = score.max(0);

    let status = if score >= VERIFY_THRESHOLD {
        SessionStatus::Verified
    } else {
        SessionStatus::Failed
    };

    TrustVerdict { score, status }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_panic_blocks_regardless_of_other_inputs() {
        for blink in [0, 3, 6, 100] {
            for emotion in [Emotion::Neutral, Emotion::Happy, Emotion::Fear] {
                let verdict = evaluate(blink, emotion, true);
                assert_eq!(verdict.score, 0);
                assert_eq!(verdict.status, SessionStatus::Blocked);
            }
        }
    }

    #[test]
    fn test_low_blink_count_penalized() {
        let verdict = evaluate(0, Emotion::Neutral, false);
        assert_eq!(verdict.score, 80);
        assert_eq!(verdict.status, SessionStatus::Verified);
    }

    #[test]
    fn test_natural_blink_count_verifies() {
        let verdict = evaluate(3, Emotion::Neutral, false);
        assert_eq!(verdict.score, 100);
        assert_eq!(verdict.status, SessionStatus::Verified);
    }

    #[test]
    fn test_high_blink_count_fails_with_full_score() {
        // blink_count > 5 short-circuits before the fear penalty
        let verdict = evaluate(6, Emotion::Neutral, false);
        assert_eq!(verdict.score, 100);
        assert_eq!(verdict.status, SessionStatus::Failed);

        let verdict = evaluate(6, Emotion::Fear, false);
        assert_eq!(verdict.score, 100);
        assert_eq!(verdict.status, SessionStatus::Failed);
    }

    #[test]
    fn test_fear_penalty_alone_still_verifies() {
        let verdict = evaluate(3, Emotion::Fear, false);
        assert_eq!(verdict.score, 70);
        assert_eq!(verdict.status, SessionStatus::Verified);
    }

    #[test]
    fn test_low_blinks_plus_fear_fails() {
        let verdict = evaluate(1, Emotion::Fear, false);
        assert_eq!(verdict.score, 50);
        assert_eq!(verdict.status, SessionStatus::Failed);
    }

    #[test]
    fn test_happy_scores_like_neutral() {
        assert_eq!(
            evaluate(3, Emotion::Happy, false),
            evaluate(3, Emotion::Neutral, false)
        );
    }

    #[test]
    fn test_score_never_negative() {
        // Negative blink counts take the low-blink path
        let verdict = evaluate(-4, Emotion::Fear, false);
        assert_eq!(verdict.score, 50);
        assert!(verdict.score >= 0);
    }
}
