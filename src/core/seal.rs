//! Verdict seal: binds session identity, phrase, score, and timestamp
//! into a single SHA-256 digest

use sha2::{Digest, Sha256};

/// Compute the seal digest for a finalized session.
///
/// The preimage is the pipe-joined rendering
/// `"{session_id}|{phrase}|{trust_score}|{timestamp}"` with integers in
/// plain decimal. The rendering must stay byte-for-byte stable so that
/// digests remain reproducible across implementations.
///
/// Returns 64 characters of lowercase hex.
pub fn seal_digest(session_id: &str, phrase: &str, trust_score: i64, timestamp: i64) -> String {
    let preimage = format!("{}|{}|{}|{}", session_id, phrase, trust_score, timestamp);

    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    let digest = hasher.finalize();

    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

// =============================================================================
// TESTS
// =============================================================================
