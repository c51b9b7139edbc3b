use sha2::{Digest, Sha256};
use tracing::warn;

/// Check a caller-supplied API key against the configured one.
///
/// Both keys are hashed first so the comparison time does not depend on how
/// many leading characters match. An empty configured key rejects everyone.
#[must_use]
pub fn verify_api_key(provided: Option<&str>, expected: &str) -> bool {
    if expected.is_empty() {
        warn!("NOTIFY_API_KEY is empty, rejecting authenticated request");
        return false;
    }

    let Some(provided) = provided else {
        return false;
    };

    let provided_digest = Sha256::digest(provided.as_bytes());
    let expected_digest = Sha256::digest(expected.as_bytes());

    provided_digest
        .iter()
        .zip(expected_digest.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
