//! Exhaustive key recovery over the 256-value shift key space
//!
//! Every key is tried, every candidate is scored, and the full list is
//! returned best-first. The key space is small and fixed, so there is no
//! early termination and no pruning. Brute-force attempts go through the
//! raw transform only and are never recorded in the operation history.

use crate::freq;
use crate::shift;

/// One decryption attempt: the key tried, the text it produced, and its
/// plausibility score. Ephemeral; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub key: u8,
    pub plaintext: String,
    pub score: f64,
}

/// Tries all 256 shift keys against the ciphertext and ranks the results.
///
/// # Arguments
///
/// * `ciphertext` - The text to attack; read-only, may be empty.
///
/// # Returns
///
/// Exactly 256 candidates, one per key in 0..=255, sorted by descending
/// plausibility score. Ties are broken by ascending key so the ranking is
/// deterministic across runs.
pub fn bruteforce(ciphertext: &str) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = (0..=u8::MAX)
        .map(|key| {
            let plaintext: String = shift::shift_text(ciphertext, key.wrapping_neg());
            let score: f64 = freq::score(&plaintext);
            Candidate {
                key,
                plaintext,
                score,
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.key.cmp(&b.key)));
    candidates
}
