//! Character-frequency analysis and plausibility scoring
//!
//! The score is the share of a text's frequency mass that falls inside a
//! fixed reference class of "plausibly human-readable" symbols: ASCII
//! letters, digits, punctuation, and whitespace. It is a heuristic for
//! ranking brute-force candidates, not a statistical language model.

use std::collections::BTreeMap;

/// Relative frequency of each distinct character within one text.
///
/// Frequencies sum to 1.0 over all observed symbols; an empty text yields
/// an empty distribution.
pub type FrequencyDistribution = BTreeMap<char, f64>;

/// Checks whether a character belongs to the scoring reference class.
pub fn is_reference_class(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_ascii_punctuation() || c.is_ascii_whitespace()
}

/// Counts the relative frequency of each distinct character in the text.
///
/// # Arguments
///
/// * `text` - The input text to analyze.
///
/// # Returns
///
/// A map from character to its count divided by the total length.
pub fn distribution(text: &str) -> FrequencyDistribution {
    let mut counts: BTreeMap<char, u32> = BTreeMap::new();
    let mut total: u32 = 0;

    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }

    counts
        .into_iter()
        .map(|(c, count)| (c, count as f64 / total as f64))
        .collect()
}

/// Scores how plausibly `text` is human-readable content.
///
/// Sums the frequency mass of all characters in the reference class.
/// Higher is more plausible; an empty text scores 0.0.
pub fn score(text: &str) -> f64 {
    distribution(text)
        .iter()
        .filter(|(c, _)| is_reference_class(**c))
        .map(|(_, freq)| freq)
        .sum()
}
