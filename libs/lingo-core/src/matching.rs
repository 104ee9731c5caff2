//! Answer comparison for quizzes and pronunciation practice.

use serde::{Deserialize, Serialize};

/// Similarity a spoken attempt must exceed to count as well pronounced.
pub const PRONUNCIATION_THRESHOLD: f64 = 0.7;

/// Whether a quiz answer matches the expected option.
///
/// Both sides are trimmed; the comparison is otherwise exact and
/// case-sensitive because options are shown verbatim.
pub fn answers_match(submitted: &str, correct: &str) -> bool {
    submitted.trim() == correct.trim()
}

/// Result of checking what the learner said against the expected term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PronunciationCheck {
    /// Whether the attempt passes the threshold.
    pub is_match: bool,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    /// Normalized attempt (for display).
    pub heard_normalized: String,
    /// Normalized expected text (for display).
    pub expected_normalized: String,
}

/// Score a spoken attempt against the expected text.
pub fn check_pronunciation(heard: &str, expected: &str) -> PronunciationCheck {
    let heard_normalized = normalize_whitespace(heard);
    let expected_normalized = normalize_whitespace(expected);
    let similarity = positional_similarity(&heard_normalized, &expected_normalized);
    PronunciationCheck {
        is_match: similarity > PRONUNCIATION_THRESHOLD,
        similarity,
        heard_normalized,
        expected_normalized,
    }
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fraction of aligned character positions that agree, ignoring case.
///
/// Identical strings score 1.0; otherwise matches are counted position by
/// position and divided by the longer length.
pub fn positional_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.trim().to_lowercase().chars().collect();
    let b: Vec<char> = b.trim().to_lowercase().chars().collect();

    if a == b {
        return 1.0;
    }

    let matches = a.iter().zip(&b).filter(|(x, y)| x == y).count();
    matches as f64 / a.len().max(b.len()) as f64
}
