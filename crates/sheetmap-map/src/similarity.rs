//! Fuzzy string similarity.
//!
//! Normalized-equality short-circuits first, then Levenshtein edit distance
//! scaled by the longer input. Symmetric and bounded to [0, 1].

use rapidfuzz::distance::levenshtein;

use crate::normalize::normalize;

/// Similarity between two raw strings.
///
/// Both empty is a perfect match; exactly one empty scores zero. Equal
/// non-empty normalized forms score 1.0 without running edit distance,
/// so canonical-equal names always override any fuzzy score. Otherwise
/// `1 - d / max_len` over the raw strings, floored at zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let normalized_a = normalize(a);
    if !normalized_a.is_empty() && normalized_a == normalize(b) {
        return 1.0;
    }

    let distance = levenshtein::distance(a.chars(), b.chars());
    let max_len = a.chars().count().max(b.chars().count());
    (1.0 - distance as f64 / max_len as f64).max(0.0)
}
