//! Curated keyword table for name-based type inference.
//!
//! Built once at startup and read-only for the process lifetime. Keywords are
//! matched in three passes of decreasing precision: exact equality, bounded
//! (word-boundary) substring, and unbounded substring.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use sheetmap_model::SemanticType;

/// Keyword to semantic type, keyed by lowercased token.
pub static KEYWORD_TYPES: LazyLock<BTreeMap<&'static str, SemanticType>> = LazyLock::new(|| {
    let entries: &[(&str, SemanticType)] = &[
        // Dates
        ("date", SemanticType::Date),
        ("dt", SemanticType::Date),
        ("timestamp", SemanticType::Date),
        ("dob", SemanticType::Date),
        ("maturity", SemanticType::Date),
        // Monetary amounts
        ("amount", SemanticType::Amount),
        ("amt", SemanticType::Amount),
        ("balance", SemanticType::Amount),
        ("upb", SemanticType::Amount),
        ("principal", SemanticType::Amount),
        ("payment", SemanticType::Amount),
        ("escrow", SemanticType::Amount),
        ("fee", SemanticType::Amount),
        ("cost", SemanticType::Amount),
        ("price", SemanticType::Amount),
        ("proceeds", SemanticType::Amount),
        // Rates and ratios
        ("rate", SemanticType::Rate),
        ("apr", SemanticType::Rate),
        ("ltv", SemanticType::Rate),
        ("cltv", SemanticType::Rate),
        ("pct", SemanticType::Rate),
        ("percent", SemanticType::Rate),
        ("percentage", SemanticType::Rate),
        ("margin", SemanticType::Rate),
        // Plain numbers
        ("fico", SemanticType::Number),
        ("score", SemanticType::Number),
        ("age", SemanticType::Number),
        ("term", SemanticType::Number),
        ("count", SemanticType::Number),
        ("units", SemanticType::Number),
        ("qty", SemanticType::Number),
        // Booleans
        ("flag", SemanticType::Boolean),
        ("indicator", SemanticType::Boolean),
        ("active", SemanticType::Boolean),
        ("delinquent", SemanticType::Boolean),
        // Identifiers (stored as text to preserve formatting)
        ("id", SemanticType::Id),
        ("key", SemanticType::Id),
        ("guid", SemanticType::Id),
        ("uuid", SemanticType::Id),
        ("zip", SemanticType::Id),
        ("ssn", SemanticType::Id),
        ("cusip", SemanticType::Id),
        ("pool", SemanticType::Id),
        // Plain text; listed so the bounded pass stops before lower-precision
        // steps can misfire on these common headers.
        ("name", SemanticType::String),
        ("address", SemanticType::String),
        ("city", SemanticType::String),
        ("state", SemanticType::String),
        ("status", SemanticType::String),
        ("type", SemanticType::String),
        ("description", SemanticType::String),
        ("notes", SemanticType::String),
        ("comment", SemanticType::String),
        ("servicer", SemanticType::String),
        ("investor", SemanticType::String),
    ];
    entries.iter().copied().collect()
});

/// Exact keyword lookup over a lowercased token.
pub fn exact_keyword(token: &str) -> Option<SemanticType> {
    KEYWORD_TYPES.get(token).copied()
}

/// Keywords long enough for substring matching (length >= 3); short tokens
/// like `dt` and `id` are handled by the positional affix rules instead.
pub fn substring_keywords() -> impl Iterator<Item = (&'static str, SemanticType)> {
    KEYWORD_TYPES
        .iter()
        .filter(|(keyword, _)| keyword.len() >= 3)
        .map(|(keyword, ty)| (*keyword, *ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup() {
        assert_eq!(exact_keyword("fico"), Some(SemanticType::Number));
        assert_eq!(exact_keyword("upb"), Some(SemanticType::Amount));
        assert_eq!(exact_keyword("unknown"), None);
    }

    #[test]
    fn short_keywords_excluded_from_substring_pass() {
        assert!(substring_keywords().all(|(keyword, _)| keyword.len() >= 3));
    }
}
