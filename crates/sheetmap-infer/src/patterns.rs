//! Name-pattern families for type inference.
//!
//! Each family is an ordered list of regexes compiled once at startup and
//! applied to the snake-cased field name. Families are checked in order:
//! dates, booleans, then numeric scores. A date hit here is still subject to
//! the small-integer sample override in the cascade.

use std::sync::LazyLock;

use regex::Regex;
use sheetmap_model::SemanticType;

/// A compiled pattern family mapping to a single semantic type.
pub struct PatternFamily {
    pub semantic_type: SemanticType,
    patterns: Vec<Regex>,
}

impl PatternFamily {
    fn new(semantic_type: SemanticType, patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern).expect("static pattern compiles"))
            .collect();
        Self {
            semantic_type,
            patterns,
        }
    }

    pub fn matches(&self, name_key: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(name_key))
    }
}

/// Ordered pattern families, checked first to last.
pub static PATTERN_FAMILIES: LazyLock<Vec<PatternFamily>> = LazyLock::new(|| {
    vec![
        PatternFamily::new(
            SemanticType::Date,
            &[
                r"(^|_)(date|dt)$",
                r"^(date|dt)(_|$)",
                r"timestamp",
                r"birth|dob",
                r"(^|_)due(_|$)",
                r"(^|_)days?(_|$)",
                r"expir",
                r"maturity",
                r"(^|_)paid_(thru|through|to)(_|$)",
                r"(^|_)(bk|bankruptcy|fc|foreclosure)_(filed|discharge|dismissed|petition|sale)(_|$)",
            ],
        ),
        PatternFamily::new(
            SemanticType::Boolean,
            &[
                r"^(is|has|can)_",
                r"flag$",
                r"required$",
                r"indicator$",
                r"(^|_)(escrowed|insured|waived)(_|$)",
                r"(escrow|insurance)_(required|active|waived)",
            ],
        ),
        PatternFamily::new(
            SemanticType::Number,
            &[r"score$", r"fico", r"rating$", r"grade$", r"level$"],
        ),
    ]
});

/// First pattern family matching the snake-cased name, in family order.
pub fn pattern_match(name_key: &str) -> Option<SemanticType> {
    PATTERN_FAMILIES
        .iter()
        .find(|family| family.matches(name_key))
        .map(|family| family.semantic_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_family_hits() {
        assert_eq!(pattern_match("next_due"), Some(SemanticType::Date));
        assert_eq!(pattern_match("payment_day"), Some(SemanticType::Date));
        assert_eq!(pattern_match("maturity"), Some(SemanticType::Date));
        assert_eq!(pattern_match("paid_thru"), Some(SemanticType::Date));
        assert_eq!(pattern_match("bk_filed"), Some(SemanticType::Date));
        assert_eq!(pattern_match("expiration"), Some(SemanticType::Date));
    }

    #[test]
    fn boolean_family_hits() {
        assert_eq!(pattern_match("is_active"), Some(SemanticType::Boolean));
        assert_eq!(pattern_match("escrow_required"), Some(SemanticType::Boolean));
        assert_eq!(pattern_match("insured"), Some(SemanticType::Boolean));
    }

    #[test]
    fn number_family_hits() {
        assert_eq!(pattern_match("credit_score"), Some(SemanticType::Number));
        assert_eq!(pattern_match("risk_grade"), Some(SemanticType::Number));
    }

    #[test]
    fn date_checked_before_number() {
        // "due_score"-style collisions resolve to the earlier family.
        assert_eq!(pattern_match("due_score"), Some(SemanticType::Date));
    }

    #[test]
    fn no_family_match() {
        assert_eq!(pattern_match("servicer_name"), None);
    }
}
