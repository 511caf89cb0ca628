//! Semantic column type inference.
//!
//! A column's type is inferred from two independent signals: its field name
//! (a prioritized cascade over a curated keyword table and pattern families)
//! and its sampled values (ratio-based classification). Name evidence wins
//! except where the override rules say otherwise: leading-zero values force
//! text storage, and small-integer samples veto name-based date evidence.

pub mod keywords;
pub mod patterns;
pub mod samples;

use sheetmap_model::{CellValue, SemanticType, SourceColumn, SourceSheet};

pub use samples::{SAMPLE_CAP, SampleProfile};

/// Positional affix rules, applied after the keyword and pattern passes.
/// Short affixes require enough surrounding characters so that e.g. "paid"
/// does not read as an `id` column.
const AFFIX_RULES: &[(&str, SemanticType)] = &[
    ("date", SemanticType::Date),
    ("dt", SemanticType::Date),
    ("amount", SemanticType::Amount),
    ("amt", SemanticType::Amount),
    ("pct", SemanticType::Rate),
    ("rate", SemanticType::Rate),
    ("percent", SemanticType::Rate),
    ("id", SemanticType::Id),
    ("key", SemanticType::Id),
    ("num", SemanticType::Id),
    ("number", SemanticType::Id),
];

/// Canonical snake_case key for a field name: camel-case split, lowercased,
/// separator runs collapsed to single underscores, punctuation stripped.
pub fn name_key(raw: &str) -> String {
    let mut snake = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            if prev_lower && ch.is_ascii_uppercase() {
                snake.push('_');
            }
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
            snake.push(ch.to_ascii_lowercase());
        } else {
            snake.push('_');
            prev_lower = false;
        }
    }
    let mut key = String::with_capacity(snake.len());
    let mut prev_underscore = true;
    for ch in snake.chars() {
        if ch == '_' {
            if !prev_underscore {
                key.push('_');
            }
            prev_underscore = true;
        } else {
            key.push(ch);
            prev_underscore = false;
        }
    }
    while key.ends_with('_') {
        key.pop();
    }
    key
}

/// Name-based cascade: exact keyword, pattern families, bounded substring,
/// positional affixes, then unbounded substring. First hit wins; `None` when
/// nothing matched.
pub fn infer_from_name(header: &str) -> Option<SemanticType> {
    let key = name_key(header);
    if key.is_empty() {
        return None;
    }

    if let Some(semantic_type) = keywords::exact_keyword(&key) {
        return Some(semantic_type);
    }

    if let Some(semantic_type) = patterns::pattern_match(&key) {
        return Some(semantic_type);
    }

    let tokens: Vec<&str> = key.split('_').collect();
    let compact = key.replace('_', "");

    // Bounded pass: whole tokens, or prefixes/suffixes of the compact name.
    for (keyword, semantic_type) in keywords::substring_keywords() {
        if tokens.contains(&keyword)
            || (compact.len() > keyword.len()
                && (compact.starts_with(keyword) || compact.ends_with(keyword)))
        {
            return Some(semantic_type);
        }
    }

    for (affix, semantic_type) in AFFIX_RULES {
        if tokens.first() == Some(affix) || tokens.last() == Some(affix) {
            return Some(*semantic_type);
        }
        if compact.len() > affix.len() + 2
            && (compact.starts_with(affix) || compact.ends_with(affix))
        {
            return Some(*semantic_type);
        }
    }

    // Unbounded fallback: lowest precision, last resort.
    for (keyword, semantic_type) in keywords::substring_keywords() {
        if compact.contains(keyword) {
            return Some(semantic_type);
        }
    }

    None
}

/// Infer the semantic type of a column from its field name and sampled
/// values. Total: malformed or empty input degrades to `String`.
pub fn infer_type(header: &str, sample_values: &[CellValue]) -> SemanticType {
    let profile = SampleProfile::collect(sample_values);

    // Leading zeros must survive storage, whatever the name says.
    if profile.forces_text() {
        return SemanticType::String;
    }

    let named = infer_from_name(header);

    // Name-based date evidence never overrides strong small-integer sample
    // evidence ("Days Past Due", "Payment Day").
    if named == Some(SemanticType::Date) && profile.dominated_by_small_integers() {
        return SemanticType::Number;
    }

    named.unwrap_or_else(|| profile.classify())
}

/// Attach the inferred type to a column in place.
pub fn infer_column(column: &mut SourceColumn) {
    column.inferred_type = Some(infer_type(&column.header, &column.sample_values));
}

/// Attach inferred types to every column of a sheet.
pub fn infer_sheet(sheet: &mut SourceSheet) {
    for column in &mut sheet.columns {
        infer_column(column);
    }
}


#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::name_key;

    proptest! {
        #[test]
        fn name_key_is_idempotent(raw in ".*") {
            let once = name_key(&raw);
            prop_assert_eq!(name_key(&once), once);
        }

        #[test]
        fn name_key_is_total(raw in ".*") {
            let key = name_key(&raw);
            prop_assert!(key.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'));
        }
    }
}
