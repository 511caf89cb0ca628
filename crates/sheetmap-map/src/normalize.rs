//! Identifier canonicalization.
//!
//! `normalize` is the basis for every equality-style comparison in the
//! matchers; two non-empty names with equal normalized forms are a perfect
//! match before any fuzzy scoring runs. All functions here are total and
//! idempotent.

/// Canonicalize an identifier for comparison: lowercase and keep only ASCII
/// letters and digits (whitespace, separators, and punctuation dropped).
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// The three canonical separator styles of a name: spaces-only,
/// hyphens-only, underscores-only, all lowercased. Makes space, hyphen, and
/// underscore fully interchangeable for the separator-synonym strategy.
pub fn separator_variants(raw: &str) -> [String; 3] {
    [
        rewrite_separators(raw, ' '),
        rewrite_separators(raw, '-'),
        rewrite_separators(raw, '_'),
    ]
}

fn rewrite_separators(raw: &str, separator: char) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' || ch == '.' || ch == '/' {
            if !out.is_empty() {
                pending_separator = true;
            }
        } else {
            if pending_separator {
                out.push(separator);
                pending_separator = false;
            }
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}

/// Remove separators while preserving case, for the raw-equality bonus in
/// the containment heuristic.
pub fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '-' && *ch != '_')
        .collect()
}

/// Sanitize a name for use as a SQL identifier: lowercase, whitespace to
/// underscores, anything outside `[a-z0-9_]` dropped, underscore runs
/// collapsed, leading/trailing underscores trimmed.
pub fn sanitize_sql_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_underscore = true;
    for ch in raw.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            prev_underscore = false;
        } else if (ch.is_whitespace() || ch == '_') && !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
