//! Sheet-to-table matching.
//!
//! Strategies run in strict priority order and the first success wins:
//! exact normalized equality, plural/singular variant, separator-synonym
//! rewrite, then a scored containment heuristic. No success means the caller
//! proposes a new table.

use sheetmap_model::{MatchType, TableSuggestion, TargetTable};

use crate::normalize::{normalize, separator_variants, strip_separators};

const PLURAL_VARIANT_SCORE: f64 = 0.95;
const SEPARATOR_VARIANT_SCORE: f64 = 0.9;
const CONTAINMENT_ACCEPT_MIN: f64 = 0.3;
const PREFIX_BONUS: f64 = 0.1;
const PREFIX_BONUS_MIN_LEN: usize = 3;
const RAW_EQUALITY_BONUS: f64 = 0.2;

/// Find the best target table for a sheet name.
///
/// Returns [`TableSuggestion::none`] when no strategy succeeds (including
/// empty input), never an error.
pub fn find_best_table_match(sheet_name: &str, tables: &[TargetTable]) -> TableSuggestion {
    let normalized_sheet = normalize(sheet_name);
    if normalized_sheet.is_empty() || tables.is_empty() {
        return TableSuggestion::none();
    }

    // 1. Exact normalized equality.
    for table in tables {
        let normalized_table = normalize(&table.name);
        if !normalized_table.is_empty() && normalized_sheet == normalized_table {
            return TableSuggestion {
                table: Some(table.name.clone()),
                score: 1.0,
                match_type: MatchType::Exact,
            };
        }
    }

    // 2. Plural/singular variant.
    for table in tables {
        let normalized_table = normalize(&table.name);
        if plural_variant_eq(&normalized_sheet, &normalized_table) {
            return TableSuggestion {
                table: Some(table.name.clone()),
                score: PLURAL_VARIANT_SCORE,
                match_type: MatchType::Partial,
            };
        }
    }

    // 3. Separator-synonym: equality in any one canonical separator style.
    let sheet_variants = separator_variants(sheet_name);
    for table in tables {
        let table_variants = separator_variants(&table.name);
        let matched = sheet_variants
            .iter()
            .zip(table_variants.iter())
            .any(|(sheet_form, table_form)| {
                !sheet_form.is_empty() && sheet_form == table_form
            });
        if matched {
            return TableSuggestion {
                table: Some(table.name.clone()),
                score: SEPARATOR_VARIANT_SCORE,
                match_type: MatchType::Partial,
            };
        }
    }

    // 4. Containment heuristic over normalized names (singular forms
    // included, so "Loan Info" can reach "loans").
    let mut best: Option<(&TargetTable, f64)> = None;
    for table in tables {
        let normalized_table = normalize(&table.name);
        if normalized_table.is_empty() {
            continue;
        }
        let Some(mut score) = containment_score(&normalized_sheet, &normalized_table) else {
            continue;
        };
        if common_prefix_len(&normalized_sheet, &normalized_table) > PREFIX_BONUS_MIN_LEN {
            score += PREFIX_BONUS;
        }
        if strip_separators(sheet_name).eq_ignore_ascii_case(&strip_separators(&table.name)) {
            score += RAW_EQUALITY_BONUS;
        }
        let score = score.min(1.0);
        let better = match best {
            None => true,
            Some((best_table, best_score)) => {
                score > best_score || (score == best_score && table.name < best_table.name)
            }
        };
        if better {
            best = Some((table, score));
        }
    }
    if let Some((table, score)) = best
        && score > CONTAINMENT_ACCEPT_MIN
    {
        return TableSuggestion {
            table: Some(table.name.clone()),
            score,
            match_type: MatchType::Fuzzy,
        };
    }

    TableSuggestion::none()
}

/// Equality after adding/removing a trailing `s` on whichever side lacks/has
/// it.
fn plural_variant_eq(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.strip_suffix('s').is_some_and(|stem| stem == b)
        || b.strip_suffix('s').is_some_and(|stem| stem == a)
}

/// Length-ratio score when one name (or its singular form) contains the
/// other. `None` when there is no containment at all.
fn containment_score(a: &str, b: &str) -> Option<f64> {
    let a_singular = a.strip_suffix('s').unwrap_or(a);
    let b_singular = b.strip_suffix('s').unwrap_or(b);
    let pairs = [(a, b), (a, b_singular), (a_singular, b), (a_singular, b_singular)];
    pairs
        .iter()
        .filter(|(left, right)| {
            !left.is_empty() && !right.is_empty() && (left.contains(right) || right.contains(left))
        })
        .map(|(left, right)| {
            let min = left.len().min(right.len()) as f64;
            let max = left.len().max(right.len()) as f64;
            min / max
        })
        .fold(None, |best: Option<f64>, score| {
            Some(best.map_or(score, |value| value.max(score)))
        })
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(names: &[&str]) -> Vec<TargetTable> {
        names
            .iter()
            .map(|name| TargetTable::new(*name, Vec::new()))
            .collect()
    }

    #[test]
    fn exact_match_beats_containment() {
        let catalog = tables(&["loans", "loan_payments"]);
        let suggestion = find_best_table_match("Loans", &catalog);
        assert_eq!(suggestion.table.as_deref(), Some("loans"));
        assert_eq!(suggestion.match_type, MatchType::Exact);
        assert_eq!(suggestion.score, 1.0);
    }

    #[test]
    fn plural_variant() {
        let catalog = tables(&["borrowers"]);
        let suggestion = find_best_table_match("Borrower", &catalog);
        assert_eq!(suggestion.table.as_deref(), Some("borrowers"));
        assert_eq!(suggestion.match_type, MatchType::Partial);
    }

    #[test]
    fn separator_styles_are_interchangeable() {
        let catalog = tables(&["loan_payments"]);
        for sheet in ["Loan Payments", "loan-payments", "LOAN_PAYMENTS"] {
            let suggestion = find_best_table_match(sheet, &catalog);
            assert_eq!(suggestion.table.as_deref(), Some("loan_payments"), "sheet {sheet}");
            assert!(suggestion.score >= SEPARATOR_VARIANT_SCORE);
        }
    }

    #[test]
    fn containment_reaches_prefixed_sheets() {
        let catalog = tables(&["loans", "loan_payments"]);
        let suggestion = find_best_table_match("Loan Info", &catalog);
        assert_eq!(suggestion.table.as_deref(), Some("loans"));
        assert_eq!(suggestion.match_type, MatchType::Fuzzy);
        assert!(suggestion.score > CONTAINMENT_ACCEPT_MIN, "got {}", suggestion.score);
    }

    #[test]
    fn containment_on_suffix() {
        let catalog = tables(&["loans", "loan_payments"]);
        let suggestion = find_best_table_match("payments", &catalog);
        assert_eq!(suggestion.table.as_deref(), Some("loan_payments"));
        assert_eq!(suggestion.match_type, MatchType::Fuzzy);
    }

    #[test]
    fn weak_containment_rejected() {
        // "ar" is contained in "archived_remittances" but far too short.
        let catalog = tables(&["archived_remittances"]);
        let suggestion = find_best_table_match("AR", &catalog);
        assert_eq!(suggestion.table, None);
        assert_eq!(suggestion.match_type, MatchType::None);
    }

    #[test]
    fn empty_inputs_never_match() {
        assert_eq!(find_best_table_match("", &tables(&["loans"])).table, None);
        assert_eq!(find_best_table_match("Loans", &[]).table, None);
    }

    #[test]
    fn camel_case_sheets_match_snake_case_tables() {
        let catalog = tables(&["loan_info"]);
        let suggestion = find_best_table_match("LoanInfo", &catalog);
        assert_eq!(suggestion.table.as_deref(), Some("loan_info"));
        assert_eq!(suggestion.match_type, MatchType::Exact);
    }
}
