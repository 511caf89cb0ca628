//! Column-to-column candidate ranking.
//!
//! Each target column is scored against the source header by normalized
//! similarity and annotated with type compatibility. Ranking is
//! deterministic: score descending, compatible candidates before
//! incompatible on ties, then target name ascending.

use std::cmp::Ordering;

use sheetmap_model::{MappingCandidate, SemanticType, TargetTable};

use crate::normalize::normalize;
use crate::similarity::similarity;

/// Number of ranked suggestions surfaced per source column.
pub const SUGGESTION_LIMIT: usize = 5;

/// Rank a table's columns against a source header.
///
/// Empty or fully-punctuation headers score zero everywhere rather than
/// erroring. Candidates come back sorted, truncated to
/// [`SUGGESTION_LIMIT`], with `is_duplicate` unset (claim tracking happens
/// during assignment).
pub fn rank_candidates(
    header: &str,
    inferred: SemanticType,
    table: &TargetTable,
) -> Vec<MappingCandidate> {
    let normalized_header = normalize(header);
    let mut candidates: Vec<MappingCandidate> = table
        .columns
        .iter()
        .map(|target| {
            let normalized_target = normalize(&target.name);
            let score = if normalized_header.is_empty() || normalized_target.is_empty() {
                0.0
            } else {
                similarity(&normalized_header, &normalized_target)
            };
            MappingCandidate {
                target_column: target.name.clone(),
                score,
                type_compatible: target.accepts(inferred.base()),
                is_duplicate: false,
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.type_compatible.cmp(&a.type_compatible))
            .then_with(|| a.target_column.cmp(&b.target_column))
    });
    candidates.truncate(SUGGESTION_LIMIT);
    candidates
}

#[cfg(test)]
mod tests {
    use sheetmap_model::TargetColumn;

    use super::*;

    fn loans_table() -> TargetTable {
        TargetTable::new(
            "loans",
            vec![
                TargetColumn::new("loan_amount", "numeric"),
                TargetColumn::new("loan_number", "text"),
                TargetColumn::new("interest_rate", "numeric"),
                TargetColumn::new("next_due_date", "timestamp with time zone"),
                TargetColumn::new("servicer_name", "text"),
                TargetColumn::new("upb", "numeric"),
            ],
        )
    }

    #[test]
    fn normalized_equality_ranks_first() {
        let candidates = rank_candidates("Loan Amount", SemanticType::Amount, &loans_table());
        assert_eq!(candidates[0].target_column, "loan_amount");
        assert_eq!(candidates[0].score, 1.0);
        assert!(candidates[0].type_compatible);
    }

    #[test]
    fn top_k_truncation() {
        let candidates = rank_candidates("Loan Amount", SemanticType::Amount, &loans_table());
        assert_eq!(candidates.len(), SUGGESTION_LIMIT);
    }

    #[test]
    fn type_compatibility_annotated() {
        let candidates = rank_candidates("Interest Rate", SemanticType::Rate, &loans_table());
        let rate = candidates
            .iter()
            .find(|candidate| candidate.target_column == "interest_rate")
            .expect("interest_rate is a candidate");
        assert!(rate.type_compatible);

        let candidates = rank_candidates("Interest Rate", SemanticType::Date, &loans_table());
        let rate = candidates
            .iter()
            .find(|candidate| candidate.target_column == "interest_rate")
            .expect("interest_rate is a candidate");
        assert!(!rate.type_compatible);
    }

    #[test]
    fn ties_break_on_compatibility_then_name() {
        let table = TargetTable::new(
            "t",
            vec![
                TargetColumn::new("zzz", "numeric"),
                TargetColumn::new("aaa", "numeric"),
            ],
        );
        // Both score zero against an unrelated header; numeric columns reject
        // text, so the tie falls through to name order.
        let candidates = rank_candidates("unrelated!", SemanticType::String, &table);
        assert_eq!(candidates[0].target_column, "aaa");

        let table = TargetTable::new(
            "t",
            vec![
                TargetColumn::new("aaa", "numeric"),
                TargetColumn::new("bbb", "text"),
            ],
        );
        // Equal zero scores: the text column is compatible with String and
        // ranks first despite the later name.
        let candidates = rank_candidates("unrelated!", SemanticType::String, &table);
        assert_eq!(candidates[0].target_column, "bbb");
    }

    #[test]
    fn empty_header_scores_zero() {
        let candidates = rank_candidates("", SemanticType::String, &loans_table());
        assert!(candidates.iter().all(|candidate| candidate.score == 0.0));
    }
}
