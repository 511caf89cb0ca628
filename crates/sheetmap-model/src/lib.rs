pub mod error;
pub mod mapping;
pub mod proposal;
pub mod schema;
pub mod source;
pub mod types;

pub use error::ProviderError;
pub use mapping::{
    AUTO_SELECT_MIN, ColumnMapping, ConfidenceLevel, HIGH_CONFIDENCE_MIN,
    LOCAL_FALLBACK_CONFIDENCE, MappingAction, MappingCandidate, MappingSuggestionResult,
    MatchType, SheetSuggestion, TableSuggestion,
};
pub use proposal::{NewColumnProposal, NewTableProposal, ProposedColumn, SchemaProposal};
pub use schema::{SqlFamily, TargetColumn, TargetTable};
pub use source::{CellValue, SourceColumn, SourceSheet};
pub use types::{BaseType, SemanticType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_mapping_serializes() {
        let mapping = ColumnMapping {
            source_header: "Loan Amount".to_string(),
            action: MappingAction::Map,
            target_column: Some("loan_amount".to_string()),
            confidence_score: 0.92,
            confidence_level: ConfidenceLevel::from_score(0.92),
            suggestions: vec![MappingCandidate {
                target_column: "loan_amount".to_string(),
                score: 0.92,
                type_compatible: true,
                is_duplicate: false,
            }],
        };
        let json = serde_json::to_string(&mapping).expect("serialize mapping");
        let round: ColumnMapping = serde_json::from_str(&json).expect("deserialize mapping");
        assert_eq!(round.action, MappingAction::Map);
        assert_eq!(round.confidence_level, ConfidenceLevel::High);
    }
}
