use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum score at which a suggestion is auto-selected.
pub const AUTO_SELECT_MIN: f64 = 0.3;
/// Minimum score for the high-confidence band.
pub const HIGH_CONFIDENCE_MIN: f64 = 0.6;
/// Confidence assigned when the local table matcher accepts a sheet after the
/// external provider returned nothing usable for it.
pub const LOCAL_FALLBACK_CONFIDENCE: f64 = 0.7;

/// How a table suggestion was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Normalized names are identical.
    Exact,
    /// Name-variant match (plural/singular or separator style).
    Partial,
    /// Containment-scored heuristic match.
    Fuzzy,
    /// No strategy succeeded.
    None,
    /// A new table is being proposed instead.
    New,
}

/// The action recorded for a source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingAction {
    /// Map onto an existing target column.
    Map,
    /// Create a new target column.
    Create,
    /// Leave unmapped pending user choice.
    Skip,
}

/// Confidence bucket derived from a continuous score.
///
/// The bucket is a pure function of the score with fixed thresholds; it is
/// never set independently of the score it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// Bucket a score: `High` at or above 0.6, `Medium` at or above 0.3,
    /// `Low` below.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_CONFIDENCE_MIN {
            ConfidenceLevel::High
        } else if score >= AUTO_SELECT_MIN {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high confidence - auto-selected",
            ConfidenceLevel::Medium => "medium confidence - should review",
            ConfidenceLevel::Low => "low confidence - needs manual mapping",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::Low => write!(f, "Low"),
        }
    }
}

/// One ranked target-column candidate for a source column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingCandidate {
    pub target_column: String,
    pub score: f64,
    pub type_compatible: bool,
    /// True when this target was already claimed by a different source column
    /// with an equal-or-higher score in the same sheet.
    #[serde(default)]
    pub is_duplicate: bool,
}

/// The table suggestion for a source sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSuggestion {
    pub table: Option<String>,
    pub score: f64,
    pub match_type: MatchType,
}

impl TableSuggestion {
    pub fn none() -> Self {
        Self {
            table: None,
            score: 0.0,
            match_type: MatchType::None,
        }
    }
}

/// Final per-column mapping record for one source column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub source_header: String,
    pub action: MappingAction,
    pub target_column: Option<String>,
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub suggestions: Vec<MappingCandidate>,
}

/// Sheet-to-table suggestions for a whole import batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingSuggestionResult {
    /// Accepted sheet-name to table-name mappings.
    pub mappings: BTreeMap<String, String>,
    /// Confidence score per mapped sheet.
    pub confidence: BTreeMap<String, f64>,
    /// Sheets left for manual review.
    pub unmapped_sheets: Vec<String>,
}

/// A `(sheet, table, confidence)` triple from the external suggestion
/// provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSuggestion {
    pub sheet_name: String,
    pub table_name: String,
    pub confidence_score: f64,
}
