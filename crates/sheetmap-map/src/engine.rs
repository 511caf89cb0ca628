//! Mapping suggestion engine.
//!
//! Orchestrates per-sheet table matching and per-column candidate ranking
//! into the records the review UI consumes. Sheet-level suggestions prefer
//! an external provider when one is supplied and fall back to the local
//! matcher; column-level assignment is greedy one-to-one by descending
//! score, so every claim is explainable from the candidate list alone.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use sheetmap_infer::infer_type;
use sheetmap_model::{
    AUTO_SELECT_MIN, ColumnMapping, ConfidenceLevel, LOCAL_FALLBACK_CONFIDENCE, MappingAction,
    MappingCandidate, MappingSuggestionResult, ProviderError, SheetSuggestion, SourceColumn,
    SourceSheet, TableSuggestion, TargetTable,
};

use crate::column_match::rank_candidates;
use crate::table_match::find_best_table_match;

/// Pluggable source of sheet-to-table suggestions.
///
/// Implementations typically wrap a remote service; the engine treats the
/// call as an I/O boundary and tolerates absence, failure, and partial
/// coverage. Timeout and cancellation policy belong to the caller.
pub trait SheetSuggestionProvider {
    fn suggest(&self, sheet_names: &[String]) -> Result<Vec<SheetSuggestion>, ProviderError>;
}

/// Engine for suggesting sheet-to-table and column-to-column mappings
/// against a fixed target catalog.
///
/// All methods are pure with respect to the catalog; the engine holds no
/// mutable state and can be shared freely across worker tasks.
pub struct MappingEngine {
    tables: Vec<TargetTable>,
}

impl MappingEngine {
    pub fn new(tables: Vec<TargetTable>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &[TargetTable] {
        &self.tables
    }

    /// Look up a catalog table by name, case-insensitively.
    pub fn find_table(&self, name: &str) -> Option<&TargetTable> {
        self.tables
            .iter()
            .find(|table| table.name.eq_ignore_ascii_case(name))
    }

    /// Best local table match for a single sheet name.
    pub fn match_table(&self, sheet_name: &str) -> TableSuggestion {
        find_best_table_match(sheet_name, &self.tables)
    }

    /// Suggest a target table for every sheet.
    ///
    /// Provider results with positive confidence and a known table win;
    /// everything else falls back to the local matcher at the fixed
    /// fallback confidence. A provider failure is logged and routes all
    /// affected sheets onto the local path; it never aborts the batch.
    /// Every input sheet lands in exactly one of `mappings` or
    /// `unmapped_sheets`.
    pub fn suggest_tables(
        &self,
        sheets: &[SourceSheet],
        provider: Option<&dyn SheetSuggestionProvider>,
    ) -> MappingSuggestionResult {
        let mut provided: BTreeMap<String, SheetSuggestion> = BTreeMap::new();
        if let Some(provider) = provider {
            let names: Vec<String> = sheets.iter().map(|sheet| sheet.name.clone()).collect();
            match provider.suggest(&names) {
                Ok(suggestions) => {
                    for suggestion in suggestions {
                        if suggestion.confidence_score <= 0.0 {
                            continue;
                        }
                        if self.find_table(&suggestion.table_name).is_none() {
                            tracing::debug!(
                                sheet = %suggestion.sheet_name,
                                table = %suggestion.table_name,
                                "provider suggested a table missing from the catalog"
                            );
                            continue;
                        }
                        match provided.get(&suggestion.sheet_name) {
                            Some(existing)
                                if existing.confidence_score >= suggestion.confidence_score => {}
                            _ => {
                                provided.insert(suggestion.sheet_name.clone(), suggestion);
                            }
                        }
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "sheet suggestion provider failed; using local matching");
                }
            }
        }

        let mut result = MappingSuggestionResult::default();
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for sheet in sheets {
            if !seen.insert(sheet.name.as_str()) {
                continue;
            }
            if let Some(suggestion) = provided.get(&sheet.name) {
                result
                    .mappings
                    .insert(sheet.name.clone(), suggestion.table_name.clone());
                result.confidence.insert(
                    sheet.name.clone(),
                    suggestion.confidence_score.clamp(0.0, 1.0),
                );
                continue;
            }
            let local = self.match_table(&sheet.name);
            match local.table {
                Some(table) if local.score >= AUTO_SELECT_MIN => {
                    result.mappings.insert(sheet.name.clone(), table);
                    result
                        .confidence
                        .insert(sheet.name.clone(), LOCAL_FALLBACK_CONFIDENCE);
                }
                _ => result.unmapped_sheets.push(sheet.name.clone()),
            }
        }
        result
    }

    /// Build the per-column mapping record for every column of a sheet
    /// against one target table.
    ///
    /// Assignment is greedy one-to-one by descending score (ties:
    /// type-compatible first, then sheet order), so a claimed target always
    /// belongs to its best-scoring claimant. Columns whose acceptable
    /// candidates were all claimed default to `Skip`, never silently to
    /// `Create`. Candidates pointing at a target claimed with an
    /// equal-or-higher score are flagged as duplicates and kept visible.
    pub fn suggest_columns(
        &self,
        sheet: &SourceSheet,
        table: &TargetTable,
    ) -> BTreeMap<String, ColumnMapping> {
        let ranked: Vec<(&SourceColumn, Vec<MappingCandidate>)> = sheet
            .columns
            .iter()
            .map(|column| {
                let inferred = column
                    .inferred_type
                    .unwrap_or_else(|| infer_type(&column.header, &column.sample_values));
                (column, rank_candidates(&column.header, inferred, table))
            })
            .collect();

        // (column order, candidate index, score, compatible) for every
        // acceptable pair; sorted best first below.
        let mut pairs: Vec<(usize, usize, f64, bool)> = Vec::new();
        for (order, (_, candidates)) in ranked.iter().enumerate() {
            for (candidate_idx, candidate) in candidates.iter().enumerate() {
                if candidate.score >= AUTO_SELECT_MIN {
                    pairs.push((order, candidate_idx, candidate.score, candidate.type_compatible));
                }
            }
        }
        pairs.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.3.cmp(&a.3))
                .then_with(|| a.0.cmp(&b.0))
        });

        let mut claimed: BTreeMap<String, f64> = BTreeMap::new();
        let mut chosen: BTreeMap<usize, (String, f64)> = BTreeMap::new();
        for (order, candidate_idx, score, _) in pairs {
            if chosen.contains_key(&order) {
                continue;
            }
            let target = &ranked[order].1[candidate_idx].target_column;
            if claimed.contains_key(target) {
                continue;
            }
            claimed.insert(target.clone(), score);
            chosen.insert(order, (target.clone(), score));
        }

        let mut mappings = BTreeMap::new();
        for (order, (column, candidates)) in ranked.iter().enumerate() {
            let own_target = chosen.get(&order).map(|(target, _)| target.as_str());
            let mut suggestions = candidates.clone();
            for candidate in &mut suggestions {
                let claimed_elsewhere = Some(candidate.target_column.as_str()) != own_target
                    && claimed
                        .get(&candidate.target_column)
                        .is_some_and(|claimed_score| *claimed_score >= candidate.score);
                if claimed_elsewhere {
                    candidate.is_duplicate = true;
                }
            }
            let mapping = match chosen.get(&order) {
                Some((target, score)) => ColumnMapping {
                    source_header: column.header.clone(),
                    action: MappingAction::Map,
                    target_column: Some(target.clone()),
                    confidence_score: *score,
                    confidence_level: ConfidenceLevel::from_score(*score),
                    suggestions,
                },
                None => {
                    let top_score = suggestions.first().map_or(0.0, |candidate| candidate.score);
                    ColumnMapping {
                        source_header: column.header.clone(),
                        action: MappingAction::Skip,
                        target_column: None,
                        confidence_score: top_score,
                        confidence_level: ConfidenceLevel::from_score(top_score),
                        suggestions,
                    }
                }
            };
            mappings.insert(column.header.clone(), mapping);
        }
        mappings
    }
}
