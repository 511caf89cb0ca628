//! Mapping suggestion engine: sheet-to-table and column-to-column matching
//! over a target schema catalog, with schema proposals for whatever matched
//! nothing.

pub mod column_match;
pub mod engine;
pub mod normalize;
pub mod proposal;
pub mod similarity;
pub mod table_match;

pub use column_match::{SUGGESTION_LIMIT, rank_candidates};
pub use engine::{MappingEngine, SheetSuggestionProvider};
pub use normalize::{normalize, sanitize_sql_name, separator_variants, strip_separators};
pub use proposal::{propose_for_batch, propose_new_column, propose_new_table};
pub use similarity::similarity;
pub use table_match::find_best_table_match;
