//! Column profiling over raw tables.
//!
//! Reports the shape problems loan-tape and remittance exports actually
//! have: numeric values stored as formatted text, values padded with
//! whitespace, fully empty columns, and duplicate header names.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::csv_sheet::CsvTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub header: String,
    pub non_null: usize,
    pub null_ratio: f64,
    pub unique_ratio: f64,
    /// Values that parse as numbers once commas, quotes, and currency
    /// symbols are removed.
    pub numeric_as_text: usize,
    /// Values carrying leading or trailing whitespace.
    pub padded_values: usize,
    pub is_empty: bool,
    pub is_duplicate_header: bool,
}

pub fn profile_columns(table: &CsvTable) -> Vec<ColumnProfile> {
    let row_count = table.rows.len();

    let mut header_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for header in &table.headers {
        *header_counts.entry(header.as_str()).or_insert(0) += 1;
    }

    table
        .headers
        .iter()
        .enumerate()
        .map(|(col_idx, header)| {
            let mut non_null = 0usize;
            let mut numeric_as_text = 0usize;
            let mut padded_values = 0usize;
            let mut uniques: BTreeSet<&str> = BTreeSet::new();
            for row in &table.rows {
                let value = row.get(col_idx).map(String::as_str).unwrap_or("");
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    continue;
                }
                non_null += 1;
                uniques.insert(trimmed);
                if trimmed != value {
                    padded_values += 1;
                }
                if trimmed.parse::<f64>().is_err() && parses_as_formatted_number(trimmed) {
                    numeric_as_text += 1;
                }
            }
            let null_ratio = if row_count == 0 {
                1.0
            } else {
                (row_count.saturating_sub(non_null)) as f64 / row_count as f64
            };
            let unique_ratio = if non_null == 0 {
                0.0
            } else {
                uniques.len() as f64 / non_null as f64
            };
            ColumnProfile {
                header: header.clone(),
                non_null,
                null_ratio,
                unique_ratio,
                numeric_as_text,
                padded_values,
                is_empty: non_null == 0,
                is_duplicate_header: header_counts.get(header.as_str()).copied().unwrap_or(0) > 1,
            }
        })
        .collect()
}

/// Numbers hiding inside formatted text: `"1,234.56"`, `$450,000`, `6.25%`.
fn parses_as_formatted_number(value: &str) -> bool {
    let cleaned: String = value
        .chars()
        .filter(|ch| !matches!(ch, ',' | '"' | '$' | '%'))
        .collect();
    let cleaned = cleaned.trim();
    !cleaned.is_empty() && cleaned.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|header| (*header).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn detects_formatted_numbers_and_padding() {
        let fixture = table(
            &["Loan Amount", "Servicer"],
            &[
                &["\"450,000.00\"", " Greenway "],
                &["$325,000", "Greenway"],
                &["", "Greenway"],
            ],
        );
        let profiles = profile_columns(&fixture);
        assert_eq!(profiles[0].numeric_as_text, 2);
        assert_eq!(profiles[0].non_null, 2);
        assert!((profiles[0].null_ratio - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(profiles[1].padded_values, 1);
        assert!((profiles[1].unique_ratio - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn flags_empty_columns_and_duplicate_headers() {
        let fixture = table(
            &["Loan Number", "Notes", "Loan Number"],
            &[&["1001", "", "1001"], &["1002", "", "1002"]],
        );
        let profiles = profile_columns(&fixture);
        assert!(profiles[1].is_empty);
        assert!(profiles[0].is_duplicate_header);
        assert!(profiles[2].is_duplicate_header);
        assert!(!profiles[1].is_duplicate_header);
    }
}
