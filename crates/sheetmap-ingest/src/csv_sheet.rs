//! CSV reading and source-sheet extraction.
//!
//! Real exports rarely start with a clean header row: title banners, report
//! dates, and blank padding rows come first. The header row is detected by
//! scoring the first few rows on how identifier-like and how data-like they
//! are, then everything below it becomes data rows.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use sheetmap_model::{CellValue, SourceColumn, SourceSheet};

use crate::error::{IngestError, Result};

/// Non-empty values kept per column as inference samples.
pub const SAMPLE_LIMIT: usize = 20;

/// A raw delimited table: detected headers plus the data rows below them.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    total: usize,
    non_empty: usize,
    numeric: usize,
    alpha: usize,
    identifier: usize,
}

impl RowStats {
    fn non_empty_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.non_empty as f64 / self.total as f64
        }
    }

    fn numeric_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.numeric as f64 / self.total as f64
        }
    }

    fn alpha_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.alpha as f64 / self.total as f64
        }
    }

    fn identifier_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.identifier as f64 / self.total as f64
        }
    }

    fn empty_ratio(self) -> f64 {
        1.0 - self.non_empty_ratio()
    }
}

fn row_stats(row: &[String]) -> RowStats {
    let mut stats = RowStats {
        total: row.len(),
        ..RowStats::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            stats.numeric += 1;
        }
        if trimmed.chars().any(|ch| ch.is_ascii_alphabetic()) {
            stats.alpha += 1;
        }
        if is_identifier_like(trimmed) {
            stats.identifier += 1;
        }
    }
    stats
}

fn is_identifier_like(value: &str) -> bool {
    if value.contains(' ') {
        return false;
    }
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn is_data_like(stats: RowStats) -> bool {
    stats.numeric_ratio() >= 0.2 || stats.empty_ratio() >= 0.2
}

fn is_identifier_row(stats: RowStats) -> bool {
    stats.identifier_ratio() >= 0.6 && stats.numeric_ratio() <= 0.1
}

fn is_header_like(stats: RowStats) -> bool {
    stats.non_empty_ratio() >= 0.8 && stats.alpha_ratio() >= 0.5 && stats.numeric_ratio() <= 0.1
}

/// Pick the last header-like row before data starts, preferring
/// identifier-style headers over free-text banner rows.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    if rows.is_empty() {
        return 0;
    }
    let probe = rows.len().min(5);
    let stats: Vec<RowStats> = rows.iter().take(probe).map(|row| row_stats(row)).collect();
    let mut data_index = None;
    for (idx, stat) in stats.iter().enumerate() {
        if is_data_like(*stat) {
            data_index = Some(idx);
            break;
        }
    }
    let search_end = data_index.unwrap_or(1).max(1);
    let mut candidate = 0usize;
    let mut picked_identifier = false;
    for idx in 0..search_end {
        let stat = stats[idx];
        if is_identifier_row(stat) {
            candidate = idx;
            picked_identifier = true;
        } else if !picked_identifier && is_header_like(stat) {
            candidate = idx;
        }
    }
    candidate
}

/// Read a delimited file into headers and data rows.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }
    let header_index = detect_header_row(&raw_rows);
    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in raw_rows.iter().skip(header_index + 1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}

/// Convert a raw table into the engine's source-sheet shape, keeping up to
/// [`SAMPLE_LIMIT`] non-empty sample values per column.
pub fn to_source_sheet(name: &str, table: &CsvTable) -> SourceSheet {
    let mut samples: BTreeMap<usize, Vec<CellValue>> = BTreeMap::new();
    for row in &table.rows {
        for (col_idx, _) in table.headers.iter().enumerate() {
            let value = row.get(col_idx).map(String::as_str).unwrap_or("");
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            let column_samples = samples.entry(col_idx).or_default();
            if column_samples.len() < SAMPLE_LIMIT {
                column_samples.push(CellValue::Text(trimmed.to_string()));
            }
        }
    }
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(col_idx, header)| SourceColumn {
            header: header.clone(),
            sample_values: samples.remove(&col_idx).unwrap_or_default(),
            inferred_type: None,
        })
        .collect();
    SourceSheet {
        name: name.to_string(),
        columns,
        row_count: table.rows.len(),
    }
}

/// Read a CSV file straight into a source sheet named after the file stem.
pub fn read_csv_sheet(path: &Path) -> Result<SourceSheet> {
    let table = read_csv_table(path)?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sheet");
    tracing::debug!(
        sheet = name,
        columns = table.headers.len(),
        rows = table.rows.len(),
        "ingested csv sheet"
    );
    Ok(to_source_sheet(name, &table))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect()
    }

    #[test]
    fn header_detected_on_first_row() {
        let table = rows(&[
            &["Loan Number", "Loan Amount", "Next Due Date"],
            &["1001", "450000", "2025-04-01"],
        ]);
        assert_eq!(detect_header_row(&table), 0);
    }

    #[test]
    fn banner_rows_skipped() {
        let table = rows(&[
            &["Greenway Daily Remittance Report"],
            &["loan_number", "loan_amount", "next_due_date"],
            &["1001", "450000", "2025-04-01"],
        ]);
        assert_eq!(detect_header_row(&table), 1);
    }

    #[test]
    fn sample_collection_caps_and_skips_blanks() {
        let table = CsvTable {
            headers: vec!["a".to_string(), "b".to_string()],
            rows: (0..30)
                .map(|i| vec![format!("{i}"), String::new()])
                .collect(),
        };
        let sheet = to_source_sheet("test", &table);
        assert_eq!(sheet.columns[0].sample_values.len(), SAMPLE_LIMIT);
        assert!(sheet.columns[1].sample_values.is_empty());
        assert_eq!(sheet.row_count, 30);
    }

    #[test]
    fn headers_are_whitespace_normalized() {
        assert_eq!(normalize_header("  Loan   Number  "), "Loan Number");
        assert_eq!(normalize_header("\u{feff}loan_id"), "loan_id");
    }
}
