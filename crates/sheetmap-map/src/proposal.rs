//! Schema proposals for unmatched sheets and columns.
//!
//! Proposal names are always SQL-sanitized; a name that sanitizes to nothing
//! falls back to a positional placeholder so the downstream DDL builder
//! always receives a usable identifier.

use sheetmap_infer::infer_type;
use sheetmap_model::{
    ColumnMapping, MappingAction, NewColumnProposal, NewTableProposal, ProposedColumn,
    SchemaProposal, SourceColumn, SourceSheet,
};

use crate::normalize::sanitize_sql_name;

/// Proposal for a sheet that matched no catalog table: a new table named
/// after the sheet with one column per source column.
pub fn propose_new_table(sheet: &SourceSheet) -> NewTableProposal {
    let mut name = sanitize_sql_name(&sheet.name);
    if name.is_empty() {
        name = "sheet".to_string();
    }
    let columns = sheet
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let mut column_name = sanitize_sql_name(&column.header);
            if column_name.is_empty() {
                column_name = format!("column_{}", index + 1);
            }
            ProposedColumn {
                name: column_name,
                sql_type: column_sql_type(column).to_string(),
            }
        })
        .collect();
    NewTableProposal {
        name,
        columns,
        source_sheet: sheet.name.clone(),
    }
}

/// Proposal for a single column to be created on an existing table.
pub fn propose_new_column(sheet_name: &str, column: &SourceColumn) -> NewColumnProposal {
    let mut column_name = sanitize_sql_name(&column.header);
    if column_name.is_empty() {
        column_name = "column_1".to_string();
    }
    NewColumnProposal {
        column_name,
        sql_type: column_sql_type(column).to_string(),
        source_sheet: sheet_name.to_string(),
        source_header: column.header.clone(),
    }
}

/// Proposals for a whole batch: a new table per unmapped sheet, plus a new
/// column for every mapped sheet's column whose action is `Create`.
pub fn propose_for_batch(
    sheets: &[SourceSheet],
    unmapped_sheets: &[String],
    column_mappings: &[(String, Vec<ColumnMapping>)],
) -> Vec<SchemaProposal> {
    let mut proposals = Vec::new();
    for sheet in sheets {
        if unmapped_sheets.contains(&sheet.name) {
            proposals.push(SchemaProposal::NewTable(propose_new_table(sheet)));
        }
    }
    for (sheet_name, mappings) in column_mappings {
        let Some(sheet) = sheets.iter().find(|sheet| &sheet.name == sheet_name) else {
            continue;
        };
        for mapping in mappings {
            if mapping.action != MappingAction::Create {
                continue;
            }
            if let Some(column) = sheet
                .columns
                .iter()
                .find(|column| column.header == mapping.source_header)
            {
                proposals.push(SchemaProposal::NewColumn(propose_new_column(
                    sheet_name, column,
                )));
            }
        }
    }
    proposals
}

fn column_sql_type(column: &SourceColumn) -> &'static str {
    let inferred = column
        .inferred_type
        .unwrap_or_else(|| infer_type(&column.header, &column.sample_values));
    inferred.base().sql_type()
}
