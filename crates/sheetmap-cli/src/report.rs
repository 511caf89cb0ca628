//! Report types and terminal rendering.

use std::collections::BTreeMap;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use sheetmap_ingest::ColumnProfile;
use sheetmap_model::{BaseType, ColumnMapping, ConfidenceLevel, MappingAction, SemanticType};

/// Mapping suggestions for one sheet.
#[derive(Debug, Serialize)]
pub struct SheetReport {
    pub name: String,
    pub table: Option<String>,
    pub confidence: Option<f64>,
    pub columns: BTreeMap<String, ColumnMapping>,
}

/// Full suggestion report across an import batch.
#[derive(Debug, Serialize)]
pub struct SuggestReport {
    pub sheets: Vec<SheetReport>,
    pub unmapped_sheets: Vec<String>,
}

/// Per-column inference and profile report for one sheet.
#[derive(Debug, Serialize)]
pub struct InferReport {
    pub sheet: String,
    pub row_count: usize,
    pub columns: Vec<InferredColumn>,
}

#[derive(Debug, Serialize)]
pub struct InferredColumn {
    pub header: String,
    pub semantic_type: SemanticType,
    pub base_type: BaseType,
    pub sql_type: String,
    pub profile: ColumnProfile,
}

pub fn print_suggest_report(report: &SuggestReport) {
    for sheet in &report.sheets {
        match (&sheet.table, sheet.confidence) {
            (Some(table), Some(confidence)) => {
                println!(
                    "Sheet: {} -> {} ({:.0}%, {})",
                    sheet.name,
                    table,
                    confidence * 100.0,
                    ConfidenceLevel::from_score(confidence)
                );
            }
            _ => println!("Sheet: {} -> (unmapped)", sheet.name),
        }
        if sheet.columns.is_empty() {
            println!();
            continue;
        }
        let mut table = styled_table();
        table.set_header(vec![
            header_cell("Column"),
            header_cell("Action"),
            header_cell("Target"),
            header_cell("Score"),
            header_cell("Confidence"),
            header_cell("Notes"),
        ]);
        align_column(&mut table, 3, CellAlignment::Right);
        for (header, mapping) in &sheet.columns {
            table.add_row(vec![
                Cell::new(header),
                Cell::new(action_label(mapping.action)),
                Cell::new(mapping.target_column.as_deref().unwrap_or("-")),
                Cell::new(format!("{:.2}", mapping.confidence_score)),
                Cell::new(mapping.confidence_level.to_string()),
                Cell::new(notes_for(mapping)),
            ]);
        }
        println!("{table}");
        println!();
    }
    if !report.unmapped_sheets.is_empty() {
        println!("Unmapped sheets: {}", report.unmapped_sheets.join(", "));
    }
}

pub fn print_infer_report(report: &InferReport) {
    println!("Sheet: {} ({} rows)", report.sheet, report.row_count);
    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("SQL Type"),
        header_cell("Nulls"),
        header_cell("Unique"),
        header_cell("Notes"),
    ]);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for column in &report.columns {
        table.add_row(vec![
            Cell::new(&column.header),
            Cell::new(column.semantic_type.to_string()),
            Cell::new(&column.sql_type),
            Cell::new(format!("{:.0}%", column.profile.null_ratio * 100.0)),
            Cell::new(format!("{:.0}%", column.profile.unique_ratio * 100.0)),
            Cell::new(profile_notes(&column.profile)),
        ]);
    }
    println!("{table}");
}

fn action_label(action: MappingAction) -> &'static str {
    match action {
        MappingAction::Map => "map",
        MappingAction::Create => "create",
        MappingAction::Skip => "skip",
    }
}

fn notes_for(mapping: &ColumnMapping) -> String {
    if mapping
        .suggestions
        .iter()
        .any(|suggestion| suggestion.is_duplicate)
    {
        "duplicate target".to_string()
    } else {
        String::new()
    }
}

fn profile_notes(profile: &ColumnProfile) -> String {
    let mut notes = Vec::new();
    if profile.is_empty {
        notes.push("empty");
    }
    if profile.is_duplicate_header {
        notes.push("duplicate header");
    }
    if profile.numeric_as_text > 0 {
        notes.push("numeric as text");
    }
    if profile.padded_values > 0 {
        notes.push("padded values");
    }
    notes.join(", ")
}

fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
