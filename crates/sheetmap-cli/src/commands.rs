//! Command implementations.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use sheetmap_infer::infer_sheet;
use sheetmap_ingest::{load_catalog, profile_columns, read_csv_sheet, read_csv_table, to_source_sheet};
use sheetmap_map::{MappingEngine, propose_for_batch};
use sheetmap_model::{SchemaProposal, SourceSheet};

use crate::cli::{InferArgs, ProposeArgs, SuggestArgs};
use crate::report::{InferReport, InferredColumn, SheetReport, SuggestReport};

pub fn run_suggest(args: &SuggestArgs) -> Result<SuggestReport> {
    let engine = load_engine(&args.schema)?;
    let sheets = load_sheets(&args.sheets)?;
    build_suggest_report(&engine, &sheets)
}

pub fn run_propose(args: &ProposeArgs) -> Result<Vec<SchemaProposal>> {
    let engine = load_engine(&args.schema)?;
    let sheets = load_sheets(&args.sheets)?;
    let result = engine.suggest_tables(&sheets, None);
    tracing::info!(
        mapped = result.mappings.len(),
        unmapped = result.unmapped_sheets.len(),
        "proposing schema for unmapped sheets"
    );
    Ok(propose_for_batch(&sheets, &result.unmapped_sheets, &[]))
}

pub fn run_infer(args: &InferArgs) -> Result<InferReport> {
    let table = read_csv_table(&args.sheet)
        .with_context(|| format!("ingest sheet {}", args.sheet.display()))?;
    let name = args
        .sheet
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sheet");
    let mut sheet = to_source_sheet(name, &table);
    infer_sheet(&mut sheet);
    let profiles = profile_columns(&table);
    let columns = sheet
        .columns
        .iter()
        .zip(profiles)
        .map(|(column, profile)| {
            let semantic_type = column
                .inferred_type
                .unwrap_or(sheetmap_model::SemanticType::String);
            InferredColumn {
                header: column.header.clone(),
                semantic_type,
                base_type: semantic_type.base(),
                sql_type: semantic_type.base().sql_type().to_string(),
                profile,
            }
        })
        .collect();
    Ok(InferReport {
        sheet: sheet.name,
        row_count: sheet.row_count,
        columns,
    })
}

pub fn build_suggest_report(engine: &MappingEngine, sheets: &[SourceSheet]) -> Result<SuggestReport> {
    let result = engine.suggest_tables(sheets, None);
    let mut reports = Vec::new();
    for sheet in sheets {
        let table_name = result.mappings.get(&sheet.name).cloned();
        let columns = match table_name.as_deref().and_then(|name| engine.find_table(name)) {
            Some(table) => engine.suggest_columns(sheet, table),
            None => BTreeMap::new(),
        };
        reports.push(SheetReport {
            name: sheet.name.clone(),
            table: table_name,
            confidence: result.confidence.get(&sheet.name).copied(),
            columns,
        });
    }
    Ok(SuggestReport {
        sheets: reports,
        unmapped_sheets: result.unmapped_sheets,
    })
}

fn load_engine(schema: &Path) -> Result<MappingEngine> {
    let tables =
        load_catalog(schema).with_context(|| format!("load catalog {}", schema.display()))?;
    Ok(MappingEngine::new(tables))
}

fn load_sheets(paths: &[std::path::PathBuf]) -> Result<Vec<SourceSheet>> {
    let mut sheets = Vec::with_capacity(paths.len());
    for path in paths {
        let mut sheet =
            read_csv_sheet(path).with_context(|| format!("ingest sheet {}", path.display()))?;
        infer_sheet(&mut sheet);
        tracing::info!(sheet = %sheet.name, columns = sheet.columns.len(), "ingested sheet");
        sheets.push(sheet);
    }
    Ok(sheets)
}
