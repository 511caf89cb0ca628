//! Target schema catalog loading.
//!
//! The catalog is a JSON document produced by a schema-introspection step:
//! `{ "tables": [{ "name", "columns": [{ "name", "sql_type", "is_nullable",
//! "is_primary_key" }] }] }`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use sheetmap_model::TargetTable;

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tables: Vec<TargetTable>,
}

pub fn load_catalog(path: &Path) -> Result<Vec<TargetTable>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: CatalogFile =
        serde_json::from_str(&contents).map_err(|source| IngestError::Catalog {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(tables = catalog.tables.len(), "loaded schema catalog");
    Ok(catalog.tables)
}
