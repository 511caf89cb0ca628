use serde::{Deserialize, Serialize};

use crate::types::SemanticType;

/// A sampled cell value carried alongside a column header.
///
/// Untagged so plain JSON arrays (`["01234", 42, true, null]`) deserialize
/// directly into sample lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// True for null cells and for text cells that are empty after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Numeric view of the cell, parsing numeric-looking text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            CellValue::Text(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// A source column: header plus the sample evidence collected during ingest.
///
/// The engine never mutates a source column except to attach the inferred
/// semantic type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceColumn {
    pub header: String,
    #[serde(default)]
    pub sample_values: Vec<CellValue>,
    #[serde(default)]
    pub inferred_type: Option<SemanticType>,
}

impl SourceColumn {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sample_values: Vec::new(),
            inferred_type: None,
        }
    }

    pub fn with_samples(header: impl Into<String>, samples: Vec<CellValue>) -> Self {
        Self {
            header: header.into(),
            sample_values: samples,
            inferred_type: None,
        }
    }
}

/// A source sheet as extracted from a spreadsheet or delimited file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSheet {
    pub name: String,
    pub columns: Vec<SourceColumn>,
    #[serde(default)]
    pub row_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_value_deserializes_untagged() {
        let values: Vec<CellValue> =
            serde_json::from_str(r#"["01234", 42.5, true, null]"#).expect("deserialize samples");
        assert_eq!(values[0], CellValue::Text("01234".to_string()));
        assert_eq!(values[1], CellValue::Number(42.5));
        assert_eq!(values[2], CellValue::Bool(true));
        assert_eq!(values[3], CellValue::Null);
    }

    #[test]
    fn empty_cells() {
        assert!(CellValue::Null.is_empty());
        assert!(CellValue::Text("   ".to_string()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn numeric_text_parses() {
        assert_eq!(CellValue::from("12.5").as_number(), Some(12.5));
        assert_eq!(CellValue::from("n/a").as_number(), None);
    }
}
