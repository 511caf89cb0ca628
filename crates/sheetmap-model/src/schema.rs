use serde::{Deserialize, Serialize};

use crate::types::BaseType;

/// A column in the target schema catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetColumn {
    pub name: String,
    pub sql_type: String,
    #[serde(default = "default_nullable")]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_primary_key: bool,
}

fn default_nullable() -> bool {
    true
}

impl TargetColumn {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            is_nullable: true,
            is_primary_key: false,
        }
    }

    /// Whether a value of the given base type is storable in this column.
    pub fn accepts(&self, base: BaseType) -> bool {
        SqlFamily::of(&self.sql_type).accepts(base)
    }
}

/// A table in the target schema catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetTable {
    pub name: String,
    pub columns: Vec<TargetColumn>,
}

impl TargetTable {
    pub fn new(name: impl Into<String>, columns: Vec<TargetColumn>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Look up a column by name, case-insensitively.
    pub fn column(&self, name: &str) -> Option<&TargetColumn> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }
}

/// Coarse SQL type family used for type-compatibility checks.
///
/// Family detection is by substring over the lowercased declared type, so
/// dialect spellings (`timestamptz`, `double precision`, `bigint`) fall into
/// the right bucket without an exhaustive type list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlFamily {
    Character,
    Numeric,
    Boolean,
    DateTime,
    Other,
}

impl SqlFamily {
    pub fn of(sql_type: &str) -> Self {
        let lowered = sql_type.trim().to_lowercase();
        if lowered.is_empty() {
            return SqlFamily::Other;
        }
        // Order matters: "datetime" contains "time", "boolean" contains no
        // other family marker, and character checks come last so "character
        // varying" is not shadowed.
        if lowered.contains("bool") || lowered == "bit" {
            SqlFamily::Boolean
        } else if lowered.contains("date") || lowered.contains("time") {
            SqlFamily::DateTime
        } else if lowered.contains("int")
            || lowered.contains("serial")
            || lowered.contains("numeric")
            || lowered.contains("decimal")
            || lowered.contains("real")
            || lowered.contains("double")
            || lowered.contains("float")
            || lowered.contains("money")
        {
            SqlFamily::Numeric
        } else if lowered.contains("char") || lowered.contains("text") || lowered.contains("uuid") {
            SqlFamily::Character
        } else {
            SqlFamily::Other
        }
    }

    /// Character and unrecognized columns accept anything (values degrade to
    /// text); the typed families require a matching base type.
    pub fn accepts(self, base: BaseType) -> bool {
        match self {
            SqlFamily::Character | SqlFamily::Other => true,
            SqlFamily::Numeric => base == BaseType::Number,
            SqlFamily::Boolean => base == BaseType::Boolean,
            SqlFamily::DateTime => base == BaseType::Date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_from_declared_types() {
        assert_eq!(SqlFamily::of("NUMERIC(12,2)"), SqlFamily::Numeric);
        assert_eq!(SqlFamily::of("bigint"), SqlFamily::Numeric);
        assert_eq!(SqlFamily::of("timestamp with time zone"), SqlFamily::DateTime);
        assert_eq!(SqlFamily::of("datetime"), SqlFamily::DateTime);
        assert_eq!(SqlFamily::of("boolean"), SqlFamily::Boolean);
        assert_eq!(SqlFamily::of("character varying(255)"), SqlFamily::Character);
        assert_eq!(SqlFamily::of("uuid"), SqlFamily::Character);
        assert_eq!(SqlFamily::of(""), SqlFamily::Other);
    }

    #[test]
    fn text_columns_accept_everything() {
        let column = TargetColumn::new("servicer_name", "text");
        assert!(column.accepts(BaseType::Text));
        assert!(column.accepts(BaseType::Number));
        assert!(column.accepts(BaseType::Date));
    }

    #[test]
    fn numeric_columns_reject_text() {
        let column = TargetColumn::new("upb", "numeric");
        assert!(column.accepts(BaseType::Number));
        assert!(!column.accepts(BaseType::Text));
        assert!(!column.accepts(BaseType::Boolean));
    }
}
