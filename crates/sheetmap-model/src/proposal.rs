use serde::{Deserialize, Serialize};

/// A column definition inside a new-table proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedColumn {
    pub name: String,
    pub sql_type: String,
}

/// Proposal to create a new table for a sheet that matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTableProposal {
    /// SQL-sanitized table name.
    pub name: String,
    pub columns: Vec<ProposedColumn>,
    /// Raw sheet name the proposal was derived from.
    pub source_sheet: String,
}

/// Proposal to add a column to an existing table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewColumnProposal {
    /// SQL-sanitized column name.
    pub column_name: String,
    pub sql_type: String,
    pub source_sheet: String,
    /// Raw source header the proposal was derived from.
    pub source_header: String,
}

/// A structured, sanitized description of schema to be created because no
/// acceptable existing target was found.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaProposal {
    NewTable(NewTableProposal),
    NewColumn(NewColumnProposal),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposal_tags_by_kind() {
        let proposal = SchemaProposal::NewColumn(NewColumnProposal {
            column_name: "days_past_due".to_string(),
            sql_type: "NUMERIC".to_string(),
            source_sheet: "Loan Info".to_string(),
            source_header: "Days Past Due".to_string(),
        });
        let json = serde_json::to_string(&proposal).expect("serialize proposal");
        assert!(json.contains(r#""kind":"new_column""#));
    }
}
