use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic column type produced by inference.
///
/// These are the specialized types the inference cascade can resolve to.
/// Storage and UI layers work with the collapsed [`BaseType`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    String,
    Number,
    Boolean,
    Date,
    /// Monetary value (balances, payments, fees).
    Amount,
    /// Percentage or ratio (interest rates, LTV).
    Rate,
    /// Opaque identifier; stored as text to preserve formatting.
    Id,
}

impl SemanticType {
    /// Collapses the specialized types to the four base storage types.
    /// Amount and Rate are numbers; identifiers are text.
    pub fn base(self) -> BaseType {
        match self {
            SemanticType::String | SemanticType::Id => BaseType::Text,
            SemanticType::Number | SemanticType::Amount | SemanticType::Rate => BaseType::Number,
            SemanticType::Boolean => BaseType::Boolean,
            SemanticType::Date => BaseType::Date,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::String => "string",
            SemanticType::Number => "number",
            SemanticType::Boolean => "boolean",
            SemanticType::Date => "date",
            SemanticType::Amount => "amount",
            SemanticType::Rate => "rate",
            SemanticType::Id => "id",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" => Ok(SemanticType::String),
            "number" => Ok(SemanticType::Number),
            "boolean" | "bool" => Ok(SemanticType::Boolean),
            "date" => Ok(SemanticType::Date),
            "amount" => Ok(SemanticType::Amount),
            "rate" => Ok(SemanticType::Rate),
            "id" => Ok(SemanticType::Id),
            _ => Err(format!("Unknown semantic type: {}", s)),
        }
    }
}

/// Base storage type: what a column is ultimately persisted and rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Text,
    Number,
    Boolean,
    Date,
}

impl BaseType {
    /// SQL column type used when proposing new columns.
    pub fn sql_type(&self) -> &'static str {
        match self {
            BaseType::Text => "TEXT",
            BaseType::Number => "NUMERIC",
            BaseType::Boolean => "BOOLEAN",
            BaseType::Date => "TIMESTAMP WITH TIME ZONE",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Text => "text",
            BaseType::Number => "number",
            BaseType::Boolean => "boolean",
            BaseType::Date => "date",
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialized_types_collapse_to_base() {
        assert_eq!(SemanticType::Amount.base(), BaseType::Number);
        assert_eq!(SemanticType::Rate.base(), BaseType::Number);
        assert_eq!(SemanticType::Id.base(), BaseType::Text);
        assert_eq!(SemanticType::Date.base(), BaseType::Date);
        assert_eq!(SemanticType::Boolean.base(), BaseType::Boolean);
    }

    #[test]
    fn sql_types_for_base() {
        assert_eq!(BaseType::Text.sql_type(), "TEXT");
        assert_eq!(BaseType::Number.sql_type(), "NUMERIC");
        assert_eq!(BaseType::Boolean.sql_type(), "BOOLEAN");
        assert_eq!(BaseType::Date.sql_type(), "TIMESTAMP WITH TIME ZONE");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("amount".parse::<SemanticType>(), Ok(SemanticType::Amount));
        assert_eq!("Boolean".parse::<SemanticType>(), Ok(SemanticType::Boolean));
        assert!("decimal".parse::<SemanticType>().is_err());
    }
}
