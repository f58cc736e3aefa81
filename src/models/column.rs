//! Column mapping model

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Column mapping representing one physical column of a property
///
/// Each attribute tracks whether it was defaulted or explicitly configured,
/// so later configuration layers can tell user intent from inferred values.
///
/// # Example
///
/// ```rust
/// use orm_automap::models::ColumnMapping;
///
/// let column = ColumnMapping::named("Age").with_sql_type("int");
/// assert_eq!(column.name(), Some("Age"));
/// assert_eq!(column.sql_type(), Some("INT"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    /// Column name
    pub name: Attribute<String>,
    /// Physical SQL type (e.g., "VARCHAR(100)", "BIGINT")
    #[serde(default)]
    pub sql_type: Attribute<String>,
    /// Whether the column allows NULL values
    #[serde(default)]
    pub nullable: Attribute<bool>,
    /// Column length for sized types
    #[serde(default)]
    pub length: Attribute<u32>,
    /// Whether the column carries a unique constraint
    #[serde(default)]
    pub unique: Attribute<bool>,
}

impl ColumnMapping {
    /// Create a column whose name is a default (not user-specified)
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Attribute::Default(name.into()),
            ..Self::default()
        }
    }

    /// Create a column whose name was explicitly configured
    pub fn explicit(name: impl Into<String>) -> Self {
        Self {
            name: Attribute::Explicit(name.into()),
            ..Self::default()
        }
    }

    /// Set the SQL type explicitly
    pub fn with_sql_type(mut self, sql_type: impl AsRef<str>) -> Self {
        self.sql_type.set_explicit(normalize_sql_type(sql_type.as_ref()));
        self
    }

    /// Set nullability explicitly
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable.set_explicit(nullable);
        self
    }

    /// Set the length explicitly
    pub fn with_length(mut self, length: u32) -> Self {
        self.length.set_explicit(length);
        self
    }

    /// Set uniqueness explicitly
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique.set_explicit(unique);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.value().map(String::as_str)
    }

    pub fn sql_type(&self) -> Option<&str> {
        self.sql_type.value().map(String::as_str)
    }

    /// Columns are nullable unless configured otherwise
    pub fn is_nullable(&self) -> bool {
        self.nullable.value().copied().unwrap_or(true)
    }

    pub fn is_unique(&self) -> bool {
        self.unique.value().copied().unwrap_or(false)
    }
}

/// Uppercase the type keyword of a SQL type, keeping any size specifier
pub(crate) fn normalize_sql_type(sql_type: &str) -> String {
    let trimmed = sql_type.trim();
    match trimmed.find('(') {
        Some(idx) => format!("{}{}", trimmed[..idx].trim_end().to_uppercase(), &trimmed[idx..]),
        None => trimmed.to_uppercase(),
    }
}
