//! Metadata information regarding the tables exposed by the connector.

use std::collections::{BTreeMap, BTreeSet};

use enum_iterator::Sequence;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The scalar types supported by the Engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Sequence, Serialize, Deserialize, JsonSchema,
)]
pub enum ScalarType {
    String,
    Double,
    Timestamp,
    Json,
}

impl ScalarType {
    const OPERATORS_SUPPORTED_BY_COMPARABLE_TYPES: &'static [ComparisonOperator] =
        &[ComparisonOperator::Equals, ComparisonOperator::In];

    /// The name of the scalar type exposed via the schema.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Double => "Float64",
            ScalarType::Timestamp => "TimestampTZ",
            ScalarType::Json => "JSON",
        }
    }

    /// Returns the complete set of comparison operators for the given type.
    pub fn comparison_operators(self) -> BTreeSet<ComparisonOperator> {
        match self {
            ScalarType::Json => BTreeSet::new(),
            ScalarType::String | ScalarType::Double | ScalarType::Timestamp => {
                Self::OPERATORS_SUPPORTED_BY_COMPARABLE_TYPES
                    .iter()
                    .copied()
                    .collect()
            }
        }
    }

    /// Look up the comparison operator exposed under the given name for this type.
    pub fn lookup_comparison_operator(self, name: &str) -> Option<ComparisonOperator> {
        self.comparison_operators()
            .into_iter()
            .find(|operator| operator.name() == name)
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The complete list of supported binary operators for scalar types.
/// Not all of these are supported for every type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Sequence,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum ComparisonOperator {
    Equals,
    In,
}

impl ComparisonOperator {
    /// The name of the binary operator exposed via the schema.
    pub fn name(self) -> &'static str {
        match self {
            Self::Equals => "_eq",
            Self::In => "_in",
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mapping from a "table" name to its information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct TablesInfo(pub BTreeMap<String, TableInfo>);

impl TablesInfo {
    pub fn empty() -> Self {
        TablesInfo(BTreeMap::new())
    }

    /// Register a table under its own name.
    pub fn insert(&mut self, table: TableInfo) {
        self.0.insert(table.name.clone(), table);
    }

    pub fn get(&self, name: &str) -> Option<&TableInfo> {
        self.0.get(name)
    }
}

/// Information about a table served by the connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TableInfo {
    pub name: String,
    pub description: Option<String>,
    pub columns: BTreeMap<String, ColumnInfo>,
    /// Columns whose equality conditions are handed to the list operation.
    #[serde(default)]
    pub key_columns: Vec<KeyColumn>,
}

impl TableInfo {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.get(name)
    }

    pub fn key_column(&self, name: &str) -> Option<&KeyColumn> {
        self.key_columns.iter().find(|key| key.name == name)
    }
}

/// Can this column contain null values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Nullable {
    #[default]
    Nullable,
    NonNullable,
}

/// Information about a table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnInfo {
    pub name: String,
    pub r#type: ScalarType,
    #[serde(default)]
    pub nullable: Nullable,
    pub description: Option<String>,
}

/// Whether queries have to compare a key column with `_eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Requirement {
    Required,
    #[default]
    Optional,
}

/// A column that list operations can filter on directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeyColumn {
    pub name: String,
    #[serde(default)]
    pub require: Requirement,
}
