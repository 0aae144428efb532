//! Errors for query translation.

use query_engine_metadata::metadata::ScalarType;
use thiserror::Error;

/// A type for translation errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Collection '{0}' not found.")]
    CollectionNotFound(String),
    #[error("Column '{column}' not found in collection '{collection}'.")]
    ColumnNotFoundInCollection { column: String, collection: String },
    #[error("Operator '{operator}' is not defined for type {scalar_type}.")]
    OperatorNotFound {
        operator: String,
        scalar_type: ScalarType,
    },
    #[error("Column '{column}' of type {expected} cannot be compared with {value}.")]
    TypeMismatch {
        column: String,
        expected: ScalarType,
        value: serde_json::Value,
    },
    #[error("Queries on collection '{collection}' must compare column '{column}' with _eq.")]
    MissingKeyColumn { column: String, collection: String },
    #[error("Queries containing {0} are not supported.")]
    NotSupported(UnsupportedCapability),
}

impl Error {
    /// Whether the request asked for something the connector does not implement,
    /// as opposed to being malformed.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::NotSupported(_))
    }
}

/// Capabilities we don't currently support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedCapability {
    Aggregates,
    CollectionArguments,
    ColumnComparisons,
    Exists,
    FieldArguments,
    NestedFields,
    Relationships,
    Sorting,
    Variables,
}

impl std::fmt::Display for UnsupportedCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let capability = match self {
            UnsupportedCapability::Aggregates => "aggregates",
            UnsupportedCapability::CollectionArguments => "collection arguments",
            UnsupportedCapability::ColumnComparisons => "comparisons between columns",
            UnsupportedCapability::Exists => "exists predicates",
            UnsupportedCapability::FieldArguments => "field arguments",
            UnsupportedCapability::NestedFields => "nested field selections",
            UnsupportedCapability::Relationships => "relationships",
            UnsupportedCapability::Sorting => "order by",
            UnsupportedCapability::Variables => "variables",
        };
        write!(f, "{capability}")
    }
}
