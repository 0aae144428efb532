//! The result of translating a query request.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use query_engine_metadata::metadata::{ScalarType, TableInfo};

/// Everything the execution phase needs to list the rows of one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub table: TableInfo,
    /// Equality conditions on the table's key columns, handed to the list operation.
    pub quals: BTreeMap<String, String>,
    /// Output alias to column. `None` when the request selected no fields.
    pub fields: Option<IndexMap<String, String>>,
    /// The complete predicate of the request, checked against every row.
    pub filter: Option<Filter>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ExecutionPlan {
    /// The string a key column was compared to with `_eq`, if any.
    pub fn equals_qual(&self, column: &str) -> Option<&str> {
        self.quals.get(column).map(String::as_str)
    }
}

/// A row predicate over column values.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    IsNull {
        column: String,
    },
    Equals {
        column: String,
        scalar_type: ScalarType,
        value: serde_json::Value,
    },
    In {
        column: String,
        scalar_type: ScalarType,
        values: Vec<serde_json::Value>,
    },
}
