//! Check comparison values against the type of the column they are compared with.

use query_engine_metadata::metadata::{ColumnInfo, ScalarType};

use crate::translation::error::Error;

/// Ensure a scalar value can be compared with the column.
pub(crate) fn check_value(
    column: &ColumnInfo,
    value: serde_json::Value,
) -> Result<serde_json::Value, Error> {
    let accepted = match column.r#type {
        ScalarType::String | ScalarType::Timestamp => value.is_string(),
        ScalarType::Double => value.is_number(),
        ScalarType::Json => true,
    };
    if accepted {
        Ok(value)
    } else {
        Err(Error::TypeMismatch {
            column: column.name.clone(),
            expected: column.r#type,
            value,
        })
    }
}

/// The right-hand side of `_in` is an array of values.
pub(crate) fn check_values(
    column: &ColumnInfo,
    value: serde_json::Value,
) -> Result<Vec<serde_json::Value>, Error> {
    match value {
        serde_json::Value::Array(values) => values
            .into_iter()
            .map(|value| check_value(column, value))
            .collect(),
        value => Err(Error::TypeMismatch {
            column: column.name.clone(),
            expected: column.r#type,
            value,
        }),
    }
}
