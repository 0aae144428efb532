//! Evaluate the residual filter of a plan against a row.

use chrono::DateTime;
use query_engine_metadata::metadata::ScalarType;
use query_engine_translation::translation::execution_plan::Filter;
use serde_json::{Map, Value};

/// Does the row satisfy the filter. Comparisons against null or missing values never match.
pub fn matches(filter: &Filter, row: &Map<String, Value>) -> bool {
    match filter {
        Filter::And(filters) => filters.iter().all(|filter| matches(filter, row)),
        Filter::Or(filters) => filters.iter().any(|filter| matches(filter, row)),
        Filter::Not(filter) => !matches(filter, row),
        Filter::IsNull { column } => row.get(column).map_or(true, Value::is_null),
        Filter::Equals {
            column,
            scalar_type,
            value,
        } => column_value(row, column).is_some_and(|actual| equals(*scalar_type, actual, value)),
        Filter::In {
            column,
            scalar_type,
            values,
        } => column_value(row, column).is_some_and(|actual| {
            values
                .iter()
                .any(|value| equals(*scalar_type, actual, value))
        }),
    }
}

fn column_value<'a>(row: &'a Map<String, Value>, column: &str) -> Option<&'a Value> {
    row.get(column).filter(|value| !value.is_null())
}

#[allow(clippy::float_cmp)]
fn equals(scalar_type: ScalarType, actual: &Value, expected: &Value) -> bool {
    match scalar_type {
        ScalarType::Double => match (actual.as_f64(), expected.as_f64()) {
            (Some(actual), Some(expected)) => actual == expected,
            _ => false,
        },
        // Instants are compared, so offsets and precision may differ.
        ScalarType::Timestamp => match (actual.as_str(), expected.as_str()) {
            (Some(actual), Some(expected)) => match (
                DateTime::parse_from_rfc3339(actual),
                DateTime::parse_from_rfc3339(expected),
            ) {
                (Ok(actual), Ok(expected)) => actual == expected,
                _ => actual == expected,
            },
            _ => false,
        },
        ScalarType::String | ScalarType::Json => actual == expected,
    }
}
