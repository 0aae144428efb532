//! Handle filtering/where clauses translation.

use ndc_models as models;

use query_engine_metadata::metadata::{ColumnInfo, ComparisonOperator, TableInfo};

use super::values;
use crate::translation::error::{Error, UnsupportedCapability};
use crate::translation::execution_plan::Filter;

/// Translate a boolean expression to a row filter.
pub(crate) fn translate_expression(
    table: &TableInfo,
    predicate: models::Expression,
) -> Result<Filter, Error> {
    match predicate {
        models::Expression::And { expressions } => Ok(Filter::And(
            expressions
                .into_iter()
                .map(|expression| translate_expression(table, expression))
                .collect::<Result<Vec<_>, Error>>()?,
        )),
        models::Expression::Or { expressions } => Ok(Filter::Or(
            expressions
                .into_iter()
                .map(|expression| translate_expression(table, expression))
                .collect::<Result<Vec<_>, Error>>()?,
        )),
        models::Expression::Not { expression } => Ok(Filter::Not(Box::new(
            translate_expression(table, *expression)?,
        ))),
        models::Expression::UnaryComparisonOperator { column, operator } => match operator {
            models::UnaryComparisonOperator::IsNull => {
                let column = translate_comparison_target(table, column)?;
                Ok(Filter::IsNull {
                    column: column.name.clone(),
                })
            }
        },
        models::Expression::BinaryComparisonOperator {
            column,
            operator,
            value,
        } => {
            let column = translate_comparison_target(table, column)?;
            let operator = column
                .r#type
                .lookup_comparison_operator(operator.as_str())
                .ok_or_else(|| Error::OperatorNotFound {
                    operator: operator.to_string(),
                    scalar_type: column.r#type,
                })?;
            let value = translate_comparison_value(value)?;
            match operator {
                ComparisonOperator::Equals => Ok(Filter::Equals {
                    column: column.name.clone(),
                    scalar_type: column.r#type,
                    value: values::check_value(column, value)?,
                }),
                ComparisonOperator::In => Ok(Filter::In {
                    column: column.name.clone(),
                    scalar_type: column.r#type,
                    values: values::check_values(column, value)?,
                }),
            }
        }
        models::Expression::Exists { .. } => {
            Err(Error::NotSupported(UnsupportedCapability::Exists))
        }
    }
}

/// Resolve the column on the left-hand side of a comparison.
fn translate_comparison_target(
    table: &TableInfo,
    target: models::ComparisonTarget,
) -> Result<&ColumnInfo, Error> {
    let (name, field_path) = match target {
        models::ComparisonTarget::Column {
            name,
            field_path,
            path,
        } => {
            if !path.is_empty() {
                return Err(Error::NotSupported(UnsupportedCapability::Relationships));
            }
            (name, field_path)
        }
        models::ComparisonTarget::RootCollectionColumn { name, field_path } => (name, field_path),
    };

    if field_path.is_some_and(|field_path| !field_path.is_empty()) {
        return Err(Error::NotSupported(UnsupportedCapability::NestedFields));
    }

    table
        .column(name.as_str())
        .ok_or_else(|| Error::ColumnNotFoundInCollection {
            column: name.to_string(),
            collection: table.name.clone(),
        })
}

/// Only literal values can be compared against.
fn translate_comparison_value(value: models::ComparisonValue) -> Result<serde_json::Value, Error> {
    match value {
        models::ComparisonValue::Scalar { value } => Ok(value),
        models::ComparisonValue::Column { .. } => Err(Error::NotSupported(
            UnsupportedCapability::ColumnComparisons,
        )),
        models::ComparisonValue::Variable { .. } => {
            Err(Error::NotSupported(UnsupportedCapability::Variables))
        }
    }
}
