//! Translate an incoming `QueryRequest`.

mod fields;
mod filtering;
mod values;

use std::collections::BTreeMap;

use ndc_models as models;

use query_engine_metadata::metadata;

use crate::translation::error::{Error, UnsupportedCapability};
use crate::translation::execution_plan::{ExecutionPlan, Filter};

/// Translate the incoming QueryRequest to an ExecutionPlan.
pub fn translate(
    metadata: &metadata::Metadata,
    query_request: models::QueryRequest,
) -> Result<ExecutionPlan, Error> {
    let models::QueryRequest {
        collection,
        query,
        arguments,
        variables,
        ..
    } = query_request;

    let table = metadata
        .tables
        .get(collection.as_str())
        .ok_or_else(|| Error::CollectionNotFound(collection.to_string()))?;

    if variables.is_some() {
        return Err(Error::NotSupported(UnsupportedCapability::Variables));
    }
    if !arguments.is_empty() {
        return Err(Error::NotSupported(
            UnsupportedCapability::CollectionArguments,
        ));
    }

    let models::Query {
        aggregates,
        fields,
        limit,
        offset,
        order_by,
        predicate,
        ..
    } = query;

    if aggregates.is_some_and(|aggregates| !aggregates.is_empty()) {
        return Err(Error::NotSupported(UnsupportedCapability::Aggregates));
    }
    if order_by.is_some_and(|order_by| !order_by.elements.is_empty()) {
        return Err(Error::NotSupported(UnsupportedCapability::Sorting));
    }

    let fields = fields
        .map(|fields| fields::translate_fields(table, fields))
        .transpose()?;

    let filter = predicate
        .map(|predicate| filtering::translate_expression(table, predicate))
        .transpose()?;

    let mut quals = BTreeMap::new();
    if let Some(filter) = &filter {
        collect_key_quals(table, filter, &mut quals);
    }
    if let Some(key) = table.key_columns.iter().find(|key| {
        key.require == metadata::Requirement::Required && !quals.contains_key(&key.name)
    }) {
        return Err(Error::MissingKeyColumn {
            column: key.name.clone(),
            collection: table.name.clone(),
        });
    }

    tracing::debug!(
        collection = %collection,
        quals = ?quals,
        limit = ?limit,
        offset = ?offset,
        "translated query"
    );

    Ok(ExecutionPlan {
        table: table.clone(),
        quals,
        fields,
        filter,
        limit,
        offset,
    })
}

/// Collect `_eq` comparisons of key columns with strings that every matching row has to satisfy,
/// i.e. those at the top of the predicate or under top-level conjunctions.
/// The first comparison of a column wins.
fn collect_key_quals(
    table: &metadata::TableInfo,
    filter: &Filter,
    quals: &mut BTreeMap<String, String>,
) {
    match filter {
        Filter::Equals {
            column,
            value: serde_json::Value::String(value),
            ..
        } if table.key_column(column).is_some() => {
            quals
                .entry(column.clone())
                .or_insert_with(|| value.clone());
        }
        Filter::And(filters) => {
            for filter in filters {
                collect_key_quals(table, filter, quals);
            }
        }
        _ => {}
    }
}
