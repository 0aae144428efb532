//! Implement the `/schema` endpoint to return the connector's schema.
//! See the Hasura
//! [Native Data Connector Specification](https://hasura.github.io/ndc-spec/specification/schema/index.html)
//! for further details.

use std::collections::BTreeMap;

use ndc_sdk::models;
use query_engine_metadata::metadata;

/// Get the connector's schema.
///
/// Every table becomes a collection, together with an object type of the same name.
pub fn get_schema(metadata: &metadata::Metadata) -> models::SchemaResponse {
    let scalar_types: BTreeMap<models::ScalarTypeName, models::ScalarType> = metadata
        .scalar_types()
        .into_iter()
        .map(|scalar_type| {
            let result = models::ScalarType {
                representation: Some(map_type_representation(scalar_type)),
                aggregate_functions: BTreeMap::new(),
                comparison_operators: scalar_type
                    .comparison_operators()
                    .into_iter()
                    .map(|operator| {
                        (
                            operator.name().into(),
                            match operator {
                                metadata::ComparisonOperator::Equals => {
                                    models::ComparisonOperatorDefinition::Equal
                                }
                                metadata::ComparisonOperator::In => {
                                    models::ComparisonOperatorDefinition::In
                                }
                            },
                        )
                    })
                    .collect(),
            };
            (scalar_type.name().into(), result)
        })
        .collect();

    let collections = metadata
        .tables
        .0
        .iter()
        .map(|(table_name, table)| models::CollectionInfo {
            name: table_name.as_str().into(),
            description: table.description.clone(),
            arguments: BTreeMap::new(),
            collection_type: table_name.as_str().into(),
            uniqueness_constraints: BTreeMap::new(),
            foreign_keys: BTreeMap::new(),
        })
        .collect();

    let object_types = metadata
        .tables
        .0
        .iter()
        .map(|(table_name, table)| {
            let object_type = models::ObjectType {
                description: table.description.clone(),
                fields: table
                    .columns
                    .iter()
                    .map(|(column_name, column_info)| {
                        (
                            column_name.as_str().into(),
                            models::ObjectField {
                                description: column_info.description.clone(),
                                r#type: column_to_type(column_info),
                                arguments: BTreeMap::new(),
                            },
                        )
                    })
                    .collect(),
            };
            (table_name.as_str().into(), object_type)
        })
        .collect::<BTreeMap<_, _>>();

    models::SchemaResponse {
        collections,
        procedures: vec![],
        functions: vec![],
        object_types,
        scalar_types,
    }
}

/// Map our scalar types to ndc-spec type representations.
fn map_type_representation(scalar_type: metadata::ScalarType) -> models::TypeRepresentation {
    match scalar_type {
        metadata::ScalarType::String => models::TypeRepresentation::String,
        metadata::ScalarType::Double => models::TypeRepresentation::Float64,
        metadata::ScalarType::Timestamp => models::TypeRepresentation::TimestampTZ,
        metadata::ScalarType::Json => models::TypeRepresentation::JSON,
    }
}

/// Extract the models::Type representation of a column.
pub fn column_to_type(column: &metadata::ColumnInfo) -> models::Type {
    let named = models::Type::Named {
        name: column.r#type.name().into(),
    };
    match &column.nullable {
        metadata::Nullable::NonNullable => named,
        metadata::Nullable::Nullable => models::Type::Nullable {
            underlying_type: Box::new(named),
        },
    }
}
