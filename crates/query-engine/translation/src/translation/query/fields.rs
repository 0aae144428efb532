//! Handle 'rows' translation.

use indexmap::IndexMap;

use ndc_models as models;

use query_engine_metadata::metadata::TableInfo;

use crate::translation::error::{Error, UnsupportedCapability};

/// Translate the field selection of a query into output alias to column pairs.
pub(crate) fn translate_fields(
    table: &TableInfo,
    fields: IndexMap<models::FieldName, models::Field>,
) -> Result<IndexMap<String, String>, Error> {
    fields
        .into_iter()
        .map(|(alias, field)| match field {
            models::Field::Column {
                column,
                fields: None,
                arguments,
            } if arguments.is_empty() => {
                let column_info = table.column(column.as_str()).ok_or_else(|| {
                    Error::ColumnNotFoundInCollection {
                        column: column.to_string(),
                        collection: table.name.clone(),
                    }
                })?;
                Ok((alias.to_string(), column_info.name.clone()))
            }
            models::Field::Column {
                fields: Some(_), ..
            } => Err(Error::NotSupported(UnsupportedCapability::NestedFields)),
            models::Field::Column { .. } => {
                Err(Error::NotSupported(UnsupportedCapability::FieldArguments))
            }
            models::Field::Relationship { .. } => {
                Err(Error::NotSupported(UnsupportedCapability::Relationships))
            }
        })
        .collect()
}
