//! Metadata information regarding the tables served by the connector.

pub mod database;
pub mod subscriptions;

// re-export without modules
pub use database::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub tables: TablesInfo,
}

impl Metadata {
    /// The metadata of every table this connector knows how to list.
    pub fn new() -> Self {
        let mut tables = TablesInfo::empty();
        tables.insert(subscriptions::subscriptions_table());
        Metadata { tables }
    }

    /// The scalar types used by at least one column.
    pub fn scalar_types(&self) -> std::collections::BTreeSet<ScalarType> {
        self.tables
            .0
            .values()
            .flat_map(|table| table.columns.values().map(|column| column.r#type))
            .collect()
    }
}
