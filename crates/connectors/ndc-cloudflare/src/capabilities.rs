//! `/capabilities` endpoint for the connector.

use ndc_sdk::models;

/// Get the connector's capabilities.
///
/// Only plain queries over a single collection are supported, and they can be explained.
pub fn get_capabilities() -> models::Capabilities {
    models::Capabilities {
        query: models::QueryCapabilities {
            aggregates: None,
            variables: None,
            explain: Some(models::LeafCapability {}),
            nested_fields: models::NestedFieldCapabilities {
                filter_by: None,
                order_by: None,
                aggregates: None,
            },
            exists: models::ExistsCapabilities {
                nested_collections: None,
            },
        },
        mutation: models::MutationCapabilities {
            transactional: None,
            explain: None,
        },
        relationships: None,
    }
}
