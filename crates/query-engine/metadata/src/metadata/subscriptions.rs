//! Declaration of the `cloudflare_subscriptions` table.

use std::collections::BTreeMap;

use super::database::{ColumnInfo, KeyColumn, Nullable, Requirement, ScalarType, TableInfo};

pub const TABLE_NAME: &str = "cloudflare_subscriptions";

/// Column names of the subscriptions table.
pub mod column {
    pub const ID: &str = "id";
    pub const CURRENCY: &str = "currency";
    pub const CURRENT_PERIOD_END: &str = "current_period_end";
    pub const CURRENT_PERIOD_START: &str = "current_period_start";
    pub const FREQUENCY: &str = "frequency";
    pub const PRICE: &str = "price";
    pub const RATE_PLAN: &str = "rate_plan";
    pub const STATE: &str = "state";
    pub const ACCOUNT_ID: &str = "account_id";
}

/// Subscriptions of every account visible to the configured credentials.
pub fn subscriptions_table() -> TableInfo {
    let columns = [
        (
            column::ID,
            ScalarType::String,
            Nullable::Nullable,
            "Subscription identifier tag.",
        ),
        (
            column::CURRENCY,
            ScalarType::String,
            Nullable::Nullable,
            "The monetary unit in which pricing information is displayed.",
        ),
        (
            column::CURRENT_PERIOD_END,
            ScalarType::Timestamp,
            Nullable::Nullable,
            "The end of the current period and also when the next billing is due.",
        ),
        (
            column::CURRENT_PERIOD_START,
            ScalarType::Timestamp,
            Nullable::Nullable,
            "When the current billing period started. May match initial_period_start if this is the first period.",
        ),
        (
            column::FREQUENCY,
            ScalarType::String,
            Nullable::Nullable,
            "How often the subscription is renewed automatically.",
        ),
        (
            column::PRICE,
            ScalarType::Double,
            Nullable::Nullable,
            "The price of the subscription that will be billed, in US dollars.",
        ),
        (
            column::RATE_PLAN,
            ScalarType::Json,
            Nullable::Nullable,
            "The rate plan applied to the subscription.",
        ),
        (
            column::STATE,
            ScalarType::String,
            Nullable::Nullable,
            "The state that the subscription is in.",
        ),
        (
            column::ACCOUNT_ID,
            ScalarType::String,
            Nullable::NonNullable,
            "The account ID to filter subscriptions.",
        ),
    ]
    .into_iter()
    .map(|(name, r#type, nullable, description)| {
        (
            name.to_string(),
            ColumnInfo {
                name: name.to_string(),
                r#type,
                nullable,
                description: Some(description.to_string()),
            },
        )
    })
    .collect::<BTreeMap<_, _>>();

    TableInfo {
        name: TABLE_NAME.to_string(),
        description: Some(
            "Billing subscriptions of the Cloudflare accounts available to the connector."
                .to_string(),
        ),
        columns,
        key_columns: vec![KeyColumn {
            name: column::ACCOUNT_ID.to_string(),
            require: Requirement::Optional,
        }],
    }
}
