//! Common functions used across test cases.

use std::sync::Arc;

use cloudflare_client::{ClientSettings, Credentials};
use ndc_cloudflare::state::State;
use ndc_cloudflare_configuration::Configuration;
use ndc_sdk::models;
use query_engine_execution::metrics::Metrics;
use query_engine_metadata::metadata::Metadata;
use tests_common::fake_api::{FakeCloudflare, FakeConnection};
use tests_common::fixtures::{
    account, acme_subscriptions, globex_subscriptions, ACME_ACCOUNT_ID, GLOBEX_ACCOUNT_ID,
};

pub const STATIC_CONFIGURATION_PATH: &str = "static/";

pub use tests_common::logging::init_logger;

pub fn configuration() -> Configuration {
    Configuration {
        metadata: Metadata::new(),
        client_settings: ClientSettings::new(Credentials::ApiToken("test-token".to_string())),
    }
}

/// Connector state backed by a fake API with the Acme and Globex accounts.
pub fn state() -> (State, Arc<FakeConnection>) {
    init_logger();
    let connection = Arc::new(FakeConnection::new(
        FakeCloudflare::new()
            .with_account(account(ACME_ACCOUNT_ID, "Acme"), acme_subscriptions())
            .with_account(account(GLOBEX_ACCOUNT_ID, "Globex"), globex_subscriptions()),
    ));
    let state = State {
        metrics: Metrics::initialize(&mut prometheus::Registry::new()).unwrap(),
        connection: connection.clone(),
    };
    (state, connection)
}

pub fn request(request: serde_json::Value) -> models::QueryRequest {
    serde_json::from_value(request).unwrap()
}
