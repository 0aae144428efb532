//! This defines a `Connector` implementation for the Cloudflare API.
//!
//! The routes are defined here.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info_span, Instrument};

use ndc_sdk::connector;
use ndc_sdk::connector::{Connector, ConnectorSetup, Result};
use ndc_sdk::json_response::JsonResponse;
use ndc_sdk::models;

use ndc_cloudflare_configuration as configuration;
use ndc_cloudflare_configuration::environment::Environment;

use super::capabilities;
use super::explain;
use super::query;
use super::schema;
use super::state;

pub struct Cloudflare;

#[async_trait]
impl Connector for Cloudflare {
    /// The parsed configuration
    type Configuration = Arc<configuration::Configuration>;
    /// The unserializable, transient state
    type State = Arc<state::State>;

    /// Update any metrics from the state
    ///
    /// Every metric of this connector is a counter updated as requests are served,
    /// so there is nothing to poll here.
    fn fetch_metrics(_configuration: &Self::Configuration, _state: &Self::State) -> Result<()> {
        Ok(())
    }

    /// Get the connector's capabilities.
    ///
    /// This function implements the [capabilities endpoint](https://hasura.github.io/ndc-spec/specification/capabilities.html)
    /// from the NDC specification.
    async fn get_capabilities() -> models::Capabilities {
        capabilities::get_capabilities()
    }

    /// Get the connector's schema.
    ///
    /// This function implements the [schema endpoint](https://hasura.github.io/ndc-spec/specification/schema/index.html)
    /// from the NDC specification.
    async fn get_schema(
        configuration: &Self::Configuration,
    ) -> Result<JsonResponse<models::SchemaResponse>> {
        Ok(schema::get_schema(&configuration.metadata).into())
    }

    /// Explain a query by creating an execution plan
    ///
    /// This function implements the [query/explain endpoint](https://hasura.github.io/ndc-spec/specification/explain.html)
    /// from the NDC specification.
    async fn query_explain(
        configuration: &Self::Configuration,
        state: &Self::State,
        request: models::QueryRequest,
    ) -> Result<JsonResponse<models::ExplainResponse>> {
        explain::explain(configuration, state, request)
            .await
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "ndc",
                    event.name = "Explain error",
                    name = "Explain error",
                    body = %err,
                    error = true,
                );
                err
            })
            .map(Into::into)
    }

    /// Explain a mutation by creating an execution plan
    ///
    /// This function implements the [mutation/explain endpoint](https://hasura.github.io/ndc-spec/specification/explain.html)
    /// from the NDC specification.
    async fn mutation_explain(
        _configuration: &Self::Configuration,
        _state: &Self::State,
        _request: models::MutationRequest,
    ) -> Result<JsonResponse<models::ExplainResponse>> {
        Err("mutations are not supported by the Cloudflare connector"
            .to_string()
            .into())
    }

    /// Execute a mutation
    ///
    /// This function implements the [mutation endpoint](https://hasura.github.io/ndc-spec/specification/mutations/index.html)
    /// from the NDC specification.
    async fn mutation(
        _configuration: &Self::Configuration,
        _state: &Self::State,
        _request: models::MutationRequest,
    ) -> Result<JsonResponse<models::MutationResponse>> {
        Err("mutations are not supported by the Cloudflare connector"
            .to_string()
            .into())
    }

    /// Execute a query
    ///
    /// This function implements the [query endpoint](https://hasura.github.io/ndc-spec/specification/queries/index.html)
    /// from the NDC specification.
    async fn query(
        configuration: &Self::Configuration,
        state: &Self::State,
        query_request: models::QueryRequest,
    ) -> Result<JsonResponse<models::QueryResponse>> {
        query::query(configuration, state, query_request)
            .await
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "ndc",
                    event.name = "Query error",
                    name = "Query error",
                    body = %err,
                    error = true,
                );
                err
            })
            .map(Into::into)
    }
}

pub struct CloudflareSetup<Env: Environment> {
    environment: Env,
}

impl<Env: Environment> CloudflareSetup<Env> {
    pub fn new(environment: Env) -> Self {
        Self { environment }
    }
}

#[async_trait]
impl<Env: Environment + Send + Sync> ConnectorSetup for CloudflareSetup<Env> {
    type Connector = Cloudflare;

    /// Validate the raw configuration provided by the user,
    /// returning a configuration error or a validated `Connector::Configuration`.
    async fn parse_configuration(
        &self,
        configuration_dir: impl AsRef<Path> + Send,
    ) -> Result<<Self::Connector as Connector>::Configuration> {
        let configuration_file = configuration_dir
            .as_ref()
            .join(configuration::CONFIGURATION_FILENAME);

        // Note that we don't log validation errors, because they are part of the normal business
        // operation of configuration validation, i.e. they don't represent an error condition that
        // signifies that anything has gone wrong with the ndc process or infrastructure.
        let parsed_configuration = configuration::parse_configuration(configuration_dir)
            .instrument(info_span!("parse configuration"))
            .await
            .map_err(|error| -> connector::ErrorResponse {
                match error {
                    configuration::error::ParseConfigurationError::ParseError {
                        file_path,
                        line,
                        column,
                        message,
                    } => connector::ParseError::ParseError(connector::LocatedError {
                        file_path,
                        line,
                        column,
                        message,
                    })
                    .into(),
                    configuration::error::ParseConfigurationError::ValidateError {
                        file_path,
                        node,
                        message,
                    } => connector::ParseError::ValidateError(connector::InvalidNodes(vec![
                        connector::InvalidNode {
                            file_path,
                            node_path: node_path(&node),
                            message,
                        },
                    ]))
                    .into(),
                    configuration::error::ParseConfigurationError::IoError(inner) => {
                        connector::ParseError::IoError(inner).into()
                    }
                    configuration::error::ParseConfigurationError::IoErrorButStringified(inner) => {
                        inner.into()
                    }
                }
            })?;

        let runtime_configuration =
            configuration::make_runtime_configuration(parsed_configuration, &self.environment)
                .map_err(|error| {
                    connector::ParseError::ValidateError(connector::InvalidNodes(vec![
                        connector::InvalidNode {
                            file_path: configuration_file.clone(),
                            node_path: node_path(error.node()),
                            message: error.to_string(),
                        },
                    ]))
                })?;

        Ok(Arc::new(runtime_configuration))
    }

    /// Initialize the connector's in-memory state.
    ///
    /// The metrics are registered here, and the connection to the API is prepared.
    async fn try_init_state(
        &self,
        configuration: &<Self::Connector as Connector>::Configuration,
        metrics: &mut prometheus::Registry,
    ) -> Result<<Self::Connector as Connector>::State> {
        state::create_state(&configuration.client_settings, metrics)
            .instrument(info_span!("Initialise state"))
            .await
            .map(Arc::new)
            .map_err(connector::ErrorResponse::from_error)
            .map_err(|err| {
                tracing::error!(
                    meta.signal_type = "log",
                    event.domain = "ndc",
                    event.name = "Initialization error",
                    name = "Initialization error",
                    body = %err,
                    error = true,
                );
                err
            })
    }
}

/// Split a dotted configuration node into its keys.
fn node_path(node: &str) -> Vec<connector::KeyOrIndex> {
    node.split('.')
        .map(|key| connector::KeyOrIndex::Key(key.into()))
        .collect()
}
