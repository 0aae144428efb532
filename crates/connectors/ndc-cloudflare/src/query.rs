//! Implement the `/query` endpoint to run a query against the Cloudflare API.
//! See the Hasura
//! [Native Data Connector Specification](https://hasura.github.io/ndc-spec/specification/queries/index.html)
//! for further details.

use tracing::{info_span, Instrument};

use ndc_cloudflare_configuration as configuration;
use ndc_sdk::connector;
use ndc_sdk::models;
use query_engine_execution::query;
use query_engine_translation::translation;

use super::state;

/// Execute a query
///
/// This function implements the [query endpoint](https://hasura.github.io/ndc-spec/specification/queries/index.html)
/// from the NDC specification.
pub async fn query(
    configuration: &configuration::Configuration,
    state: &state::State,
    query_request: models::QueryRequest,
) -> Result<models::QueryResponse, connector::ErrorResponse> {
    let timer = std::time::Instant::now();

    // Compile the query.
    let plan = async { plan_query(configuration, query_request) }
        .instrument(info_span!("Plan query"))
        .await?;

    // Execute the query.
    let result = query::execute(state.connection.as_ref(), &state.metrics, &plan)
        .instrument(info_span!("Execute query"))
        .await
        .map_err(connector::ErrorResponse::from_error)?;

    // assuming query succeeded, increment counter
    state.metrics.record_successful_query();

    tracing::debug!(elapsed = ?timer.elapsed(), "query finished");
    Ok(result)
}

/// Translate the request into a plan for the execution phase.
pub(crate) fn plan_query(
    configuration: &configuration::Configuration,
    query_request: models::QueryRequest,
) -> Result<translation::execution_plan::ExecutionPlan, connector::ErrorResponse> {
    translation::query::translate(&configuration.metadata, query_request)
        .map_err(connector::ErrorResponse::from_error)
}
