//! Implement the `/query/explain` endpoint.
//!
//! Nothing is sent to the API: the details describe the requests a query would make.

use std::collections::BTreeMap;

use tracing::{info_span, Instrument};

use ndc_cloudflare_configuration as configuration;
use ndc_sdk::connector;
use ndc_sdk::models;
use query_engine_metadata::metadata::subscriptions::column;
use query_engine_translation::translation::execution_plan::{ExecutionPlan, Filter};

use super::query::plan_query;
use super::state;

/// Explain a query by creating an execution plan
///
/// This function implements the [explain endpoint](https://hasura.github.io/ndc-spec/specification/explain.html)
/// from the NDC specification.
pub async fn explain(
    configuration: &configuration::Configuration,
    state: &state::State,
    query_request: models::QueryRequest,
) -> Result<models::ExplainResponse, connector::ErrorResponse> {
    // Compile the query.
    let plan = async { plan_query(configuration, query_request) }
        .instrument(info_span!("Plan query"))
        .await?;

    let details = describe(&plan);

    // assuming explain succeeded, increment counter
    state.metrics.record_successful_explain();

    Ok(models::ExplainResponse { details })
}

/// Describe the plan, one entry per aspect.
pub fn describe(plan: &ExecutionPlan) -> BTreeMap<String, String> {
    let mut details = BTreeMap::from([
        ("Collection".to_string(), plan.table.name.clone()),
        (
            "Account Filter".to_string(),
            plan.equals_qual(column::ACCOUNT_ID)
                .unwrap_or("none")
                .to_string(),
        ),
        ("API Requests".to_string(), describe_requests(plan)),
    ]);

    if let Some(fields) = &plan.fields {
        details.insert(
            "Fields".to_string(),
            fields
                .iter()
                .map(|(alias, column)| {
                    if alias == column {
                        column.clone()
                    } else {
                        format!("{alias}: {column}")
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        );
    }
    if let Some(filter) = &plan.filter {
        details.insert("Filter".to_string(), render_filter(filter));
    }
    if let Some(limit) = plan.limit {
        details.insert("Limit".to_string(), limit.to_string());
    }
    if let Some(offset) = plan.offset {
        details.insert("Offset".to_string(), offset.to_string());
    }

    details
}

fn describe_requests(plan: &ExecutionPlan) -> String {
    if plan.fields.is_none() || plan.limit == Some(0) {
        return "none".to_string();
    }
    match plan.equals_qual(column::ACCOUNT_ID) {
        Some(account_id) if !account_id.is_empty() => {
            format!("GET /accounts, then GET /accounts/{account_id}/subscriptions")
        }
        _ => "GET /accounts, then GET /accounts/{account_id}/subscriptions for each account"
            .to_string(),
    }
}

fn render_filter(filter: &Filter) -> String {
    let join = |filters: &[Filter], operator: &str| {
        let rendered = filters.iter().map(render_filter).collect::<Vec<_>>();
        format!("({})", rendered.join(&format!(" {operator} ")))
    };
    match filter {
        Filter::And(filters) => join(filters, "AND"),
        Filter::Or(filters) => join(filters, "OR"),
        Filter::Not(filter) => format!("NOT {}", render_filter(filter)),
        Filter::IsNull { column } => format!("{column} IS NULL"),
        Filter::Equals { column, value, .. } => format!("{column} _eq {value}"),
        Filter::In { column, values, .. } => format!(
            "{column} _in [{}]",
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
