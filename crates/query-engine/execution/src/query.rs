//! Execute an execution plan against the Cloudflare API.

use cloudflare_client::Connect;
use ndc_models as models;
use query_engine_translation::translation::execution_plan::ExecutionPlan;

use crate::error::Error;
use crate::metrics::Metrics;
use crate::rows::RowSetBuilder;
use crate::subscriptions;

/// Run the plan and assemble its single row set.
/// A plan selecting no fields produces a row set without rows and makes no API calls.
pub async fn execute(
    connection: &dyn Connect,
    metrics: &Metrics,
    plan: &ExecutionPlan,
) -> Result<models::QueryResponse, Error> {
    let mut builder = RowSetBuilder::new(plan);

    if plan.fields.is_some() {
        subscriptions::hydrate(connection, metrics, plan, &mut builder).await?;
    }

    metrics.rows_streamed_total.inc_by(builder.rows_kept());
    Ok(models::QueryResponse(vec![builder.finish()]))
}
