//! The `cloudflare_subscriptions` list operation and the account listing that drives it.

use std::sync::Arc;

use cloudflare_client::{Account, CloudflareApi, Connect};
use query_engine_metadata::metadata::subscriptions::column;
use query_engine_translation::translation::execution_plan::ExecutionPlan;

use crate::error::Error;
use crate::metrics::Metrics;
use crate::rows::{RowSink, SubscriptionInfo};

const LIST_SUBSCRIPTIONS: &str = "cloudflare_subscriptions.list_subscriptions";
const LIST_ACCOUNTS: &str = "cloudflare_subscriptions.list_accounts";

/// Stream the subscriptions of one account into the sink.
///
/// When `account_id_qual` is a non-empty id other than the account's, nothing is requested.
/// Streaming stops as soon as the sink wants no more rows.
pub async fn list_subscriptions(
    connection: &dyn Connect,
    metrics: &Metrics,
    account: &Account,
    account_id_qual: Option<&str>,
    sink: &mut dyn RowSink,
) -> Result<(), Error> {
    if let Some(qual) = account_id_qual.filter(|qual| !qual.is_empty()) {
        if qual != account.id {
            return Ok(());
        }
    }

    let api = connect(connection, metrics, LIST_SUBSCRIPTIONS).await?;

    metrics.api_requests_total.inc();
    let page = match api.get_subscriptions(&account.id).await {
        Ok(page) => page,
        Err(err) => {
            metrics.api_errors_total.inc();
            tracing::error!(
                operation = LIST_SUBSCRIPTIONS,
                account_id = %account.id,
                error = %err,
                "api call error"
            );
            return Err(Error::Api {
                account_id: account.id.clone(),
                source: err,
            });
        }
    };

    for subscription in page.into_iter().flatten() {
        sink.stream_list_item(SubscriptionInfo::new(account.id.clone(), subscription))?;
        if sink.rows_remaining() == Some(0) {
            break;
        }
    }

    Ok(())
}

/// List every account, then stream the subscriptions of each one in order.
pub async fn hydrate(
    connection: &dyn Connect,
    metrics: &Metrics,
    plan: &ExecutionPlan,
    sink: &mut dyn RowSink,
) -> Result<(), Error> {
    if sink.rows_remaining() == Some(0) {
        return Ok(());
    }

    let api = connect(connection, metrics, LIST_ACCOUNTS).await?;

    metrics.api_requests_total.inc();
    let accounts = api.list_accounts().await.map_err(|err| {
        metrics.api_errors_total.inc();
        tracing::error!(operation = LIST_ACCOUNTS, error = %err, "api call error");
        Error::ListAccounts(err)
    })?;
    tracing::debug!(accounts = accounts.len(), "listed accounts");

    let account_id_qual = plan.equals_qual(column::ACCOUNT_ID);
    for account in &accounts {
        list_subscriptions(connection, metrics, account, account_id_qual, sink).await?;
        if sink.rows_remaining() == Some(0) {
            break;
        }
    }

    Ok(())
}

async fn connect(
    connection: &dyn Connect,
    metrics: &Metrics,
    operation: &'static str,
) -> Result<Arc<dyn CloudflareApi>, Error> {
    connection.connect().await.map_err(|err| {
        metrics.api_errors_total.inc();
        tracing::error!(operation, error = %err, "connect error");
        Error::Connect(err)
    })
}
