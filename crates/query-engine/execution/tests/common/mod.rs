use std::collections::BTreeMap;

use indexmap::IndexMap;
use ndc_models as models;
use query_engine_execution::error::Error;
use query_engine_execution::metrics::Metrics;
use query_engine_execution::rows::{RowSink, SubscriptionInfo};
use query_engine_metadata::metadata::subscriptions::{column, subscriptions_table};
use query_engine_translation::translation::execution_plan::{ExecutionPlan, Filter};

/// Collects every streamed item, optionally wanting only a fixed number of rows.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub items: Vec<SubscriptionInfo>,
    budget: Option<u64>,
}

impl CollectingSink {
    pub fn new() -> Self {
        CollectingSink::default()
    }

    pub fn with_budget(budget: u64) -> Self {
        CollectingSink {
            items: Vec::new(),
            budget: Some(budget),
        }
    }

    pub fn subscription_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.subscription.id.clone())
            .collect()
    }
}

impl RowSink for CollectingSink {
    fn stream_list_item(&mut self, item: SubscriptionInfo) -> Result<(), Error> {
        self.items.push(item);
        Ok(())
    }

    fn rows_remaining(&self) -> Option<u64> {
        self.budget
            .map(|budget| budget.saturating_sub(self.items.len() as u64))
    }
}

pub fn metrics() -> Metrics {
    Metrics::initialize(&mut prometheus::Registry::new()).unwrap()
}

/// A plan selecting the given columns under their own names.
pub fn plan(columns: &[&str]) -> ExecutionPlan {
    ExecutionPlan {
        table: subscriptions_table(),
        quals: BTreeMap::new(),
        fields: Some(
            columns
                .iter()
                .map(|column| ((*column).to_string(), (*column).to_string()))
                .collect::<IndexMap<_, _>>(),
        ),
        filter: None,
        limit: None,
        offset: None,
    }
}

/// Restrict a plan to one account, the way translation does for `account_id _eq <id>`.
pub fn for_account(mut plan: ExecutionPlan, account_id: &str) -> ExecutionPlan {
    plan.quals
        .insert(column::ACCOUNT_ID.to_string(), account_id.to_string());
    plan.filter = Some(Filter::Equals {
        column: column::ACCOUNT_ID.to_string(),
        scalar_type: query_engine_metadata::metadata::ScalarType::String,
        value: serde_json::Value::String(account_id.to_string()),
    });
    plan
}

/// The rows of the single row set, as JSON.
pub fn rows(response: &models::QueryResponse) -> serde_json::Value {
    assert_eq!(response.0.len(), 1);
    serde_json::to_value(&response.0[0].rows).unwrap()
}
