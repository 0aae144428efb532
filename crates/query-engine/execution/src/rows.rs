//! Rows produced by the list operation and the sink that collects them.

use cloudflare_client::Subscription;
use indexmap::IndexMap;
use ndc_models as models;
use query_engine_translation::translation::execution_plan::{ExecutionPlan, Filter};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::filter;

/// A subscription, decorated with the account it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionInfo {
    pub account_id: String,
    #[serde(flatten)]
    pub subscription: Subscription,
}

impl SubscriptionInfo {
    pub fn new(account_id: impl Into<String>, subscription: Subscription) -> Self {
        SubscriptionInfo {
            account_id: account_id.into(),
            subscription,
        }
    }

    /// The column values of the row, keyed by column name.
    pub fn to_row(&self) -> Result<Map<String, Value>, Error> {
        match serde_json::to_value(self).map_err(Error::Row)? {
            Value::Object(row) => Ok(row),
            other => Err(Error::Row(serde::ser::Error::custom(format!(
                "expected an object, got {other}"
            )))),
        }
    }
}

/// Where the list operation streams its rows.
pub trait RowSink: Send {
    fn stream_list_item(&mut self, item: SubscriptionInfo) -> Result<(), Error>;

    /// How many more rows the caller wants. `None` when there is no limit.
    fn rows_remaining(&self) -> Option<u64>;
}

/// Collects the rows of a plan into a `RowSet`, applying its filter, offset, limit and projection.
#[derive(Debug)]
pub struct RowSetBuilder<'a> {
    fields: Option<&'a IndexMap<String, String>>,
    filter: Option<&'a Filter>,
    to_skip: u64,
    limit: Option<u64>,
    kept: u64,
    rows: Vec<IndexMap<models::FieldName, models::RowFieldValue>>,
}

impl<'a> RowSetBuilder<'a> {
    pub fn new(plan: &'a ExecutionPlan) -> Self {
        RowSetBuilder {
            fields: plan.fields.as_ref(),
            filter: plan.filter.as_ref(),
            to_skip: plan.offset.map_or(0, u64::from),
            limit: plan.limit.map(u64::from),
            kept: 0,
            rows: Vec::new(),
        }
    }

    /// The number of rows kept so far.
    pub fn rows_kept(&self) -> u64 {
        self.kept
    }

    pub fn finish(self) -> models::RowSet {
        models::RowSet {
            aggregates: None,
            rows: self.fields.map(|_| self.rows),
        }
    }

    fn project(&self, row: &Map<String, Value>) -> IndexMap<models::FieldName, models::RowFieldValue> {
        self.fields
            .into_iter()
            .flatten()
            .map(|(alias, column)| {
                let value = row.get(column).cloned().unwrap_or(Value::Null);
                (alias.clone().into(), models::RowFieldValue(value))
            })
            .collect()
    }
}

impl RowSink for RowSetBuilder<'_> {
    fn stream_list_item(&mut self, item: SubscriptionInfo) -> Result<(), Error> {
        if self.rows_remaining() == Some(0) {
            return Ok(());
        }

        let row = item.to_row()?;
        if let Some(filter) = self.filter {
            if !filter::matches(filter, &row) {
                return Ok(());
            }
        }
        if self.to_skip > 0 {
            self.to_skip -= 1;
            return Ok(());
        }

        let projected = self.project(&row);
        self.rows.push(projected);
        self.kept += 1;
        Ok(())
    }

    fn rows_remaining(&self) -> Option<u64> {
        self.limit.map(|limit| limit.saturating_sub(self.kept))
    }
}
