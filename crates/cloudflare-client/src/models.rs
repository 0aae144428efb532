//! Wire types of the Cloudflare API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The envelope every Cloudflare API response is wrapped in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ResponseInfo>,
    #[serde(default)]
    pub messages: Vec<ResponseInfo>,
    pub result: Option<T>,
    pub result_info: Option<ResultInfo>,
}

/// An error or message reported inside an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    pub code: i64,
    pub message: String,
}

impl std::fmt::Display for ResponseInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

/// Pagination details of a list response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Account {
            id: id.into(),
            name: None,
            account_type: None,
            created_on: None,
            settings: None,
        }
    }
}

/// A billing plan instance attached to an account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription identifier tag.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_period_start: Option<DateTime<Utc>>,
    /// One of `weekly`, `monthly`, `quarterly` or `yearly`.
    #[serde(default)]
    pub frequency: Option<String>,
    /// In US dollars.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rate_plan: Option<RatePlan>,
    /// For example `Paid`, `Trial` or `Cancelled`.
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatePlan {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub externally_managed: Option<bool>,
    #[serde(default)]
    pub is_contract: Option<bool>,
    #[serde(default)]
    pub public_name: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub sets: Option<Vec<String>>,
}
