//! HTTP implementation of [`CloudflareApi`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::CloudflareApi;
use crate::credentials::Credentials;
use crate::error::{ApiError, ConnectError};
use crate::models::{Account, Envelope, Subscription};

pub const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";
pub const DEFAULT_ACCOUNTS_PER_PAGE: u32 = 50;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("ndc-cloudflare/", env!("CARGO_PKG_VERSION"));

/// Everything needed to open a connection to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub credentials: Credentials,
    pub timeout: Duration,
    pub accounts_per_page: u32,
}

impl ClientSettings {
    pub fn new(credentials: Credentials) -> Self {
        ClientSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
            accounts_per_page: DEFAULT_ACCOUNTS_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    accounts_per_page: u32,
}

impl Client {
    pub fn new(settings: &ClientSettings) -> Result<Self, ConnectError> {
        let headers = settings.credentials.headers()?;

        let base_url =
            Url::parse(&settings.base_url).map_err(|err| ConnectError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: err.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(ConnectError::InvalidBaseUrl {
                url: settings.base_url.clone(),
                reason: "not a hierarchical url".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(ConnectError::Client)?;

        Ok(Client {
            http,
            base_url,
            accounts_per_page: settings.accounts_per_page.max(1),
        })
    }

    /// Append path segments to the base url, percent-encoding each of them.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Envelope<T>, ApiError> {
        let path = url.path().to_string();
        tracing::debug!(url = %url, "cloudflare api request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                path: path.clone(),
                source,
            })?;
        let status = response.status();
        let body = response.bytes().await.map_err(|source| ApiError::Request {
            path: path.clone(),
            source,
        })?;

        if !status.is_success() {
            let errors = serde_json::from_slice::<Envelope<serde_json::Value>>(&body)
                .map(|envelope| envelope.errors)
                .unwrap_or_default();
            return Err(ApiError::Status {
                path,
                status: status.as_u16(),
                errors,
            });
        }

        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                path: path.clone(),
                source,
            })?;
        if !envelope.success {
            return Err(ApiError::Unsuccessful {
                path,
                errors: envelope.errors,
            });
        }
        Ok(envelope)
    }
}

#[async_trait]
impl CloudflareApi for Client {
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        let mut accounts = Vec::new();
        let mut page: u32 = 1;
        loop {
            let mut url = self.endpoint(&["accounts"]);
            url.query_pairs_mut()
                .append_pair("page", &page.to_string())
                .append_pair("per_page", &self.accounts_per_page.to_string());

            let envelope = self.get::<Vec<Account>>(url).await?;
            let batch = envelope.result.unwrap_or_default();
            let fetched = batch.len();
            accounts.extend(batch);

            let has_more = match envelope.result_info {
                Some(info) => match info.total_pages {
                    Some(total_pages) => page < total_pages,
                    None => fetched >= self.accounts_per_page as usize,
                },
                None => false,
            };
            if !has_more || fetched == 0 {
                break;
            }
            page += 1;
        }

        tracing::debug!(accounts = accounts.len(), pages = page, "listed accounts");
        Ok(accounts)
    }

    async fn get_subscriptions(
        &self,
        account_id: &str,
    ) -> Result<Option<Vec<Subscription>>, ApiError> {
        let url = self.endpoint(&["accounts", account_id, "subscriptions"]);
        let envelope = self.get::<Vec<Subscription>>(url).await?;
        Ok(envelope.result)
    }
}
