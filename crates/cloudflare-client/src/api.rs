//! The seams between the query engine and the Cloudflare API.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::client::{Client, ClientSettings};
use crate::error::{ApiError, ConnectError};
use crate::models::{Account, Subscription};

/// The API calls the connector needs.
#[async_trait]
pub trait CloudflareApi: Send + Sync {
    /// Every account the credentials can see, across all pages.
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError>;

    /// The subscriptions of an account. `None` when the API returned no result.
    async fn get_subscriptions(
        &self,
        account_id: &str,
    ) -> Result<Option<Vec<Subscription>>, ApiError>;
}

/// Opens (or reuses) an authenticated API client.
#[async_trait]
pub trait Connect: Send + Sync {
    async fn connect(&self) -> Result<Arc<dyn CloudflareApi>, ConnectError>;
}

/// A lazily opened connection, shared by every request served by the connector.
#[derive(Debug)]
pub struct Connection {
    settings: ClientSettings,
    client: OnceCell<Arc<Client>>,
}

impl Connection {
    pub fn new(settings: ClientSettings) -> Self {
        Connection {
            settings,
            client: OnceCell::new(),
        }
    }
}

#[async_trait]
impl Connect for Connection {
    async fn connect(&self) -> Result<Arc<dyn CloudflareApi>, ConnectError> {
        let client = self
            .client
            .get_or_try_init(|| async { Client::new(&self.settings).map(Arc::new) })
            .await?;
        let client: Arc<dyn CloudflareApi> = client.clone();
        Ok(client)
    }
}
