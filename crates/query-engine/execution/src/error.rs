//! Errors for query execution.

use cloudflare_client::{ApiError, ConnectError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to connect to the Cloudflare API: {0}")]
    Connect(#[from] ConnectError),
    #[error("unable to list accounts: {0}")]
    ListAccounts(#[source] ApiError),
    #[error("unable to list the subscriptions of account '{account_id}': {source}")]
    Api {
        account_id: String,
        #[source]
        source: ApiError,
    },
    #[error("unable to convert a subscription into a row: {0}")]
    Row(#[source] serde_json::Error),
}
