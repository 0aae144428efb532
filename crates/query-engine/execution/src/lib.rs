//! Query execution against the Cloudflare API.
//! Accounts are listed first, then the subscriptions of each account are streamed into a row sink
//! until the row budget of the request is exhausted.

pub mod error;
pub mod filter;
pub mod metrics;
pub mod query;
pub mod rows;
pub mod subscriptions;
