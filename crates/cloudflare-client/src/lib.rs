//! A small client for the parts of the Cloudflare v4 API the connector reads:
//! the accounts visible to a set of credentials, and their subscriptions.

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod models;

pub use api::{CloudflareApi, Connect, Connection};
pub use client::{Client, ClientSettings, DEFAULT_ACCOUNTS_PER_PAGE, DEFAULT_BASE_URL};
pub use credentials::Credentials;
pub use error::{ApiError, ConnectError};
pub use models::{Account, RatePlan, Subscription};
