//! An in-memory stand-in for the Cloudflare API.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cloudflare_client::models::ResponseInfo;
use cloudflare_client::{Account, ApiError, CloudflareApi, Connect, ConnectError, Subscription};

/// A call received by the fake, in order of arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAccounts,
    GetSubscriptions(String),
}

#[derive(Debug, Clone)]
enum Outcome {
    Page(Option<Vec<Subscription>>),
    Failure,
}

#[derive(Debug, Default)]
pub struct FakeCloudflare {
    accounts: Vec<Account>,
    subscriptions: BTreeMap<String, Outcome>,
    fail_account_listing: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeCloudflare {
    pub fn new() -> Self {
        FakeCloudflare::default()
    }

    /// Add an account whose subscriptions call returns the given entries.
    #[must_use]
    pub fn with_account(mut self, account: Account, subscriptions: Vec<Subscription>) -> Self {
        self.subscriptions
            .insert(account.id.clone(), Outcome::Page(Some(subscriptions)));
        self.accounts.push(account);
        self
    }

    /// Add an account whose subscriptions call returns a `null` result.
    #[must_use]
    pub fn with_nil_page(mut self, account: Account) -> Self {
        self.subscriptions
            .insert(account.id.clone(), Outcome::Page(None));
        self.accounts.push(account);
        self
    }

    /// Add an account whose subscriptions call fails.
    #[must_use]
    pub fn with_failing_account(mut self, account: Account) -> Self {
        self.subscriptions
            .insert(account.id.clone(), Outcome::Failure);
        self.accounts.push(account);
        self
    }

    #[must_use]
    pub fn failing_account_listing(mut self) -> Self {
        self.fail_account_listing = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The accounts whose subscriptions were requested.
    pub fn subscription_requests(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::GetSubscriptions(account_id) => Some(account_id),
                Call::ListAccounts => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn failure(path: String) -> ApiError {
    ApiError::Unsuccessful {
        path,
        errors: vec![ResponseInfo {
            code: 10000,
            message: "Authentication error".to_string(),
        }],
    }
}

#[async_trait]
impl CloudflareApi for FakeCloudflare {
    async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.record(Call::ListAccounts);
        if self.fail_account_listing {
            return Err(failure("/accounts".to_string()));
        }
        Ok(self.accounts.clone())
    }

    async fn get_subscriptions(
        &self,
        account_id: &str,
    ) -> Result<Option<Vec<Subscription>>, ApiError> {
        self.record(Call::GetSubscriptions(account_id.to_string()));
        match self.subscriptions.get(account_id) {
            Some(Outcome::Page(page)) => Ok(page.clone()),
            Some(Outcome::Failure) | None => Err(failure(format!(
                "/accounts/{account_id}/subscriptions"
            ))),
        }
    }
}

/// Hands out a shared [`FakeCloudflare`], or refuses to connect.
#[derive(Debug)]
pub struct FakeConnection {
    api: Arc<FakeCloudflare>,
    refuse: bool,
    connects: AtomicUsize,
}

impl FakeConnection {
    pub fn new(api: FakeCloudflare) -> Self {
        FakeConnection {
            api: Arc::new(api),
            refuse: false,
            connects: AtomicUsize::new(0),
        }
    }

    /// A connection whose credentials are rejected.
    pub fn refusing() -> Self {
        FakeConnection {
            refuse: true,
            ..FakeConnection::new(FakeCloudflare::new())
        }
    }

    pub fn api(&self) -> &FakeCloudflare {
        &self.api
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connect for FakeConnection {
    async fn connect(&self) -> Result<Arc<dyn CloudflareApi>, ConnectError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.refuse {
            return Err(ConnectError::MissingCredentials);
        }
        let api: Arc<dyn CloudflareApi> = self.api.clone();
        Ok(api)
    }
}
