//! A fake Cloudflare API served over HTTP, for exercising the real client.

use std::collections::BTreeMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use cloudflare_client::{Account, Subscription};

pub const API_PREFIX: &str = "/client/v4";

/// The credentials the fake accepts.
#[derive(Debug, Clone)]
pub enum Auth {
    Token(String),
    Key { email: String, key: String },
}

#[derive(Debug)]
pub struct FakeServerState {
    auth: Auth,
    accounts: Vec<Account>,
    subscriptions: BTreeMap<String, Option<Vec<Subscription>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeServerState {
    pub fn new(auth: Auth) -> Self {
        FakeServerState {
            auth,
            accounts: Vec::new(),
            subscriptions: BTreeMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_account(mut self, account: Account, subscriptions: Vec<Subscription>) -> Self {
        self.subscriptions
            .insert(account.id.clone(), Some(subscriptions));
        self.accounts.push(account);
        self
    }

    /// An account whose subscriptions endpoint answers with `"result": null`.
    #[must_use]
    pub fn with_nil_page(mut self, account: Account) -> Self {
        self.subscriptions.insert(account.id.clone(), None);
        self.accounts.push(account);
        self
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        match &self.auth {
            Auth::Token(token) => {
                let expected = format!("Bearer {token}");
                header_value(headers, header::AUTHORIZATION.as_str()) == Some(expected.as_str())
            }
            Auth::Key { email, key } => {
                header_value(headers, "x-auth-email") == Some(email.as_str())
                    && header_value(headers, "x-auth-key") == Some(key.as_str())
            }
        }
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

/// A running fake server. The server stops with the test's runtime.
pub struct FakeServer {
    pub address: SocketAddr,
    state: Arc<FakeServerState>,
}

impl FakeServer {
    /// The value to configure as the client's base url.
    pub fn base_url(&self) -> String {
        format!("http://{}{API_PREFIX}", self.address)
    }

    /// Path and query of every request received so far.
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Bind to a free local port and serve the fake API in the background.
pub async fn serve(state: FakeServerState) -> FakeServer {
    let state = Arc::new(state);
    let router = Router::new()
        .route(&format!("{API_PREFIX}/accounts"), get(list_accounts))
        .route(
            &format!("{API_PREFIX}/accounts/:account_id/subscriptions"),
            get(get_subscriptions),
        )
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake server");
    let address = listener.local_addr().expect("fake server address");
    let server = axum::Server::from_tcp(listener)
        .expect("fake server from listener")
        .serve(router.into_make_service());

    tokio::spawn(async move {
        if let Err(err) = server.await {
            tracing::error!("fake cloudflare server stopped: {err}");
        }
    });

    FakeServer { address, state }
}

fn header_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[derive(Debug, Deserialize)]
struct PageParams {
    page: Option<usize>,
    per_page: Option<usize>,
}

fn error_envelope(code: i64, message: &str) -> Json<Value> {
    Json(json!({
        "success": false,
        "errors": [{ "code": code, "message": message }],
        "messages": [],
        "result": null,
    }))
}

async fn list_accounts(
    State(state): State<Arc<FakeServerState>>,
    headers: HeaderMap,
    Query(params): Query<PageParams>,
) -> (StatusCode, Json<Value>) {
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(20).max(1);
    state.record(format!("/accounts?page={page}&per_page={per_page}"));

    if !state.authorized(&headers) {
        return (
            StatusCode::FORBIDDEN,
            error_envelope(10000, "Authentication error"),
        );
    }

    let total_count = state.accounts.len();
    let total_pages = total_count.div_ceil(per_page).max(1);
    let result = state
        .accounts
        .iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect::<Vec<_>>();
    let count = result.len();

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": result,
            "result_info": {
                "page": page,
                "per_page": per_page,
                "count": count,
                "total_count": total_count,
                "total_pages": total_pages,
            },
        })),
    )
}

async fn get_subscriptions(
    State(state): State<Arc<FakeServerState>>,
    headers: HeaderMap,
    Path(account_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    state.record(format!("/accounts/{account_id}/subscriptions"));

    if !state.authorized(&headers) {
        return (
            StatusCode::FORBIDDEN,
            error_envelope(10000, "Authentication error"),
        );
    }

    match state.subscriptions.get(&account_id) {
        Some(subscriptions) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": subscriptions,
            })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            error_envelope(7003, "Could not route to /accounts, perhaps your object identifier is invalid?"),
        ),
    }
}
