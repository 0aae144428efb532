//! Errors raised while connecting to, or calling, the Cloudflare API.

use thiserror::Error;

use crate::models::ResponseInfo;

/// The client could not be set up from the configured credentials.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("no credentials were configured: provide an API token, or an API key and email")]
    MissingCredentials,
    #[error("credentials contain characters that cannot be sent in an HTTP header")]
    InvalidCredentials(#[source] reqwest::header::InvalidHeaderValue),
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("unable to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A call to the Cloudflare API failed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} responded with status {status}: {}", describe(.errors))]
    Status {
        path: String,
        status: u16,
        errors: Vec<ResponseInfo>,
    },
    #[error("{path} reported a failure: {}", describe(.errors))]
    Unsuccessful {
        path: String,
        errors: Vec<ResponseInfo>,
    },
    #[error("unable to decode the response of {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// The errors reported by the API itself, if it sent any.
    pub fn errors(&self) -> &[ResponseInfo] {
        match self {
            ApiError::Status { errors, .. } | ApiError::Unsuccessful { errors, .. } => errors,
            ApiError::Request { .. } | ApiError::Decode { .. } => &[],
        }
    }
}

fn describe(errors: &[ResponseInfo]) -> String {
    if errors.is_empty() {
        "no error details".to_string()
    } else {
        errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
