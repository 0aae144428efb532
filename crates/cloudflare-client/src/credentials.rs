use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::ConnectError;

const AUTH_EMAIL_HEADER: &str = "x-auth-email";
const AUTH_KEY_HEADER: &str = "x-auth-key";

/// How requests are authenticated against the API.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A scoped API token, sent as a bearer token.
    ApiToken(String),
    /// The legacy global API key together with the account email.
    ApiKey { email: String, key: String },
}

impl Credentials {
    /// The headers attached to every request.
    pub(crate) fn headers(&self) -> Result<HeaderMap, ConnectError> {
        let mut headers = HeaderMap::new();
        match self {
            Credentials::ApiToken(token) => {
                if token.trim().is_empty() {
                    return Err(ConnectError::MissingCredentials);
                }
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                    .map_err(ConnectError::InvalidCredentials)?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Credentials::ApiKey { email, key } => {
                if email.trim().is_empty() || key.trim().is_empty() {
                    return Err(ConnectError::MissingCredentials);
                }
                let email =
                    HeaderValue::from_str(email.trim()).map_err(ConnectError::InvalidCredentials)?;
                let mut key =
                    HeaderValue::from_str(key.trim()).map_err(ConnectError::InvalidCredentials)?;
                key.set_sensitive(true);
                headers.insert(AUTH_EMAIL_HEADER, email);
                headers.insert(AUTH_KEY_HEADER, key);
            }
        }
        Ok(headers)
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiToken(_) => f.debug_tuple("ApiToken").field(&"<redacted>").finish(),
            Credentials::ApiKey { email, .. } => f
                .debug_struct("ApiKey")
                .field("email", email)
                .field("key", &"<redacted>")
                .finish(),
        }
    }
}
