use cloudflare_client::Credentials;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;

pub const DEFAULT_API_TOKEN_VARIABLE: &str = "CLOUDFLARE_API_TOKEN";
pub const DEFAULT_API_KEY_VARIABLE: &str = "CLOUDFLARE_API_KEY";
pub const DEFAULT_EMAIL_VARIABLE: &str = "CLOUDFLARE_EMAIL";

/// How the connector authenticates against the Cloudflare API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CredentialsSettings {
    /// A scoped API token with read access to billing.
    ApiToken(Secret),
    /// The global API key of a user, together with their email.
    ApiKey { email: Secret, key: Secret },
}

impl CredentialsSettings {
    /// An API token read from `CLOUDFLARE_API_TOKEN`.
    pub fn empty() -> Self {
        CredentialsSettings::ApiToken(Secret::from_environment(DEFAULT_API_TOKEN_VARIABLE))
    }

    /// An API key read from `CLOUDFLARE_API_KEY` and `CLOUDFLARE_EMAIL`.
    pub fn api_key_from_environment() -> Self {
        CredentialsSettings::ApiKey {
            email: Secret::from_environment(DEFAULT_EMAIL_VARIABLE),
            key: Secret::from_environment(DEFAULT_API_KEY_VARIABLE),
        }
    }

    pub fn resolve(
        &self,
        environment: &impl Environment,
    ) -> Result<Credentials, MakeRuntimeConfigurationError> {
        match self {
            CredentialsSettings::ApiToken(token) => Ok(Credentials::ApiToken(
                token.resolve(environment, "credentials.apiToken")?,
            )),
            CredentialsSettings::ApiKey { email, key } => Ok(Credentials::ApiKey {
                email: email.resolve(environment, "credentials.apiKey.email")?,
                key: key.resolve(environment, "credentials.apiKey.key")?,
            }),
        }
    }
}
