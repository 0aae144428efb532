//! Convert a parsed configuration into the runtime configuration.

use std::time::Duration;

use cloudflare_client::ClientSettings;
use query_engine_metadata::metadata;

use crate::configuration::Configuration;
use crate::environment::Environment;
use crate::error::MakeRuntimeConfigurationError;
use crate::version1::ParsedConfiguration;

/// Resolve the secrets of the parsed configuration and assemble everything needed to serve
/// requests.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
    environment: impl Environment,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let credentials = parsed_config.credentials.resolve(&environment)?;

    Ok(Configuration {
        metadata: metadata::Metadata::new(),
        client_settings: ClientSettings {
            base_url: parsed_config.base_url,
            credentials,
            timeout: Duration::from_secs(parsed_config.timeout_seconds),
            accounts_per_page: parsed_config.accounts_per_page,
        },
    })
}
