//! The first version of the configuration format.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use cloudflare_client::{DEFAULT_ACCOUNTS_PER_PAGE, DEFAULT_BASE_URL};

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::CredentialsSettings;

pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// The largest page the accounts listing accepts.
const MAX_ACCOUNTS_PER_PAGE: u32 = 50;

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub enum Version {
    #[serde(rename = "1")]
    This,
}

/// The configuration as it is written in `configuration.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    /// Which version of the configuration format are we using
    pub version: Version,
    /// Points editors at the JSON schema written next to the configuration.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Credentials used for every request to the Cloudflare API.
    pub credentials: CredentialsSettings,
    /// Root of the Cloudflare v4 API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout of a single API request, in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Page size used when listing accounts.
    #[serde(default = "default_accounts_per_page")]
    pub accounts_per_page: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_accounts_per_page() -> u32 {
    DEFAULT_ACCOUNTS_PER_PAGE
}

impl ParsedConfiguration {
    pub fn initial() -> Self {
        ParsedConfiguration::empty()
    }

    pub fn empty() -> Self {
        ParsedConfiguration {
            version: Version::This,
            schema: Some(CONFIGURATION_JSONSCHEMA_FILENAME.to_string()),
            credentials: CredentialsSettings::empty(),
            base_url: default_base_url(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            accounts_per_page: DEFAULT_ACCOUNTS_PER_PAGE,
        }
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    validate(&parsed_config, &configuration_file)?;

    Ok(parsed_config)
}

fn validate(
    parsed_config: &ParsedConfiguration,
    configuration_file: &Path,
) -> Result<(), ParseConfigurationError> {
    let invalid = |node: &str, message: String| ParseConfigurationError::ValidateError {
        file_path: configuration_file.to_owned(),
        node: node.to_string(),
        message,
    };

    match url::Url::parse(&parsed_config.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => Err(invalid(
            "baseUrl",
            format!("unsupported scheme '{}', expected http or https", url.scheme()),
        ))?,
        Err(err) => Err(invalid("baseUrl", err.to_string()))?,
    }
    if parsed_config.timeout_seconds == 0 {
        Err(invalid(
            "timeoutSeconds",
            "the timeout must be at least one second".to_string(),
        ))?;
    }
    if !(1..=MAX_ACCOUNTS_PER_PAGE).contains(&parsed_config.accounts_per_page) {
        Err(invalid(
            "accountsPerPage",
            format!("the page size must be between 1 and {MAX_ACCOUNTS_PER_PAGE}"),
        ))?;
    }
    Ok(())
}

/// Write the parsed configuration, and the JSON schema describing it, into a directory on disk.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)? + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)? + "\n",
    )
    .await?;

    Ok(())
}
