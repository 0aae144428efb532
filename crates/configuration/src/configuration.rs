//! Configuration for the connector.

use cloudflare_client::ClientSettings;
use query_engine_metadata::metadata;

/// The 'Configuration' type collects all the information necessary to serve queries at runtime.
///
/// Values of this type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration', which resolves every secret against the environment.
#[derive(Debug)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    pub client_settings: ClientSettings,
}
