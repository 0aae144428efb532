//! Transient state used by the connector.
//!
//! This is initialized on startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info_span, Instrument};

use cloudflare_client::{ClientSettings, Connect, Connection};
use query_engine_execution::metrics;

/// State for our connector.
#[derive(Clone)]
pub struct State {
    pub metrics: metrics::Metrics,
    pub connection: Arc<dyn Connect>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("State")
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Register the metrics and prepare a connection to the API.
/// The HTTP client itself is built by the first request that needs it.
pub async fn create_state(
    client_settings: &ClientSettings,
    metrics_registry: &mut prometheus::Registry,
) -> Result<State, InitializationError> {
    let metrics = async {
        let metrics_inner = metrics::Metrics::initialize(metrics_registry)
            .map_err(InitializationError::MetricsError)?;
        Ok::<_, InitializationError>(metrics_inner)
    }
    .instrument(info_span!("Setup metrics"))
    .await?;

    let connection = Arc::new(Connection::new(client_settings.clone()));

    Ok(State {
        metrics,
        connection,
    })
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
