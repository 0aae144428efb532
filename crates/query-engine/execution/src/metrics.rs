//! Metrics setup and update for the query engine.

use prometheus::{IntCounter, Opts, Registry};

#[derive(Debug, Clone)]
pub struct Metrics {
    pub query_total: IntCounter,
    pub explain_total: IntCounter,
    pub api_requests_total: IntCounter,
    pub api_errors_total: IntCounter,
    pub rows_streamed_total: IntCounter,
}

impl Metrics {
    /// Set up the counters used to produce Prometheus metrics.
    pub fn initialize(metrics_registry: &mut Registry) -> Result<Self, prometheus::Error> {
        let query_total = add_int_counter_metric(
            metrics_registry,
            "ndc_cloudflare_query_total",
            "Total successful queries.",
        )?;

        let explain_total = add_int_counter_metric(
            metrics_registry,
            "ndc_cloudflare_explain_total",
            "Total successful explains.",
        )?;

        let api_requests_total = add_int_counter_metric(
            metrics_registry,
            "ndc_cloudflare_api_requests_total",
            "Total requests sent to the Cloudflare API.",
        )?;

        let api_errors_total = add_int_counter_metric(
            metrics_registry,
            "ndc_cloudflare_api_errors_total",
            "Total failed requests to the Cloudflare API, including connection failures.",
        )?;

        let rows_streamed_total = add_int_counter_metric(
            metrics_registry,
            "ndc_cloudflare_rows_streamed_total",
            "Total rows returned to the engine.",
        )?;

        Ok(Metrics {
            query_total,
            explain_total,
            api_requests_total,
            api_errors_total,
            rows_streamed_total,
        })
    }

    pub fn record_successful_query(&self) {
        self.query_total.inc();
    }

    pub fn record_successful_explain(&self) {
        self.explain_total.inc();
    }
}

/// Create a new int counter metric and register it with the provided Prometheus Registry
fn add_int_counter_metric(
    metrics_registry: &mut Registry,
    metric_name: &str,
    metric_description: &str,
) -> Result<IntCounter, prometheus::Error> {
    let int_counter = IntCounter::with_opts(Opts::new(metric_name, metric_description))?;
    metrics_registry.register(Box::new(int_counter.clone()))?;
    Ok(int_counter)
}
