use anyhow::{anyhow, Result};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

// Counters are process-wide. Tokens are not: they live on each client.
static METRICS_INSTANCE: OnceCell<Option<Arc<Metrics>>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
///
/// `None` when the registry could not be built; recording is then skipped.
pub async fn get_metrics() -> Option<&'static Arc<Metrics>> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
                .inspect_err(|e| warn!("metrics disabled: {}", e))
                .ok()
        })
        .await
        .as_ref()
}

/// Text exposition of every registered metric.
pub async fn render_metrics() -> Result<String> {
    let metrics = get_metrics().await.ok_or_else(|| anyhow!("metrics registry unavailable"))?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metrics.registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token cache metrics
    pub token_mint_requests: IntCounterVec,
    pub token_resets: IntCounter,

    // Dispatcher metrics
    pub dispatch_requests: IntCounterVec,
    pub dispatch_outcomes: IntCounterVec,
    pub dispatch_duration: HistogramVec,
}

impl Metrics {
    fn new() -> prometheus::Result<Arc<Self>> {
        let registry = Registry::new_custom(Some("equifax_client".into()), None)?;

        let metrics = Arc::new(Self {
            // Token cache
            token_mint_requests: IntCounterVec::new(Opts::new("token_mint_requests_total", "Token endpoint round trips by outcome"), &["outcome"])?,
            token_resets: IntCounter::new("token_resets_total", "Forced token resets")?,

            // Dispatcher
            dispatch_requests: IntCounterVec::new(Opts::new("dispatch_requests_total", "Dispatch calls by method"), &["method"])?,
            dispatch_outcomes: IntCounterVec::new(Opts::new("dispatch_outcomes_total", "Dispatch results by outcome"), &["outcome"])?,
            dispatch_duration: HistogramVec::new(HistogramOpts::new("dispatch_duration_seconds", "Dispatch duration seconds, retries included").buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]), &["method"])?,

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_mint_requests.clone()))?;
        reg.register(Box::new(metrics.token_resets.clone()))?;
        reg.register(Box::new(metrics.dispatch_requests.clone()))?;
        reg.register(Box::new(metrics.dispatch_outcomes.clone()))?;
        reg.register(Box::new(metrics.dispatch_duration.clone()))?;

        Ok(metrics)
    }
}
