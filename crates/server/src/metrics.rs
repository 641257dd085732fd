//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Mediascope server:
//! - HTTP request metrics (latency, counts, in-flight)
//! - Probe invocation metrics
//! - Bulk analysis run metrics

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "mediascope_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("mediascope_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "mediascope_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

// =============================================================================
// Probe Metrics
// =============================================================================

/// Total probe invocations via the video-info endpoint.
pub static PROBES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("mediascope_probes_total", "Total probe invocations").unwrap()
});

/// Probe invocations that failed.
pub static PROBE_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "mediascope_probe_failures_total",
        "Total failed probe invocations",
    )
    .unwrap()
});

// =============================================================================
// Bulk Analysis Metrics
// =============================================================================

/// Bulk analysis runs started.
pub static BULK_ANALYSES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "mediascope_bulk_analyses_total",
        "Total bulk analysis runs started",
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();

    // Probing
    registry.register(Box::new(PROBES_TOTAL.clone())).unwrap();
    registry
        .register(Box::new(PROBE_FAILURES_TOTAL.clone()))
        .unwrap();

    // Bulk analysis
    registry
        .register(Box::new(BULK_ANALYSES_TOTAL.clone()))
        .unwrap();
}

/// Encode all registered metrics in Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Collapse the variable query-carrying routes to their bare path so label
/// cardinality stays bounded.
pub fn normalize_path(path: &str) -> String {
    path.split('?').next().unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_strips_query() {
        assert_eq!(normalize_path("/api/browse?path=movies"), "/api/browse");
        assert_eq!(normalize_path("/api/health"), "/api/health");
    }

    #[test]
    fn test_encode_metrics_includes_registered_counters() {
        PROBES_TOTAL.inc();
        let encoded = encode_metrics();
        assert!(encoded.contains("mediascope_probes_total"));
    }
}
