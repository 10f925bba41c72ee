//! Prometheus metrics for request counting and latency tracking.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::Result;

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup, after any recorder is installed.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests handled, by endpoint"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP handler latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder with a scrape listener on `addr`.
///
/// Must be called from within a tokio runtime, and before [`init_metrics`].
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    info!("Metrics endpoint listening on {}", addr);
    Ok(())
}

/// Increment the request counter for an endpoint.
pub fn inc_http_requests(endpoint: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "endpoint" => endpoint).increment(1);
}

/// RAII guard for timing handlers.
/// Records latency under the endpoint label when dropped.
pub struct LatencyTimer {
    start: Instant,
    endpoint: &'static str,
}

impl LatencyTimer {
    /// Create a new latency timer for the given endpoint.
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            start: Instant::now(),
            endpoint,
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => self.endpoint)
            .record(self.elapsed_ms());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("/test");
        sleep(Duration::from_millis(10));
        assert!(timer.elapsed_ms() >= 9.0);
        // No recorder installed: recording on drop is a no-op
    }

    #[test]
    fn health_request_is_counted_and_described() {
        use crate::api::{create_router, AppState};
        use axum::body::Body;
        use axum::http::Request;
        use metrics_exporter_prometheus::PrometheusBuilder;
        use tower::ServiceExt;

        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        metrics::with_local_recorder(&recorder, || {
            init_metrics();
            runtime.block_on(async {
                create_router(AppState::new())
                    .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
                    .await
                    .unwrap();
            });
        });

        let rendered = handle.render();
        assert!(rendered.contains("# HELP http_requests_total"), "{rendered}");
        assert!(
            rendered.contains(r#"http_requests_total{endpoint="/health"} 1"#),
            "{rendered}"
        );
        assert!(rendered.contains("# HELP http_request_latency_ms"), "{rendered}");
    }
}
