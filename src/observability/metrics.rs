//! Metrics collection and exposition.
//!
//! # Metrics
//! - `login_requests_total` (counter): login attempts by outcome
//! - `login_request_duration_seconds` (histogram): handler latency by outcome
//!
//! Without an installed recorder the macros are no-ops.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

pub const LOGIN_REQUESTS_TOTAL: &str = "login_requests_total";
pub const LOGIN_REQUEST_DURATION: &str = "login_request_duration_seconds";

pub const OUTCOME_SUCCESS: &str = "success";

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    metrics::describe_counter!(LOGIN_REQUESTS_TOTAL, "Login attempts by outcome");
    metrics::describe_histogram!(
        LOGIN_REQUEST_DURATION,
        metrics::Unit::Seconds,
        "Login handler latency"
    );

    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

/// Record one login attempt.
pub fn record_login(outcome: &'static str, start: Instant) {
    metrics::counter!(LOGIN_REQUESTS_TOTAL, "outcome" => outcome).increment(1);
    metrics::histogram!(LOGIN_REQUEST_DURATION, "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_login_counts_by_outcome() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_login(OUTCOME_SUCCESS, Instant::now());
            record_login("invalid_credentials", Instant::now());
            record_login("invalid_credentials", Instant::now());
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"login_requests_total{outcome="success"} 1"#));
        assert!(rendered.contains(r#"login_requests_total{outcome="invalid_credentials"} 2"#));
        assert!(rendered.contains("login_request_duration_seconds"));
    }
}
