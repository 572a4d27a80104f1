//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, timeout, body size, max instances, headers)
//! - Bind server to listener
//! - Stop on the shutdown broadcast

use axum::{
    body::Body,
    handler::Handler,
    http::{header, HeaderValue, Request},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::auth::{CredentialVerifier, StaticCredentials};
use crate::config::ServiceConfig;
use crate::http::login::{login, method_not_allowed};
use crate::http::request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { verifier }
    }

    /// State backed by the credential pair in `config.auth`.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(Arc::new(StaticCredentials::from_config(&config.auth)))
    }
}

/// HTTP server for the login service.
pub struct LoginServer {
    router: Router,
    config: ServiceConfig,
}

impl LoginServer {
    /// Create a new server using the configured static credentials.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(config, state)
    }

    /// Create a new server that checks logins with the given verifier.
    pub fn with_verifier(config: ServiceConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self::with_state(config, AppState::new(verifier))
    }

    fn with_state(config: ServiceConfig, state: AppState) -> Self {
        let router = build_router(&config, state);
        Self { router, config }
    }

    /// Run the server until a value (or a close) arrives on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_instances = self.config.listener.max_instances,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
///
/// The body limit wraps only the POST handler, so other methods on `/login`
/// get 405 whatever their body size.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    let body_limit = RequestBodyLimitLayer::new(config.security.max_body_size);

    let mut router = Router::new()
        .route(
            "/login",
            post(login.layer(body_limit)).fallback(method_not_allowed),
        )
        .route("/health", get(health))
        .with_state(state);

    if config.security.enable_headers {
        router = router
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            ));
    }

    router
        .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_instances))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request.headers().request_id(),
                )
            }),
        )
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
