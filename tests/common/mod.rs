//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use login_service::config::ServiceConfig;
use login_service::{CredentialVerifier, LoginServer, Shutdown};

/// A running server bound to an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server with the given config (bind address is ignored).
pub async fn start_server(config: ServiceConfig) -> TestServer {
    start(LoginServer::new(config)).await
}

/// Start a server that uses a custom verifier.
#[allow(dead_code)]
pub async fn start_server_with_verifier(
    config: ServiceConfig,
    verifier: Arc<dyn CredentialVerifier>,
) -> TestServer {
    start(LoginServer::with_verifier(config, verifier)).await
}

async fn start(server: LoginServer) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    // Listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(20)).await;

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
