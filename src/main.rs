use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use login_service::config::resolve_config;
use login_service::lifecycle::Shutdown;
use login_service::observability::{logging, metrics};
use login_service::LoginServer;

#[derive(Parser)]
#[command(name = "login-service")]
#[command(about = "Single-endpoint login service", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, env = "LOGIN_SERVICE_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), args.bind)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("login-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        max_instances = config.listener.max_instances,
        request_timeout_secs = config.timeouts.request_secs,
        credentials = ?config.auth,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.listen_for_signals();

    let server = LoginServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
