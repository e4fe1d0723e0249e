//! Service entry point: load configuration, initialize observability, bind
//! the listener, and serve until interrupted.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use projectinfo::config::loader;
use projectinfo::http::HttpServer;
use projectinfo::lifecycle::Shutdown;
use projectinfo::observability::{logging, metrics};
use projectinfo::upstream::UpstreamClient;

#[derive(Debug, Parser)]
#[command(version, about = "GitHub project metadata aggregation service")]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults apply when
    /// omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = loader::load_or_default(args.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_base_url = %config.upstream.api_base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.wire_interrupt();

    let upstream = UpstreamClient::new(&config.upstream)?;
    let server = HttpServer::new(config, upstream);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
