//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use projectinfo::config::ServiceConfig;
use projectinfo::http::HttpServer;
use projectinfo::lifecycle::Shutdown;
use projectinfo::upstream::UpstreamClient;

/// Start the service on an ephemeral port, pointed at the given upstream
/// base URL. Returns the bound address and the shutdown handle.
pub async fn start_service(api_base_url: &str) -> (SocketAddr, Shutdown) {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.api_base_url = api_base_url.to_string();

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let upstream = UpstreamClient::new(&config.upstream).unwrap();
    let server = HttpServer::new(config, upstream);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// HTTP client for talking to the spawned service.
#[allow(dead_code)]
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}
