//! HTTP server setup and request orchestration.
//!
//! # Responsibilities
//! - Create the Axum router with the projectinfo route
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind the server to a listener and serve until shutdown
//! - Orchestrate a request: validate path → fetch contributor → fetch
//!   languages → assemble → respond

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::request::{MakeRequestUuid, X_REQUEST_ID};
use crate::http::response::{ApiError, ProjectInfo};
use crate::observability::metrics;
use crate::routing::validate_path;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server for the aggregation service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and upstream
    /// client.
    pub fn new(config: ServiceConfig, upstream: UpstreamClient) -> Self {
        let state = AppState {
            upstream: Arc::new(upstream),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/projectinfo/v1/{host}/{owner}/{project}",
                get(project_info),
            )
            .fallback(no_route)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Main aggregation handler.
async fn project_info(
    State(state): State<AppState>,
    uri: Uri,
    Path((_host, owner, project)): Path<(String, String, String)>,
) -> Response {
    let start = Instant::now();

    let response = match aggregate(&state, uri.path(), owner, project).await {
        Ok(info) => (StatusCode::CREATED, Json(info)).into_response(),
        Err(e) => e.into_response(),
    };

    metrics::record_request(response.status().as_u16(), start);
    response
}

/// Linear orchestration: validate → contributor fetch → language fetch →
/// assemble. The two upstream calls are strictly sequential; any failure
/// short-circuits the request.
async fn aggregate(
    state: &AppState,
    path: &str,
    owner: String,
    project: String,
) -> Result<ProjectInfo, ApiError> {
    validate_path(path)?;

    tracing::debug!(
        owner = %owner,
        project = %project,
        "Aggregating project info"
    );

    let top = state.upstream.top_contributor(&owner, &project).await?;
    let languages = state.upstream.languages(&owner, &project).await?;

    Ok(ProjectInfo::assemble(owner, project, top, languages))
}

/// Fallback for requests that match no route.
async fn no_route(uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, "no matching route").into_response()
}
