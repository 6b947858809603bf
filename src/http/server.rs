//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the greeting handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Hand request paths to the route table
//! - Reject methods other than GET/HEAD with 405
//! - Serve until shutdown is signalled

use axum::{
    extract::State,
    http::{HeaderMap, Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::request::{decode_path_variable, request_id, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::routing::{Handler, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the greeting service.
pub struct GreeterServer {
    router: Router,
    config: ServiceConfig,
}

impl GreeterServer {
    /// Create a server with the standard route table.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_routes(config, RouteTable::standard())
    }

    /// Create a server around an explicit route table.
    pub fn with_routes(config: ServiceConfig, routes: RouteTable) -> Self {
        let state = AppState {
            routes: Arc::new(routes),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(greet_handler))
            .route("/{*path}", get(greet_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires.
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

/// Resolves the path and answers with the selected handler's greeting.
async fn greet_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let path = uri.path();

    let matched = state.routes.resolve(path);
    let name = match matched.handler {
        Handler::Named => matched.captured.map(decode_path_variable),
        Handler::Root | Handler::Fallback => None,
    };

    tracing::debug!(
        request_id = %request_id(&headers),
        method = %method,
        path = %path,
        handler = %matched.handler,
        "Route resolved"
    );

    let greeting = matched.handler.respond(name.as_deref());
    metrics::record_request(method.as_str(), 200, matched.handler.as_str(), start_time);
    greeting.into_response()
}
