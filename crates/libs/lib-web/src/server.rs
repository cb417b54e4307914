//! # Server Setup
//!
//! Tracing initialisation, router construction and HTTP server startup.

// region: --- Imports
use crate::chat::ChatAppState;
use crate::handlers;
use crate::middleware::{log_requests, stamp_req, RequestStamp};
use axum::{routing::get, Router};
use lib_core::{AppError, Config};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- Server Configuration
/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:3000")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
    /// Level for the tracing subscriber
    pub log_level: String,
    /// Deployment label, logged at startup
    pub environment: String,
}

impl From<&Config> for ServerConfig {
    fn from(config: &Config) -> Self {
        Self {
            bind_address: config.bind_address(),
            allowed_origins: config.allowed_origins.clone(),
            log_level: config.log_level.clone(),
            environment: config.app_env.clone(),
        }
    }
}

// endregion: --- Server Configuration

// region: --- Server Setup
/// Install the global tracing subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - The tracing subscriber cannot be installed
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_level)?;

    info!(" CHAT RELAY STARTING");
    info!(" Log level: {}", config.log_level);
    info!(" Environment: {}", config.environment);

    let chat = Arc::new(ChatAppState::new());
    let app = create_router(chat, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(AppError::from)?;

    info!(" SERVER READY: listening on http://{}", config.bind_address);
    log_server_info();

    // ConnectInfo is required by the WebSocket handler
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

/// Create the application router with all routes
pub fn create_router(chat: Arc<ChatAppState>, allowed_origins: &[String]) -> Router {
    use axum::http::{HeaderValue, Method};

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::health))
        .route("/api/facts", get(handlers::facts::random_fact))
        .route("/ws", get(handlers::websocket::chat_websocket))
        .fallback(handlers::not_found)
        .with_state(chat)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestStamp>()
                        .map(|s| s.id.clone())
                        .unwrap_or_else(|| "unknown".to_string());
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(
                        error = ?error,
                        latency_ms = latency.as_millis(),
                        "[HTTP FAILURE] Error: {:?}, Latency: {}ms",
                        error,
                        latency.as_millis()
                    );
                }),
        )
        // Outermost: the trace span and request log read the request id
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log the exposed routes
fn log_server_info() {
    info!(" CHAT:");
    info!("   • GET  /ws   (WebSocket: choose name, chat message, typing, stop typing)");
    info!(" PAGES:");
    info!("   • GET  /");
    info!(" API:");
    info!("   • GET  /api/facts");
    info!(" HEALTH:");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
