//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature.
//!
//! ## Handler Modules
//!
//! - **[`websocket`]**: The chat channel
//!   - `GET /ws` - Upgrade to a chat WebSocket
//!
//! - **[`page`]**: The chat page
//!   - `GET /` - Embedded HTML client
//!
//! - **[`health`]**: Liveness
//!   - `GET /health` - `{status, timestamp}`
//!
//! - **[`facts`]**: Fun facts
//!   - `GET /api/facts` - A random fact from a fixed list
//!
//! Unmatched routes fall through to [`not_found`].
//!
//! Only the WebSocket handler touches chat state; the others are plain
//! responders.

// region: --- Modules
pub mod websocket;
pub mod page;
pub mod health;
pub mod facts;

// endregion: --- Modules

use axum::http::Uri;
use lib_core::AppError;
use tracing::info;

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    info!("[404 HANDLER] Unmatched route {} - returning 404", uri.path());
    AppError::NotFound("Route not found".to_string())
}
