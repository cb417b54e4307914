//! # Health Check
//!
//! ```bash
//! curl http://localhost:3000/health
//! # {"status":"healthy","timestamp":"2024-01-01T00:00:00.000Z"}
//! ```

use axum::Json;
use lib_utils::now_iso;
use shared::dto::health::HealthResponse;

/// **Route**: `GET /health`
///
/// Always answers `200 OK`; the relay has no dependency that can be unhealthy.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_iso(),
    })
}
