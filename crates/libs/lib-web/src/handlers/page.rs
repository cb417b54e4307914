//! # Chat Page
//!
//! Serves the single-page chat client embedded at compile time.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// **Route**: `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
