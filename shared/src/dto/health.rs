//! # Health and Facts Data Transfer Objects

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// ISO-8601 UTC timestamp of the check
    pub timestamp: String,
}

/// Body of `GET /api/facts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactResponse {
    pub fact: String,
    pub total_facts: usize,
    pub timestamp: String,
}
