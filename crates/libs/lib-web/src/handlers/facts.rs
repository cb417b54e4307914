//! # Fun Facts
//!
//! A random fact about real-time chat, picked uniformly from a fixed list.

use axum::Json;
use lib_core::{AppError, Result};
use lib_utils::now_iso;
use rand::seq::SliceRandom;
use shared::dto::health::FactResponse;

pub const FACTS: &[&str] = &[
    "IRC was written by Jarkko Oikarinen in 1988 and is still in use today.",
    "The WebSocket protocol was standardized as RFC 6455 in 2011.",
    "A WebSocket connection starts life as an ordinary HTTP/1.1 request with an Upgrade header.",
    "Typing indicators were popularised by instant messengers in the late 1990s.",
    "Nicknames in this chat are not unique: two people can both be called Sam.",
    "Every message you send here reaches everyone else, but never echoes back to you.",
    "Nothing said in this chat is stored: when the server stops, the conversation is gone.",
];

/// **Route**: `GET /api/facts`
pub async fn random_fact() -> Result<Json<FactResponse>> {
    let fact = FACTS
        .choose(&mut rand::thread_rng())
        .ok_or_else(|| AppError::Internal("Fact list is empty".to_string()))?;

    Ok(Json(FactResponse {
        fact: fact.to_string(),
        total_facts: FACTS.len(),
        timestamp: now_iso(),
    }))
}
