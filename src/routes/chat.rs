//! Chatbot session routes.
//!
//! Each session is wrapped in its own async mutex, and the handler holds
//! that lock across the simulated typing delay. Two rapid messages from the
//! same visitor therefore produce transcript entries in program order; other
//! visitors' sessions are untouched.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::routes::ApiError;
use crate::services::chatbot::{self, ChatMessage, ChatSession};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptView {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

/// `POST /api/chat/session` — open a conversation, returns the welcome
/// transcript. 404 when the chatbot is disabled by configuration.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Json<TranscriptView>, ApiError> {
    if !state.config.chatbot_enabled {
        return Err(ApiError::NotFound("chat"));
    }
    let session = ChatSession::new(&state.config.business);
    let response = TranscriptView { session_id: session.id, messages: session.messages.clone() };
    state.chats.write().await.insert(session.id, Arc::new(Mutex::new(session)));
    Ok(Json(response))
}

/// `GET /api/chat/session/{id}` — full transcript so far.
pub async fn transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TranscriptView>, ApiError> {
    let session = state.chats.read().await.get(&id).cloned().ok_or(ApiError::NotFound("chat session"))?;
    let session = session.lock().await;
    Ok(Json(TranscriptView { session_id: id, messages: session.messages.clone() }))
}

#[derive(Deserialize)]
pub struct MessageBody {
    pub content: String,
}

/// `POST /api/chat/session/{id}/message` — send a user message, wait out the
/// typing delay, and return the bot reply.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MessageBody>,
) -> Result<Json<ChatMessage>, ApiError> {
    if body.content.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_owned()));
    }
    let session = state.chats.read().await.get(&id).cloned().ok_or(ApiError::NotFound("chat session"))?;

    // Lock held across the delay: a second message on the same session
    // queues behind this one and its reply lands after ours.
    let mut session = session.lock().await;
    tokio::time::sleep(chatbot::typing_delay()).await;
    let reply = session.exchange(&state.config.business, &body.content);
    Ok(Json(reply))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
