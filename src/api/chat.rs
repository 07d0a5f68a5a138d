//! Chat wizard endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    wizard::{Stage, WizardInput, WizardReply},
};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// Preferred interface language, e.g. "en" or "hi"
    pub language: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionResponse {
    pub session_id: String,
    pub reply: WizardReply,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionState {
    pub session_id: String,
    pub stage: Stage,
}

/// Open a chat session
#[utoipa::path(
    post,
    path = "/chat/sessions",
    tag = "chat",
    request_body = CreateSessionRequest,
    responses(
        (status = 201, description = "Session opened, greeting returned", body = ChatSessionResponse)
    )
)]
pub async fn create_session(
    State(state): State<crate::AppState>,
    body: Option<Json<CreateSessionRequest>>,
) -> (StatusCode, Json<ChatSessionResponse>) {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let (session_id, reply) = state.services.chat.create_session(request.language).await;
    (
        StatusCode::CREATED,
        Json(ChatSessionResponse { session_id, reply }),
    )
}

/// Get a chat session's current stage
#[utoipa::path(
    get,
    path = "/chat/sessions/{id}",
    tag = "chat",
    params(("id" = String, Path, description = "Chat session identifier")),
    responses(
        (status = 200, description = "Session state", body = ChatSessionState),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_session(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ChatSessionState>> {
    let stage = state.services.chat.stage(&id).await?;
    Ok(Json(ChatSessionState {
        session_id: id,
        stage,
    }))
}

/// Send one action to a chat session
#[utoipa::path(
    post,
    path = "/chat/sessions/{id}/messages",
    tag = "chat",
    params(("id" = String, Path, description = "Chat session identifier")),
    request_body = WizardInput,
    responses(
        (status = 200, description = "Wizard reply", body = WizardReply),
        (status = 400, description = "Invalid input for the current stage"),
        (status = 404, description = "Session or museum not found")
    )
)]
pub async fn post_message(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(input): Json<WizardInput>,
) -> AppResult<Json<WizardReply>> {
    let reply = state
        .services
        .chat
        .message(
            &id,
            input,
            &state.services.bookings,
            &state.services.museums,
        )
        .await?;
    Ok(Json(reply))
}
