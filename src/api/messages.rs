//! Contact message endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{AdminUser, MessageResponse};
use crate::{
    error::{AppError, AppResult},
    models::message::{CreateMessage, Message},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ContactMessageResponse {
    pub data: Message,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ContactMessageListResponse {
    pub data: Vec<Message>,
}

/// Send a contact message (public)
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = CreateMessage,
    responses(
        (status = 201, description = "Message stored", body = ContactMessageResponse),
        (status = 400, description = "Missing fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateMessage>, AppError>,
) -> AppResult<(StatusCode, Json<ContactMessageResponse>)> {
    let message = state.services.messages.create(&data).await?;
    Ok((StatusCode::CREATED, Json(ContactMessageResponse { data: message })))
}

/// All messages
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Messages, newest first", body = ContactMessageListResponse)
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<ContactMessageListResponse>> {
    let data = state.services.messages.list().await?;
    Ok(Json(ContactMessageListResponse { data }))
}

/// Delete a message
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "messages",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Message ID")),
    responses(
        (status = 200, description = "Message deleted", body = MessageResponse),
        (status = 404, description = "Message not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_message(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.messages.delete(id).await?;
    Ok(Json(MessageResponse::new("Message deleted")))
}
