//! Quote request endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::AdminUser;
use crate::{
    error::{AppError, AppResult},
    models::quote::{CreateQuote, Quote, UpdateQuoteStatus},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    pub message: String,
    pub data: Quote,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuoteListResponse {
    pub message: String,
    pub data: Vec<Quote>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct QuoteDeletedResponse {
    pub message: String,
    pub id: Uuid,
}

/// Submit a quote request (public)
#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = "quotes",
    request_body = CreateQuote,
    responses(
        (status = 201, description = "Quote received", body = QuoteResponse),
        (status = 400, description = "Missing or invalid fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_quote(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateQuote>, AppError>,
) -> AppResult<(StatusCode, Json<QuoteResponse>)> {
    let quote = state.services.quotes.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(QuoteResponse {
            message: "Quote submitted successfully.".to_string(),
            data: quote,
        }),
    ))
}

/// All quotes
#[utoipa::path(
    get,
    path = "/api/quotes",
    tag = "quotes",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Quotes, newest first", body = QuoteListResponse)
    )
)]
pub async fn list_quotes(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<QuoteListResponse>> {
    let data = state.services.quotes.list().await?;
    Ok(Json(QuoteListResponse {
        message: "Quotes fetched successfully.".to_string(),
        data,
    }))
}

/// One quote
#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    tag = "quotes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Quote ID")),
    responses(
        (status = 200, description = "Quote", body = QuoteResponse),
        (status = 404, description = "Quote not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_quote(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuoteResponse>> {
    let quote = state.services.quotes.get_by_id(id).await?;
    Ok(Json(QuoteResponse {
        message: "Quote fetched successfully.".to_string(),
        data: quote,
    }))
}

/// Mark a quote as read
#[utoipa::path(
    patch,
    path = "/api/quotes/{id}/read",
    tag = "quotes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Quote ID")),
    responses(
        (status = 200, description = "Quote marked as read", body = QuoteResponse),
        (status = 404, description = "Quote not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn mark_quote_read(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuoteResponse>> {
    let quote = state.services.quotes.mark_read(id).await?;
    Ok(Json(QuoteResponse {
        message: "Quote marked as read.".to_string(),
        data: quote,
    }))
}

/// Change a quote's status
#[utoipa::path(
    patch,
    path = "/api/quotes/{id}/status",
    tag = "quotes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Quote ID")),
    request_body = UpdateQuoteStatus,
    responses(
        (status = 200, description = "Status updated", body = QuoteResponse),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Quote not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_quote_status(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateQuoteStatus>, AppError>,
) -> AppResult<Json<QuoteResponse>> {
    let quote = state
        .services
        .quotes
        .update_status(id, data.status.as_deref())
        .await?;
    Ok(Json(QuoteResponse {
        message: "Quote status updated.".to_string(),
        data: quote,
    }))
}

/// Delete a quote
#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    tag = "quotes",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Quote ID")),
    responses(
        (status = 200, description = "Quote deleted", body = QuoteDeletedResponse),
        (status = 404, description = "Quote not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuoteDeletedResponse>> {
    state.services.quotes.delete(id).await?;
    Ok(Json(QuoteDeletedResponse {
        message: "Quote deleted successfully.".to_string(),
        id,
    }))
}
