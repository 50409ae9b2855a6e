//! Catering service catalog endpoints (`/api/services`)

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
    models::catering_service::{CateringService, CreateCateringService, UpdateCateringService},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ServiceResponse {
    pub data: CateringService,
}

/// Active services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses(
        (status = 200, description = "Active services by name", body = Vec<CateringService>)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<CateringService>>> {
    Ok(Json(state.services.catering_services.list().await?))
}

/// Add a service
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "services",
    security(("bearer_auth" = [])),
    request_body = CreateCateringService,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 409, description = "Duplicate name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    WithRejection(Json(data), _): WithRejection<Json<CreateCateringService>, AppError>,
) -> AppResult<(StatusCode, Json<ServiceResponse>)> {
    let service = state.services.catering_services.create(&data).await?;
    Ok((StatusCode::CREATED, Json(ServiceResponse { data: service })))
}

/// Update a service
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "services",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = UpdateCateringService,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateCateringService>, AppError>,
) -> AppResult<Json<ServiceResponse>> {
    let service = state.services.catering_services.update(id, &data).await?;
    Ok(Json(ServiceResponse { data: service }))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "services",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted", body = MessageResponse),
        (status = 404, description = "Service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catering_services.delete(id).await?;
    Ok(Json(MessageResponse::new("Service deleted")))
}
