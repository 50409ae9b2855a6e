//! Equipment catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::{Multipart, WithRejection};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{multipart::ImageForm, AdminUser};
use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EquipmentListResponse {
    pub data: Vec<Equipment>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EquipmentResponse {
    pub data: Equipment,
}

/// Multipart body for the image upload (documentation only)
#[derive(ToSchema)]
pub struct EquipmentImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

/// List the catalog
#[utoipa::path(
    get,
    path = "/api/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment by name", body = EquipmentListResponse)
    )
)]
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<Json<EquipmentListResponse>> {
    let data = state.services.equipment.list().await?;
    Ok(Json(EquipmentListResponse { data }))
}

/// Add equipment
#[utoipa::path(
    post,
    path = "/api/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Name, Type & Category required", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    WithRejection(Json(data), _): WithRejection<Json<CreateEquipment>, AppError>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/api/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateEquipment>, AppError>,
) -> AppResult<Json<EquipmentResponse>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(EquipmentResponse { data: equipment }))
}

/// Replace the equipment image
#[utoipa::path(
    put,
    path = "/api/equipment/{id}/image",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body(content = EquipmentImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored", body = EquipmentResponse),
        (status = 400, description = "Missing or invalid image", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> AppResult<Json<EquipmentResponse>> {
    let form = ImageForm::read(multipart).await?;
    let image = form
        .image
        .ok_or_else(|| AppError::Validation("Image file is required".to_string()))?;
    let equipment = state.services.equipment.replace_image(id, &image).await?;
    Ok(Json(EquipmentResponse { data: equipment }))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/api/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Deleted row", body = EquipmentResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentResponse>> {
    let equipment = state.services.equipment.delete(id).await?;
    Ok(Json(EquipmentResponse { data: equipment }))
}
