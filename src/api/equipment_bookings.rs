//! Equipment rental booking endpoints

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
    models::equipment_booking::{CreateEquipmentBooking, EquipmentBooking, UpdateEquipmentBookingStatus},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EquipmentBookingResponse {
    pub success: bool,
    pub message: String,
    pub data: EquipmentBooking,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EquipmentBookingListResponse {
    pub success: bool,
    pub data: Vec<EquipmentBooking>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct EquipmentBookingDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// Submit an equipment booking (public)
#[utoipa::path(
    post,
    path = "/api/equipment-bookings",
    tag = "equipment-bookings",
    request_body = CreateEquipmentBooking,
    responses(
        (status = 201, description = "Booking received", body = EquipmentBookingResponse),
        (status = 400, description = "Missing fields or no items", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateEquipmentBooking>, AppError>,
) -> AppResult<(StatusCode, Json<EquipmentBookingResponse>)> {
    let booking = state.services.equipment_bookings.create(data).await?;
    Ok((
        StatusCode::CREATED,
        Json(EquipmentBookingResponse {
            success: true,
            message: "Booking submitted successfully".to_string(),
            data: booking,
        }),
    ))
}

/// All equipment bookings
#[utoipa::path(
    get,
    path = "/api/equipment-bookings",
    tag = "equipment-bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings, newest first", body = EquipmentBookingListResponse)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<EquipmentBookingListResponse>> {
    let data = state.services.equipment_bookings.list().await?;
    Ok(Json(EquipmentBookingListResponse { success: true, data }))
}

/// Approve or reject a booking
#[utoipa::path(
    patch,
    path = "/api/equipment-bookings/{id}/status",
    tag = "equipment-bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    request_body = UpdateEquipmentBookingStatus,
    responses(
        (status = 200, description = "Status updated", body = EquipmentBookingResponse),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateEquipmentBookingStatus>, AppError>,
) -> AppResult<Json<EquipmentBookingResponse>> {
    let booking = state
        .services
        .equipment_bookings
        .update_status(id, data.status.as_deref(), data.notes.as_deref())
        .await?;
    Ok(Json(EquipmentBookingResponse {
        success: true,
        message: format!("Booking {}", booking.status),
        data: booking,
    }))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/api/equipment-bookings/{id}",
    tag = "equipment-bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = EquipmentBookingDeletedResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentBookingDeletedResponse>> {
    state.services.equipment_bookings.delete(id).await?;
    Ok(Json(EquipmentBookingDeletedResponse {
        success: true,
        message: "Booking deleted".to_string(),
    }))
}
