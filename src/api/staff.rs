//! Staff directory and management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{AdminUser, AuthenticatedUser, MessageResponse};
use crate::{
    error::{AppError, AppResult},
    models::staff::{CreateStaff, SetAvailability, Staff, StaffPublic, StaffWithAddedBy, UpdateStaffProfile},
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StaffResponse {
    pub message: String,
    pub staff: Staff,
}

/// Public team listing
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = "staff",
    responses(
        (status = 200, description = "All staff members", body = Vec<StaffPublic>)
    )
)]
pub async fn list_staff(State(state): State<AppState>) -> AppResult<Json<Vec<StaffPublic>>> {
    Ok(Json(state.services.staff.list_public().await?))
}

/// Admin listing including who added each member
#[utoipa::path(
    get,
    path = "/api/staff/admin",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All staff members, newest first", body = Vec<StaffWithAddedBy>)
    )
)]
pub async fn list_staff_admin(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<Vec<StaffWithAddedBy>>> {
    Ok(Json(state.services.staff.list_admin().await?))
}

/// Add a team member
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member added", body = StaffResponse),
        (status = 400, description = "Missing name/role or unknown role", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_staff(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    WithRejection(Json(data), _): WithRejection<Json<CreateStaff>, AppError>,
) -> AppResult<(StatusCode, Json<StaffResponse>)> {
    let staff = state.services.staff.create(data, claims.user_id()).await?;
    Ok((
        StatusCode::CREATED,
        Json(StaffResponse {
            message: "Staff member added successfully".to_string(),
            staff,
        }),
    ))
}

/// Staff member updates their own profile
#[utoipa::path(
    put,
    path = "/api/staff/self",
    tag = "staff",
    security(("bearer_auth" = [])),
    request_body = UpdateStaffProfile,
    responses(
        (status = 200, description = "Profile updated", body = StaffResponse),
        (status = 403, description = "Name or role supplied", body = crate::error::ErrorResponse),
        (status = 404, description = "No staff profile for this account", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_self(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(data), _): WithRejection<Json<UpdateStaffProfile>, AppError>,
) -> AppResult<Json<StaffResponse>> {
    let staff = state.services.staff.update_self(claims.user_id(), data).await?;
    Ok(Json(StaffResponse {
        message: "Profile updated successfully".to_string(),
        staff,
    }))
}

/// Set unavailable dates and availability flag
#[utoipa::path(
    put,
    path = "/api/staff/{id}/availability",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Staff ID")),
    request_body = SetAvailability,
    responses(
        (status = 200, description = "Availability updated", body = StaffResponse),
        (status = 404, description = "Staff not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn set_availability(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(data), _): WithRejection<Json<SetAvailability>, AppError>,
) -> AppResult<Json<StaffResponse>> {
    let staff = state.services.staff.set_availability(id, data).await?;
    Ok(Json(StaffResponse {
        message: "Availability updated".to_string(),
        staff,
    }))
}

/// Remove a team member
#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff member removed", body = MessageResponse),
        (status = 404, description = "Staff not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.staff.delete(id).await?;
    Ok(Json(MessageResponse::new("Staff member removed")))
}
