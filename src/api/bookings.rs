//! Staff booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{AdminUser, AuthenticatedUser};
use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingDetails, CreateBooking, UpdateBookingStatus},
        staff::StaffPublic,
    },
    repository::bookings::BookingAttempt,
    AppState,
};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub message: String,
    pub booking: Booking,
}

/// Returned with 400 when the staff member is taken on the requested date
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StaffUnavailableResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    pub staff: StaffPublic,
}

/// Book a staff member for a date
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Missing fields or staff unavailable", body = StaffUnavailableResponse),
        (status = 404, description = "Staff or service not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    WithRejection(Json(data), _): WithRejection<Json<CreateBooking>, AppError>,
) -> AppResult<Response> {
    let response = match state.services.bookings.create(claims.user_id(), data).await? {
        BookingAttempt::Booked(booking) => (
            StatusCode::CREATED,
            Json(BookingResponse {
                message: "Booking created successfully".to_string(),
                booking,
            }),
        )
            .into_response(),
        BookingAttempt::Unavailable(staff) => (
            StatusCode::BAD_REQUEST,
            Json(StaffUnavailableResponse {
                success: false,
                error: "Unavailable".to_string(),
                message: format!("Sorry, {} is unavailable for that date.", staff.name),
                staff: StaffPublic::from(staff),
            }),
        )
            .into_response(),
    };
    Ok(response)
}

/// All bookings with user, staff and service
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings, newest first", body = Vec<BookingDetails>)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> AppResult<Json<Vec<BookingDetails>>> {
    Ok(Json(state.services.bookings.list().await?))
}

/// Change a booking's status
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Status updated", body = BookingResponse),
        (status = 400, description = "Invalid status, or reopening a booking whose date was taken since", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateBookingStatus>, AppError>,
) -> AppResult<Json<BookingResponse>> {
    let booking = state
        .services
        .bookings
        .update_status(id, data.status.as_deref())
        .await?;
    Ok(Json(BookingResponse {
        message: format!("Booking status updated to {}", booking.status),
        booking,
    }))
}
