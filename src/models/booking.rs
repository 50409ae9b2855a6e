//! Staff booking model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{BookingStatus, StaffRole};

/// Booking row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub staff_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub date: NaiveDate,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub staff_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    /// Event date (YYYY-MM-DD)
    pub date: Option<String>,
    pub notes: Option<String>,
}

/// Update booking status request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatus {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingStaff {
    pub name: String,
    pub role: StaffRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingService {
    pub name: String,
}

/// Admin listing: booking plus the related user, staff member and service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    pub user: Option<BookingUser>,
    pub staff: Option<BookingStaff>,
    pub service: Option<BookingService>,
}

/// Flat row for the admin listing join
#[derive(Debug, Clone, FromRow)]
pub struct BookingDetailsRow {
    #[sqlx(flatten)]
    pub booking: Booking,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub staff_name: Option<String>,
    pub staff_role: Option<StaffRole>,
    pub service_name: Option<String>,
}

impl From<BookingDetailsRow> for BookingDetails {
    fn from(row: BookingDetailsRow) -> Self {
        let user = match (row.user_name, row.user_email) {
            (Some(name), Some(email)) => Some(BookingUser { name, email }),
            _ => None,
        };
        let staff = match (row.staff_name, row.staff_role) {
            (Some(name), Some(role)) => Some(BookingStaff { name, role }),
            _ => None,
        };
        BookingDetails {
            booking: row.booking,
            user,
            staff,
            service: row.service_name.map(|name| BookingService { name }),
        }
    }
}
