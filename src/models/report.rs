//! Report query and aggregate types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Date range filter on creation time
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// Inclusive start, `YYYY-MM-DD` or RFC 3339
    pub start: Option<String>,
    /// End, `YYYY-MM-DD` (whole day included) or RFC 3339
    pub end: Option<String>,
}

/// Number of records created on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: i64,
}

/// Total quantity booked for one equipment name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentUsage {
    pub equipment: String,
    pub usage_count: i64,
}

/// Badge counters for the admin dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCounts {
    pub unread_quotes: i64,
    pub messages: i64,
    pub pending_equipment_bookings: i64,
    pub pending_bookings: i64,
}
