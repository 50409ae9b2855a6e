//! Admin report endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use super::AdminUser;
use crate::{
    error::AppResult,
    models::report::{DailyCount, EquipmentUsage, ReportQuery},
    AppState,
};

/// Bookings created per day
#[utoipa::path(
    get,
    path = "/api/reports/bookings",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Daily booking counts, ascending", body = Vec<DailyCount>),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse)
    )
)]
pub async fn bookings_report(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<DailyCount>>> {
    Ok(Json(state.services.reports.bookings(&query).await?))
}

/// Quotes created per day
#[utoipa::path(
    get,
    path = "/api/reports/quotes",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Daily quote counts, ascending", body = Vec<DailyCount>),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse)
    )
)]
pub async fn quotes_report(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<DailyCount>>> {
    Ok(Json(state.services.reports.quotes(&query).await?))
}

/// Total booked quantity per equipment name
#[utoipa::path(
    get,
    path = "/api/reports/equipment-usage",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Usage, most booked first", body = Vec<EquipmentUsage>),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse)
    )
)]
pub async fn equipment_usage_report(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<EquipmentUsage>>> {
    Ok(Json(state.services.reports.equipment_usage(&query).await?))
}
