//! Staff bookings repository

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::{reports::CreatedRange, staff::StaffRepository};
use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingDetails, BookingDetailsRow},
        enums::{BookingStatus, StaffDateChange},
        report::DailyCount,
        staff::Staff,
    },
};

/// Outcome of an attempt to book a staff member
#[derive(Debug)]
pub enum BookingAttempt {
    Booked(Booking),
    /// The date is already in the staff member's unavailable dates
    Unavailable(Staff),
}

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Book a staff member for a date.
    ///
    /// The staff row is locked for the duration of the transaction so two
    /// concurrent requests for the same date cannot both succeed.
    pub async fn create(
        &self,
        user_id: Uuid,
        staff_id: Uuid,
        service_id: Option<Uuid>,
        date: NaiveDate,
        notes: Option<&str>,
    ) -> AppResult<BookingAttempt> {
        let mut tx = self.pool.begin().await?;

        let staff = StaffRepository::lock_for_update(&mut tx, staff_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))?;

        if staff.is_unavailable_on(date) {
            tx.rollback().await?;
            return Ok(BookingAttempt::Unavailable(staff));
        }

        if let Some(service_id) = service_id {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM catering_services WHERE id = $1)")
                    .bind(service_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !exists {
                return Err(AppError::NotFound("Service not found".to_string()));
            }
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (user_id, staff_id, service_id, date, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(staff_id)
        .bind(service_id)
        .bind(date)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await?;

        StaffRepository::reserve_date(&mut tx, staff_id, date).await?;
        tx.commit().await?;

        Ok(BookingAttempt::Booked(booking))
    }

    /// All bookings with user, staff and service summaries, newest first
    pub async fn list_details(&self) -> AppResult<Vec<BookingDetails>> {
        let rows = sqlx::query_as::<_, BookingDetailsRow>(
            r#"
            SELECT b.*,
                   u.name AS user_name, u.email AS user_email,
                   s.name AS staff_name, s.role AS staff_role,
                   cs.name AS service_name
            FROM bookings b
            LEFT JOIN users u ON u.id = b.user_id
            LEFT JOIN staff s ON s.id = b.staff_id
            LEFT JOIN catering_services cs ON cs.id = b.service_id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(BookingDetails::from).collect())
    }

    /// Change a booking's status. Completing or cancelling releases the staff
    /// date; reopening takes it back, failing when the date was booked since.
    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let previous = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let change = previous.status.staff_date_change(status);

        if let (StaffDateChange::Reserve, Some(staff_id)) = (change, previous.staff_id) {
            // A deleted staff member has nothing left to reserve
            if let Some(staff) = StaffRepository::lock_for_update(&mut tx, staff_id).await? {
                if staff.is_unavailable_on(previous.date) {
                    tx.rollback().await?;
                    return Err(AppError::BadRequest(format!(
                        "Sorry, {} is unavailable for that date.",
                        staff.name
                    )));
                }
                StaffRepository::reserve_date(&mut tx, staff_id, previous.date).await?;
            }
        }

        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if let (StaffDateChange::Release, Some(staff_id)) = (change, booking.staff_id) {
            StaffRepository::release_date(&mut tx, staff_id, booking.date).await?;
        }

        tx.commit().await?;
        Ok(booking)
    }

    pub async fn count_pending(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = 'pending'")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Bookings created per day within the range, ascending
    pub async fn daily_counts(&self, range: &CreatedRange) -> AppResult<Vec<DailyCount>> {
        super::reports::daily_counts(&self.pool, "bookings", range).await
    }
}
