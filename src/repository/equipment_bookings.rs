//! Equipment rental bookings repository

use chrono::Utc;
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentBookingStatus,
        equipment_booking::{BookedItem, EquipmentBooking, NewEquipmentBooking},
    },
};

#[derive(Clone)]
pub struct EquipmentBookingsRepository {
    pool: Pool<Postgres>,
}

impl EquipmentBookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Newest first
    pub async fn list(&self) -> AppResult<Vec<EquipmentBooking>> {
        let rows = sqlx::query_as::<_, EquipmentBooking>(
            "SELECT * FROM equipment_bookings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &NewEquipmentBooking) -> AppResult<EquipmentBooking> {
        let row = sqlx::query_as::<_, EquipmentBooking>(
            r#"
            INSERT INTO equipment_bookings (full_name, phone, location, date, items)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.phone)
        .bind(&data.location)
        .bind(data.date)
        .bind(Json(&data.items))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Set the status; `notes` replaces the stored notes only when present
    pub async fn update_status(
        &self,
        id: Uuid,
        status: EquipmentBookingStatus,
        notes: Option<&str>,
    ) -> AppResult<EquipmentBooking> {
        sqlx::query_as::<_, EquipmentBooking>(
            r#"
            UPDATE equipment_bookings
            SET status = $2, notes = COALESCE($3, notes), updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(notes)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }
        Ok(())
    }

    /// Item lists of bookings created within the range, for usage reports
    pub async fn items_created_between(
        &self,
        range: &super::reports::CreatedRange,
    ) -> AppResult<Vec<Vec<BookedItem>>> {
        let rows: Vec<Json<Vec<BookedItem>>> = sqlx::query_scalar(
            r#"
            SELECT items FROM equipment_bookings
            WHERE ($1::timestamptz IS NULL OR created_at >= $1)
              AND ($2::timestamptz IS NULL OR created_at < $2)
            "#,
        )
        .bind(range.from)
        .bind(range.until)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|Json(items)| items).collect())
    }

    pub async fn count_pending(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM equipment_bookings WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
