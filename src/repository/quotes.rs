//! Quote requests repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::reports::CreatedRange;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::QuoteStatus,
        quote::{NewQuote, Quote},
        report::DailyCount,
    },
};

#[derive(Clone)]
pub struct QuotesRepository {
    pool: Pool<Postgres>,
}

impl QuotesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Newest first
    pub async fn list(&self) -> AppResult<Vec<Quote>> {
        let rows = sqlx::query_as::<_, Quote>("SELECT * FROM quotes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Quote> {
        sqlx::query_as::<_, Quote>("SELECT * FROM quotes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Quote not found".to_string()))
    }

    pub async fn create(&self, data: &NewQuote) -> AppResult<Quote> {
        let row = sqlx::query_as::<_, Quote>(
            r#"
            INSERT INTO quotes (
                full_name, email, phone_number, quote_type,
                event_type, event_date, guests,
                equipment_type, equipment_quantity, rental_date,
                staff_type, location, details
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone_number)
        .bind(data.quote_type)
        .bind(&data.event_type)
        .bind(data.event_date)
        .bind(data.guests)
        .bind(&data.equipment_type)
        .bind(data.equipment_quantity)
        .bind(data.rental_date)
        .bind(&data.staff_type)
        .bind(&data.location)
        .bind(&data.details)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn mark_read(&self, id: Uuid) -> AppResult<Quote> {
        sqlx::query_as::<_, Quote>(
            "UPDATE quotes SET is_read = TRUE, updated_at = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Quote not found".to_string()))
    }

    pub async fn update_status(&self, id: Uuid, status: QuoteStatus) -> AppResult<Quote> {
        sqlx::query_as::<_, Quote>(
            "UPDATE quotes SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Quote not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Quote not found".to_string()));
        }
        Ok(())
    }

    pub async fn count_unread(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quotes WHERE NOT is_read")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Quotes created per day within the range, ascending
    pub async fn daily_counts(&self, range: &CreatedRange) -> AppResult<Vec<DailyCount>> {
        super::reports::daily_counts(&self.pool, "quotes", range).await
    }
}
