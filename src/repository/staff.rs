//! Staff repository

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::staff::{NewStaff, Staff, StaffWithAddedBy, StaffWithAddedByRow, UpdateStaffProfile},
};

#[derive(Clone)]
pub struct StaffRepository {
    pool: Pool<Postgres>,
}

impl StaffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All staff, alphabetical
    pub async fn list(&self) -> AppResult<Vec<Staff>> {
        let rows = sqlx::query_as::<_, Staff>("SELECT * FROM staff ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// All staff with the name and role of whoever added them, newest first
    pub async fn list_with_added_by(&self) -> AppResult<Vec<StaffWithAddedBy>> {
        let rows = sqlx::query_as::<_, StaffWithAddedByRow>(
            r#"
            SELECT s.*, u.name AS added_by_name, u.role AS added_by_role
            FROM staff s
            LEFT JOIN users u ON u.id = s.added_by_id
            ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(StaffWithAddedBy::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))
    }

    /// Staff row owned by a user account (self-service profile)
    pub async fn get_by_added_by(&self, user_id: Uuid) -> AppResult<Option<Staff>> {
        let row = sqlx::query_as::<_, Staff>(
            "SELECT * FROM staff WHERE added_by_id = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn create(&self, data: &NewStaff) -> AppResult<Staff> {
        let row = sqlx::query_as::<_, Staff>(
            r#"
            INSERT INTO staff (name, role, specialty, experience, image_url, bio, added_by_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(data.role)
        .bind(&data.specialty)
        .bind(&data.experience)
        .bind(&data.image_url)
        .bind(&data.bio)
        .bind(data.added_by_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update the descriptive profile fields; name and role are not touched
    pub async fn update_profile(&self, id: Uuid, data: &UpdateStaffProfile) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>(
            r#"
            UPDATE staff SET
                specialty = COALESCE($2, specialty),
                experience = COALESCE($3, experience),
                image_url = COALESCE($4, image_url),
                bio = COALESCE($5, bio),
                updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.specialty)
        .bind(&data.experience)
        .bind(&data.image_url)
        .bind(&data.bio)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff profile not found".to_string()))
    }

    /// Replace the unavailable dates and/or the availability flag
    pub async fn set_availability(
        &self,
        id: Uuid,
        unavailable_dates: Option<Vec<NaiveDate>>,
        is_available: Option<bool>,
    ) -> AppResult<Staff> {
        sqlx::query_as::<_, Staff>(
            r#"
            UPDATE staff SET
                unavailable_dates = COALESCE($2, unavailable_dates),
                is_available = COALESCE($3, is_available),
                updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(unavailable_dates)
        .bind(is_available)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM staff WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Staff not found".to_string()));
        }
        Ok(())
    }

    /// Lock a staff row for the rest of the transaction
    pub async fn lock_for_update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> AppResult<Option<Staff>> {
        let row = sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row)
    }

    /// Mark a date as taken and the staff member as unavailable
    pub async fn reserve_date(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        date: NaiveDate,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE staff SET
                unavailable_dates = array_append(unavailable_dates, $2),
                is_available = FALSE,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(date)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Give a date back; available again once no dates remain
    pub async fn release_date(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        date: NaiveDate,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE staff SET
                unavailable_dates = array_remove(unavailable_dates, $2),
                is_available = cardinality(array_remove(unavailable_dates, $2)) = 0,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(date)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
