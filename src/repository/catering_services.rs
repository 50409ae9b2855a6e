//! Catering services repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::catering_service::{CateringService, CreateCateringService, UpdateCateringService},
};

const DUPLICATE_NAME: &str = "A service with that name already exists";

#[derive(Clone)]
pub struct CateringServicesRepository {
    pool: Pool<Postgres>,
}

impl CateringServicesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Active services ordered by name
    pub async fn list_active(&self) -> AppResult<Vec<CateringService>> {
        let rows = sqlx::query_as::<_, CateringService>(
            "SELECT * FROM catering_services WHERE is_active ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catering_services")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn create(&self, name: &str, data: &CreateCateringService) -> AppResult<CateringService> {
        sqlx::query_as::<_, CateringService>(
            r#"
            INSERT INTO catering_services (name, description, base_price, image_url, is_active)
            VALUES ($1, $2, $3, $4, COALESCE($5, TRUE))
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(&data.description)
        .bind(data.base_price)
        .bind(&data.image_url)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::on_unique(e, DUPLICATE_NAME))
    }

    pub async fn update(&self, id: Uuid, data: &UpdateCateringService) -> AppResult<CateringService> {
        sqlx::query_as::<_, CateringService>(
            r#"
            UPDATE catering_services SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                base_price = COALESCE($4, base_price),
                image_url = COALESCE($5, image_url),
                is_active = COALESCE($6, is_active),
                updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.base_price)
        .bind(&data.image_url)
        .bind(data.is_active)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::on_unique(e, DUPLICATE_NAME))?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM catering_services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service not found".to_string()));
        }
        Ok(())
    }
}
