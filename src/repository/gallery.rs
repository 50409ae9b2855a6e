//! Gallery repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::gallery::{GalleryImage, NewGalleryImage},
};

#[derive(Clone)]
pub struct GalleryRepository {
    pool: Pool<Postgres>,
}

impl GalleryRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<GalleryImage>> {
        let rows = sqlx::query_as::<_, GalleryImage>("SELECT * FROM gallery ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn create(&self, data: &NewGalleryImage) -> AppResult<GalleryImage> {
        let row = sqlx::query_as::<_, GalleryImage>(
            r#"
            INSERT INTO gallery (title, description, image_url)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete an image record, returning it so the file can be removed
    pub async fn delete(&self, id: Uuid) -> AppResult<GalleryImage> {
        sqlx::query_as::<_, GalleryImage>("DELETE FROM gallery WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))
    }
}
