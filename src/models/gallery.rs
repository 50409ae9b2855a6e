//! Gallery image model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Gallery row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Public path under /uploads
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Gallery insert, built from the multipart form after the file is stored
#[derive(Debug)]
pub struct NewGalleryImage {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
}

/// Multipart form accepted by `POST /api/gallery` (documentation only)
#[derive(Debug, ToSchema)]
pub struct GalleryUploadForm {
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}
