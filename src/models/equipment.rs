//! Equipment catalog model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: Uuid,
    /// Equipment name, e.g. "Chiavari chair"
    pub name: String,
    /// Free-form type, e.g. "Gold" or "Banquet"
    #[serde(rename = "type")]
    pub equipment_type: String,
    /// Catalog category, e.g. "Chairs & Seating"
    pub category: String,
    pub size: Option<String>,
    /// Public path under /uploads
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipment {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
}

/// Update equipment request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub category: Option<String>,
    /// An empty string clears the size
    pub size: Option<String>,
}
