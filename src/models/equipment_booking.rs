//! Equipment rental booking model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::EquipmentBookingStatus;

/// One line of an equipment booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookedItem {
    /// Catalog id, when the item was picked from the catalog
    #[serde(default, alias = "id", alias = "_id")]
    pub equipment_id: Option<Uuid>,
    /// Missing values are left for booking validation to report
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
}

/// Equipment booking row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentBooking {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub date: NaiveDate,
    #[schema(value_type = Vec<BookedItem>)]
    pub items: Json<Vec<BookedItem>>,
    pub status: EquipmentBookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public booking form submission
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentBooking {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Rental date (YYYY-MM-DD)
    pub date: Option<String>,
    #[serde(default, alias = "selectedEquipments")]
    pub items: Vec<BookedItem>,
}

/// Validated booking insert
#[derive(Debug)]
pub struct NewEquipmentBooking {
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub date: NaiveDate,
    pub items: Vec<BookedItem>,
}

/// Admin status update
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipmentBookingStatus {
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_accept_selected_equipments_alias() {
        let id = Uuid::new_v4();
        let body = serde_json::json!({
            "fullName": "Jane Doe",
            "phone": "0712345678",
            "location": "Mombasa",
            "date": "2026-12-24",
            "selectedEquipments": [{ "id": id, "name": "Tent", "quantity": 2 }]
        });
        let req: CreateEquipmentBooking = serde_json::from_value(body).unwrap();
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].equipment_id, Some(id));
        assert_eq!(req.items[0].quantity, 2);
    }

    #[test]
    fn test_item_without_name_still_parses() {
        let item: BookedItem = serde_json::from_value(serde_json::json!({ "quantity": 2 })).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let body = serde_json::json!({ "fullName": "Jane" });
        let req: CreateEquipmentBooking = serde_json::from_value(body).unwrap();
        assert!(req.items.is_empty());
        assert!(req.date.is_none());
    }
}
