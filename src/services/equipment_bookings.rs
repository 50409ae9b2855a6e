//! Equipment rental bookings

use uuid::Uuid;

use super::{
    input::{parse_date, present},
    notifier::{NotificationEvent, Notifier},
};
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentBookingStatus,
        equipment_booking::{BookedItem, CreateEquipmentBooking, EquipmentBooking, NewEquipmentBooking},
    },
    repository::Repository,
};

const MISSING_FIELDS: &str =
    "All fields are required and at least one equipment must be selected.";

#[derive(Clone)]
pub struct EquipmentBookingsService {
    repository: Repository,
    notifier: Notifier,
}

impl EquipmentBookingsService {
    pub fn new(repository: Repository, notifier: Notifier) -> Self {
        Self { repository, notifier }
    }

    pub async fn create(&self, data: CreateEquipmentBooking) -> AppResult<EquipmentBooking> {
        let new = validate_booking(data)?;
        let booking = self.repository.equipment_bookings.create(&new).await?;
        tracing::info!(booking_id = %booking.id, items = booking.items.len(), "Equipment booking received");
        self.notifier.publish(NotificationEvent::NewEquipmentBooking, &booking);
        Ok(booking)
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentBooking>> {
        self.repository.equipment_bookings.list().await
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: Option<&str>,
        notes: Option<&str>,
    ) -> AppResult<EquipmentBooking> {
        let status: EquipmentBookingStatus = status
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase()
            .parse()
            .map_err(|_| AppError::Validation("Invalid status".to_string()))?;
        self.repository
            .equipment_bookings
            .update_status(id, status, notes)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment_bookings.delete(id).await
    }
}

fn validate_booking(data: CreateEquipmentBooking) -> AppResult<NewEquipmentBooking> {
    let date = parse_date("date", &data.date)?;
    let (Some(full_name), Some(phone), Some(location), Some(date)) = (
        present(&data.full_name),
        present(&data.phone),
        present(&data.location),
        date,
    ) else {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    };
    if data.items.is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }

    let mut items = Vec::with_capacity(data.items.len());
    for item in data.items {
        let name = item.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Each equipment item needs a name.".to_string()));
        }
        if item.quantity < 1 {
            return Err(AppError::Validation(format!(
                "Quantity for {} must be at least 1.",
                name
            )));
        }
        items.push(BookedItem {
            equipment_id: item.equipment_id,
            name: name.to_string(),
            quantity: item.quantity,
        });
    }

    Ok(NewEquipmentBooking {
        full_name,
        phone,
        location,
        date,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: serde_json::Value) -> CreateEquipmentBooking {
        serde_json::from_value(serde_json::json!({
            "fullName": "Jane Doe",
            "phone": "0712345678",
            "location": "Nairobi",
            "date": "2026-12-24",
            "items": items
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_booking() {
        let new = validate_booking(request(serde_json::json!([
            { "name": " Tent ", "quantity": 2 }
        ])))
        .unwrap();
        assert_eq!(new.items[0].name, "Tent");
        assert_eq!(new.date.to_string(), "2026-12-24");
    }

    #[test]
    fn test_rejects_empty_items() {
        let err = validate_booking(request(serde_json::json!([]))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == MISSING_FIELDS));
    }

    #[test]
    fn test_rejects_bad_quantity() {
        let err = validate_booking(request(serde_json::json!([
            { "name": "Chair", "quantity": 0 }
        ])))
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_rejects_item_without_name() {
        let err = validate_booking(request(serde_json::json!([{ "quantity": 2 }]))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Each equipment item needs a name."));
    }

    #[test]
    fn test_rejects_missing_fields() {
        let req: CreateEquipmentBooking = serde_json::from_value(serde_json::json!({
            "fullName": "Jane",
            "items": [{ "name": "Tent", "quantity": 1 }]
        }))
        .unwrap();
        assert!(matches!(validate_booking(req), Err(AppError::Validation(_))));
    }
}
