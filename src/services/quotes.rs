//! Quote requests

use uuid::Uuid;

use super::{
    input::{is_valid_email, parse_date, present},
    notifier::{NotificationEvent, Notifier},
};
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{QuoteStatus, QuoteType},
        quote::{CreateQuote, NewQuote, Quote},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct QuotesService {
    repository: Repository,
    notifier: Notifier,
}

impl QuotesService {
    pub fn new(repository: Repository, notifier: Notifier) -> Self {
        Self { repository, notifier }
    }

    pub async fn create(&self, data: CreateQuote) -> AppResult<Quote> {
        let new = validate_quote(data)?;
        let quote = self.repository.quotes.create(&new).await?;
        tracing::info!(quote_id = %quote.id, quote_type = %quote.quote_type, "Quote received");
        self.notifier.publish(NotificationEvent::NewQuote, &quote);
        Ok(quote)
    }

    pub async fn list(&self) -> AppResult<Vec<Quote>> {
        self.repository.quotes.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Quote> {
        self.repository.quotes.get_by_id(id).await
    }

    pub async fn mark_read(&self, id: Uuid) -> AppResult<Quote> {
        self.repository.quotes.mark_read(id).await
    }

    pub async fn update_status(&self, id: Uuid, status: Option<&str>) -> AppResult<Quote> {
        let status: QuoteStatus = status
            .map(str::trim)
            .unwrap_or_default()
            .parse()
            .map_err(|_| {
                AppError::Validation(format!(
                    "Invalid status. Allowed: {}",
                    QuoteStatus::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
                ))
            })?;
        self.repository.quotes.update_status(id, status).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.quotes.delete(id).await?;
        self.notifier
            .publish(NotificationEvent::DeleteQuote, &serde_json::json!({ "id": id }));
        Ok(())
    }
}

/// Check required and type-specific fields; fields belonging to other quote
/// types are dropped
fn validate_quote(data: CreateQuote) -> AppResult<NewQuote> {
    let (Some(full_name), Some(email), Some(phone_number), Some(quote_type)) = (
        present(&data.full_name),
        present(&data.email),
        present(&data.phone_number),
        present(&data.quote_type),
    ) else {
        return Err(AppError::Validation("Missing required fields.".to_string()));
    };
    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email address.".to_string()));
    }
    let quote_type: QuoteType = quote_type
        .parse()
        .map_err(|_| AppError::Validation("Invalid quote type.".to_string()))?;

    let mut quote = NewQuote {
        full_name,
        email: email.to_lowercase(),
        phone_number,
        quote_type,
        event_type: None,
        event_date: None,
        guests: None,
        equipment_type: None,
        equipment_quantity: None,
        rental_date: None,
        staff_type: None,
        location: present(&data.location),
        details: present(&data.details),
    };

    match quote_type {
        QuoteType::Event => {
            let event_type = present(&data.event_type);
            let event_date = parse_date("eventDate", &data.event_date)?;
            let guests = data.guests.filter(|g| *g > 0);
            if event_type.is_none() || event_date.is_none() || guests.is_none() {
                return Err(AppError::Validation(
                    "Event type, event date and number of guests are required for event quotes."
                        .to_string(),
                ));
            }
            quote.event_type = event_type;
            quote.event_date = event_date;
            quote.guests = guests;
        }
        QuoteType::Equipment | QuoteType::EquipmentRepair => {
            let equipment_type = present(&data.equipment_type);
            let equipment_quantity = data.equipment_quantity.filter(|q| *q > 0);
            let rental_date = parse_date("rentalDate", &data.rental_date)?;
            if equipment_type.is_none() || equipment_quantity.is_none() || rental_date.is_none() {
                return Err(AppError::Validation(
                    "Equipment type, quantity and date are required for equipment quotes."
                        .to_string(),
                ));
            }
            quote.equipment_type = equipment_type;
            quote.equipment_quantity = equipment_quantity;
            quote.rental_date = rental_date;
        }
        QuoteType::Staff => {
            quote.staff_type = present(&data.staff_type);
            if quote.staff_type.is_none() {
                return Err(AppError::Validation(
                    "Staff type is required for staff quotes.".to_string(),
                ));
            }
        }
    }

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn base(quote_type: &str) -> CreateQuote {
        CreateQuote {
            full_name: Some("Jane Doe".into()),
            email: Some("Jane@Example.com".into()),
            phone_number: Some("0712345678".into()),
            quote_type: Some(quote_type.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_event_quote_clears_other_fields() {
        let data = CreateQuote {
            event_type: Some("Wedding".into()),
            event_date: Some("2026-12-24".into()),
            guests: Some(150),
            equipment_type: Some("Tents".into()),
            staff_type: Some("Chef".into()),
            ..base("Event")
        };
        let quote = validate_quote(data).unwrap();
        assert_eq!(quote.email, "jane@example.com");
        assert_eq!(quote.event_date, NaiveDate::from_ymd_opt(2026, 12, 24));
        assert_eq!(quote.guests, Some(150));
        assert_eq!(quote.equipment_type, None);
        assert_eq!(quote.staff_type, None);
    }

    #[test]
    fn test_event_quote_needs_positive_guests() {
        let data = CreateQuote {
            event_type: Some("Wedding".into()),
            event_date: Some("2026-12-24".into()),
            guests: Some(0),
            ..base("Event")
        };
        assert!(matches!(validate_quote(data), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_equipment_repair_quote() {
        let data = CreateQuote {
            equipment_type: Some("Chafing dish".into()),
            equipment_quantity: Some(3),
            rental_date: Some("2027-01-10".into()),
            guests: Some(40),
            ..base("EquipmentRepair")
        };
        let quote = validate_quote(data).unwrap();
        assert_eq!(quote.quote_type, QuoteType::EquipmentRepair);
        assert_eq!(quote.equipment_quantity, Some(3));
        assert_eq!(quote.guests, None);
    }

    #[test]
    fn test_staff_quote_requires_staff_type() {
        assert!(matches!(validate_quote(base("Staff")), Err(AppError::Validation(_))));
        let data = CreateQuote {
            staff_type: Some("Mixologist".into()),
            ..base("Staff")
        };
        assert_eq!(validate_quote(data).unwrap().staff_type.as_deref(), Some("Mixologist"));
    }

    #[test]
    fn test_missing_and_invalid_common_fields() {
        let missing = CreateQuote {
            phone_number: None,
            ..base("Staff")
        };
        assert!(matches!(validate_quote(missing), Err(AppError::Validation(ref m)) if m == "Missing required fields."));

        let bad_email = CreateQuote {
            email: Some("jane-at-example".into()),
            staff_type: Some("DJ".into()),
            ..base("Staff")
        };
        assert!(matches!(validate_quote(bad_email), Err(AppError::Validation(_))));

        let bad_type = base("Catering");
        assert!(matches!(validate_quote(bad_type), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_staff_quote_from_web_form() {
        let data: CreateQuote = serde_json::from_value(serde_json::json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "phoneNumber": "0712345678",
            "quoteType": "Staff",
            "staffType": "Waiter",
            "eventType": "",
            "eventDate": "",
            "guests": "",
            "location": "Mombasa",
            "details": "",
            "equipmentType": "",
            "equipmentQuantity": "",
            "rentalDate": ""
        }))
        .unwrap();
        let quote = validate_quote(data).unwrap();
        assert_eq!(quote.quote_type, QuoteType::Staff);
        assert_eq!(quote.staff_type.as_deref(), Some("Waiter"));
        assert_eq!(quote.guests, None);
        assert_eq!(quote.details, None);
    }
}
