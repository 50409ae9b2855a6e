//! Quote request model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString, PickFirst};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{QuoteStatus, QuoteType};

/// Quote row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub quote_type: QuoteType,
    // Event
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub guests: Option<i32>,
    // Equipment / repair
    pub equipment_type: Option<String>,
    pub equipment_quantity: Option<i32>,
    pub rental_date: Option<NaiveDate>,
    // Staff
    pub staff_type: Option<String>,
    // Common
    pub location: Option<String>,
    pub details: Option<String>,
    // Admin
    pub status: QuoteStatus,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public quote form submission. Numeric fields accept numbers, numeric
/// strings or `""`; the web form posts every field and leaves the ones that do
/// not apply to the quote type empty.
#[serde_as]
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuote {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub quote_type: Option<String>,
    pub event_type: Option<String>,
    /// YYYY-MM-DD
    pub event_date: Option<String>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub guests: Option<i32>,
    pub equipment_type: Option<String>,
    #[serde_as(as = "PickFirst<(Option<_>, NoneAsEmptyString)>")]
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub equipment_quantity: Option<i32>,
    /// YYYY-MM-DD
    pub rental_date: Option<String>,
    pub staff_type: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
}

/// Validated quote insert; fields of other quote types are already cleared
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuote {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub quote_type: QuoteType,
    pub event_type: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub guests: Option<i32>,
    pub equipment_type: Option<String>,
    pub equipment_quantity: Option<i32>,
    pub rental_date: Option<NaiveDate>,
    pub staff_type: Option<String>,
    pub location: Option<String>,
    pub details: Option<String>,
}

/// Admin status update
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuoteStatus {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_accept_strings() {
        let body = serde_json::json!({
            "fullName": "Jane",
            "guests": "150",
            "equipmentQuantity": 4
        });
        let req: CreateQuote = serde_json::from_value(body).unwrap();
        assert_eq!(req.guests, Some(150));
        assert_eq!(req.equipment_quantity, Some(4));
    }

    #[test]
    fn test_web_form_blanks_are_absent() {
        let body = serde_json::json!({
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
        });
        let req: CreateQuote = serde_json::from_value(body).unwrap();
        assert_eq!(req.guests, None);
        assert_eq!(req.equipment_quantity, None);
        assert_eq!(req.staff_type.as_deref(), Some("Waiter"));
    }

    #[test]
    fn test_numeric_fields_null_or_garbage() {
        let req: CreateQuote =
            serde_json::from_value(serde_json::json!({ "guests": null })).unwrap();
        assert_eq!(req.guests, None);

        let bad = serde_json::from_value::<CreateQuote>(serde_json::json!({ "guests": "lots" }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_numeric_fields_absent() {
        let req: CreateQuote = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(req.guests, None);
        assert_eq!(req.equipment_quantity, None);
    }
}
