//! Shared domain enums stored as TEXT columns

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

/// Implements string conversions and the SQLx TEXT mapping for a unit enum.
macro_rules! text_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(format!(
                        "Invalid {}: {} (expected one of: {})",
                        stringify!($name),
                        s,
                        [$($label),+].join(", ")
                    )),
                }
            }
        }

        impl sqlx::Type<Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<Postgres>>::type_info()
            }

            fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
                <String as sqlx::Type<Postgres>>::compatible(ty)
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s: String = Decode::<Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as Encode<Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

text_enum!(UserRole {
    User => "user",
    Admin => "admin",
});

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Job title of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StaffRole {
    Chef,
    #[serde(rename = "Head Waiter")]
    HeadWaiter,
    Mixologist,
    Photographer,
    Decorator,
    #[serde(rename = "MC")]
    Mc,
    #[serde(rename = "DJ")]
    Dj,
    #[serde(rename = "Head Cleaner")]
    HeadCleaner,
}

text_enum!(StaffRole {
    Chef => "Chef",
    HeadWaiter => "Head Waiter",
    Mixologist => "Mixologist",
    Photographer => "Photographer",
    Decorator => "Decorator",
    Mc => "MC",
    Dj => "DJ",
    HeadCleaner => "Head Cleaner",
});

impl StaffRole {
    /// Lenient parse used for request input: case-insensitive, `_` as space
    /// (`HEAD_WAITER`, `head waiter` and `Head Waiter` are the same role).
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let wanted = s.trim().replace('_', " ").to_lowercase();
        StaffRole::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().to_lowercase() == wanted)
    }
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Staff booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

text_enum!(BookingStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// What a status change does to the staff member's booked date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffDateChange {
    Keep,
    Release,
    /// The booking is active again and needs its date back
    Reserve,
}

impl BookingStatus {
    /// Whether the booked staff member is free again once a booking reaches this status
    pub fn releases_staff(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    pub fn staff_date_change(self, next: BookingStatus) -> StaffDateChange {
        match (self.releases_staff(), next.releases_staff()) {
            (false, true) => StaffDateChange::Release,
            (true, false) => StaffDateChange::Reserve,
            _ => StaffDateChange::Keep,
        }
    }
}

// ---------------------------------------------------------------------------
// EquipmentBookingStatus
// ---------------------------------------------------------------------------

/// Equipment rental request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentBookingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

text_enum!(EquipmentBookingStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

// ---------------------------------------------------------------------------
// QuoteType
// ---------------------------------------------------------------------------

/// Kind of quote requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum QuoteType {
    Event,
    Equipment,
    EquipmentRepair,
    Staff,
}

text_enum!(QuoteType {
    Event => "Event",
    Equipment => "Equipment",
    EquipmentRepair => "EquipmentRepair",
    Staff => "Staff",
});

impl QuoteType {
    /// Equipment hire and equipment repair share the same fields
    pub fn uses_equipment_fields(&self) -> bool {
        matches!(self, QuoteType::Equipment | QuoteType::EquipmentRepair)
    }
}

// ---------------------------------------------------------------------------
// QuoteStatus
// ---------------------------------------------------------------------------

/// Follow-up status of a quote request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum QuoteStatus {
    #[default]
    Pending,
    Contacted,
    Completed,
}

text_enum!(QuoteStatus {
    Pending => "Pending",
    Contacted => "Contacted",
    Completed => "Completed",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_date_change() {
        use BookingStatus::*;
        assert_eq!(Pending.staff_date_change(Cancelled), StaffDateChange::Release);
        assert_eq!(Confirmed.staff_date_change(Completed), StaffDateChange::Release);
        assert_eq!(Cancelled.staff_date_change(Pending), StaffDateChange::Reserve);
        assert_eq!(Completed.staff_date_change(Confirmed), StaffDateChange::Reserve);
        assert_eq!(Cancelled.staff_date_change(Completed), StaffDateChange::Keep);
        assert_eq!(Cancelled.staff_date_change(Cancelled), StaffDateChange::Keep);
        assert_eq!(Pending.staff_date_change(Confirmed), StaffDateChange::Keep);
    }

    #[test]
    fn test_staff_role_lenient_parse() {
        assert_eq!(StaffRole::parse_lenient("HEAD_WAITER"), Some(StaffRole::HeadWaiter));
        assert_eq!(StaffRole::parse_lenient("head waiter"), Some(StaffRole::HeadWaiter));
        assert_eq!(StaffRole::parse_lenient("CHEF"), Some(StaffRole::Chef));
        assert_eq!(StaffRole::parse_lenient(" dj "), Some(StaffRole::Dj));
        assert_eq!(StaffRole::parse_lenient("Sommelier"), None);
    }

    #[test]
    fn test_strict_parse_and_display() {
        assert_eq!("approved".parse::<EquipmentBookingStatus>(), Ok(EquipmentBookingStatus::Approved));
        assert!("Approved".parse::<EquipmentBookingStatus>().is_err());
        assert_eq!(QuoteStatus::Contacted.to_string(), "Contacted");
        assert_eq!(StaffRole::HeadCleaner.to_string(), "Head Cleaner");
    }

    #[test]
    fn test_serde_labels_match_db_labels() {
        for role in StaffRole::ALL {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
        for status in BookingStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for quote_type in QuoteType::ALL {
            let json = serde_json::to_string(quote_type).unwrap();
            assert_eq!(json, format!("\"{}\"", quote_type.as_str()));
        }
    }

    #[test]
    fn test_booking_release() {
        assert!(BookingStatus::Completed.releases_staff());
        assert!(BookingStatus::Cancelled.releases_staff());
        assert!(!BookingStatus::Confirmed.releases_staff());
        assert!(!BookingStatus::Pending.releases_staff());
    }
}
