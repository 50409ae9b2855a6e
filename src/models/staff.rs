//! Staff (team member) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{StaffRole, UserRole};

/// Staff row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub role: StaffRole,
    pub specialty: Option<String>,
    pub experience: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub is_available: bool,
    pub unavailable_dates: Vec<NaiveDate>,
    pub added_by_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Staff {
    pub fn is_unavailable_on(&self, date: NaiveDate) -> bool {
        self.unavailable_dates.contains(&date)
    }
}

/// Public listing without audit columns
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffPublic {
    pub id: Uuid,
    pub name: String,
    pub role: StaffRole,
    pub specialty: Option<String>,
    pub experience: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub is_available: bool,
    pub unavailable_dates: Vec<NaiveDate>,
}

impl From<Staff> for StaffPublic {
    fn from(s: Staff) -> Self {
        StaffPublic {
            id: s.id,
            name: s.name,
            role: s.role,
            specialty: s.specialty,
            experience: s.experience,
            image_url: s.image_url,
            bio: s.bio,
            is_available: s.is_available,
            unavailable_dates: s.unavailable_dates,
        }
    }
}

/// Who added a staff member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddedBy {
    pub name: String,
    pub role: UserRole,
}

/// Admin listing: staff row plus the user who added it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffWithAddedBy {
    #[serde(flatten)]
    pub staff: Staff,
    pub added_by: Option<AddedBy>,
}

/// Flat row for the admin listing join
#[derive(Debug, Clone, FromRow)]
pub struct StaffWithAddedByRow {
    #[sqlx(flatten)]
    pub staff: Staff,
    pub added_by_name: Option<String>,
    pub added_by_role: Option<UserRole>,
}

impl From<StaffWithAddedByRow> for StaffWithAddedBy {
    fn from(row: StaffWithAddedByRow) -> Self {
        let added_by = match (row.added_by_name, row.added_by_role) {
            (Some(name), Some(role)) => Some(AddedBy { name, role }),
            _ => None,
        };
        StaffWithAddedBy {
            staff: row.staff,
            added_by,
        }
    }
}

/// Add team member request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    pub name: Option<String>,
    /// Job title, e.g. "Chef" or "Head Waiter"
    pub role: Option<String>,
    pub specialty: Option<String>,
    pub experience: Option<String>,
    #[serde(alias = "image_url")]
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// Validated staff insert
#[derive(Debug)]
pub struct NewStaff {
    pub name: String,
    pub role: StaffRole,
    pub specialty: Option<String>,
    pub experience: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub added_by_id: Option<Uuid>,
}

/// Staff self-service profile update. Name and role are rejected if present.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaffProfile {
    pub name: Option<String>,
    pub role: Option<String>,
    pub specialty: Option<String>,
    pub experience: Option<String>,
    #[serde(alias = "image_url")]
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// Admin availability update
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetAvailability {
    /// Replaces the whole list when present
    pub unavailable_dates: Option<Vec<String>>,
    pub is_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_with_dates(dates: Vec<NaiveDate>) -> Staff {
        let now = Utc::now();
        Staff {
            id: Uuid::new_v4(),
            name: "Alex Kimani".into(),
            role: StaffRole::HeadWaiter,
            specialty: None,
            experience: None,
            image_url: None,
            bio: None,
            is_available: dates.is_empty(),
            unavailable_dates: dates,
            added_by_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_unavailable_on() {
        let d = NaiveDate::from_ymd_opt(2026, 12, 24).unwrap();
        let staff = staff_with_dates(vec![d]);
        assert!(staff.is_unavailable_on(d));
        assert!(!staff.is_unavailable_on(d.succ_opt().unwrap()));
    }

    #[test]
    fn test_admin_listing_serializes_flat() {
        let row = StaffWithAddedByRow {
            staff: staff_with_dates(vec![]),
            added_by_name: Some("Admin".into()),
            added_by_role: Some(UserRole::Admin),
        };
        let json = serde_json::to_value(StaffWithAddedBy::from(row)).unwrap();
        assert_eq!(json["name"], "Alex Kimani");
        assert_eq!(json["role"], "Head Waiter");
        assert_eq!(json["addedBy"]["role"], "admin");
        assert_eq!(json["isAvailable"], true);
    }
}
