//! Team members: public directory, admin management and self-service profile

use uuid::Uuid;

use super::input::{parse_date, present};
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::StaffRole,
        staff::{CreateStaff, NewStaff, SetAvailability, Staff, StaffPublic, StaffWithAddedBy, UpdateStaffProfile},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StaffService {
    repository: Repository,
}

impl StaffService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_public(&self) -> AppResult<Vec<StaffPublic>> {
        let staff = self.repository.staff.list().await?;
        Ok(staff.into_iter().map(StaffPublic::from).collect())
    }

    pub async fn list_admin(&self) -> AppResult<Vec<StaffWithAddedBy>> {
        self.repository.staff.list_with_added_by().await
    }

    pub async fn create(&self, data: CreateStaff, added_by: Uuid) -> AppResult<Staff> {
        let new = validate_new_staff(data, Some(added_by))?;
        let staff = self.repository.staff.create(&new).await?;
        tracing::info!(staff_id = %staff.id, role = %staff.role, "Staff member added");
        Ok(staff)
    }

    /// Insert a staff member without an owning account (seed binary)
    pub async fn seed(&self, data: CreateStaff) -> AppResult<Staff> {
        let new = validate_new_staff(data, None)?;
        self.repository.staff.create(&new).await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repository.staff.count().await
    }

    /// A staff member edits their own descriptive fields
    pub async fn update_self(&self, user_id: Uuid, data: UpdateStaffProfile) -> AppResult<Staff> {
        if data.name.is_some() || data.role.is_some() {
            return Err(AppError::Authorization(
                "You cannot change your name or role.".to_string(),
            ));
        }
        let staff = self
            .repository
            .staff
            .get_by_added_by(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Staff profile not found".to_string()))?;
        self.repository.staff.update_profile(staff.id, &data).await
    }

    pub async fn set_availability(&self, id: Uuid, data: SetAvailability) -> AppResult<Staff> {
        let dates = match data.unavailable_dates {
            Some(raw) => {
                let mut dates = Vec::with_capacity(raw.len());
                for value in raw {
                    if let Some(date) = parse_date("unavailableDates", &Some(value))? {
                        dates.push(date);
                    }
                }
                dates.sort_unstable();
                dates.dedup();
                Some(dates)
            }
            None => None,
        };
        self.repository
            .staff
            .set_availability(id, dates, data.is_available)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.staff.delete(id).await
    }
}

fn validate_new_staff(data: CreateStaff, added_by_id: Option<Uuid>) -> AppResult<NewStaff> {
    let (Some(name), Some(role)) = (present(&data.name), present(&data.role)) else {
        return Err(AppError::Validation("Name and role are required".to_string()));
    };
    let role = StaffRole::parse_lenient(&role).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid role. Allowed roles: {}",
            StaffRole::ALL.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ")
        ))
    })?;
    Ok(NewStaff {
        name,
        role,
        specialty: present(&data.specialty),
        experience: present(&data.experience),
        image_url: present(&data.image_url),
        bio: present(&data.bio),
        added_by_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, role: &str) -> CreateStaff {
        CreateStaff {
            name: Some(name.into()),
            role: Some(role.into()),
            specialty: Some("Pastry".into()),
            experience: None,
            image_url: Some("".into()),
            bio: None,
        }
    }

    #[test]
    fn test_validate_new_staff() {
        let new = validate_new_staff(request("Wanjiru", "head_waiter"), None).unwrap();
        assert_eq!(new.role, StaffRole::HeadWaiter);
        assert_eq!(new.specialty.as_deref(), Some("Pastry"));
        assert_eq!(new.image_url, None);
    }

    #[test]
    fn test_validate_new_staff_errors() {
        assert!(matches!(
            validate_new_staff(request("", "Chef"), None),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_new_staff(request("Otieno", "Butler"), None),
            Err(AppError::Validation(_))
        ));
    }
}
