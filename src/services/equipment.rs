//! Equipment catalog

use uuid::Uuid;

use super::{
    input::present,
    notifier::{NotificationEvent, Notifier},
    uploads::{UploadStore, UploadedFile},
};
use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    notifier: Notifier,
    uploads: UploadStore,
}

impl EquipmentService {
    pub fn new(repository: Repository, notifier: Notifier, uploads: UploadStore) -> Self {
        Self {
            repository,
            notifier,
            uploads,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let (Some(name), Some(equipment_type), Some(category)) = (
            present(&data.name),
            present(&data.equipment_type),
            present(&data.category),
        ) else {
            return Err(AppError::Validation("Name, Type & Category required".to_string()));
        };
        let size = present(&data.size);

        let equipment = self
            .repository
            .equipment
            .create(&name, &equipment_type, &category, size.as_deref())
            .await?;
        self.notifier.publish(NotificationEvent::NewEquipmentAdded, &equipment);
        Ok(equipment)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateEquipment) -> AppResult<Equipment> {
        let changes = normalize_update(data)?;
        let equipment = self.repository.equipment.update(id, &changes).await?;
        self.notifier.publish(NotificationEvent::EquipmentUpdated, &equipment);
        Ok(equipment)
    }

    /// Store a new image and drop the previous file
    pub async fn replace_image(&self, id: Uuid, file: &UploadedFile) -> AppResult<Equipment> {
        let previous = self.repository.equipment.get_by_id(id).await?;
        let url = self.uploads.save(file).await?;

        let equipment = match self.repository.equipment.set_image(id, &url).await {
            Ok(e) => e,
            Err(e) => {
                self.uploads.remove(&url).await;
                return Err(e);
            }
        };
        if let Some(old) = previous.image_url {
            self.uploads.remove(&old).await;
        }
        self.notifier.publish(NotificationEvent::EquipmentUpdated, &equipment);
        Ok(equipment)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<Equipment> {
        let equipment = self.repository.equipment.delete(id).await?;
        if let Some(ref url) = equipment.image_url {
            self.uploads.remove(url).await;
        }
        self.notifier
            .publish(NotificationEvent::EquipmentDeleted, &serde_json::json!({ "id": equipment.id }));
        Ok(equipment)
    }
}

/// Trim submitted values the same way `create` does. Name, type and category
/// may be omitted but not blanked; an empty size clears it.
pub fn normalize_update(data: &UpdateEquipment) -> AppResult<UpdateEquipment> {
    let required = |v: &Option<String>| -> AppResult<Option<String>> {
        match v.as_deref().map(str::trim) {
            Some("") => Err(AppError::Validation(
                "Name, Type & Category cannot be empty".to_string(),
            )),
            other => Ok(other.map(str::to_string)),
        }
    };

    Ok(UpdateEquipment {
        name: required(&data.name)?,
        equipment_type: required(&data.equipment_type)?,
        category: required(&data.category)?,
        size: data.size.as_deref().map(|s| s.trim().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_values_are_trimmed() {
        let data = UpdateEquipment {
            name: Some("  Chafing Dish ".into()),
            equipment_type: Some(" Catering\t".into()),
            category: None,
            size: Some(" Large ".into()),
        };
        let changes = normalize_update(&data).unwrap();
        assert_eq!(changes.name.as_deref(), Some("Chafing Dish"));
        assert_eq!(changes.equipment_type.as_deref(), Some("Catering"));
        assert_eq!(changes.category, None);
        assert_eq!(changes.size.as_deref(), Some("Large"));
    }

    #[test]
    fn test_update_rejects_blank_required_fields() {
        let data = UpdateEquipment {
            category: Some("   ".into()),
            ..Default::default()
        };
        assert!(matches!(normalize_update(&data), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_size_is_kept_for_clearing() {
        let data = UpdateEquipment {
            size: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(normalize_update(&data).unwrap().size.as_deref(), Some(""));
    }
}
