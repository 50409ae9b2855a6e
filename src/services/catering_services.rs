//! Catering service offerings

use uuid::Uuid;

use super::input::present;
use crate::{
    error::{AppError, AppResult},
    models::catering_service::{CateringService, CreateCateringService, UpdateCateringService},
    repository::Repository,
};

#[derive(Clone)]
pub struct CateringServicesService {
    repository: Repository,
}

impl CateringServicesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<CateringService>> {
        self.repository.catering_services.list_active().await
    }

    pub async fn create(&self, data: &CreateCateringService) -> AppResult<CateringService> {
        let name = present(&data.name)
            .ok_or_else(|| AppError::Validation("Service name is required".to_string()))?;
        self.repository.catering_services.create(&name, data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateCateringService) -> AppResult<CateringService> {
        if matches!(data.name.as_deref().map(str::trim), Some("")) {
            return Err(AppError::Validation("Service name cannot be empty".to_string()));
        }
        self.repository.catering_services.update(id, data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.catering_services.delete(id).await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repository.catering_services.count().await
    }
}
