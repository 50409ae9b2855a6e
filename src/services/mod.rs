//! Business logic services

pub mod bookings;
pub mod catering_services;
pub mod equipment;
pub mod equipment_bookings;
pub mod gallery;
pub mod input;
pub mod messages;
pub mod notifier;
pub mod quotes;
pub mod reports;
pub mod staff;
pub mod uploads;
pub mod users;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub staff: staff::StaffService,
    pub bookings: bookings::BookingsService,
    pub catering_services: catering_services::CateringServicesService,
    pub equipment: equipment::EquipmentService,
    pub equipment_bookings: equipment_bookings::EquipmentBookingsService,
    pub quotes: quotes::QuotesService,
    pub messages: messages::MessagesService,
    pub gallery: gallery::GalleryService,
    pub reports: reports::ReportsService,
    pub notifier: notifier::Notifier,
    pub uploads: uploads::UploadStore,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let notifier = notifier::Notifier::new(config.realtime.channel_capacity);
        let uploads = uploads::UploadStore::new(config.uploads.clone());

        Self {
            users: users::UsersService::new(repository.clone(), config.auth.clone()),
            staff: staff::StaffService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), notifier.clone()),
            catering_services: catering_services::CateringServicesService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(
                repository.clone(),
                notifier.clone(),
                uploads.clone(),
            ),
            equipment_bookings: equipment_bookings::EquipmentBookingsService::new(
                repository.clone(),
                notifier.clone(),
            ),
            quotes: quotes::QuotesService::new(repository.clone(), notifier.clone()),
            messages: messages::MessagesService::new(repository.clone(), notifier.clone()),
            gallery: gallery::GalleryService::new(repository.clone(), uploads.clone()),
            reports: reports::ReportsService::new(repository.clone()),
            notifier,
            uploads,
            repository,
        }
    }

    /// Database round-trip for the readiness probe
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
