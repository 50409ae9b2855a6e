//! Repository layer for database operations

pub mod bookings;
pub mod catering_services;
pub mod equipment;
pub mod equipment_bookings;
pub mod gallery;
pub mod messages;
pub mod quotes;
pub mod reports;
pub mod staff;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub staff: staff::StaffRepository,
    pub bookings: bookings::BookingsRepository,
    pub catering_services: catering_services::CateringServicesRepository,
    pub equipment: equipment::EquipmentRepository,
    pub equipment_bookings: equipment_bookings::EquipmentBookingsRepository,
    pub quotes: quotes::QuotesRepository,
    pub messages: messages::MessagesRepository,
    pub gallery: gallery::GalleryRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            staff: staff::StaffRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            catering_services: catering_services::CateringServicesRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            equipment_bookings: equipment_bookings::EquipmentBookingsRepository::new(pool.clone()),
            quotes: quotes::QuotesRepository::new(pool.clone()),
            messages: messages::MessagesRepository::new(pool.clone()),
            gallery: gallery::GalleryRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
