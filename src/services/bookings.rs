//! Staff bookings

use uuid::Uuid;

use super::{
    input::parse_date,
    notifier::{NotificationEvent, Notifier},
};
use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, BookingDetails, CreateBooking},
        enums::BookingStatus,
    },
    repository::{bookings::BookingAttempt, Repository},
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    notifier: Notifier,
}

impl BookingsService {
    pub fn new(repository: Repository, notifier: Notifier) -> Self {
        Self { repository, notifier }
    }

    /// Book a staff member for the caller. An unavailable date is reported
    /// as `BookingAttempt::Unavailable`, not as an error.
    pub async fn create(&self, user_id: Uuid, data: CreateBooking) -> AppResult<BookingAttempt> {
        let (Some(staff_id), Some(date)) = (data.staff_id, parse_date("date", &data.date)?) else {
            return Err(AppError::Validation("Staff ID and date are required".to_string()));
        };
        let notes = data.notes.as_deref().map(str::trim).filter(|n| !n.is_empty());

        let attempt = self
            .repository
            .bookings
            .create(user_id, staff_id, data.service_id, date, notes)
            .await?;

        match &attempt {
            BookingAttempt::Booked(booking) => {
                tracing::info!(booking_id = %booking.id, staff_id = %staff_id, %date, "Staff booked");
                self.notifier.publish(NotificationEvent::NewBooking, booking);
            }
            BookingAttempt::Unavailable(staff) => {
                tracing::info!(staff_id = %staff.id, %date, "Staff already booked for date");
            }
        }
        Ok(attempt)
    }

    pub async fn list(&self) -> AppResult<Vec<BookingDetails>> {
        self.repository.bookings.list_details().await
    }

    pub async fn update_status(&self, id: Uuid, status: Option<&str>) -> AppResult<Booking> {
        let status: BookingStatus = status
            .map(str::trim)
            .unwrap_or_default()
            .to_lowercase()
            .parse()
            .map_err(|_| AppError::Validation("Invalid status".to_string()))?;
        self.repository.bookings.update_status(id, status).await
    }
}
