//! Data models for Hiro

pub mod booking;
pub mod catering_service;
pub mod enums;
pub mod equipment;
pub mod equipment_booking;
pub mod gallery;
pub mod message;
pub mod quote;
pub mod report;
pub mod staff;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingDetails};
pub use catering_service::CateringService;
pub use enums::{BookingStatus, EquipmentBookingStatus, QuoteStatus, QuoteType, StaffRole, UserRole};
pub use equipment::Equipment;
pub use equipment_booking::{BookedItem, EquipmentBooking};
pub use gallery::GalleryImage;
pub use message::Message;
pub use quote::Quote;
pub use staff::{Staff, StaffPublic, StaffWithAddedBy};
pub use user::{User, UserClaims, UserInfo};
