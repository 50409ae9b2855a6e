//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    bookings, catering_services, equipment, equipment_bookings, gallery, health, messages, quotes,
    realtime, reports, staff, users,
};

/// Registers the `bearer_auth` JWT scheme referenced by protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hiro API",
        version = "1.0.0",
        description = "Hiro Catering & Equipment back-office REST API"
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Users
        users::register,
        users::login,
        users::logout,
        users::me,
        users::update_me,
        users::admin_check,
        // Staff
        staff::list_staff,
        staff::list_staff_admin,
        staff::create_staff,
        staff::update_self,
        staff::set_availability,
        staff::delete_staff,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::update_booking_status,
        // Services
        catering_services::list_services,
        catering_services::create_service,
        catering_services::update_service,
        catering_services::delete_service,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::upload_image,
        equipment::delete_equipment,
        // Equipment bookings
        equipment_bookings::create_booking,
        equipment_bookings::list_bookings,
        equipment_bookings::update_booking_status,
        equipment_bookings::delete_booking,
        // Quotes
        quotes::create_quote,
        quotes::list_quotes,
        quotes::get_quote,
        quotes::mark_quote_read,
        quotes::update_quote_status,
        quotes::delete_quote,
        // Messages
        messages::create_message,
        messages::list_messages,
        messages::delete_message,
        // Gallery
        gallery::list_images,
        gallery::create_image,
        gallery::delete_image,
        // Reports
        reports::bookings_report,
        reports::quotes_report,
        reports::equipment_usage_report,
        // Notifications
        realtime::websocket,
        realtime::event_stream,
        realtime::counts,
    ),
    components(
        schemas(
            // Users
            crate::models::user::UserInfo,
            crate::models::user::RegisterUser,
            crate::models::user::LoginUser,
            crate::models::user::UpdateProfile,
            crate::models::enums::UserRole,
            users::AuthResponse,
            users::MeResponse,
            users::ProfileResponse,
            // Staff
            crate::models::staff::Staff,
            crate::models::staff::StaffPublic,
            crate::models::staff::StaffWithAddedBy,
            crate::models::staff::AddedBy,
            crate::models::staff::CreateStaff,
            crate::models::staff::UpdateStaffProfile,
            crate::models::staff::SetAvailability,
            crate::models::enums::StaffRole,
            staff::StaffResponse,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingDetails,
            crate::models::booking::BookingUser,
            crate::models::booking::BookingStaff,
            crate::models::booking::BookingService,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBookingStatus,
            crate::models::enums::BookingStatus,
            bookings::BookingResponse,
            bookings::StaffUnavailableResponse,
            // Services
            crate::models::catering_service::CateringService,
            crate::models::catering_service::CreateCateringService,
            crate::models::catering_service::UpdateCateringService,
            catering_services::ServiceResponse,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            equipment::EquipmentListResponse,
            equipment::EquipmentResponse,
            equipment::EquipmentImageForm,
            // Equipment bookings
            crate::models::equipment_booking::BookedItem,
            crate::models::equipment_booking::EquipmentBooking,
            crate::models::equipment_booking::CreateEquipmentBooking,
            crate::models::equipment_booking::UpdateEquipmentBookingStatus,
            crate::models::enums::EquipmentBookingStatus,
            equipment_bookings::EquipmentBookingResponse,
            equipment_bookings::EquipmentBookingListResponse,
            equipment_bookings::EquipmentBookingDeletedResponse,
            // Quotes
            crate::models::quote::Quote,
            crate::models::quote::CreateQuote,
            crate::models::quote::UpdateQuoteStatus,
            crate::models::enums::QuoteType,
            crate::models::enums::QuoteStatus,
            quotes::QuoteResponse,
            quotes::QuoteListResponse,
            quotes::QuoteDeletedResponse,
            // Messages
            crate::models::message::Message,
            crate::models::message::CreateMessage,
            messages::ContactMessageResponse,
            messages::ContactMessageListResponse,
            // Gallery
            crate::models::gallery::GalleryImage,
            crate::models::gallery::GalleryUploadForm,
            // Reports
            crate::models::report::DailyCount,
            crate::models::report::EquipmentUsage,
            crate::models::report::NotificationCounts,
            // Notifications
            crate::services::notifier::Notification,
            crate::services::notifier::NotificationEvent,
            // Common
            health::HealthResponse,
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "Registration, login and profile"),
        (name = "staff", description = "Team members"),
        (name = "bookings", description = "Staff bookings"),
        (name = "services", description = "Catering services"),
        (name = "equipment", description = "Equipment catalog"),
        (name = "equipment-bookings", description = "Equipment rental bookings"),
        (name = "quotes", description = "Quote requests"),
        (name = "messages", description = "Contact messages"),
        (name = "gallery", description = "Gallery images"),
        (name = "reports", description = "Admin reports"),
        (name = "notifications", description = "Real-time dashboard notifications")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
