//! API handlers for Hiro REST endpoints

pub mod bookings;
pub mod catering_services;
pub mod equipment;
pub mod equipment_bookings;
pub mod gallery;
pub mod health;
pub mod messages;
pub mod multipart;
pub mod openapi;
pub mod quotes;
pub mod realtime;
pub mod reports;
pub mod staff;
pub mod users;

use std::time::Duration;

use axum::{
    async_trait,
    body::Body,
    extract::{DefaultBodyLimit, FromRequestParts, Query},
    http::{header, request::Parts, HeaderValue, Method, Request},
    routing::{delete, get, patch, post, put},
    RequestPartsExt, Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::Span;
use utoipa::ToSchema;

use crate::{config::AppConfig, error::AppError, models::user::UserClaims, AppState};

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::Authentication("No token provided".to_string()))?;

        let claims = decode_token(bearer.token(), state)?;
        Ok(AuthenticatedUser(claims))
    }
}

/// Authenticated user holding the admin role
pub struct AdminUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthenticatedUser(claims) = AuthenticatedUser::from_request_parts(parts, state).await?;
        claims.require_admin()?;
        Ok(AdminUser(claims))
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Admin for streaming endpoints. Browsers cannot set headers on WebSocket
/// or EventSource connections, so `?token=` is accepted as well.
pub struct StreamAdmin(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for StreamAdmin {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = match parts.extract::<TypedHeader<Authorization<Bearer>>>().await {
            Ok(TypedHeader(Authorization(bearer))) => Some(bearer.token().to_string()),
            Err(_) => parts
                .extract::<Query<TokenQuery>>()
                .await
                .ok()
                .and_then(|Query(q)| q.token)
                .filter(|t| !t.is_empty()),
        };
        let token = token.ok_or_else(|| AppError::Authentication("No token provided".to_string()))?;

        let claims = decode_token(&token, state)?;
        claims.require_admin()?;
        Ok(StreamAdmin(claims))
    }
}

fn decode_token(token: &str, state: &AppState) -> Result<UserClaims, AppError> {
    UserClaims::from_token(token, &state.config.auth.jwt_secret)
        .map_err(|_| AppError::Authentication("Invalid or expired token".to_string()))
}

/// Plain `{message}` body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();
    let upload_limit = usize::try_from(config.uploads.max_file_size)
        .unwrap_or(usize::MAX)
        .saturating_add(64 * 1024);

    // Anonymous form submissions, rate limited per client IP when enabled
    let mut public_submissions = Router::new()
        .route("/api/users/register", post(users::register))
        .route("/api/users/login", post(users::login))
        .route("/api/auth/register", post(users::register))
        .route("/api/auth/login", post(users::login))
        .route("/api/quotes", post(quotes::create_quote))
        .route("/api/messages", post(messages::create_message))
        .route("/api/equipment-bookings", post(equipment_bookings::create_booking));

    if config.rate_limit.enabled {
        match GovernorConfigBuilder::default()
            .per_second(config.rate_limit.per_second)
            .burst_size(config.rate_limit.burst_size)
            .finish()
        {
            Some(governor) => {
                // tower_governor 0.4 takes the config behind an Arc
                public_submissions = public_submissions.layer(GovernorLayer {
                    config: std::sync::Arc::new(governor),
                });
            }
            None => tracing::warn!("Invalid rate limit settings, rate limiting disabled"),
        }
    }

    let uploads = Router::new()
        .route("/api/gallery", post(gallery::create_image))
        .route("/api/equipment/:id/image", put(equipment::upload_image))
        .layer(DefaultBodyLimit::max(upload_limit));

    let api = Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Users / auth
        .route("/api/users/logout", post(users::logout))
        .route("/api/users/me", get(users::me).put(users::update_me))
        .route("/api/users/admin", get(users::admin_check))
        .route("/api/auth/logout", post(users::logout))
        .route("/api/auth/me", get(users::me).put(users::update_me))
        // Staff
        .route("/api/staff", get(staff::list_staff).post(staff::create_staff))
        .route("/api/staff/admin", get(staff::list_staff_admin))
        .route("/api/staff/self", put(staff::update_self))
        .route("/api/staff/:id/availability", put(staff::set_availability))
        .route("/api/staff/:id", delete(staff::delete_staff))
        // Staff bookings
        .route("/api/bookings", get(bookings::list_bookings).post(bookings::create_booking))
        .route("/api/bookings/:id/status", patch(bookings::update_booking_status))
        // Catering services
        .route(
            "/api/services",
            get(catering_services::list_services).post(catering_services::create_service),
        )
        .route(
            "/api/services/:id",
            put(catering_services::update_service).delete(catering_services::delete_service),
        )
        // Equipment
        .route("/api/equipment", get(equipment::list_equipment).post(equipment::create_equipment))
        .route(
            "/api/equipment/:id",
            put(equipment::update_equipment).delete(equipment::delete_equipment),
        )
        // Equipment bookings
        .route("/api/equipment-bookings", get(equipment_bookings::list_bookings))
        .route(
            "/api/equipment-bookings/:id/status",
            patch(equipment_bookings::update_booking_status),
        )
        .route("/api/equipment-bookings/:id", delete(equipment_bookings::delete_booking))
        // Quotes
        .route("/api/quotes", get(quotes::list_quotes))
        .route("/api/quotes/:id", get(quotes::get_quote).delete(quotes::delete_quote))
        .route("/api/quotes/:id/read", patch(quotes::mark_quote_read))
        .route("/api/quotes/:id/status", patch(quotes::update_quote_status))
        // Messages
        .route("/api/messages", get(messages::list_messages))
        .route("/api/messages/:id", delete(messages::delete_message))
        // Gallery
        .route("/api/gallery", get(gallery::list_images))
        .route("/api/gallery/:id", delete(gallery::delete_image))
        // Reports
        .route("/api/reports/bookings", get(reports::bookings_report))
        .route("/api/reports/quotes", get(reports::quotes_report))
        .route("/api/reports/equipment-usage", get(reports::equipment_usage_report))
        // Real-time
        .route("/ws", get(realtime::websocket))
        .route("/api/notifications/stream", get(realtime::event_stream))
        .route("/api/notifications/counts", get(realtime::counts))
        .merge(public_submissions)
        .merge(uploads)
        .with_state(state);

    let static_uploads = Router::new()
        .nest_service("/uploads", ServeDir::new(&config.uploads.dir))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000"),
        ));

    Router::new()
        .merge(api)
        .merge(static_uploads)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(cors_layer(&config))
}

/// Request span without the query string, which may carry `?token=`
fn request_span(request: &Request<Body>) -> Span {
    tracing::debug_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
    )
}

/// Explicit origins allow credentials; a wildcard list does not
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ];

    if config.cors.allows_any() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .max_age(Duration::from_secs(3600));
    }

    let origins: Vec<HeaderValue> = config
        .cors
        .normalized_origins()
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
