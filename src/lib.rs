//! Hiro Catering & Equipment back-office
//!
//! REST JSON API behind the Hiro public site and admin dashboard: staff
//! bookings, equipment rentals, quote requests, contact messages, gallery
//! uploads, reports and live dashboard notifications.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
