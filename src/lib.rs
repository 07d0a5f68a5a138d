//! Museo - Museum Ticket Booking System
//!
//! A Rust REST server for booking museum tickets: catalog and slot
//! availability, a chat booking wizard, an admin dashboard with
//! statistics and CSV export, over a pluggable document store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod store;
pub mod wizard;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
