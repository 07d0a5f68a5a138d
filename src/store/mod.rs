//! Persistence adapter for the booking collection
//!
//! One `BookingStore` contract with a pluggable backend, selected at
//! construction time: an in-memory store or a remote document-collection
//! API. Callers see the same shapes either way.

pub mod memory;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    config::StoreConfig,
    error::{AppError, AppResult},
    models::{Booking, BookingFilter, UpdateBooking},
};

/// CRUD contract over the booking collection.
///
/// `list` returns bookings ordered by creation time, descending. The
/// adapter performs no retry or backoff; failures surface as
/// `BackendUnavailable` (or `NotFound` for absent ids).
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a booking; the store assigns the id and creation timestamp
    async fn create(&self, booking: Booking) -> AppResult<Booking>;

    /// List bookings matching the filter, newest first
    async fn list(&self, filter: &BookingFilter) -> AppResult<Vec<Booking>>;

    /// The whole collection as raw JSON, for the statistics path
    async fn list_raw(&self) -> AppResult<Value>;

    /// Merge partial fields into an existing booking
    async fn update(&self, id: &str, patch: &UpdateBooking) -> AppResult<Booking>;

    /// Delete a booking, returning its id
    async fn delete(&self, id: &str) -> AppResult<String>;
}

/// Build the configured backend
pub fn from_config(config: &StoreConfig) -> AppResult<Arc<dyn BookingStore>> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(memory::MemoryStore::new())),
        "remote" => Ok(Arc::new(remote::RemoteStore::new(config)?)),
        other => Err(AppError::Validation(format!(
            "Unknown store backend '{}'",
            other
        ))),
    }
}
