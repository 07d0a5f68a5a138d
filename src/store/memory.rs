//! In-memory booking store

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Booking, BookingFilter, UpdateBooking},
};

use super::BookingStore;

/// Process-local booking collection. Mirrors the remote store's contract
/// so callers cannot tell the backends apart.
#[derive(Default)]
pub struct MemoryStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn create(&self, mut booking: Booking) -> AppResult<Booking> {
        booking.id = format!("booking_{}", Uuid::new_v4().simple());
        booking.created_at = Utc::now();
        let mut bookings = self.bookings.write().await;
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list(&self, filter: &BookingFilter) -> AppResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        let mut matched: Vec<Booking> = bookings
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn list_raw(&self) -> AppResult<Value> {
        let bookings = self.list(&BookingFilter::default()).await?;
        serde_json::to_value(bookings).map_err(|e| AppError::Internal(e.to_string()))
    }

    async fn update(&self, id: &str, patch: &UpdateBooking) -> AppResult<Booking> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;
        patch.apply(booking);
        Ok(booking.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<String> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        Ok(id.to_string())
    }
}
