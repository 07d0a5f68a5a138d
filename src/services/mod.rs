//! Business logic services

pub mod availability;
pub mod bookings;
pub mod chat;
pub mod export;
pub mod museums;
pub mod stats;

use std::sync::Arc;

use crate::{config::BookingConfig, session::SessionContext, store::BookingStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub museums: museums::MuseumService,
    pub bookings: bookings::BookingService,
    pub stats: stats::StatsService,
    pub chat: chat::ChatService,
    pub session: SessionContext,
}

impl Services {
    /// Create all services over the given booking store
    pub fn new(
        store: Arc<dyn BookingStore>,
        session: SessionContext,
        booking_config: BookingConfig,
    ) -> Self {
        let museums = museums::MuseumService::new();
        Self {
            bookings: bookings::BookingService::new(
                store.clone(),
                museums.clone(),
                session.clone(),
                booking_config,
            ),
            stats: stats::StatsService::new(store, session.clone()),
            chat: chat::ChatService::new(session.clone()),
            museums,
            session,
        }
    }
}
