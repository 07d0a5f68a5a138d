//! Booking service: pricing, ticket numbers, degraded-mode listing

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        booking::{parse_visit_date, MuseumRef},
        Booking, BookingFilter, CreateBooking, Museum, PaymentStatus, TimeSlot, UpdateBooking,
        VisitorCategory, VisitorCounts,
    },
    services::availability,
    session::SessionContext,
    store::BookingStore,
};

/// Booking list plus an out-of-band degraded-mode marker. `degraded` is
/// true when the backend was unreachable and the data came from the
/// session cache.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingList {
    pub bookings: Vec<Booking>,
    pub degraded: bool,
}

#[derive(Clone)]
pub struct BookingService {
    store: Arc<dyn BookingStore>,
    museums: super::museums::MuseumService,
    session: SessionContext,
    config: BookingConfig,
}

impl BookingService {
    pub fn new(
        store: Arc<dyn BookingStore>,
        museums: super::museums::MuseumService,
        session: SessionContext,
        config: BookingConfig,
    ) -> Self {
        Self {
            store,
            museums,
            session,
            config,
        }
    }

    /// Sum of count × price over all categories, at current pricing
    pub fn compute_total(museum: &Museum, visitors: &VisitorCounts) -> i64 {
        VisitorCategory::ALL
            .iter()
            .map(|&c| i64::from(visitors.count_for(c)) * museum.pricing.price_for(c))
            .sum()
    }

    /// Time-based ticket number with a random suffix to keep concurrent
    /// bookings from colliding
    pub fn generate_ticket_number(&self) -> String {
        let suffix: u16 = rand::thread_rng().gen_range(0..1000);
        format!(
            "{}{}{:03}",
            self.config.ticket_prefix,
            Utc::now().timestamp_millis(),
            suffix
        )
    }

    /// Validate, price and persist a new booking
    pub async fn create(&self, request: CreateBooking) -> AppResult<Booking> {
        parse_visit_date(&request.date)?;
        let museum = self.museums.get(&request.museum_id)?;

        if !museum.time_slots.contains(&request.time) {
            return Err(AppError::Validation(format!(
                "'{}' is not a time slot of {}",
                request.time, museum.name
            )));
        }
        if request.visitors.total() == 0 {
            return Err(AppError::Validation(
                "At least one visitor is required".to_string(),
            ));
        }

        if self.config.verify_availability {
            self.verify_slot_fits(&museum, &request).await?;
        }

        let booking = Booking {
            id: String::new(),
            ticket_number: self.generate_ticket_number(),
            name: request.name,
            email: request.email,
            museum: MuseumRef::from(&museum),
            date: request.date,
            time: request.time,
            visitors: request.visitors,
            total_amount: Self::compute_total(&museum, &request.visitors),
            payment_status: request.payment_status.unwrap_or(PaymentStatus::Completed),
            created_at: Utc::now(),
        };

        let created = self.store.create(booking).await?;
        self.session.append_museum_booking(&created);
        Ok(created)
    }

    /// Optimistic write-time re-check: reject parties that no longer fit
    async fn verify_slot_fits(&self, museum: &Museum, request: &CreateBooking) -> AppResult<()> {
        let existing = self
            .store
            .list(&BookingFilter {
                date: Some(request.date.clone()),
                museum_id: Some(museum.id.clone()),
            })
            .await?;
        let slots = availability::available_slots(museum, &existing);
        let slot = slots
            .iter()
            .find(|s| s.time == request.time)
            .ok_or_else(|| AppError::Validation(format!("Unknown time slot {}", request.time)))?;
        if slot.available < i64::from(request.visitors.total()) {
            return Err(AppError::Conflict(format!(
                "Only {} spots left at {}",
                slot.available.max(0),
                request.time
            )));
        }
        Ok(())
    }

    /// List bookings, falling back to the session cache in degraded mode.
    /// The fallback keeps the return shape and is reported out of band.
    pub async fn list(&self, filter: &BookingFilter) -> AppResult<BookingList> {
        match self.store.list(filter).await {
            Ok(bookings) => {
                if filter.is_empty() {
                    self.session.cache_admin_bookings(&bookings);
                }
                Ok(BookingList {
                    bookings,
                    degraded: false,
                })
            }
            Err(AppError::BackendUnavailable(msg)) => {
                let cached = self
                    .session
                    .cached_admin_bookings()
                    .ok_or(AppError::BackendUnavailable(msg.clone()))?;
                tracing::warn!("Listing bookings from cache, backend unreachable: {}", msg);
                Ok(BookingList {
                    bookings: cached.into_iter().filter(|b| filter.matches(b)).collect(),
                    degraded: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Per-slot availability for one museum and date
    pub async fn availability(&self, museum_id: &str, date: &str) -> AppResult<(Vec<TimeSlot>, bool)> {
        parse_visit_date(date)?;
        let museum = self.museums.get(museum_id)?;
        let filter = BookingFilter {
            date: Some(date.to_string()),
            museum_id: Some(museum_id.to_string()),
        };
        let (bookings, degraded) = match self.store.list(&filter).await {
            Ok(bookings) => (bookings, false),
            Err(AppError::BackendUnavailable(msg)) => {
                let cached = self
                    .session
                    .cached_museum_bookings()
                    .ok_or(AppError::BackendUnavailable(msg.clone()))?;
                tracing::warn!("Availability from cached bookings: {}", msg);
                (
                    cached.into_iter().filter(|b| filter.matches(b)).collect(),
                    true,
                )
            }
            Err(e) => return Err(e),
        };
        Ok((availability::available_slots(&museum, &bookings), degraded))
    }

    /// Administrative partial update; no fallback for mutations
    pub async fn update(&self, id: &str, patch: &UpdateBooking) -> AppResult<Booking> {
        if let Some(date) = &patch.date {
            parse_visit_date(date)?;
        }
        self.store.update(id, patch).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<String> {
        self.store.delete(id).await
    }
}
