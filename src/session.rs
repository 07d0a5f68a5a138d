//! Session context
//!
//! Explicit replacement for the browser-local key-value storage the site
//! used for offline continuity and admin gating. Keys are kept from the
//! original store so exported blobs stay recognizable. Not a security
//! boundary.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::models::Booking;

pub const ADMIN_BOOKINGS_KEY: &str = "adminBookings";
pub const ADMIN_AUTHENTICATED_KEY: &str = "adminAuthenticated";
pub const MUSEUM_BOOKINGS_KEY: &str = "museum_bookings";
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Shared key-value string store with typed accessors, passed explicitly
/// to the components that need it.
#[derive(Clone, Default)]
pub struct SessionContext {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    pub fn set(&self, key: &str, value: String) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value);
        }
    }

    pub fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }

    pub fn admin_authenticated(&self) -> bool {
        self.get(ADMIN_AUTHENTICATED_KEY).as_deref() == Some("true")
    }

    pub fn set_admin_authenticated(&self, authenticated: bool) {
        if authenticated {
            self.set(ADMIN_AUTHENTICATED_KEY, "true".to_string());
        } else {
            self.remove(ADMIN_AUTHENTICATED_KEY);
        }
    }

    pub fn preferred_language(&self) -> String {
        self.get(PREFERRED_LANGUAGE_KEY)
            .unwrap_or_else(|| "en".to_string())
    }

    pub fn set_preferred_language(&self, language: &str) {
        self.set(PREFERRED_LANGUAGE_KEY, language.to_string());
    }

    fn cached_list(&self, key: &str) -> Option<Vec<Booking>> {
        let raw = self.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    fn cache_list(&self, key: &str, bookings: &[Booking]) {
        if let Ok(raw) = serde_json::to_string(bookings) {
            self.set(key, raw);
        }
    }

    /// Last-known full booking list, mirrored for the admin dashboard
    pub fn cached_admin_bookings(&self) -> Option<Vec<Booking>> {
        self.cached_list(ADMIN_BOOKINGS_KEY)
    }

    pub fn cache_admin_bookings(&self, bookings: &[Booking]) {
        self.cache_list(ADMIN_BOOKINGS_KEY, bookings);
    }

    /// Last-known bookings seen by the booking flow, used when the backend
    /// is unreachable during availability checks
    pub fn cached_museum_bookings(&self) -> Option<Vec<Booking>> {
        self.cached_list(MUSEUM_BOOKINGS_KEY)
    }

    pub fn cache_museum_bookings(&self, bookings: &[Booking]) {
        self.cache_list(MUSEUM_BOOKINGS_KEY, bookings);
    }

    pub fn append_museum_booking(&self, booking: &Booking) {
        let mut cached = self.cached_museum_bookings().unwrap_or_default();
        cached.push(booking.clone());
        self.cache_museum_bookings(&cached);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_round_trip() {
        let session = SessionContext::new();
        assert!(!session.admin_authenticated());
        session.set_admin_authenticated(true);
        assert!(session.admin_authenticated());
        session.set_admin_authenticated(false);
        assert!(!session.admin_authenticated());
        assert!(session.get(ADMIN_AUTHENTICATED_KEY).is_none());
    }

    #[test]
    fn preferred_language_defaults_to_english() {
        let session = SessionContext::new();
        assert_eq!(session.preferred_language(), "en");
        session.set_preferred_language("hi");
        assert_eq!(session.preferred_language(), "hi");
    }
}
