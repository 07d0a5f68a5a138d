//! Museum catalog service

use std::sync::{Arc, RwLock};

use crate::{
    error::{AppError, AppResult},
    models::museum::{seed_museums, Museum, UpdateMuseum},
};

/// In-process museum catalog, seeded once at startup. Museums change
/// rarely (capacity/pricing edits), so the registry lives in memory.
#[derive(Clone)]
pub struct MuseumService {
    museums: Arc<RwLock<Vec<Museum>>>,
}

impl Default for MuseumService {
    fn default() -> Self {
        Self::new()
    }
}

impl MuseumService {
    pub fn new() -> Self {
        Self {
            museums: Arc::new(RwLock::new(seed_museums())),
        }
    }

    #[cfg(test)]
    pub fn with_museums(museums: Vec<Museum>) -> Self {
        Self {
            museums: Arc::new(RwLock::new(museums)),
        }
    }

    pub fn list(&self) -> Vec<Museum> {
        self.museums.read().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn by_state(&self, state: &str) -> Vec<Museum> {
        self.list()
            .into_iter()
            .filter(|m| m.state.eq_ignore_ascii_case(state))
            .collect()
    }

    pub fn get(&self, id: &str) -> AppResult<Museum> {
        self.list()
            .into_iter()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Museum {} not found", id)))
    }

    /// Apply a partial update (capacity/pricing edits, mostly)
    pub fn update(&self, id: &str, patch: &UpdateMuseum) -> AppResult<Museum> {
        let mut museums = self
            .museums
            .write()
            .map_err(|_| AppError::Internal("Museum registry lock poisoned".to_string()))?;
        let museum = museums
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Museum {} not found", id)))?;

        if let Some(name) = &patch.name {
            museum.name = name.clone();
        }
        if let Some(description) = &patch.description {
            museum.description = description.clone();
        }
        if let Some(opening_hours) = &patch.opening_hours {
            museum.opening_hours = opening_hours.clone();
        }
        if let Some(time_slots) = &patch.time_slots {
            museum.time_slots = time_slots.clone();
        }
        if let Some(pricing) = patch.pricing {
            museum.pricing = pricing;
        }
        if let Some(capacity) = patch.capacity {
            museum.capacity = capacity;
        }
        Ok(museum.clone())
    }

    /// Advisory headcount update
    pub fn set_current_visitors(&self, id: &str, count: u32) -> AppResult<Museum> {
        let mut museums = self
            .museums
            .write()
            .map_err(|_| AppError::Internal("Museum registry lock poisoned".to_string()))?;
        let museum = museums
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Museum {} not found", id)))?;
        museum.current_visitors = count;
        Ok(museum.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pricing;

    #[test]
    fn seeded_catalog_is_listed() {
        let service = MuseumService::new();
        assert!(!service.list().is_empty());
    }

    #[test]
    fn unknown_museum_is_not_found() {
        let service = MuseumService::new();
        assert!(matches!(
            service.get("no-such-museum"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn update_edits_capacity_and_pricing() {
        let service = MuseumService::new();
        let id = service.list()[0].id.clone();
        let updated = service
            .update(
                &id,
                &UpdateMuseum {
                    capacity: Some(42),
                    pricing: Some(Pricing {
                        adult: 1,
                        child: 2,
                        senior: 3,
                        tourist: 4,
                    }),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.capacity, 42);
        assert_eq!(updated.pricing.adult, 1);
        assert_eq!(service.get(&id).unwrap().capacity, 42);
    }

    #[test]
    fn by_state_filters_case_insensitively() {
        let service = MuseumService::new();
        let delhi = service.by_state("delhi");
        assert!(delhi.iter().all(|m| m.state == "Delhi"));
        assert!(!delhi.is_empty());
    }
}
