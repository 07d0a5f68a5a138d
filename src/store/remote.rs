//! Remote document-collection store
//!
//! Talks to an external document database exposing collection endpoints:
//! `GET/POST {base}/collections/bookings` and
//! `PATCH/DELETE {base}/collections/bookings/{id}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::{
    config::StoreConfig,
    error::{AppError, AppResult},
    models::{Booking, BookingFilter, UpdateBooking},
};

use super::BookingStore;

pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/collections/bookings", self.base_url)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/collections/bookings/{}", self.base_url, id)
    }
}

#[async_trait]
impl BookingStore for RemoteStore {
    async fn create(&self, booking: Booking) -> AppResult<Booking> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&booking)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AppError::BackendUnavailable(format!(
                "create returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    async fn list(&self, filter: &BookingFilter) -> AppResult<Vec<Booking>> {
        let mut request = self.client.get(self.collection_url());
        if let Some(date) = &filter.date {
            request = request.query(&[("date", date)]);
        }
        if let Some(museum_id) = &filter.museum_id {
            request = request.query(&[("museumId", museum_id)]);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AppError::BackendUnavailable(format!(
                "list returned {}",
                response.status()
            )));
        }
        let mut bookings: Vec<Booking> = response.json().await?;
        // The backing store does not guarantee ordering on filtered queries
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn list_raw(&self) -> AppResult<Value> {
        let response = self.client.get(self.collection_url()).send().await?;
        if !response.status().is_success() {
            return Err(AppError::BackendUnavailable(format!(
                "list returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, patch: &UpdateBooking) -> AppResult<Booking> {
        let response = self
            .client
            .patch(self.document_url(id))
            .json(patch)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        if !response.status().is_success() {
            return Err(AppError::BackendUnavailable(format!(
                "update returned {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> AppResult<String> {
        let response = self.client.delete(self.document_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }
        if !response.status().is_success() {
            return Err(AppError::BackendUnavailable(format!(
                "delete returned {}",
                response.status()
            )));
        }
        Ok(id.to_string())
    }
}
