//! Chat session registry for the booking wizard

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    services::{bookings::BookingService, museums::MuseumService},
    session::SessionContext,
    wizard::{BookingWizard, Stage, WizardInput, WizardReply},
};

/// Holds one wizard per chat session. Sessions live in memory only and
/// are keyed by an opaque id handed to the client at creation.
///
/// Each wizard sits behind its own lock; the registry lock is only held
/// to look the session up, never across wizard I/O, so a slow store
/// write in one session cannot stall the others.
#[derive(Clone)]
pub struct ChatService {
    sessions: Arc<RwLock<HashMap<String, Arc<Mutex<BookingWizard>>>>>,
    session: SessionContext,
}

impl ChatService {
    pub fn new(session: SessionContext) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            session,
        }
    }

    /// Open a session and emit the wizard's greeting
    pub async fn create_session(&self, language: Option<String>) -> (String, WizardReply) {
        if let Some(language) = language {
            self.session.set_preferred_language(&language);
        }
        let id = Uuid::new_v4().simple().to_string();
        let mut wizard = BookingWizard::new();
        let reply = wizard.greet();
        self.sessions
            .write()
            .await
            .insert(id.clone(), Arc::new(Mutex::new(wizard)));
        (id, reply)
    }

    async fn lookup(&self, id: &str) -> AppResult<Arc<Mutex<BookingWizard>>> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Chat session {} not found", id)))
    }

    /// Feed one user action to a session's wizard
    pub async fn message(
        &self,
        id: &str,
        input: WizardInput,
        bookings: &BookingService,
        museums: &MuseumService,
    ) -> AppResult<WizardReply> {
        let wizard = self.lookup(id).await?;
        let mut wizard = wizard.lock().await;
        wizard.handle(input, bookings, museums).await
    }

    pub async fn stage(&self, id: &str) -> AppResult<Stage> {
        let wizard = self.lookup(id).await?;
        let stage = wizard.lock().await.stage();
        Ok(stage)
    }
}
