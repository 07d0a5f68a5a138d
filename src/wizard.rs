//! Chat booking wizard
//!
//! The booking flow as an explicit finite state machine, decoupled from
//! presentation. Stages advance strictly forward; out-of-order input
//! re-prompts for the current stage without advancing, and nothing is
//! persisted until the payment step.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Booking, CreateBooking, Museum, PaymentStatus, TimeSlot, VisitorCounts},
    services::{bookings::BookingService, museums::MuseumService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Initial,
    Name,
    Museum,
    Date,
    Time,
    Visitors,
    Payment,
    Complete,
}

/// One user action driving the machine
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WizardInput {
    /// Free-text input (the visitor's name)
    Text { text: String },
    SelectMuseum { museum_id: String },
    SelectDate { date: String },
    SelectTime { time: String },
    SetVisitors { visitors: VisitorCounts },
    ConfirmVisitors,
    ConfirmPayment,
}

/// The single system prompt emitted by a transition
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WizardReply {
    pub stage: Stage,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
    /// Set when the same action can simply be retried
    pub retryable: bool,
}

impl WizardReply {
    fn prompt(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
            slots: None,
            total_amount: None,
            booking: None,
            retryable: false,
        }
    }
}

/// Per-session booking flow state. No draft is persisted; a restart
/// loses the flow.
#[derive(Debug, Clone, Default)]
pub struct BookingWizard {
    stage: Option<Stage>,
    name: String,
    museum: Option<Museum>,
    date: Option<String>,
    time: Option<String>,
    visitors: VisitorCounts,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            stage: Some(Stage::Initial),
            ..Default::default()
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage.unwrap_or(Stage::Initial)
    }

    /// Opening transition: emit the welcome prompt and wait for a name
    pub fn greet(&mut self) -> WizardReply {
        self.stage = Some(Stage::Name);
        WizardReply::prompt(
            Stage::Name,
            "Welcome! I can help you book museum tickets. What's your name?",
        )
    }

    /// Drive the machine with one user action
    pub async fn handle(
        &mut self,
        input: WizardInput,
        bookings: &BookingService,
        museums: &MuseumService,
    ) -> AppResult<WizardReply> {
        match (self.stage(), input) {
            (Stage::Initial, _) => Ok(self.greet()),

            (Stage::Name, WizardInput::Text { text }) => {
                let name = text.trim();
                if name.is_empty() {
                    return Ok(WizardReply::prompt(Stage::Name, "What's your name?"));
                }
                self.name = name.to_string();
                self.stage = Some(Stage::Museum);
                Ok(WizardReply::prompt(
                    Stage::Museum,
                    format!(
                        "Nice to meet you, {}! Which museum would you like to visit?",
                        self.name
                    ),
                ))
            }

            (Stage::Museum, WizardInput::SelectMuseum { museum_id }) => {
                let museum = museums.get(&museum_id)?;
                self.museum = Some(museum);
                self.stage = Some(Stage::Date);
                Ok(WizardReply::prompt(
                    Stage::Date,
                    "When would you like to visit? (YYYY-MM-DD)",
                ))
            }

            (Stage::Date, WizardInput::SelectDate { date }) => {
                let museum_id = self.museum_id();
                let (slots, _degraded) = bookings.availability(&museum_id, &date).await?;
                self.date = Some(date);
                self.stage = Some(Stage::Time);
                let mut reply =
                    WizardReply::prompt(Stage::Time, "Please select your preferred time:");
                reply.slots = Some(slots);
                Ok(reply)
            }

            (Stage::Time, WizardInput::SelectTime { time }) => {
                let known = self
                    .museum
                    .as_ref()
                    .map(|m| m.time_slots.contains(&time))
                    .unwrap_or(false);
                if !known {
                    return Ok(WizardReply::prompt(
                        Stage::Time,
                        "That time is not offered. Please select your preferred time:",
                    ));
                }
                self.time = Some(time);
                self.stage = Some(Stage::Visitors);
                Ok(WizardReply::prompt(
                    Stage::Visitors,
                    "Select number of visitors:",
                ))
            }

            (Stage::Visitors, WizardInput::SetVisitors { visitors }) => {
                self.visitors = visitors;
                let mut reply =
                    WizardReply::prompt(Stage::Visitors, "Select number of visitors:");
                reply.total_amount = self.current_total();
                Ok(reply)
            }

            (Stage::Visitors, WizardInput::ConfirmVisitors) => {
                if self.visitors.total() == 0 {
                    // Guard: stay put until someone is actually visiting
                    return Ok(WizardReply::prompt(
                        Stage::Visitors,
                        "Please select at least one visitor",
                    ));
                }
                self.stage = Some(Stage::Payment);
                let total = self.current_total();
                let mut reply = WizardReply::prompt(
                    Stage::Payment,
                    format!(
                        "Total amount: \u{20b9}{}. Confirm payment to complete your booking.",
                        total.unwrap_or(0)
                    ),
                );
                reply.total_amount = total;
                Ok(reply)
            }

            (Stage::Payment, WizardInput::ConfirmPayment) => {
                let request = CreateBooking {
                    name: self.name.clone(),
                    email: None,
                    museum_id: self.museum_id(),
                    date: self.date.clone().unwrap_or_default(),
                    time: self.time.clone().unwrap_or_default(),
                    visitors: self.visitors,
                    payment_status: Some(PaymentStatus::Completed),
                };
                match bookings.create(request).await {
                    Ok(booking) => {
                        self.stage = Some(Stage::Complete);
                        let mut reply = WizardReply::prompt(
                            Stage::Complete,
                            format!(
                                "Payment successful! Your booking is confirmed. Ticket {}.",
                                booking.ticket_number
                            ),
                        );
                        reply.booking = Some(booking);
                        Ok(reply)
                    }
                    Err(e) => {
                        // The machine must not advance on a failed write
                        tracing::warn!("Booking persistence failed at payment step: {}", e);
                        let mut reply = WizardReply::prompt(
                            Stage::Payment,
                            "Sorry, there was an error processing your booking. Please try again.",
                        );
                        reply.retryable = true;
                        Ok(reply)
                    }
                }
            }

            (Stage::Complete, _) => Ok(WizardReply::prompt(
                Stage::Complete,
                "Your booking is already confirmed. Thank you for visiting!",
            )),

            // Out-of-order input: re-prompt for the current stage
            (stage, _) => Ok(WizardReply::prompt(stage, Self::reprompt_message(stage))),
        }
    }

    fn museum_id(&self) -> String {
        self.museum.as_ref().map(|m| m.id.clone()).unwrap_or_default()
    }

    fn current_total(&self) -> Option<i64> {
        self.museum
            .as_ref()
            .map(|m| BookingService::compute_total(m, &self.visitors))
    }

    fn reprompt_message(stage: Stage) -> &'static str {
        match stage {
            Stage::Initial | Stage::Name => "What's your name?",
            Stage::Museum => "Which museum would you like to visit?",
            Stage::Date => "When would you like to visit? (YYYY-MM-DD)",
            Stage::Time => "Please select your preferred time:",
            Stage::Visitors => "Select number of visitors:",
            Stage::Payment => "Confirm payment to complete your booking.",
            Stage::Complete => "Your booking is already confirmed. Thank you for visiting!",
        }
    }
}
