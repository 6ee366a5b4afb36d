//! Calendar gateway port and appointment booking.
//!
//! The engine never talks to a calendar provider directly; it consumes
//! busy intervals through [`CalendarGateway`] and hands confirmed slots
//! back through it. Token lifecycle, retries, and transport belong to
//! gateway implementations.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slots::Slot;

/// An externally-committed absolute time interval from a connected calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// An event on the connected calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Port to the owner's connected calendar.
///
/// Implementations map transport and auth failures to
/// [`SlotwiseError::CalendarUnavailable`](crate::SlotwiseError::CalendarUnavailable).
/// An unavailable calendar must surface as an error, never as an empty
/// busy list — a fully-free calendar and an unreachable one are different
/// answers.
pub trait CalendarGateway {
    /// Busy intervals covering at least `[time_min, time_max]`.
    ///
    /// No ordering is guaranteed; callers that want a clipped, merged view
    /// pass the result through [`interval::normalize`](crate::interval::normalize).
    fn busy_intervals(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>>;

    /// Create an event on the calendar. `timezone` is the IANA identifier
    /// the provider should attach to the event times.
    fn create_event(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        summary: &str,
        description: &str,
        timezone: &str,
    ) -> Result<CalendarEvent>;

    /// Events within `[time_min, time_max]`.
    fn list_events(
        &self,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>>;
}

/// Details supplied by the client booking a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Book a chosen slot by creating a calendar event through the gateway.
///
/// The slot is taken as computed by
/// [`compute_slots`](crate::slots::compute_slots); no re-validation happens
/// here — the engine's output is the contract booking depends on.
pub fn book_appointment<G: CalendarGateway>(
    gateway: &G,
    slot: &Slot,
    client: &ClientDetails,
    timezone: &str,
) -> Result<CalendarEvent> {
    let name = client.name.as_deref().unwrap_or("New Client");
    let details = client.details.as_deref().unwrap_or("No details provided.");
    let summary = format!("Appointment with {name}");
    let description = format!("Details: {details}");
    gateway.create_event(slot.start_time, slot.end_time, &summary, &description, timezone)
}
