//! Tests for booking through the calendar gateway port.

use std::cell::RefCell;

use chrono::{DateTime, FixedOffset, Utc};
use slotwise_engine::{
    book_appointment, BusyInterval, CalendarEvent, CalendarGateway, ClientDetails, Slot,
    SlotwiseError,
};

/// Gateway double that records created events, or fails every call when
/// `available` is false (a disconnected calendar).
struct FakeGateway {
    available: bool,
    created: RefCell<Vec<CalendarEvent>>,
}

impl FakeGateway {
    fn connected() -> Self {
        Self {
            available: true,
            created: RefCell::new(Vec::new()),
        }
    }

    fn disconnected() -> Self {
        Self {
            available: false,
            created: RefCell::new(Vec::new()),
        }
    }

    fn check(&self) -> Result<(), SlotwiseError> {
        if self.available {
            Ok(())
        } else {
            Err(SlotwiseError::CalendarUnavailable(
                "not authenticated, re-authorize".to_string(),
            ))
        }
    }
}

impl CalendarGateway for FakeGateway {
    fn busy_intervals(
        &self,
        _time_min: DateTime<Utc>,
        _time_max: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>, SlotwiseError> {
        self.check()?;
        Ok(Vec::new())
    }

    fn create_event(
        &self,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        summary: &str,
        description: &str,
        _timezone: &str,
    ) -> Result<CalendarEvent, SlotwiseError> {
        self.check()?;
        let event = CalendarEvent {
            id: format!("evt-{}", self.created.borrow().len() + 1),
            summary: summary.to_string(),
            description: description.to_string(),
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        };
        self.created.borrow_mut().push(event.clone());
        Ok(event)
    }

    fn list_events(
        &self,
        _time_min: DateTime<Utc>,
        _time_max: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>, SlotwiseError> {
        self.check()?;
        Ok(self.created.borrow().clone())
    }
}

fn slot() -> Slot {
    Slot {
        start_time: "2026-03-02T09:00:00-05:00".parse().unwrap(),
        end_time: "2026-03-02T10:00:00-05:00".parse().unwrap(),
    }
}

#[test]
fn booking_creates_an_event_with_client_details() {
    let gateway = FakeGateway::connected();
    let client = ClientDetails {
        name: Some("Ada".to_string()),
        details: Some("First consultation".to_string()),
    };

    let event = book_appointment(&gateway, &slot(), &client, "America/New_York").unwrap();

    assert_eq!(event.summary, "Appointment with Ada");
    assert_eq!(event.description, "Details: First consultation");
    assert_eq!(event.start, slot().start_time.with_timezone(&Utc));
    assert_eq!(gateway.list_events(event.start, event.end).unwrap().len(), 1);
}

#[test]
fn booking_without_client_details_uses_defaults() {
    let gateway = FakeGateway::connected();

    let event =
        book_appointment(&gateway, &slot(), &ClientDetails::default(), "UTC").unwrap();

    assert_eq!(event.summary, "Appointment with New Client");
    assert_eq!(event.description, "Details: No details provided.");
}

#[test]
fn disconnected_calendar_surfaces_as_unavailable() {
    let gateway = FakeGateway::disconnected();

    let err =
        book_appointment(&gateway, &slot(), &ClientDetails::default(), "UTC").unwrap_err();
    assert!(matches!(err, SlotwiseError::CalendarUnavailable(_)));

    // The busy query fails the same way — an unreachable calendar must
    // never read as a fully-free one.
    let window_start = Utc::now();
    let err = gateway
        .busy_intervals(window_start, window_start)
        .unwrap_err();
    assert!(matches!(err, SlotwiseError::CalendarUnavailable(_)));
}
