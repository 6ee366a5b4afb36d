//! # slotwise-engine
//!
//! Deterministic appointment-slot computation: cross-references an owner's
//! weekly availability rules against a connected calendar's busy intervals
//! and produces the ordered list of bookable slots.
//!
//! The engine is a pure function over an immutable config snapshot and a
//! busy-interval list — no shared state, no locking, safe to call
//! concurrently. Persistence and calendar access are ports
//! ([`ConfigStore`], [`CalendarGateway`]) implemented by callers.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use slotwise_engine::{compute_slots, AvailabilityConfig, AvailabilityRule, BreakRule, TimeRange};
//!
//! let nine_to_five = TimeRange {
//!     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
//! };
//! let config = AvailabilityConfig {
//!     rules: vec![AvailabilityRule {
//!         day_of_week: 0, // Monday
//!         is_available: true,
//!         work_hours: vec![nine_to_five],
//!     }],
//!     breaks: vec![BreakRule {
//!         start: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
//!         end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
//!     }],
//!     appointment_duration_minutes: 60,
//! };
//!
//! let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let slots = compute_slots(&config, monday, monday, "UTC", &[]).unwrap();
//!
//! // 09:00..17:00 in hour slots, minus the 12:00 slot eaten by the break.
//! assert_eq!(slots.len(), 7);
//! ```
//!
//! ## Modules
//!
//! - [`slots`] — the computation itself ([`compute_slots`]) and output types
//! - [`config`] — availability configuration model and validation
//! - [`interval`] — strict-overlap predicate and busy-interval normalization
//! - [`calendar`] — calendar gateway port, busy intervals, booking
//! - [`store`] — configuration persistence port and JSON file store
//! - [`error`] — error types

pub mod calendar;
pub mod config;
pub mod error;
pub mod interval;
pub mod slots;
pub mod store;

pub use calendar::{book_appointment, BusyInterval, CalendarEvent, CalendarGateway, ClientDetails};
pub use config::{AvailabilityConfig, AvailabilityRule, BreakRule, TimeRange};
pub use error::SlotwiseError;
pub use slots::{compute_slots, day_window, Slot, SlotList};
pub use store::{ConfigStore, JsonFileStore};
