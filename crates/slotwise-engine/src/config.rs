//! Availability configuration model and validation.
//!
//! The configuration is a schema-flexible JSON document: absent `breaks`,
//! absent `is_available`, and absent `appointment_duration_minutes` all
//! deserialize to their defaults, so older documents keep loading.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SlotwiseError};

/// A wall-clock interval within a single day (no date attached).
///
/// `end` must be after `start`; overnight wrap is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A recurring break. Breaks are not day-specific: every day in a queried
/// range gets the same break windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRule {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Per-weekday availability template.
///
/// `day_of_week`: 0 = Monday .. 6 = Sunday. `work_hours` ranges may be
/// disjoint (morning + afternoon) and are processed independently: slot
/// generation restarts at each range's start, remainder time is never
/// carried across ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    pub day_of_week: u8,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub work_hours: Vec<TimeRange>,
}

/// The owner's standing weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    pub rules: Vec<AvailabilityRule>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub breaks: Vec<BreakRule>,
    #[serde(default = "default_duration")]
    pub appointment_duration_minutes: u32,
}

fn default_true() -> bool {
    true
}

fn default_duration() -> u32 {
    60
}

/// Accept both a missing field and an explicit JSON `null` as "no breaks".
fn nullable_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl AvailabilityConfig {
    /// Check the invariants slot computation assumes.
    ///
    /// Rejects a zero appointment duration, a `day_of_week` outside 0..=6,
    /// more than one rule for the same weekday, and any work-hour or break
    /// range that does not end after it starts.
    ///
    /// Runs at store-write time and in explicit validation surfaces;
    /// [`compute_slots`](crate::slots::compute_slots) treats its config as
    /// an already-validated snapshot.
    pub fn validate(&self) -> Result<()> {
        if self.appointment_duration_minutes == 0 {
            return Err(SlotwiseError::InvalidConfig(
                "appointment_duration_minutes must be positive".to_string(),
            ));
        }

        let mut seen_days = [false; 7];
        for rule in &self.rules {
            let day = rule.day_of_week;
            if day > 6 {
                return Err(SlotwiseError::InvalidConfig(format!(
                    "day_of_week {day} is out of range (0 = Monday .. 6 = Sunday)"
                )));
            }
            if seen_days[day as usize] {
                return Err(SlotwiseError::InvalidConfig(format!(
                    "duplicate rule for day_of_week {day}"
                )));
            }
            seen_days[day as usize] = true;

            for range in &rule.work_hours {
                if range.end <= range.start {
                    return Err(SlotwiseError::InvalidConfig(format!(
                        "work-hour range {}..{} on day {day} must end after it starts",
                        range.start, range.end
                    )));
                }
            }
        }

        for brk in &self.breaks {
            if brk.end <= brk.start {
                return Err(SlotwiseError::InvalidConfig(format!(
                    "break {}..{} must end after it starts",
                    brk.start, brk.end
                )));
            }
        }

        Ok(())
    }

    /// Resolve the rule for a weekday (0 = Monday .. 6 = Sunday).
    ///
    /// First match in iteration order wins. Validation rejects duplicate
    /// weekdays, so on a validated config the match is unique; on an
    /// unvalidated snapshot this is still deterministic.
    pub fn rule_for_day(&self, day_of_week: u8) -> Option<&AvailabilityRule> {
        self.rules.iter().find(|r| r.day_of_week == day_of_week)
    }
}
