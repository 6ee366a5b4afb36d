//! Appointment-slot computation.
//!
//! [`compute_slots`] walks a date range day by day, resolves the weekly
//! rule for each day, and generates fixed-duration slots inside that day's
//! work-hour ranges, rejecting any candidate that strictly overlaps a
//! recurring break or a calendar busy interval.
//!
//! All comparisons happen on absolute (timezone-aware) timestamps: the
//! wall-clock times in rules and breaks are localized to the query
//! timezone before anything is compared. Naive datetimes never cross a
//! comparison operator in this module.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::BusyInterval;
use crate::config::AvailabilityConfig;
use crate::error::{Result, SlotwiseError};
use crate::interval::overlaps;

/// A bookable slot, rendered in the query timezone's UTC offset so that
/// serialized timestamps carry the offset clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
}

/// Response envelope for availability queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotList {
    pub available_slots: Vec<Slot>,
}

/// Compute the bookable slots for `[start_date, end_date]` (inclusive) in
/// `timezone`, given a validated availability config and the calendar's
/// busy intervals for the window.
///
/// The computation is pure and deterministic: identical inputs yield
/// identical output, and slots come back in chronological order by
/// construction (day-major, range-major, cursor-increasing).
///
/// `busy` needs no ordering; each interval is tested independently. A slot
/// is rejected when it *strictly* overlaps a break or busy interval —
/// a slot that starts exactly when a break ends, or ends exactly when a
/// busy interval starts, is accepted.
///
/// # Errors
///
/// Returns `SlotwiseError::InvalidRange` when `start_date > end_date` and
/// `SlotwiseError::InvalidTimezone` when `timezone` is not a recognized
/// IANA identifier; both are checked before any day processing begins.
/// A zero appointment duration (normally caught by config validation)
/// returns `SlotwiseError::InvalidConfig` rather than looping forever.
pub fn compute_slots(
    config: &AvailabilityConfig,
    start_date: NaiveDate,
    end_date: NaiveDate,
    timezone: &str,
    busy: &[BusyInterval],
) -> Result<Vec<Slot>> {
    if start_date > end_date {
        return Err(SlotwiseError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }

    // Validated once, not per-day.
    let tz: Tz = timezone
        .parse()
        .map_err(|_| SlotwiseError::InvalidTimezone(timezone.to_string()))?;

    if config.appointment_duration_minutes == 0 {
        return Err(SlotwiseError::InvalidConfig(
            "appointment_duration_minutes must be positive".to_string(),
        ));
    }
    let duration = Duration::minutes(i64::from(config.appointment_duration_minutes));

    let mut slots = Vec::new();

    for day in start_date.iter_days().take_while(|d| *d <= end_date) {
        let weekday = day.weekday().num_days_from_monday() as u8;
        let rule = match config.rule_for_day(weekday) {
            Some(rule) if rule.is_available => rule,
            _ => continue,
        };

        // Breaks recur on every day; localize them once per day.
        let breaks: Vec<(DateTime<Tz>, DateTime<Tz>)> = config
            .breaks
            .iter()
            .filter_map(|brk| {
                match localize(day, brk.start, &tz).zip(localize(day, brk.end, &tz)) {
                    Some(window) => Some(window),
                    None => {
                        warn!(%day, start = %brk.start, end = %brk.end,
                            "break falls in a DST gap, skipping it for this day");
                        None
                    }
                }
            })
            .collect();

        for range in &rule.work_hours {
            let (work_start, work_end) =
                match localize(day, range.start, &tz).zip(localize(day, range.end, &tz)) {
                    Some(window) => window,
                    None => {
                        warn!(%day, start = %range.start, end = %range.end,
                            "work-hour range falls in a DST gap, skipping it for this day");
                        continue;
                    }
                };

            let mut slot_start = work_start;
            // One cursor advance per iteration, whether or not the
            // candidate is rejected.
            while slot_start + duration <= work_end {
                let slot_end = slot_start + duration;

                let in_break = breaks
                    .iter()
                    .any(|&(bs, be)| overlaps(slot_start, slot_end, bs, be));

                let is_busy = !in_break
                    && busy.iter().any(|b| {
                        overlaps(
                            slot_start.with_timezone(&Utc),
                            slot_end.with_timezone(&Utc),
                            b.start,
                            b.end,
                        )
                    });

                if !in_break && !is_busy {
                    slots.push(Slot {
                        start_time: slot_start.fixed_offset(),
                        end_time: slot_end.fixed_offset(),
                    });
                }

                slot_start = slot_end;
            }
        }
    }

    debug!(slot_count = slots.len(), %start_date, %end_date, timezone, "computed availability");
    Ok(slots)
}

/// Absolute window covering `[start_date 00:00:00, end_date 23:59:59.999999]`
/// in `timezone`, for querying a calendar gateway ahead of slot computation.
///
/// # Errors
///
/// Same range and timezone checks as [`compute_slots`].
pub fn day_window(
    start_date: NaiveDate,
    end_date: NaiveDate,
    timezone: &str,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    if start_date > end_date {
        return Err(SlotwiseError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }
    let tz: Tz = timezone
        .parse()
        .map_err(|_| SlotwiseError::InvalidTimezone(timezone.to_string()))?;

    let time_min = window_edge(start_date, NaiveTime::MIN, &tz);
    let time_max = window_edge(end_date, end_of_day(), &tz);
    Ok((time_min, time_max))
}

/// Localize a wall-clock time on a calendar date to the given timezone.
///
/// Ambiguous local times (DST fall-back) resolve to the earliest instant.
/// Returns `None` when the local time does not exist on that date
/// (spring-forward gap).
fn localize(day: NaiveDate, time: NaiveTime, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&day.and_time(time)).earliest()
}

/// Resolve a window edge to an absolute instant. Midnight can fall inside
/// a DST gap in timezones that shift at 00:00; step past the gap in
/// one-hour increments (gaps are at most a couple of hours).
fn window_edge(day: NaiveDate, time: NaiveTime, tz: &Tz) -> DateTime<Utc> {
    let mut naive = day.and_time(time);
    for _ in 0..4 {
        if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
            return dt.with_timezone(&Utc);
        }
        naive += Duration::hours(1);
    }
    // No real timezone has a four-hour gap; interpret as UTC as a last resort.
    Utc.from_utc_datetime(&naive)
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).expect("valid wall-clock constant")
}
