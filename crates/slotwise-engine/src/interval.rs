//! Interval algebra shared by the slot engine and gateway consumers.
//!
//! The overlap rule everywhere in this crate is *strict*: two intervals
//! overlap iff `max(starts) < min(ends)`. Touching boundaries (one interval
//! ends exactly when another starts) never count as overlap.

use chrono::{DateTime, TimeZone, Utc};

use crate::calendar::BusyInterval;

/// Strict overlap test between two half-open intervals.
pub fn overlaps<Tz: TimeZone>(
    a_start: DateTime<Tz>,
    a_end: DateTime<Tz>,
    b_start: DateTime<Tz>,
    b_end: DateTime<Tz>,
) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

/// Clip busy intervals to a window, drop the ones entirely outside, then
/// sort and merge overlapping or adjacent intervals.
///
/// Slot computation does not require normalized input (it tests each
/// interval independently); this is for gateway consumers that fetch a
/// raw busy list for a query window.
pub fn normalize(
    intervals: &[BusyInterval],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<BusyInterval> {
    let mut clipped: Vec<BusyInterval> = intervals
        .iter()
        .filter(|b| b.start < window_end && b.end > window_start)
        .map(|b| BusyInterval {
            start: b.start.max(window_start),
            end: b.end.min(window_end),
        })
        .collect();
    clipped.sort_by_key(|b| (b.start, b.end));

    let mut merged: Vec<BusyInterval> = Vec::with_capacity(clipped.len());
    for next in clipped {
        match merged.last_mut() {
            // Busy time separated by nothing is one busy block, so
            // touching intervals collapse along with overlapping ones.
            Some(prev) if next.start <= prev.end => prev.end = prev.end.max(next.end),
            _ => merged.push(next),
        }
    }
    merged
}
