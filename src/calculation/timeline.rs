//! Billing clock timeline resolution.
//!
//! This module turns a container's milestone dates into the timeline of a
//! single billing clock: when the clock started, when free time runs out,
//! and when (or whether) the clock stopped.
//!
//! ## Clock anchoring
//!
//! - **Demurrage** (imports): vessel arrival starts the clock, empty-container
//!   return stops it.
//! - **Detention** (exports): empty-container pickup starts the clock, full
//!   gate-in stops it.

use chrono::{Duration, NaiveDate};

use crate::models::{ClockType, ContainerSnapshot};

/// The resolved timeline of one billing clock for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimeline {
    /// The date the clock started (day 1 of free time).
    pub clock_start: NaiveDate,
    /// The last day of free time, inclusive.
    pub free_time_expiry: NaiveDate,
    /// The date the clock stopped, or `None` while still running.
    pub effective_end: Option<NaiveDate>,
}

/// Resolves the timeline of the given clock from a container's milestones.
///
/// Returns `None` when the clock's start milestone has not been reported
/// yet (a container mid-voyage has no demurrage clock); that container is
/// simply not chargeable on this clock, which is not an error.
///
/// Free time is counted inclusively from the clock-start day: with a
/// 7-day allowance starting January 1, free time expires January 7 and
/// the first chargeable day is January 8.
///
/// # Arguments
///
/// * `container` - The container whose milestones to read
/// * `clock_type` - Which billing clock to resolve
///
/// # Returns
///
/// The resolved timeline, or `None` when the start milestone is absent.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use demurrage_engine::calculation::resolve_timeline;
/// use demurrage_engine::models::{ClockType, ContainerSnapshot};
///
/// let mut container = ContainerSnapshot::from_raw("MSKU1234567", "40HC", "7 days");
/// container.arrival_date = NaiveDate::from_ymd_opt(2025, 1, 1);
///
/// let timeline = resolve_timeline(&container, ClockType::Demurrage).unwrap();
/// assert_eq!(timeline.free_time_expiry, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
/// assert_eq!(timeline.effective_end, None);
/// ```
pub fn resolve_timeline(
    container: &ContainerSnapshot,
    clock_type: ClockType,
) -> Option<ResolvedTimeline> {
    let (clock_start, effective_end) = match clock_type {
        ClockType::Demurrage => (container.arrival_date?, container.return_date),
        ClockType::Detention => (container.empty_pickup_date?, container.gate_in_date),
    };

    // Day 1 of free time is the clock-start day itself, so a zero-day
    // allowance expires the day before the clock starts.
    let free_time_expiry = clock_start + Duration::days(i64::from(container.free_time_days) - 1);

    Some(ResolvedTimeline {
        clock_start,
        free_time_expiry,
        effective_end,
    })
}

/// Counts the whole days a clock has run past its free-time expiry.
///
/// A stopped clock is measured to its end date; a running clock is
/// measured to `as_of`. Days inside free time clamp to zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use demurrage_engine::calculation::{ResolvedTimeline, overdue_days};
///
/// let timeline = ResolvedTimeline {
///     clock_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     free_time_expiry: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
///     effective_end: None,
/// };
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
/// assert_eq!(overdue_days(&timeline, as_of), 5);
/// ```
pub fn overdue_days(timeline: &ResolvedTimeline, as_of: NaiveDate) -> u32 {
    let measured_to = timeline.effective_end.unwrap_or(as_of);
    let days = (measured_to - timeline.free_time_expiry).num_days();
    days.max(0) as u32
}
