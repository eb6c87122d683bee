//! Billing status classification.
//!
//! This module classifies a resolved timeline into the operator-facing
//! risk buckets: `ok`, `at_risk`, and `overdue`. The `invoiced` status is
//! an external override applied by the assembler when the upstream system
//! reports an invoice already raised; the classifier never produces it.

use chrono::NaiveDate;

use super::timeline::ResolvedTimeline;
use crate::models::BillingStatus;

/// How close to free-time expiry a still-running clock is flagged `at_risk`.
pub const AT_RISK_WINDOW_DAYS: i64 = 3;

/// Classifies a timeline's billing status as of the evaluation date.
///
/// - `Overdue` once any overdue days have accrued.
/// - `AtRisk` when the clock is still running, nothing is overdue yet, and
///   free time expires within [`AT_RISK_WINDOW_DAYS`] days (the expiry day
///   itself counts). A stopped clock is never at risk: the container came
///   back, there is nothing left to warn about.
/// - `Ok` otherwise.
///
/// # Arguments
///
/// * `timeline` - The resolved clock timeline
/// * `as_of` - The evaluation date
/// * `overdue_days` - Precomputed overdue days for the same `as_of`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use demurrage_engine::calculation::{ResolvedTimeline, classify_status};
/// use demurrage_engine::models::BillingStatus;
///
/// let timeline = ResolvedTimeline {
///     clock_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     free_time_expiry: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
///     effective_end: None,
/// };
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(classify_status(&timeline, as_of, 0), BillingStatus::AtRisk);
/// ```
pub fn classify_status(
    timeline: &ResolvedTimeline,
    as_of: NaiveDate,
    overdue_days: u32,
) -> BillingStatus {
    if overdue_days > 0 {
        return BillingStatus::Overdue;
    }

    if timeline.effective_end.is_none() {
        let days_until_expiry = (timeline.free_time_expiry - as_of).num_days();
        if days_until_expiry <= AT_RISK_WINDOW_DAYS {
            return BillingStatus::AtRisk;
        }
    }

    BillingStatus::Ok
}
