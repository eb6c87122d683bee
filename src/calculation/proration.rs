//! Tiered proration of overdue days.
//!
//! This module walks a cost schedule and a sale schedule in lockstep,
//! splitting an overdue-day count into chunks wherever either schedule
//! changes rate. Each chunk prices a run of days at one cost-rate/sale-rate
//! pair; the chunk day counts plus any unrated tail always account for
//! every overdue day.
//!
//! ## Walk semantics
//!
//! The walk keeps a 1-based day cursor. Each step selects the tier of each
//! schedule containing the cursor day (clamping to the schedule's last tier
//! once the cursor runs past it, so a shorter schedule's final rate keeps
//! applying), intersects the two tier windows, and consumes days up to the
//! window's end. A window that cannot cover the cursor day stops the walk;
//! the remainder is reported as `unrated_days` instead of looping.

use rust_decimal::Decimal;

use crate::models::{ChargeBreakdown, ChargeTotals, CostTariff, SaleTariff, TariffTier, TierChunk};

/// Selects the tier covering `day`, falling back to the last tier once the
/// day runs past the schedule's end.
fn active_tier(tiers: &[TariffTier], day: u32) -> &TariffTier {
    tiers
        .iter()
        .find(|tier| tier.contains(day))
        .unwrap_or_else(|| &tiers[tiers.len() - 1])
}

/// Renders a tier window as a period label, e.g. `"Day 1 to 3"` or
/// `"Day 6 to …"` for an open-ended window.
fn window_label(from_day: u32, to_day: Option<u32>) -> String {
    match to_day {
        Some(to) => format!("Day {} to {}", from_day, to),
        None => format!("Day {} to …", from_day),
    }
}

/// Prorates an overdue-day count across a cost and a sale schedule.
///
/// Both schedules are walked in lockstep: a chunk boundary falls wherever
/// either schedule's rate changes, so each chunk carries exactly one
/// per-day rate per side. Zero overdue days yield an empty breakdown with
/// zero totals, which is a normal result rather than an error.
///
/// The walk is capped at `cost.tiers.len() + sale.tiers.len()` steps, the
/// most intersection windows two well-formed schedules can produce. Days
/// the walk cannot price — possible only with malformed schedules, such as
/// a finite final tier shorter than the overdue span — are reported in
/// `unrated_days` so the day accounting still balances.
///
/// # Arguments
///
/// * `overdue_days` - Whole days past free-time expiry
/// * `cost` - The carrier's cost schedule
/// * `sale` - The customer-facing sale schedule
///
/// # Returns
///
/// A [`ChargeBreakdown`] whose chunk days plus `unrated_days` sum to
/// `overdue_days`.
///
/// # Examples
///
/// ```
/// use demurrage_engine::calculation::prorate;
/// use demurrage_engine::models::{ContainerClass, CostTariff, SaleTariff, TariffTier};
/// use rust_decimal::Decimal;
///
/// let cost = CostTariff {
///     carrier: "Maersk".to_string(),
///     container_class: ContainerClass::Dry,
///     tiers: vec![
///         TariffTier { from_day: 1, to_day: Some(5), rate: Decimal::from(50) },
///         TariffTier { from_day: 6, to_day: None, rate: Decimal::from(80) },
///     ],
/// };
/// let sale = SaleTariff {
///     container_class: ContainerClass::Dry,
///     tiers: vec![
///         TariffTier { from_day: 1, to_day: Some(3), rate: Decimal::from(70) },
///         TariffTier { from_day: 4, to_day: None, rate: Decimal::from(100) },
///     ],
/// };
///
/// let breakdown = prorate(5, &cost, &sale);
///
/// assert_eq!(breakdown.chunks.len(), 2);
/// assert_eq!(breakdown.chunks[0].period_label, "Day 1 to 3");
/// assert_eq!(breakdown.chunks[1].period_label, "Day 4 to 5");
/// assert_eq!(breakdown.totals.cost, Decimal::from(250));
/// assert_eq!(breakdown.totals.sale, Decimal::from(410));
/// assert_eq!(breakdown.totals.profit, Decimal::from(160));
/// ```
pub fn prorate(overdue_days: u32, cost: &CostTariff, sale: &SaleTariff) -> ChargeBreakdown {
    let mut chunks = Vec::new();
    let mut totals = ChargeTotals::default();

    // A schedule with no tiers cannot price anything; report the whole
    // span unrated rather than panicking on malformed input.
    if cost.tiers.is_empty() || sale.tiers.is_empty() {
        return ChargeBreakdown {
            chunks,
            totals,
            unrated_days: overdue_days,
        };
    }

    let max_steps = cost.tiers.len() + sale.tiers.len();
    let mut day: u32 = 1;
    let mut days_remaining = overdue_days;
    let mut steps = 0;

    while days_remaining > 0 && steps < max_steps {
        steps += 1;

        let cost_tier = active_tier(&cost.tiers, day);
        let sale_tier = active_tier(&sale.tiers, day);

        let window_from = cost_tier.from_day.max(sale_tier.from_day);
        let window_to = match (cost_tier.to_day, sale_tier.to_day) {
            (Some(cost_to), Some(sale_to)) => Some(cost_to.min(sale_to)),
            (Some(cost_to), None) => Some(cost_to),
            (None, Some(sale_to)) => Some(sale_to),
            (None, None) => None,
        };

        // The window cannot cover the cursor day once the cursor has run
        // past a schedule's finite end; nothing further can be priced.
        let chunk_days = match window_to {
            Some(to) if to < day => break,
            Some(to) => days_remaining.min(to - day + 1),
            None => days_remaining,
        };

        let chunk_cost = Decimal::from(chunk_days) * cost_tier.rate;
        let chunk_sale = Decimal::from(chunk_days) * sale_tier.rate;

        chunks.push(TierChunk {
            period_label: window_label(window_from, window_to),
            days: chunk_days,
            cost_rate: cost_tier.rate,
            sale_rate: sale_tier.rate,
            cost: chunk_cost,
            sale: chunk_sale,
            profit: chunk_sale - chunk_cost,
        });

        totals.cost += chunk_cost;
        totals.sale += chunk_sale;
        totals.profit += chunk_sale - chunk_cost;

        days_remaining -= chunk_days;
        day += chunk_days;
    }

    ChargeBreakdown {
        chunks,
        totals,
        unrated_days: days_remaining,
    }
}
