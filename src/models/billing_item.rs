//! Billing item model and charge breakdown types.
//!
//! This module defines the output side of an evaluation: per-tier
//! [`TierChunk`] lines, their [`ChargeTotals`], the [`ChargeOutcome`] that
//! distinguishes a priced charge from one blocked by a missing tariff, and
//! the [`BillingItem`] a single container/clock produces.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::shipment::ClockType;

/// One proration chunk: a run of overdue days priced at a single
/// cost-rate/sale-rate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierChunk {
    /// Human-readable window label, e.g. `"Day 1 to 3"` or `"Day 6 to …"`.
    pub period_label: String,
    /// Number of overdue days in this chunk.
    pub days: u32,
    /// Per-day carrier rate applied in this chunk.
    pub cost_rate: Decimal,
    /// Per-day customer rate applied in this chunk.
    pub sale_rate: Decimal,
    /// `days × cost_rate`.
    pub cost: Decimal,
    /// `days × sale_rate`.
    pub sale: Decimal,
    /// `sale − cost`.
    pub profit: Decimal,
}

/// Summed money for a charge: what the carrier bills, what the customer
/// is billed, and the margin between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeTotals {
    /// Total carrier cost.
    pub cost: Decimal,
    /// Total customer sale.
    pub sale: Decimal,
    /// `sale − cost`.
    pub profit: Decimal,
}

/// A fully prorated charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// The per-tier chunks, in day order.
    pub chunks: Vec<TierChunk>,
    /// Sums across all chunks.
    pub totals: ChargeTotals,
    /// Overdue days the tier walk could not price. Zero for well-formed
    /// schedules; non-zero only when the walk hit its safety cap.
    pub unrated_days: u32,
}

impl ChargeBreakdown {
    /// Total days covered by priced chunks. Together with `unrated_days`
    /// this always accounts for every overdue day.
    pub fn charged_days(&self) -> u32 {
        self.chunks.iter().map(|chunk| chunk.days).sum()
    }
}

/// Names the tariff side that could not be matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "side", rename_all = "snake_case")]
pub enum MissingTariff {
    /// No cost tariff was filed for this carrier and container class.
    Cost {
        /// The carrier whose schedule is missing.
        carrier: String,
    },
    /// No sale tariff was filed for this container class.
    Sale,
}

/// The pricing outcome for a billing item.
///
/// A missing tariff is a first-class outcome, not an error: the item's
/// timeline and status still populate so the operator sees the exposure
/// even though no money can be attached yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChargeOutcome {
    /// Both tariffs matched and the overdue days were prorated.
    Priced(ChargeBreakdown),
    /// One tariff side is missing; no amounts were computed.
    MissingTariff(MissingTariff),
}

impl ChargeOutcome {
    /// Returns the breakdown when the charge is priced.
    pub fn as_priced(&self) -> Option<&ChargeBreakdown> {
        match self {
            ChargeOutcome::Priced(breakdown) => Some(breakdown),
            ChargeOutcome::MissingTariff(_) => None,
        }
    }
}

/// Risk classification of a billing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    /// Inside free time with no imminent expiry.
    Ok,
    /// Clock still running and free time expires within the warning window.
    AtRisk,
    /// Past free time; overdue days have accrued.
    Overdue,
    /// An invoice has been raised externally; the item is frozen.
    Invoiced,
}

/// The charge produced for one container on one billing clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingItem {
    /// The shipment the container moves under.
    pub shipment_id: String,
    /// The container being charged.
    pub container_number: String,
    /// Which clock this item was measured against.
    pub clock_type: ClockType,
    /// Last day of free time (inclusive).
    pub free_time_expiry: NaiveDate,
    /// The date the clock stopped, or `None` while still running.
    pub effective_end: Option<NaiveDate>,
    /// Whole days past free-time expiry.
    pub overdue_days: u32,
    /// Risk classification.
    pub status: BillingStatus,
    /// Priced breakdown or the missing-tariff marker.
    #[serde(flatten)]
    pub outcome: ChargeOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> ChargeBreakdown {
        ChargeBreakdown {
            chunks: vec![
                TierChunk {
                    period_label: "Day 1 to 3".to_string(),
                    days: 3,
                    cost_rate: dec("50"),
                    sale_rate: dec("70"),
                    cost: dec("150"),
                    sale: dec("210"),
                    profit: dec("60"),
                },
                TierChunk {
                    period_label: "Day 4 to 5".to_string(),
                    days: 2,
                    cost_rate: dec("50"),
                    sale_rate: dec("100"),
                    cost: dec("100"),
                    sale: dec("200"),
                    profit: dec("100"),
                },
            ],
            totals: ChargeTotals {
                cost: dec("250"),
                sale: dec("410"),
                profit: dec("160"),
            },
            unrated_days: 0,
        }
    }

    #[test]
    fn test_charged_days_sums_chunks() {
        let breakdown = sample_breakdown();
        assert_eq!(breakdown.charged_days(), 5);
    }

    #[test]
    fn test_charged_days_empty_breakdown_is_zero() {
        let breakdown = ChargeBreakdown {
            chunks: vec![],
            totals: ChargeTotals::default(),
            unrated_days: 0,
        };
        assert_eq!(breakdown.charged_days(), 0);
        assert_eq!(breakdown.totals.cost, Decimal::ZERO);
    }

    #[test]
    fn test_as_priced_returns_breakdown() {
        let outcome = ChargeOutcome::Priced(sample_breakdown());
        assert!(outcome.as_priced().is_some());

        let missing = ChargeOutcome::MissingTariff(MissingTariff::Sale);
        assert!(missing.as_priced().is_none());
    }

    #[test]
    fn test_billing_status_serialization() {
        assert_eq!(serde_json::to_string(&BillingStatus::Ok).unwrap(), "\"ok\"");
        assert_eq!(
            serde_json::to_string(&BillingStatus::AtRisk).unwrap(),
            "\"at_risk\""
        );
        assert_eq!(
            serde_json::to_string(&BillingStatus::Overdue).unwrap(),
            "\"overdue\""
        );
        assert_eq!(
            serde_json::to_string(&BillingStatus::Invoiced).unwrap(),
            "\"invoiced\""
        );
    }

    #[test]
    fn test_missing_tariff_serializes_with_side_tag() {
        let cost = MissingTariff::Cost {
            carrier: "Maersk".to_string(),
        };
        let value = serde_json::to_value(&cost).unwrap();
        assert_eq!(value["side"], "cost");
        assert_eq!(value["carrier"], "Maersk");

        let sale = MissingTariff::Sale;
        let value = serde_json::to_value(&sale).unwrap();
        assert_eq!(value["side"], "sale");
    }

    #[test]
    fn test_billing_item_json_shape_when_priced() {
        let item = BillingItem {
            shipment_id: "SHP-2025-0042".to_string(),
            container_number: "MSKU1234567".to_string(),
            clock_type: ClockType::Demurrage,
            free_time_expiry: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            effective_end: None,
            overdue_days: 5,
            status: BillingStatus::Overdue,
            outcome: ChargeOutcome::Priced(sample_breakdown()),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["clock_type"], "demurrage");
        assert_eq!(value["status"], "overdue");
        assert_eq!(value["outcome"], "priced");
        assert_eq!(value["chunks"][0]["period_label"], "Day 1 to 3");
        assert_eq!(value["totals"]["profit"], "160");
        assert_eq!(value["unrated_days"], 0);
    }

    #[test]
    fn test_billing_item_json_shape_when_tariff_missing() {
        let item = BillingItem {
            shipment_id: "SHP-2025-0042".to_string(),
            container_number: "MSKU1234567".to_string(),
            clock_type: ClockType::Detention,
            free_time_expiry: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            effective_end: Some(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()),
            overdue_days: 5,
            status: BillingStatus::Overdue,
            outcome: ChargeOutcome::MissingTariff(MissingTariff::Cost {
                carrier: "Maersk".to_string(),
            }),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["outcome"], "missing_tariff");
        assert_eq!(value["side"], "cost");
        assert_eq!(value["carrier"], "Maersk");
        assert_eq!(value["overdue_days"], 5);
        assert_eq!(value["status"], "overdue");
    }

    #[test]
    fn test_billing_item_round_trip() {
        let item = BillingItem {
            shipment_id: "SHP-2025-0042".to_string(),
            container_number: "MSKU1234567".to_string(),
            clock_type: ClockType::Demurrage,
            free_time_expiry: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            effective_end: Some(NaiveDate::from_ymd_opt(2025, 1, 12).unwrap()),
            overdue_days: 5,
            status: BillingStatus::Invoiced,
            outcome: ChargeOutcome::Priced(sample_breakdown()),
        };

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: BillingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
