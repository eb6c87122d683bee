//! Tariff models and tier-list validation.
//!
//! This module defines the [`TariffTier`] day-band structure shared by both
//! sides of a charge, the carrier [`CostTariff`] and customer [`SaleTariff`]
//! schedules keyed on it, and [`validate_tiers`], the load-time check that
//! keeps malformed schedules out of the rate engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::container::ContainerClass;
use crate::error::{EngineError, EngineResult};

/// One band of a tiered rate schedule.
///
/// Days are 1-based overdue-day ordinals: day 1 is the first chargeable day
/// after free time expires. `to_day` of `None` marks an open-ended final
/// tier whose rate applies indefinitely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffTier {
    /// First overdue day this tier covers (1-based, inclusive).
    pub from_day: u32,
    /// Last overdue day this tier covers (inclusive); `None` is open-ended.
    pub to_day: Option<u32>,
    /// The per-day rate charged inside this tier.
    pub rate: Decimal,
}

impl TariffTier {
    /// Returns true if the given overdue-day ordinal falls inside this tier.
    pub fn contains(&self, day: u32) -> bool {
        day >= self.from_day && self.to_day.is_none_or(|to| day <= to)
    }
}

/// A carrier's cost schedule: what the carrier charges the company.
///
/// Cost tariffs are filed per carrier and container class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTariff {
    /// The carrier this schedule belongs to.
    pub carrier: String,
    /// The container class this schedule covers.
    pub container_class: ContainerClass,
    /// The tier bands, contiguous from day 1.
    pub tiers: Vec<TariffTier>,
}

impl CostTariff {
    /// Human-readable schedule identifier used in validation errors.
    pub fn schedule_label(&self) -> String {
        format!("{}/{}", self.carrier, self.container_class)
    }

    /// Validates this schedule's tier list.
    pub fn validate(&self) -> EngineResult<()> {
        validate_tiers(&self.schedule_label(), &self.tiers)
    }
}

/// The company's sale schedule: what the customer is billed.
///
/// Sale tariffs are the company's own price list and are filed per
/// container class only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleTariff {
    /// The container class this schedule covers.
    pub container_class: ContainerClass,
    /// The tier bands, contiguous from day 1.
    pub tiers: Vec<TariffTier>,
}

impl SaleTariff {
    /// Human-readable schedule identifier used in validation errors.
    pub fn schedule_label(&self) -> String {
        format!("sale/{}", self.container_class)
    }

    /// Validates this schedule's tier list.
    pub fn validate(&self) -> EngineResult<()> {
        validate_tiers(&self.schedule_label(), &self.tiers)
    }
}

/// Validates a tier list against the schedule invariants.
///
/// A well-formed schedule is non-empty, starts at day 1, has contiguous
/// bands with no gaps or overlaps, never ends a band before it starts, and
/// keeps any open-ended band in the final position.
///
/// # Arguments
///
/// * `schedule` - Identifier reported in the error (e.g. `"Maersk/reefer"`)
/// * `tiers` - The tier list to check
///
/// # Returns
///
/// `Ok(())` for a well-formed schedule, or `EngineError::InvalidTariff`
/// naming the schedule and the violated rule.
pub fn validate_tiers(schedule: &str, tiers: &[TariffTier]) -> EngineResult<()> {
    if tiers.is_empty() {
        return Err(EngineError::InvalidTariff {
            schedule: schedule.to_string(),
            message: "tier list is empty".to_string(),
        });
    }

    if tiers[0].from_day != 1 {
        return Err(EngineError::InvalidTariff {
            schedule: schedule.to_string(),
            message: format!(
                "first tier starts at day {}, expected day 1",
                tiers[0].from_day
            ),
        });
    }

    for (index, tier) in tiers.iter().enumerate() {
        let tier_number = index + 1;

        match tier.to_day {
            Some(to_day) if to_day < tier.from_day => {
                return Err(EngineError::InvalidTariff {
                    schedule: schedule.to_string(),
                    message: format!(
                        "tier {} ends at day {} before it starts at day {}",
                        tier_number, to_day, tier.from_day
                    ),
                });
            }
            None if index != tiers.len() - 1 => {
                return Err(EngineError::InvalidTariff {
                    schedule: schedule.to_string(),
                    message: format!("tier {} is open-ended but not the last tier", tier_number),
                });
            }
            _ => {}
        }

        if index > 0 {
            // Previous tier is closed here: an open-ended tier in any
            // earlier position was already rejected above.
            let previous_to = tiers[index - 1].to_day.unwrap_or(u32::MAX);
            if tier.from_day != previous_to + 1 {
                return Err(EngineError::InvalidTariff {
                    schedule: schedule.to_string(),
                    message: format!(
                        "tier {} starts at day {}, expected day {}",
                        tier_number,
                        tier.from_day,
                        previous_to + 1
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(from_day: u32, to_day: Option<u32>, rate: &str) -> TariffTier {
        TariffTier {
            from_day,
            to_day,
            rate: dec(rate),
        }
    }

    fn assert_invalid(result: EngineResult<()>, expected_message: &str) {
        match result.unwrap_err() {
            EngineError::InvalidTariff { message, .. } => {
                assert_eq!(message, expected_message);
            }
            other => panic!("Expected InvalidTariff, got {:?}", other),
        }
    }

    /// TF-001: well-formed closed + open schedule passes
    #[test]
    fn test_valid_schedule_passes() {
        let tiers = vec![tier(1, Some(5), "50.00"), tier(6, None, "80.00")];
        assert!(validate_tiers("Maersk/dry", &tiers).is_ok());
    }

    /// TF-002: single open-ended tier passes
    #[test]
    fn test_single_open_tier_passes() {
        let tiers = vec![tier(1, None, "50.00")];
        assert!(validate_tiers("Maersk/dry", &tiers).is_ok());
    }

    /// TF-003: single-day band is a valid tier
    #[test]
    fn test_single_day_band_passes() {
        let tiers = vec![tier(1, Some(1), "50.00"), tier(2, None, "80.00")];
        assert!(validate_tiers("Maersk/dry", &tiers).is_ok());
    }

    /// TF-004: empty tier list is rejected
    #[test]
    fn test_empty_tier_list_rejected() {
        assert_invalid(validate_tiers("Maersk/dry", &[]), "tier list is empty");
    }

    /// TF-005: first tier must start at day 1
    #[test]
    fn test_first_tier_not_at_day_1_rejected() {
        let tiers = vec![tier(2, None, "50.00")];
        assert_invalid(
            validate_tiers("Maersk/dry", &tiers),
            "first tier starts at day 2, expected day 1",
        );
    }

    /// TF-006: gap between tiers is rejected
    #[test]
    fn test_gap_between_tiers_rejected() {
        let tiers = vec![tier(1, Some(5), "50.00"), tier(7, None, "80.00")];
        assert_invalid(
            validate_tiers("Maersk/dry", &tiers),
            "tier 2 starts at day 7, expected day 6",
        );
    }

    /// TF-007: overlapping tiers are rejected
    #[test]
    fn test_overlapping_tiers_rejected() {
        let tiers = vec![tier(1, Some(5), "50.00"), tier(5, None, "80.00")];
        assert_invalid(
            validate_tiers("Maersk/dry", &tiers),
            "tier 2 starts at day 5, expected day 6",
        );
    }

    /// TF-008: tier ending before it starts is rejected
    #[test]
    fn test_inverted_tier_rejected() {
        let tiers = vec![tier(1, Some(5), "50.00"), tier(6, Some(4), "80.00")];
        assert_invalid(
            validate_tiers("Maersk/dry", &tiers),
            "tier 2 ends at day 4 before it starts at day 6",
        );
    }

    /// TF-009: open-ended tier before the last position is rejected
    #[test]
    fn test_non_final_open_tier_rejected() {
        let tiers = vec![tier(1, None, "50.00"), tier(6, None, "80.00")];
        assert_invalid(
            validate_tiers("Maersk/dry", &tiers),
            "tier 1 is open-ended but not the last tier",
        );
    }

    /// TF-010: error names the offending schedule
    #[test]
    fn test_error_names_schedule() {
        let cost = CostTariff {
            carrier: "Maersk".to_string(),
            container_class: ContainerClass::Reefer,
            tiers: vec![],
        };
        match cost.validate().unwrap_err() {
            EngineError::InvalidTariff { schedule, .. } => {
                assert_eq!(schedule, "Maersk/reefer");
            }
            other => panic!("Expected InvalidTariff, got {:?}", other),
        }

        let sale = SaleTariff {
            container_class: ContainerClass::Dry,
            tiers: vec![],
        };
        match sale.validate().unwrap_err() {
            EngineError::InvalidTariff { schedule, .. } => {
                assert_eq!(schedule, "sale/dry");
            }
            other => panic!("Expected InvalidTariff, got {:?}", other),
        }
    }

    #[test]
    fn test_tier_contains_closed_band() {
        let t = tier(3, Some(5), "50.00");
        assert!(!t.contains(2));
        assert!(t.contains(3));
        assert!(t.contains(5));
        assert!(!t.contains(6));
    }

    #[test]
    fn test_tier_contains_open_band() {
        let t = tier(6, None, "80.00");
        assert!(!t.contains(5));
        assert!(t.contains(6));
        assert!(t.contains(10_000));
    }

    #[test]
    fn test_tariff_deserialization() {
        let json = r#"{
            "carrier": "Maersk",
            "container_class": "dry",
            "tiers": [
                { "from_day": 1, "to_day": 5, "rate": "50.00" },
                { "from_day": 6, "to_day": null, "rate": "80.00" }
            ]
        }"#;

        let tariff: CostTariff = serde_json::from_str(json).unwrap();
        assert_eq!(tariff.carrier, "Maersk");
        assert_eq!(tariff.tiers.len(), 2);
        assert_eq!(tariff.tiers[0].rate, dec("50.00"));
        assert_eq!(tariff.tiers[1].to_day, None);
        assert!(tariff.validate().is_ok());
    }
}
