//! Tariff matching for a container's charge.
//!
//! This module resolves the cost and sale schedules a charge prices
//! against. There is no fallback schedule: a missing side is reported as
//! [`MissingTariff`] and blocks proration, because inventing a rate would
//! silently misprice the charge.

use crate::models::{ContainerClass, CostTariff, MissingTariff, SaleTariff};
use crate::repository::TariffRepository;

/// The outcome of tariff matching for one container.
#[derive(Debug)]
pub enum TariffMatch<'a> {
    /// Both sides found; the charge can be prorated.
    Matched {
        /// The carrier's cost schedule.
        cost: &'a CostTariff,
        /// The customer-facing sale schedule.
        sale: &'a SaleTariff,
    },
    /// One side is missing; the charge cannot be priced.
    Missing(MissingTariff),
}

/// Looks up the cost and sale schedules for a carrier and container class.
///
/// The cost side is checked first, so when both sides are absent the
/// missing-cost marker (which names the carrier) is the one reported.
///
/// # Arguments
///
/// * `tariffs` - The tariff repository to search
/// * `carrier` - The carrier owed the cost side
/// * `class` - The container's normalized class
///
/// # Examples
///
/// ```
/// use demurrage_engine::calculation::{TariffMatch, match_tariffs};
/// use demurrage_engine::config::{BookMetadata, TariffBook};
/// use demurrage_engine::models::{ContainerClass, CostTariff, SaleTariff, TariffTier};
/// use rust_decimal::Decimal;
///
/// let book = TariffBook::new(
///     BookMetadata {
///         name: "Book".to_string(),
///         version: "2025-07-01".to_string(),
///         currency: "USD".to_string(),
///         home_country: "Australia".to_string(),
///     },
///     vec![CostTariff {
///         carrier: "Maersk".to_string(),
///         container_class: ContainerClass::Dry,
///         tiers: vec![TariffTier { from_day: 1, to_day: None, rate: Decimal::from(50) }],
///     }],
///     vec![SaleTariff {
///         container_class: ContainerClass::Dry,
///         tiers: vec![TariffTier { from_day: 1, to_day: None, rate: Decimal::from(70) }],
///     }],
/// )
/// .unwrap();
///
/// assert!(matches!(
///     match_tariffs(&book, "maersk", ContainerClass::Dry),
///     TariffMatch::Matched { .. }
/// ));
/// ```
pub fn match_tariffs<'a>(
    tariffs: &'a dyn TariffRepository,
    carrier: &str,
    class: ContainerClass,
) -> TariffMatch<'a> {
    let Some(cost) = tariffs.find_cost_tariff(carrier, class) else {
        return TariffMatch::Missing(MissingTariff::Cost {
            carrier: carrier.to_string(),
        });
    };

    let Some(sale) = tariffs.find_sale_tariff(class) else {
        return TariffMatch::Missing(MissingTariff::Sale);
    };

    TariffMatch::Matched { cost, sale }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BookMetadata, TariffBook};
    use crate::models::TariffTier;
    use rust_decimal::Decimal;

    fn open_tier(rate: u32) -> Vec<TariffTier> {
        vec![TariffTier {
            from_day: 1,
            to_day: None,
            rate: Decimal::from(rate),
        }]
    }

    fn make_book(cost: Vec<CostTariff>, sale: Vec<SaleTariff>) -> TariffBook {
        TariffBook::new(
            BookMetadata {
                name: "Test book".to_string(),
                version: "2025-07-01".to_string(),
                currency: "USD".to_string(),
                home_country: "Australia".to_string(),
            },
            cost,
            sale,
        )
        .unwrap()
    }

    fn full_book() -> TariffBook {
        make_book(
            vec![CostTariff {
                carrier: "Maersk".to_string(),
                container_class: ContainerClass::Dry,
                tiers: open_tier(50),
            }],
            vec![SaleTariff {
                container_class: ContainerClass::Dry,
                tiers: open_tier(70),
            }],
        )
    }

    // ==========================================================================
    // TM-001: both sides found
    // ==========================================================================
    #[test]
    fn test_tm_001_both_sides_found() {
        let book = full_book();

        match match_tariffs(&book, "Maersk", ContainerClass::Dry) {
            TariffMatch::Matched { cost, sale } => {
                assert_eq!(cost.carrier, "Maersk");
                assert_eq!(sale.container_class, ContainerClass::Dry);
            }
            TariffMatch::Missing(missing) => panic!("Expected match, got {:?}", missing),
        }
    }

    // ==========================================================================
    // TM-002: carrier matching is case-insensitive
    // ==========================================================================
    #[test]
    fn test_tm_002_carrier_match_is_case_insensitive() {
        let book = full_book();

        assert!(matches!(
            match_tariffs(&book, "MAERSK", ContainerClass::Dry),
            TariffMatch::Matched { .. }
        ));
        assert!(matches!(
            match_tariffs(&book, "maersk", ContainerClass::Dry),
            TariffMatch::Matched { .. }
        ));
    }

    // ==========================================================================
    // TM-003: unknown carrier reports the missing cost side with its name
    // ==========================================================================
    #[test]
    fn test_tm_003_unknown_carrier_reports_missing_cost() {
        let book = full_book();

        match match_tariffs(&book, "Hapag-Lloyd", ContainerClass::Dry) {
            TariffMatch::Missing(MissingTariff::Cost { carrier }) => {
                assert_eq!(carrier, "Hapag-Lloyd");
            }
            other => panic!("Expected missing cost tariff, got {:?}", other),
        }
    }

    // ==========================================================================
    // TM-004: class without a sale schedule reports the missing sale side
    // ==========================================================================
    #[test]
    fn test_tm_004_missing_sale_schedule_reported() {
        let book = make_book(
            vec![CostTariff {
                carrier: "Maersk".to_string(),
                container_class: ContainerClass::Reefer,
                tiers: open_tier(90),
            }],
            vec![],
        );

        assert!(matches!(
            match_tariffs(&book, "Maersk", ContainerClass::Reefer),
            TariffMatch::Missing(MissingTariff::Sale)
        ));
    }

    // ==========================================================================
    // TM-005: cost side reported first when both sides are missing
    // ==========================================================================
    #[test]
    fn test_tm_005_cost_side_reported_first_when_both_missing() {
        let book = make_book(vec![], vec![]);

        match match_tariffs(&book, "ONE", ContainerClass::Special) {
            TariffMatch::Missing(MissingTariff::Cost { carrier }) => {
                assert_eq!(carrier, "ONE");
            }
            other => panic!("Expected missing cost tariff, got {:?}", other),
        }
    }

    // ==========================================================================
    // TM-006: class mismatch on the cost side is a missing cost tariff
    // ==========================================================================
    #[test]
    fn test_tm_006_class_mismatch_is_missing_cost() {
        let book = full_book();

        assert!(matches!(
            match_tariffs(&book, "Maersk", ContainerClass::Reefer),
            TariffMatch::Missing(MissingTariff::Cost { .. })
        ));
    }
}
