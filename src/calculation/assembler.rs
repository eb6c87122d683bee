//! Billing item assembly and the full evaluation pass.
//!
//! This module wires the per-container steps together: resolve the clock
//! timeline, count overdue days, classify status, match tariffs, and
//! prorate. [`evaluate`] runs the pass over every shipment a repository
//! returns. The pass is a pure function of its inputs: callers re-invoke
//! it whenever their data changes and always get a freshly computed list.

use chrono::NaiveDate;

use super::proration::prorate;
use super::status::classify_status;
use super::tariff_match::{TariffMatch, match_tariffs};
use super::timeline::{overdue_days, resolve_timeline};
use crate::models::{BillingItem, BillingStatus, ChargeOutcome, ClockType, ContainerSnapshot, Shipment};
use crate::repository::{ContainerRepository, TariffRepository};

/// The caller-supplied context an evaluation pass runs under.
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    /// The evaluation date; running clocks are measured up to this day.
    pub as_of: NaiveDate,
    /// The operating company's home country, used to derive each
    /// shipment's direction.
    pub home_country: String,
}

/// Builds the billing item for one container on one clock.
///
/// Returns `None` when the clock's start milestone is absent: such a
/// container is not chargeable on this clock yet and produces no item.
///
/// A container flagged as already invoiced still gets its figures
/// recomputed (the engine is stateless) but its status is pinned to
/// [`BillingStatus::Invoiced`]; the immutability of the invoiced amounts
/// is the caller's ledger concern.
///
/// # Arguments
///
/// * `shipment` - The shipment the container moves under
/// * `container` - The container to charge
/// * `clock_type` - The clock the shipment's direction selects
/// * `tariffs` - The tariff repository
/// * `as_of` - The evaluation date
pub fn assemble_billing_item(
    shipment: &Shipment,
    container: &ContainerSnapshot,
    clock_type: ClockType,
    tariffs: &dyn TariffRepository,
    as_of: NaiveDate,
) -> Option<BillingItem> {
    let timeline = resolve_timeline(container, clock_type)?;
    let overdue = overdue_days(&timeline, as_of);

    let status = if container.invoiced {
        BillingStatus::Invoiced
    } else {
        classify_status(&timeline, as_of, overdue)
    };

    let outcome = match match_tariffs(tariffs, &shipment.carrier, container.class) {
        TariffMatch::Matched { cost, sale } => ChargeOutcome::Priced(prorate(overdue, cost, sale)),
        TariffMatch::Missing(missing) => ChargeOutcome::MissingTariff(missing),
    };

    Some(BillingItem {
        shipment_id: shipment.shipment_id.clone(),
        container_number: container.container_number.clone(),
        clock_type,
        free_time_expiry: timeline.free_time_expiry,
        effective_end: timeline.effective_end,
        overdue_days: overdue,
        status,
        outcome,
    })
}

/// Runs the evaluation pass over every shipment in the repository.
///
/// Each shipment's direction (against the context's home country) selects
/// the clock its containers are measured on: imports accrue demurrage,
/// exports detention. Containers whose clock has not started are skipped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use demurrage_engine::calculation::{EvaluationContext, evaluate};
/// use demurrage_engine::config::ConfigLoader;
/// use demurrage_engine::models::{ContainerSnapshot, Shipment};
/// use demurrage_engine::repository::InMemoryContainerRepository;
///
/// # fn main() -> Result<(), demurrage_engine::error::EngineError> {
/// let book = ConfigLoader::load("./config/tariffs")?.into_book();
///
/// let mut container = ContainerSnapshot::from_raw("MSKU1234567", "40HC", "7 days");
/// container.arrival_date = NaiveDate::from_ymd_opt(2025, 1, 1);
///
/// let shipments = InMemoryContainerRepository::new(vec![Shipment {
///     shipment_id: "SHP-2025-0042".to_string(),
///     customer_id: "CUST-001".to_string(),
///     carrier: "Maersk".to_string(),
///     destination_country: "Australia".to_string(),
///     containers: vec![container],
/// }]);
///
/// let context = EvaluationContext {
///     as_of: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
///     home_country: book.home_country().to_string(),
/// };
///
/// let items = evaluate(&shipments, &book, &context);
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].overdue_days, 5);
/// # Ok(())
/// # }
/// ```
pub fn evaluate(
    containers: &dyn ContainerRepository,
    tariffs: &dyn TariffRepository,
    context: &EvaluationContext,
) -> Vec<BillingItem> {
    let mut items = Vec::new();

    for shipment in containers.shipments() {
        let clock_type = shipment.clock_type(&context.home_country);

        for container in &shipment.containers {
            if let Some(item) =
                assemble_billing_item(shipment, container, clock_type, tariffs, context.as_of)
            {
                items.push(item);
            }
        }
    }

    items
}
