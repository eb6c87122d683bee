//! Repository traits decoupling the engine from data ownership.
//!
//! The engine is a pure function of whatever these traits return: callers
//! own the shipment registry and the tariff book and re-invoke the
//! evaluation pass whenever their data changes. The in-memory
//! implementations here back the HTTP layer and the test suites; the
//! tariff-side implementation lives on [`crate::config::TariffBook`].

use crate::models::{ContainerClass, CostTariff, SaleTariff, Shipment};

/// Source of the shipments (and their containers) to evaluate.
pub trait ContainerRepository {
    /// Every shipment currently known to the caller.
    fn shipments(&self) -> &[Shipment];
}

/// Source of cost and sale rate schedules.
pub trait TariffRepository {
    /// Finds the cost schedule filed for a carrier and container class.
    /// Carrier matching is case-insensitive; class matching is exact.
    fn find_cost_tariff(&self, carrier: &str, class: ContainerClass) -> Option<&CostTariff>;

    /// Finds the sale schedule filed for a container class.
    fn find_sale_tariff(&self, class: ContainerClass) -> Option<&SaleTariff>;
}

/// A [`ContainerRepository`] over an owned list of shipments.
///
/// This is the implementation behind the HTTP evaluation endpoint, which
/// receives the shipment registry in the request body.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContainerRepository {
    shipments: Vec<Shipment>,
}

impl InMemoryContainerRepository {
    /// Wraps a list of shipments.
    pub fn new(shipments: Vec<Shipment>) -> Self {
        InMemoryContainerRepository { shipments }
    }
}

impl ContainerRepository for InMemoryContainerRepository {
    fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }
}
