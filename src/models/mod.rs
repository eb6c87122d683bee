//! Core data models for the demurrage and detention billing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod billing_item;
mod container;
mod shipment;
mod tariff;

pub use billing_item::{
    BillingItem, BillingStatus, ChargeBreakdown, ChargeOutcome, ChargeTotals, MissingTariff,
    TierChunk,
};
pub use container::{ContainerClass, ContainerSnapshot, DEFAULT_FREE_TIME_DAYS, parse_free_time};
pub use shipment::{ClockType, Shipment, ShipmentDirection};
pub use tariff::{CostTariff, SaleTariff, TariffTier, validate_tiers};
