//! Shipment model and related types.
//!
//! This module defines the [`Shipment`] struct grouping containers under a
//! customer and carrier, plus the [`ShipmentDirection`] and [`ClockType`]
//! enums that decide which billing clock applies to a shipment.

use serde::{Deserialize, Serialize};

use super::container::ContainerSnapshot;

/// The direction of a shipment relative to the operating company.
///
/// Direction is derived, never stored: a shipment whose destination country
/// is the company's home country is an import, anything else is an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentDirection {
    /// Goods arriving to the home country.
    Import,
    /// Goods leaving the home country.
    Export,
}

/// The billing clock a container is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockType {
    /// Import clock: vessel arrival until empty-container return.
    Demurrage,
    /// Export clock: empty-container pickup until full gate-in.
    Detention,
}

impl ClockType {
    /// Returns the clock type that applies to a shipment direction.
    ///
    /// Imports accrue demurrage, exports accrue detention.
    pub fn for_direction(direction: ShipmentDirection) -> Self {
        match direction {
            ShipmentDirection::Import => ClockType::Demurrage,
            ShipmentDirection::Export => ClockType::Detention,
        }
    }
}

/// A shipment with its containers, as reported by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Unique identifier for the shipment (e.g. `"SHP-2025-0042"`).
    pub shipment_id: String,
    /// The customer the sale side of the charge is billed to.
    pub customer_id: String,
    /// The carrier the cost side of the charge is owed to.
    pub carrier: String,
    /// The destination country, used to derive direction.
    pub destination_country: String,
    /// The containers moving under this shipment.
    #[serde(default)]
    pub containers: Vec<ContainerSnapshot>,
}

impl Shipment {
    /// Derives the shipment direction against the company's home country.
    ///
    /// The comparison is case-insensitive, so `"Australia"` and
    /// `"AUSTRALIA"` resolve identically.
    ///
    /// # Examples
    ///
    /// ```
    /// use demurrage_engine::models::{Shipment, ShipmentDirection};
    ///
    /// let shipment = Shipment {
    ///     shipment_id: "SHP-2025-0042".to_string(),
    ///     customer_id: "CUST-001".to_string(),
    ///     carrier: "Maersk".to_string(),
    ///     destination_country: "Australia".to_string(),
    ///     containers: vec![],
    /// };
    /// assert_eq!(shipment.direction("australia"), ShipmentDirection::Import);
    /// assert_eq!(shipment.direction("Singapore"), ShipmentDirection::Export);
    /// ```
    pub fn direction(&self, home_country: &str) -> ShipmentDirection {
        if self.destination_country.eq_ignore_ascii_case(home_country) {
            ShipmentDirection::Import
        } else {
            ShipmentDirection::Export
        }
    }

    /// Returns the clock type containers on this shipment accrue against.
    pub fn clock_type(&self, home_country: &str) -> ClockType {
        ClockType::for_direction(self.direction(home_country))
    }
}
