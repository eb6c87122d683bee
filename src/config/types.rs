//! Configuration types for the tariff book.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the [`TariffBook`]
//! aggregate they load into. Every schedule is validated on construction,
//! so a book that exists cannot hold a malformed tier list.

use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{ContainerClass, CostTariff, SaleTariff};
use crate::repository::TariffRepository;

/// Metadata about the tariff book.
#[derive(Debug, Clone, Deserialize)]
pub struct BookMetadata {
    /// The human-readable name of the book.
    pub name: String,
    /// The version or effective date of the book.
    pub version: String,
    /// The ISO currency code all rates are denominated in.
    pub currency: String,
    /// The operating company's home country; shipments destined here are
    /// imports, everything else is an export.
    pub home_country: String,
}

/// Cost tariffs configuration file structure (`cost.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CostTariffsConfig {
    /// The carrier cost schedules.
    pub tariffs: Vec<CostTariff>,
}

/// Sale tariffs configuration file structure (`sale.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct SaleTariffsConfig {
    /// The customer-facing sale schedules.
    pub tariffs: Vec<SaleTariff>,
}

/// The complete tariff book loaded from YAML files.
///
/// Holds the carrier cost schedules and the company's sale schedules, and
/// serves as the in-memory [`TariffRepository`] behind the evaluation pass.
#[derive(Debug, Clone)]
pub struct TariffBook {
    /// Book metadata.
    metadata: BookMetadata,
    /// Cost schedules, filed per carrier and container class.
    cost_tariffs: Vec<CostTariff>,
    /// Sale schedules, filed per container class.
    sale_tariffs: Vec<SaleTariff>,
}

impl TariffBook {
    /// Creates a new TariffBook from its component parts, validating every
    /// schedule's tier list.
    ///
    /// # Returns
    ///
    /// The book, or `EngineError::InvalidTariff` naming the first schedule
    /// whose tiers violate the invariants.
    pub fn new(
        metadata: BookMetadata,
        cost_tariffs: Vec<CostTariff>,
        sale_tariffs: Vec<SaleTariff>,
    ) -> EngineResult<Self> {
        for tariff in &cost_tariffs {
            tariff.validate()?;
        }
        for tariff in &sale_tariffs {
            tariff.validate()?;
        }

        Ok(Self {
            metadata,
            cost_tariffs,
            sale_tariffs,
        })
    }

    /// Returns the book metadata.
    pub fn metadata(&self) -> &BookMetadata {
        &self.metadata
    }

    /// Returns the currency all rates are denominated in.
    pub fn currency(&self) -> &str {
        &self.metadata.currency
    }

    /// Returns the operating company's home country.
    pub fn home_country(&self) -> &str {
        &self.metadata.home_country
    }

    /// Returns all cost schedules.
    pub fn cost_tariffs(&self) -> &[CostTariff] {
        &self.cost_tariffs
    }

    /// Returns all sale schedules.
    pub fn sale_tariffs(&self) -> &[SaleTariff] {
        &self.sale_tariffs
    }
}

impl TariffRepository for TariffBook {
    fn find_cost_tariff(&self, carrier: &str, class: ContainerClass) -> Option<&CostTariff> {
        self.cost_tariffs
            .iter()
            .find(|t| t.carrier.eq_ignore_ascii_case(carrier) && t.container_class == class)
    }

    fn find_sale_tariff(&self, class: ContainerClass) -> Option<&SaleTariff> {
        self.sale_tariffs.iter().find(|t| t.container_class == class)
    }
}
