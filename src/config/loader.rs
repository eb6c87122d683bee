//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tariff
//! book from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BookMetadata, CostTariffsConfig, SaleTariffsConfig, TariffBook};

/// Loads and provides access to a tariff book.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates every schedule, and exposes the resulting [`TariffBook`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tariffs/
/// ├── book.yaml   # Book metadata (name, version, currency, home country)
/// ├── cost.yaml   # Carrier cost schedules
/// └── sale.yaml   # Customer sale schedules
/// ```
///
/// # Example
///
/// ```no_run
/// use demurrage_engine::config::ConfigLoader;
/// use demurrage_engine::models::ContainerClass;
/// use demurrage_engine::repository::TariffRepository;
///
/// let loader = ConfigLoader::load("./config/tariffs").unwrap();
///
/// let book = loader.book();
/// println!("Book: {} ({})", book.metadata().name, book.currency());
///
/// if let Some(tariff) = book.find_cost_tariff("Maersk", ContainerClass::Dry) {
///     println!("Maersk dry tiers: {}", tariff.tiers.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    book: TariffBook,
}

impl ConfigLoader {
    /// Loads a tariff book from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tariffs")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - Any schedule's tier list violates the invariants (`InvalidTariff`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use demurrage_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tariffs")?;
    /// # Ok::<(), demurrage_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load book.yaml
        let book_path = path.join("book.yaml");
        let metadata = Self::load_yaml::<BookMetadata>(&book_path)?;

        // Load cost.yaml
        let cost_path = path.join("cost.yaml");
        let cost_config = Self::load_yaml::<CostTariffsConfig>(&cost_path)?;

        // Load sale.yaml
        let sale_path = path.join("sale.yaml");
        let sale_config = Self::load_yaml::<SaleTariffsConfig>(&sale_path)?;

        let book = TariffBook::new(metadata, cost_config.tariffs, sale_config.tariffs)?;

        Ok(Self { book })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tariff book.
    pub fn book(&self) -> &TariffBook {
        &self.book
    }

    /// Consumes the loader, returning the tariff book.
    pub fn into_book(self) -> TariffBook {
        self.book
    }
}
