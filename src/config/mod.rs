//! Configuration loading and management for the billing engine.
//!
//! This module provides functionality to load the tariff book from YAML
//! files: book metadata, carrier cost schedules, and sale schedules.
//!
//! # Example
//!
//! ```no_run
//! use demurrage_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/tariffs").unwrap();
//! println!("Loaded book: {}", loader.book().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BookMetadata, CostTariffsConfig, SaleTariffsConfig, TariffBook};
