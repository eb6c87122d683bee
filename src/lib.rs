//! Demurrage & Detention Billing Engine for containerized freight
//!
//! This crate provides functionality for measuring demurrage and detention
//! clocks against free-time allowances and pricing overdue container days
//! through tiered carrier cost tariffs and customer sale tariffs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod invoicing;
pub mod models;
pub mod repository;
