//! Request types for the Demurrage & Detention Billing Engine API.
//!
//! This module defines the JSON request structures for the `/evaluate`
//! endpoint. Container fields arrive in raw upstream form (equipment type
//! codes, free-text free-time values) and are normalized during conversion
//! to the domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ContainerSnapshot, Shipment};

/// Request body for the `/evaluate` endpoint.
///
/// Contains the shipment and container facts to evaluate. Tariffs are not
/// part of the request; they come from the tariff book loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The evaluation date. Defaults to the current date when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// The shipments to evaluate.
    pub shipments: Vec<ShipmentRequest>,
}

/// Shipment information in an evaluate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Unique identifier for the shipment.
    pub shipment_id: String,
    /// The customer the shipment belongs to.
    pub customer_id: String,
    /// The ocean carrier moving the shipment.
    pub carrier: String,
    /// The country the shipment is destined for.
    pub destination_country: String,
    /// The containers moving under this shipment.
    #[serde(default)]
    pub containers: Vec<ContainerRequest>,
}

/// Container information in an evaluate request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerRequest {
    /// The container number (e.g. "MSKU1234567").
    pub container_number: String,
    /// The raw equipment type code (e.g. "40RF", "20GP").
    pub type_code: String,
    /// The free-time allowance as free text (e.g. "7 days").
    /// Unparseable or absent values fall back to the default allowance.
    #[serde(default)]
    pub free_time: Option<String>,
    /// Vessel arrival date.
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    /// Empty-container pickup date.
    #[serde(default)]
    pub empty_pickup_date: Option<NaiveDate>,
    /// Empty-container return date.
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    /// Full-container gate-in date.
    #[serde(default)]
    pub gate_in_date: Option<NaiveDate>,
    /// Whether an invoice has already been raised for this container.
    #[serde(default)]
    pub invoiced: bool,
}

impl From<ShipmentRequest> for Shipment {
    fn from(req: ShipmentRequest) -> Self {
        Shipment {
            shipment_id: req.shipment_id,
            customer_id: req.customer_id,
            carrier: req.carrier,
            destination_country: req.destination_country,
            containers: req.containers.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ContainerRequest> for ContainerSnapshot {
    fn from(req: ContainerRequest) -> Self {
        let mut container = ContainerSnapshot::from_raw(
            &req.container_number,
            &req.type_code,
            req.free_time.as_deref().unwrap_or(""),
        );
        container.arrival_date = req.arrival_date;
        container.empty_pickup_date = req.empty_pickup_date;
        container.return_date = req.return_date;
        container.gate_in_date = req.gate_in_date;
        container.invoiced = req.invoiced;
        container
    }
}
