//! Response types for the Demurrage & Detention Billing Engine API.
//!
//! This module defines the evaluation response envelope, the fleet-level
//! summary, and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{BillingItem, BillingStatus, ChargeOutcome};

/// Response body for the `/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Unique identifier for this evaluation pass.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// ISO 4217 currency code all amounts are denominated in.
    pub currency: String,
    /// One billing item per (shipment, container, clock type).
    pub items: Vec<BillingItem>,
    /// Fleet-level rollup of the items.
    pub summary: EvaluationSummary,
}

/// Fleet-level rollup across all billing items in one evaluation.
///
/// Money totals sum only fully priced items; items with a missing tariff
/// contribute to `missing_tariffs` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// Total number of billing items produced.
    pub total_items: usize,
    /// Items comfortably inside their free time.
    pub ok: usize,
    /// Items within the at-risk window of their free-time expiry.
    pub at_risk: usize,
    /// Items past their free-time expiry.
    pub overdue: usize,
    /// Items already invoiced.
    pub invoiced: usize,
    /// Items that could not be priced for lack of a tariff.
    pub missing_tariffs: usize,
    /// Sum of cost totals across priced items.
    pub total_cost: Decimal,
    /// Sum of sale totals across priced items.
    pub total_sale: Decimal,
    /// Sum of profit totals across priced items.
    pub total_profit: Decimal,
}

impl EvaluationSummary {
    /// Rolls a list of billing items up into a fleet summary.
    pub fn from_items(items: &[BillingItem]) -> Self {
        let mut summary = EvaluationSummary {
            total_items: items.len(),
            ok: 0,
            at_risk: 0,
            overdue: 0,
            invoiced: 0,
            missing_tariffs: 0,
            total_cost: Decimal::ZERO,
            total_sale: Decimal::ZERO,
            total_profit: Decimal::ZERO,
        };

        for item in items {
            match item.status {
                BillingStatus::Ok => summary.ok += 1,
                BillingStatus::AtRisk => summary.at_risk += 1,
                BillingStatus::Overdue => summary.overdue += 1,
                BillingStatus::Invoiced => summary.invoiced += 1,
            }

            match &item.outcome {
                ChargeOutcome::Priced(breakdown) => {
                    summary.total_cost += breakdown.totals.cost;
                    summary.total_sale += breakdown.totals.sale;
                    summary.total_profit += breakdown.totals.profit;
                }
                ChargeOutcome::MissingTariff(_) => summary.missing_tariffs += 1,
            }
        }

        summary
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTariff { schedule, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid tariff '{}'", schedule),
                    message,
                ),
            },
            EngineError::InvoiceBlocked {
                container_number,
                reason,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVOICE_BLOCKED",
                    format!("Invoicing blocked for container '{}'", container_number),
                    reason,
                ),
            },
            EngineError::LedgerRejected { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "LEDGER_REJECTED",
                    "Ledger entry rejected",
                    message,
                ),
            },
        }
    }
}
