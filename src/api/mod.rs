//! HTTP API module for the Demurrage & Detention Billing Engine.
//!
//! This module provides the REST API endpoints for evaluating container
//! fleets against the loaded tariff book.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ContainerRequest, EvaluateRequest, ShipmentRequest};
pub use response::{ApiError, EvaluationResponse, EvaluationSummary};
pub use state::AppState;
