//! HTTP request handlers for the Demurrage & Detention Billing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{EvaluationContext, evaluate};
use crate::models::Shipment;
use crate::repository::InMemoryContainerRepository;

use super::request::EvaluateRequest;
use super::response::{ApiError, EvaluationResponse, EvaluationSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .with_state(state)
}

/// Handler for POST /evaluate endpoint.
///
/// Accepts shipment and container facts and returns one billing item per
/// (container, clock type), priced against the loaded tariff book.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let shipments: Vec<Shipment> = request.shipments.into_iter().map(Into::into).collect();
    let shipments_count = shipments.len();
    let repository = InMemoryContainerRepository::new(shipments);

    let book = state.book();
    let context = EvaluationContext {
        as_of,
        home_country: book.home_country().to_string(),
    };

    // Perform the evaluation
    let start_time = Instant::now();
    let items = evaluate(&repository, book, &context);
    let duration = start_time.elapsed();

    let summary = EvaluationSummary::from_items(&items);

    info!(
        correlation_id = %correlation_id,
        as_of = %as_of,
        shipments_count = shipments_count,
        items_count = items.len(),
        overdue_count = summary.overdue,
        missing_tariffs = summary.missing_tariffs,
        total_sale = %summary.total_sale,
        duration_us = duration.as_micros(),
        "Evaluation completed successfully"
    );

    let response = EvaluationResponse {
        evaluation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency: book.currency().to_string(),
        items,
        summary,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
