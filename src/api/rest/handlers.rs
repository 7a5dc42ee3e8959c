//! # REST Handlers
//!
//! Axum handlers and the HTTP mapping of application errors.

use crate::api::rest::dto::{
    BasketRequest, ComparisonResponse, ErrorResponse, HealthResponse, PriceSummaryResponse,
};
use crate::application::error::ApplicationError;
use crate::application::services::BasketComparisonService;
use crate::domain::errors::DomainError;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Shared state of the REST API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Comparison use cases.
    pub comparison_service: BasketComparisonService,
}

impl AppState {
    /// Creates the state.
    #[must_use]
    pub fn new(comparison_service: BasketComparisonService) -> Self {
        Self { comparison_service }
    }
}

fn parse_request(
    payload: Result<Json<BasketRequest>, JsonRejection>,
) -> Result<BasketRequest, ApplicationError> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| ApplicationError::validation(rejection.body_text()))
}

/// `POST /api/v1/baskets/compare`
///
/// # Errors
///
/// Returns an error response if the request is malformed, names unknown
/// items or the snapshot cannot be loaded.
pub async fn compare_basket(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BasketRequest>, JsonRejection>,
) -> Result<Json<ComparisonResponse>, ApplicationError> {
    let request = parse_request(payload)?;
    let result = state
        .comparison_service
        .compare(&request.reference_item_ids)
        .await?;
    Ok(Json(result.into()))
}

/// `POST /api/v1/items/price-summary`
///
/// # Errors
///
/// Same conditions as [`compare_basket`].
pub async fn price_summary(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BasketRequest>, JsonRejection>,
) -> Result<Json<PriceSummaryResponse>, ApplicationError> {
    let request = parse_request(payload)?;
    let summaries = state
        .comparison_service
        .summarize_prices(&request.reference_item_ids)
        .await?;
    Ok(Json(PriceSummaryResponse {
        items: summaries.into_iter().map(Into::into).collect(),
    }))
}

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

impl ApplicationError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Domain(DomainError::InvalidInput(_)) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            Self::Domain(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATA_INTEGRITY_ERROR"),
            Self::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT"),
            Self::Infrastructure(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Domain(DomainError::InvalidInput(msg)) | Self::Validation(msg) => msg.clone(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
