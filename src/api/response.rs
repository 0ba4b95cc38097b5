//! Response types for the EV tariff engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::ScheduleWarning;
use crate::stats::{CostPoint, SessionSummary};
use crate::tariff::TariffResolution;

/// Response body for the `/resolve` endpoint.
///
/// `cost` is `null` when the charge cannot be priced.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    /// The unrounded cost, if the charge could be priced.
    pub cost: Option<Decimal>,
    /// How the cost was resolved.
    pub resolution: Option<TariffResolution>,
    /// Schedule warnings for an inline location. Empty for configured
    /// locations, whose warnings are reported at load time.
    pub warnings: Vec<ScheduleWarning>,
}

/// Response body for the `/sessions/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryResponse {
    /// Totals over all sessions.
    pub summary: SessionSummary,
    /// Costs ordered by date.
    pub series: Vec<CostPoint>,
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

impl ApiErrorResponse {
    /// A 400 response with a `VALIDATION_ERROR` body.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::LocationNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "LOCATION_NOT_FOUND",
                    message,
                    format!("No charging location with id '{}' is configured", id),
                ),
            },
            EngineError::InvalidLocation { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LOCATION",
                    message,
                    "The location data contains invalid information",
                ),
            },
            EngineError::InvalidRateBand { .. } | EngineError::InvalidClockTime { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::with_details(
                        "INVALID_SCHEDULE",
                        message,
                        "The rate schedule contains invalid information",
                    ),
                }
            }
            EngineError::InvalidSession { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SESSION",
                    message,
                    "The session data contains invalid information",
                ),
            },
            EngineError::TotalOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TOTAL_OUT_OF_RANGE",
                    message,
                    "The submitted amounts are too large to total",
                ),
            },
            EngineError::CostUnavailable { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "COST_UNAVAILABLE",
                    message,
                    "No rate applies at this time; provide a cost",
                ),
            },
        }
    }
}
