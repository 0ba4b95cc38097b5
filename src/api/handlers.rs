//! HTTP request handlers for the EV tariff engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{ChargingLocation, ChargingSession, Trip};
use crate::pricing::{SessionDraft, price_session};
use crate::stats::{cost_series, summarize_sessions, summarize_trips};
use crate::tariff::resolve_tariff;

use super::request::{
    PriceSessionRequest, ResolveRequest, SessionSummaryRequest, TripSummaryRequest,
};
use super::response::{ApiError, ApiErrorResponse, ResolveResponse, SessionSummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/locations", get(list_locations_handler))
        .route("/locations/:id", get(get_location_handler))
        .route("/resolve", post(resolve_handler))
        .route("/sessions/price", post(price_session_handler))
        .route("/sessions/summary", post(session_summary_handler))
        .route("/trips/summary", post(trip_summary_handler))
        .with_state(state)
}

/// Handler for GET /locations.
async fn list_locations_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().locations())
}

/// Handler for GET /locations/:id.
async fn get_location_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.config().get_location(&id) {
        Ok(location) => json_response(StatusCode::OK, location),
        Err(err) => error_response(err.into()),
    }
}

/// Handler for POST /resolve.
///
/// An unpriceable charge is not an error: the response is 200 with a null
/// cost.
async fn resolve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing resolve request");

    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let inline;
    let mut warnings = Vec::new();
    let location: &ChargingLocation = match (&request.location_id, request.location) {
        (Some(id), None) => match state.config().get_location(id) {
            Ok(location) => location,
            Err(err) => {
                warn!(correlation_id = %correlation_id, location_id = %id, "Location not found");
                return error_response(err.into());
            }
        },
        (None, Some(location)) => {
            match location.validate() {
                Ok(schedule_warnings) => warnings = schedule_warnings,
                Err(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "Invalid inline location");
                    return error_response(err.into());
                }
            }
            for warning in &warnings {
                warn!(
                    correlation_id = %correlation_id,
                    band_index = warning.band_index,
                    code = %warning.code,
                    "{}",
                    warning.message
                );
            }
            inline = location;
            &inline
        }
        _ => {
            return error_response(ApiErrorResponse::validation(
                "exactly one of location_id or location is required",
            ));
        }
    };

    let start_time = Instant::now();
    let resolution = resolve_tariff(location, request.energy_used_kwh, request.charged_at);

    info!(
        correlation_id = %correlation_id,
        location_id = %location.id,
        priced = resolution.is_some(),
        duration_us = start_time.elapsed().as_micros(),
        "Resolve completed"
    );

    json_response(
        StatusCode::OK,
        &ResolveResponse {
            cost: resolution.as_ref().map(|r| r.cost),
            resolution,
            warnings,
        },
    )
}

/// Handler for POST /sessions/price.
///
/// A `location` that matches a configured id is priced from its schedule;
/// anything else is treated as free text and needs a manual cost.
async fn price_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<PriceSessionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing session pricing request");

    let draft: SessionDraft = match parse_json(correlation_id, payload) {
        Ok(request) => request.into(),
        Err(response) => return response,
    };

    let location = state.config().get_location(&draft.location).ok();
    match price_session(location, &draft) {
        Ok(priced) => {
            info!(
                correlation_id = %correlation_id,
                session_id = %priced.session.id,
                cost = %priced.session.cost,
                "Session priced"
            );
            json_response(StatusCode::OK, &priced)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Session pricing failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /sessions/summary.
async fn session_summary_handler(
    payload: Result<Json<SessionSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let sessions: Vec<ChargingSession> = match parse_json(correlation_id, payload) {
        Ok(request) => request.sessions.into_iter().map(Into::into).collect(),
        Err(response) => return response,
    };

    match summarize_sessions(&sessions) {
        Ok(summary) => json_response(
            StatusCode::OK,
            &SessionSummaryResponse {
                summary,
                series: cost_series(&sessions),
            },
        ),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Session summary failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /trips/summary.
async fn trip_summary_handler(payload: Result<Json<TripSummaryRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let trips: Vec<Trip> = match parse_json(correlation_id, payload) {
        Ok(request) => request.trips.into_iter().map(Into::into).collect(),
        Err(response) => return response,
    };

    match summarize_trips(&trips) {
        Ok(summary) => json_response(StatusCode::OK, &summary),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Trip summary failed");
            error_response(err.into())
        }
    }
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
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

    Err(error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }))
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}
