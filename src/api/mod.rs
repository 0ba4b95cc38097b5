//! HTTP API module for the EV tariff engine.
//!
//! This module provides the REST API endpoints for looking up charging
//! locations, resolving charge costs, pricing sessions, and summarising
//! charging and trip history.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    PriceSessionRequest, ResolveRequest, SessionRecordRequest, SessionSummaryRequest,
    TripRequest, TripSummaryRequest,
};
pub use response::{ApiError, ApiErrorResponse, ResolveResponse, SessionSummaryResponse};
pub use state::AppState;
