//! Request types for the EV tariff engine API.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ChargingLocation, ChargingSession, CostSource, Trip};
use crate::pricing::SessionDraft;

/// Request body for the `/resolve` endpoint.
///
/// Exactly one of `location_id` (a configured location) or `location` (an
/// inline location with its schedule) must be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Id of a configured location.
    #[serde(default)]
    pub location_id: Option<String>,
    /// An inline location, validated before use.
    #[serde(default)]
    pub location: Option<ChargingLocation>,
    /// Energy to price, in kWh.
    pub energy_used_kwh: Decimal,
    /// When charging took place, in the location's local wall-clock time.
    pub charged_at: NaiveDateTime,
}

/// Request body for the `/sessions/price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSessionRequest {
    /// When charging took place, in local wall-clock time.
    pub date: NaiveDateTime,
    /// A configured location id, or free text for an unsaved place.
    pub location: String,
    /// Energy added in kWh.
    pub energy_added: Decimal,
    /// A cost entered by the user.
    #[serde(default)]
    pub cost: Option<Decimal>,
}

/// A stored charging session as sent for summarising.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecordRequest {
    /// Session id; a new one is assigned when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// When charging took place.
    pub date: NaiveDateTime,
    /// Location id or free text.
    #[serde(default)]
    pub location: String,
    /// Energy added in kWh.
    pub energy_added: Decimal,
    /// Cost of the session.
    pub cost: Decimal,
    /// Where the cost came from.
    #[serde(default = "default_cost_source")]
    pub cost_source: CostSource,
}

fn default_cost_source() -> CostSource {
    CostSource::Manual
}

/// Request body for the `/sessions/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummaryRequest {
    /// The sessions to summarise.
    pub sessions: Vec<SessionRecordRequest>,
}

/// A trip as sent for summarising.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Trip id.
    #[serde(default)]
    pub id: String,
    /// The date of the trip.
    pub date: NaiveDate,
    /// Where the trip started.
    #[serde(default)]
    pub start_location: String,
    /// Where the trip ended.
    #[serde(default)]
    pub end_location: String,
    /// Distance driven in km.
    pub distance: Decimal,
    /// Energy used in kWh.
    pub energy_used: Decimal,
}

/// Request body for the `/trips/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummaryRequest {
    /// The trips to summarise.
    pub trips: Vec<TripRequest>,
}

impl From<PriceSessionRequest> for SessionDraft {
    fn from(req: PriceSessionRequest) -> Self {
        SessionDraft {
            date: req.date,
            location: req.location,
            energy_added: req.energy_added,
            manual_cost: req.cost,
        }
    }
}

impl From<SessionRecordRequest> for ChargingSession {
    fn from(req: SessionRecordRequest) -> Self {
        ChargingSession {
            id: req.id.unwrap_or_else(Uuid::new_v4),
            date: req.date,
            location: req.location,
            energy_added: req.energy_added,
            cost: req.cost,
            cost_source: req.cost_source,
        }
    }
}

impl From<TripRequest> for Trip {
    fn from(req: TripRequest) -> Self {
        Trip {
            id: req.id,
            date: req.date,
            start_location: req.start_location,
            end_location: req.end_location,
            distance: req.distance,
            energy_used: req.energy_used,
        }
    }
}
