//! Charging session and trip records.
//!
//! These are the history records the surrounding application stores. The
//! engine produces priced sessions and summarises both kinds, but never
//! persists them.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a session's cost came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSource {
    /// Computed from the location's rate schedule.
    Resolved,
    /// Entered by the user.
    Manual,
}

/// A single charging session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargingSession {
    /// Unique identifier for the session.
    pub id: Uuid,
    /// When charging took place, in local wall-clock time.
    pub date: NaiveDateTime,
    /// Location id, or free text when the place is not saved.
    pub location: String,
    /// Energy added in kWh.
    pub energy_added: Decimal,
    /// Cost of the session, rounded to cents.
    pub cost: Decimal,
    /// Whether the cost was resolved or entered manually.
    pub cost_source: CostSource,
}

/// A single trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip.
    pub id: String,
    /// The date of the trip.
    pub date: NaiveDate,
    /// Where the trip started.
    pub start_location: String,
    /// Where the trip ended.
    pub end_location: String,
    /// Distance driven in km.
    pub distance: Decimal,
    /// Energy used in kWh.
    pub energy_used: Decimal,
}
