//! Core data models for the EV tariff engine.
//!
//! This module contains the schedule types the resolver reads and the
//! history records built from its output.

mod audit;
mod clock_time;
mod location;
mod rate_band;
mod session;

pub use audit::AuditStep;
pub use clock_time::ClockTime;
pub use location::{ChargingLocation, LocationType};
pub use rate_band::{RateBand, ScheduleWarning, TimeWindow, validate_schedule};
pub use session::{ChargingSession, CostSource, Trip};
