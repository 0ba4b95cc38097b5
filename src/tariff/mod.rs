//! Tariff resolution for the EV tariff engine.
//!
//! This module turns a location's rate schedule, a local timestamp and an
//! energy amount into a cost: seasonal band selection by month, tier
//! determination by time of day (peak, mid-peak, off-peak), and the final
//! rate multiplication. Everything here is pure and keeps no state between
//! calls.

mod band_selection;
mod resolver;
mod tier;

pub use band_selection::select_rate_band;
pub use resolver::{TariffResolution, resolve_cost, resolve_tariff};
pub use tier::{RateTier, TierMatch, determine_tier};
