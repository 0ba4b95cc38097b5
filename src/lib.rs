//! Time-of-use electricity tariff engine for EV charging.
//!
//! This crate prices EV charging sessions from a charging location's
//! seasonal rate schedule: it selects the rate band for the month, the
//! peak, mid-peak or off-peak tier for the time of day, and multiplies the
//! tier's rate by the energy added. Around that core it provides schedule
//! validation, a location catalogue, session pricing, history statistics,
//! and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod stats;
pub mod tariff;
