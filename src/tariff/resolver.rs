//! Cost resolution for a charge at a location.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{AuditStep, ChargingLocation, ClockTime};

use super::{RateTier, determine_tier, select_rate_band};

/// The outcome of pricing a charge, with the decisions that led to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffResolution {
    /// Position of the selected band in the location's schedule.
    pub band_index: usize,
    /// The tier that applied.
    pub tier: RateTier,
    /// The rate per kWh that applied.
    pub rate: Decimal,
    /// The energy priced, in kWh.
    pub energy_used_kwh: Decimal,
    /// `rate * energy_used_kwh`, unrounded.
    pub cost: Decimal,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the cost of charging `energy_used_kwh` at `location` at
/// `charge_timestamp`.
///
/// The timestamp is taken as local wall-clock time at the location; no time
/// zone conversion happens here. Returns `None` when the charge cannot be
/// priced, i.e. the location has no schedule, no band covers the month, or
/// `rate * energy_used_kwh` is outside the range of [`Decimal`].
///
/// The energy amount is not validated. Zero or negative energy scales the
/// cost like any other value.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::models::{ChargingLocation, LocationType, RateBand, TimeWindow};
/// use ev_tariff_engine::tariff::resolve_cost;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let location = ChargingLocation {
///     id: "loc_home".to_string(),
///     name: "Home".to_string(),
///     address: "12 Elm Street".to_string(),
///     location_type: LocationType::Home,
///     rate_periods: vec![RateBand {
///         start_month: 1,
///         end_month: 12,
///         peak_rate: Decimal::from_str("0.30").unwrap(),
///         off_peak_rate: Decimal::from_str("0.10").unwrap(),
///         mid_peak_rate: None,
///         peak_hours: vec![TimeWindow::new("09:00".parse().unwrap(), "17:00".parse().unwrap())],
///         off_peak_hours: vec![],
///         mid_peak_hours: None,
///     }],
///     notes: None,
/// };
///
/// let at = NaiveDateTime::parse_from_str("2024-06-15 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let cost = resolve_cost(&location, Decimal::from(10), at);
/// assert_eq!(cost, Some(Decimal::from_str("3.00").unwrap()));
/// ```
pub fn resolve_cost(
    location: &ChargingLocation,
    energy_used_kwh: Decimal,
    charge_timestamp: NaiveDateTime,
) -> Option<Decimal> {
    resolve_tariff(location, energy_used_kwh, charge_timestamp).map(|r| r.cost)
}

/// Resolves the cost of a charge like [`resolve_cost`], returning the
/// selected band, tier and rate along with an audit step.
pub fn resolve_tariff(
    location: &ChargingLocation,
    energy_used_kwh: Decimal,
    charge_timestamp: NaiveDateTime,
) -> Option<TariffResolution> {
    let month = charge_timestamp.month();
    let time = ClockTime::from_datetime(charge_timestamp);

    let Some((band_index, band)) = select_rate_band(&location.rate_periods, month) else {
        debug!(
            location_id = %location.id,
            month,
            bands = location.rate_periods.len(),
            "No rate band covers month"
        );
        return None;
    };

    let tier_match = determine_tier(band, time);
    let Some(cost) = tier_match.rate.checked_mul(energy_used_kwh) else {
        debug!(
            location_id = %location.id,
            rate = %tier_match.rate,
            energy_used_kwh = %energy_used_kwh,
            "Cost overflows decimal range"
        );
        return None;
    };

    let window_text = tier_match
        .window
        .map(|w| format!("{} window {}-{}", tier_match.tier, w.start, w.end))
        .unwrap_or_else(|| "no peak or mid-peak window".to_string());

    let audit_step = AuditStep {
        step_number: 1,
        rule_id: "tariff_resolution".to_string(),
        rule_name: "Tariff Resolution".to_string(),
        input: serde_json::json!({
            "location_id": location.id,
            "charge_timestamp": charge_timestamp.to_string(),
            "month": month,
            "time": time.to_string(),
            "energy_used_kwh": energy_used_kwh.to_string()
        }),
        output: serde_json::json!({
            "band_index": band_index,
            "band_months": format!("{}-{}", band.start_month, band.end_month),
            "tier": tier_match.tier,
            "rate": tier_match.rate.to_string(),
            "cost": cost.to_string()
        }),
        reasoning: format!(
            "Month {} falls in band #{} (months {}-{}); {} matches {}, so the {} rate ${}/kWh applies: {} kWh x ${} = ${}",
            month,
            band_index,
            band.start_month,
            band.end_month,
            time,
            window_text,
            tier_match.tier,
            tier_match.rate,
            energy_used_kwh,
            tier_match.rate,
            cost
        ),
    };

    Some(TariffResolution {
        band_index,
        tier: tier_match.tier,
        rate: tier_match.rate,
        energy_used_kwh,
        cost,
        audit_step,
    })
}
