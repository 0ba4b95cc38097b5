//! History statistics over charging sessions and trips.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ChargingSession, Trip};
use crate::pricing::round_currency;

/// Totals over a set of charging sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Number of sessions.
    pub session_count: usize,
    /// Total energy added in kWh.
    pub total_energy: Decimal,
    /// Total cost.
    pub total_cost: Decimal,
    /// Total cost divided by total energy, rounded to cents. `None` when no
    /// energy was added.
    pub average_cost_per_kwh: Option<Decimal>,
}

/// One point of the cost-over-time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPoint {
    /// When the session took place.
    pub date: NaiveDateTime,
    /// The session's cost.
    pub cost: Decimal,
}

/// Totals over a set of trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Number of trips.
    pub trip_count: usize,
    /// Total distance in km.
    pub total_distance: Decimal,
    /// Total energy used in kWh.
    pub total_energy: Decimal,
    /// kWh per km, rounded to 2 decimal places with midpoints away from
    /// zero. `None` unless both totals are non-zero.
    pub average_efficiency: Option<Decimal>,
}

/// Summarises charging sessions.
///
/// Returns `TotalOutOfRange` when the total energy or cost does not fit in a
/// [`Decimal`].
///
/// # Example
///
/// ```
/// use ev_tariff_engine::stats::summarize_sessions;
///
/// let summary = summarize_sessions(&[]).unwrap();
/// assert_eq!(summary.session_count, 0);
/// assert!(summary.average_cost_per_kwh.is_none());
/// ```
pub fn summarize_sessions(sessions: &[ChargingSession]) -> EngineResult<SessionSummary> {
    let total_energy = checked_total("energy_added", sessions.iter().map(|s| s.energy_added))?;
    let total_cost = checked_total("cost", sessions.iter().map(|s| s.cost))?;

    let average_cost_per_kwh = (!total_energy.is_zero())
        .then(|| total_cost.checked_div(total_energy).map(round_currency))
        .flatten();

    Ok(SessionSummary {
        session_count: sessions.len(),
        total_energy,
        total_cost,
        average_cost_per_kwh,
    })
}

/// Returns session costs ordered by date, oldest first.
///
/// Sessions on the same timestamp keep their input order.
pub fn cost_series(sessions: &[ChargingSession]) -> Vec<CostPoint> {
    let mut points: Vec<CostPoint> = sessions
        .iter()
        .map(|s| CostPoint {
            date: s.date,
            cost: s.cost,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Summarises trips.
///
/// Returns `TotalOutOfRange` when the total distance or energy does not fit
/// in a [`Decimal`].
pub fn summarize_trips(trips: &[Trip]) -> EngineResult<TripSummary> {
    let total_distance = checked_total("distance", trips.iter().map(|t| t.distance))?;
    let total_energy = checked_total("energy_used", trips.iter().map(|t| t.energy_used))?;

    let average_efficiency = (!total_distance.is_zero() && !total_energy.is_zero())
        .then(|| {
            total_energy
                .checked_div(total_distance)
                .map(|e| e.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        })
        .flatten();

    Ok(TripSummary {
        trip_count: trips.len(),
        total_distance,
        total_energy,
        average_efficiency,
    })
}

fn checked_total(field: &str, mut values: impl Iterator<Item = Decimal>) -> EngineResult<Decimal> {
    values
        .try_fold(Decimal::ZERO, |total, value| total.checked_add(value))
        .ok_or_else(|| EngineError::TotalOutOfRange {
            field: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CostSource;
    use chrono::NaiveDate;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn session(date: &str, energy: &str, cost: &str) -> ChargingSession {
        ChargingSession {
            id: Uuid::new_v4(),
            date: NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S").unwrap(),
            location: "loc_home".to_string(),
            energy_added: dec(energy),
            cost: dec(cost),
            cost_source: CostSource::Resolved,
        }
    }

    fn trip(distance: &str, energy: &str) -> Trip {
        Trip {
            id: "trip_001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            start_location: "Home".to_string(),
            end_location: "Work".to_string(),
            distance: dec(distance),
            energy_used: dec(energy),
        }
    }

    #[test]
    fn test_summarize_sessions_totals() {
        let sessions = vec![
            session("2024-06-15T10:00:00", "10", "3.00"),
            session("2024-06-16T20:00:00", "30", "3.00"),
        ];
        let summary = summarize_sessions(&sessions).unwrap();

        assert_eq!(summary.session_count, 2);
        assert_eq!(summary.total_energy, dec("40"));
        assert_eq!(summary.total_cost, dec("6.00"));
        assert_eq!(summary.average_cost_per_kwh, Some(dec("0.15")));
    }

    #[test]
    fn test_summarize_sessions_empty() {
        let summary = summarize_sessions(&[]).unwrap();
        assert_eq!(summary.total_energy, Decimal::ZERO);
        assert_eq!(summary.total_cost, Decimal::ZERO);
        assert!(summary.average_cost_per_kwh.is_none());
    }

    #[test]
    fn test_cost_series_sorted_by_date() {
        let sessions = vec![
            session("2024-06-20T08:00:00", "10", "2.00"),
            session("2024-06-01T08:00:00", "10", "1.00"),
            session("2024-06-10T08:00:00", "10", "1.50"),
        ];
        let series = cost_series(&sessions);
        let costs: Vec<Decimal> = series.iter().map(|p| p.cost).collect();
        assert_eq!(costs, vec![dec("1.00"), dec("1.50"), dec("2.00")]);
    }

    #[test]
    fn test_summarize_trips_efficiency() {
        let trips = vec![trip("120", "18"), trip("80", "14")];
        let summary = summarize_trips(&trips).unwrap();

        assert_eq!(summary.trip_count, 2);
        assert_eq!(summary.total_distance, dec("200"));
        assert_eq!(summary.total_energy, dec("32"));
        assert_eq!(summary.average_efficiency, Some(dec("0.16")));
    }

    #[test]
    fn test_summarize_trips_rounds_efficiency() {
        let summary = summarize_trips(&[trip("3", "1")]).unwrap();
        assert_eq!(summary.average_efficiency, Some(dec("0.33")));
    }

    #[test]
    fn test_summarize_trips_rounds_half_away_from_zero() {
        // 1 / 8 = 0.125
        let summary = summarize_trips(&[trip("8", "1")]).unwrap();
        assert_eq!(summary.average_efficiency, Some(dec("0.13")));
    }

    #[test]
    fn test_summarize_sessions_overflowing_total_is_rejected() {
        let mut first = session("2024-06-15T10:00:00", "10", "1.00");
        let mut second = session("2024-06-16T10:00:00", "10", "1.00");
        first.cost = Decimal::MAX;
        second.cost = Decimal::MAX;

        match summarize_sessions(&[first, second]) {
            Err(EngineError::TotalOutOfRange { field }) => assert_eq!(field, "cost"),
            other => panic!("Expected TotalOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_summarize_trips_overflowing_total_is_rejected() {
        let mut long_trip = trip("1", "1");
        long_trip.distance = Decimal::MAX;

        match summarize_trips(&[long_trip.clone(), long_trip]) {
            Err(EngineError::TotalOutOfRange { field }) => assert_eq!(field, "distance"),
            other => panic!("Expected TotalOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_summarize_trips_without_distance() {
        let summary = summarize_trips(&[trip("0", "5")]).unwrap();
        assert!(summary.average_efficiency.is_none());
        assert!(summarize_trips(&[]).unwrap().average_efficiency.is_none());
    }
}
