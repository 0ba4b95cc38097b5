//! Session pricing.
//!
//! Turns a draft charging session into a priced [`ChargingSession`]. A cost
//! entered by the user takes precedence; otherwise the cost is resolved from
//! the location's schedule and rounded to cents. When neither is available
//! the draft is rejected so the user can enter the cost by hand.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{ChargingLocation, ChargingSession, CostSource};
use crate::tariff::{TariffResolution, resolve_tariff};

/// Number of decimal places stored for a session cost.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// A charging session as entered, before it is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    /// When charging took place, in local wall-clock time.
    pub date: NaiveDateTime,
    /// Location id, or free text when the place is not saved.
    pub location: String,
    /// Energy added in kWh.
    pub energy_added: Decimal,
    /// A cost entered by the user, overriding the resolved cost.
    #[serde(default)]
    pub manual_cost: Option<Decimal>,
}

/// A priced session and, when the cost was resolved, how.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedSession {
    /// The session record, ready to be stored.
    pub session: ChargingSession,
    /// The tariff resolution, if the schedule could price the charge.
    pub resolution: Option<TariffResolution>,
}

/// Rounds a monetary amount to cents, midpoints away from zero.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::pricing::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("3.705").unwrap()), Decimal::from_str("3.71").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("3.7049").unwrap()), Decimal::from_str("3.70").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Prices a draft session.
///
/// # Arguments
///
/// * `location` - The saved location the draft refers to, if any. Free-text
///   locations have no schedule and can only be priced manually.
/// * `draft` - The session as entered
///
/// # Returns
///
/// The priced session, or an error if:
/// - `energy_added` is not positive (`InvalidSession`)
/// - `manual_cost` is negative (`InvalidSession`)
/// - there is no manual cost and the schedule cannot price the charge
///   (`CostUnavailable`)
pub fn price_session(
    location: Option<&ChargingLocation>,
    draft: &SessionDraft,
) -> EngineResult<PricedSession> {
    if draft.energy_added <= Decimal::ZERO {
        return Err(EngineError::InvalidSession {
            field: "energy_added".to_string(),
            message: format!("must be greater than 0, got {}", draft.energy_added),
        });
    }

    let resolution =
        location.and_then(|loc| resolve_tariff(loc, draft.energy_added, draft.date));

    let (cost, cost_source) = match (draft.manual_cost, &resolution) {
        (Some(manual), _) if manual < Decimal::ZERO => {
            return Err(EngineError::InvalidSession {
                field: "cost".to_string(),
                message: format!("must not be negative, got {}", manual),
            });
        }
        (Some(manual), _) => (round_currency(manual), CostSource::Manual),
        (None, Some(resolution)) => (round_currency(resolution.cost), CostSource::Resolved),
        (None, None) => {
            return Err(EngineError::CostUnavailable {
                location: location
                    .map(|loc| loc.name.clone())
                    .unwrap_or_else(|| draft.location.clone()),
            });
        }
    };

    debug!(
        location = %draft.location,
        energy_added = %draft.energy_added,
        cost = %cost,
        ?cost_source,
        "Priced charging session"
    );

    Ok(PricedSession {
        session: ChargingSession {
            id: Uuid::new_v4(),
            date: draft.date,
            location: draft.location.clone(),
            energy_added: draft.energy_added,
            cost,
            cost_source,
        },
        resolution,
    })
}
