//! Time-of-day tier determination within a rate band.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ClockTime, RateBand, TimeWindow};

/// A pricing tier within a rate band.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::tariff::RateTier;
///
/// assert_eq!(RateTier::MidPeak.to_string(), "mid-peak");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// Highest-demand hours.
    Peak,
    /// Optional shoulder hours between peak and off-peak.
    MidPeak,
    /// Every other time of day.
    OffPeak,
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateTier::Peak => write!(f, "peak"),
            RateTier::MidPeak => write!(f, "mid-peak"),
            RateTier::OffPeak => write!(f, "off-peak"),
        }
    }
}

/// The tier that applies at a time of day, and its rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierMatch {
    /// The tier that applies.
    pub tier: RateTier,
    /// The tier's rate per kWh.
    pub rate: Decimal,
    /// The window that matched. `None` for the off-peak fallback.
    pub window: Option<TimeWindow>,
}

/// Determines which tier of `band` applies at `time`.
///
/// Priority is peak, then mid-peak, then off-peak:
/// - peak if `time` is inside any peak window
/// - mid-peak if `time` is inside any mid-peak window and the band has a
///   mid-peak rate
/// - off-peak otherwise, including when the band has mid-peak hours but no
///   mid-peak rate
pub fn determine_tier(band: &RateBand, time: ClockTime) -> TierMatch {
    if let Some(window) = find_window(&band.peak_hours, time) {
        return TierMatch {
            tier: RateTier::Peak,
            rate: band.peak_rate,
            window: Some(window),
        };
    }

    if let Some((rate, hours)) = band.mid_peak() {
        if let Some(window) = find_window(hours, time) {
            return TierMatch {
                tier: RateTier::MidPeak,
                rate,
                window: Some(window),
            };
        }
    }

    TierMatch {
        tier: RateTier::OffPeak,
        rate: band.off_peak_rate,
        window: None,
    }
}

fn find_window(windows: &[TimeWindow], time: ClockTime) -> Option<TimeWindow> {
    windows.iter().copied().find(|w| w.contains(time))
}
