//! Seasonal time-of-use rate bands.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::ClockTime;

/// A time-of-day interval within a single day, inclusive at both ends.
///
/// A window cannot cross midnight: `22:00`-`02:00` has `start > end` and
/// matches no time at all. Such a period must be given as two windows,
/// `22:00`-`23:59` and `00:00`-`02:00`.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::models::{ClockTime, TimeWindow};
///
/// let window = TimeWindow::new("09:00".parse().unwrap(), "17:00".parse().unwrap());
/// assert!(window.contains("09:00".parse().unwrap()));
/// assert!(window.contains("17:00".parse().unwrap()));
/// assert!(!window.contains("17:01".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First minute of the window.
    pub start: ClockTime,
    /// Last minute of the window.
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a window from its boundaries.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Returns true when `start <= time <= end`.
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Returns true when the window crosses midnight and so never matches.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// One row of a location's rate schedule.
///
/// Field names follow the stored schedule format (`startMonth`,
/// `peakHours`, ...). Off-peak is the fallback tier, so `off_peak_hours` is
/// kept for display but never consulted during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateBand {
    /// First month the band is active, 1 = January.
    pub start_month: u32,
    /// Last month the band is active, inclusive.
    pub end_month: u32,
    /// Rate per kWh during peak hours.
    pub peak_rate: Decimal,
    /// Rate per kWh when no other tier applies.
    pub off_peak_rate: Decimal,
    /// Rate per kWh during mid-peak hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_peak_rate: Option<Decimal>,
    /// Peak windows.
    #[serde(default)]
    pub peak_hours: Vec<TimeWindow>,
    /// Off-peak windows.
    #[serde(default)]
    pub off_peak_hours: Vec<TimeWindow>,
    /// Mid-peak windows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid_peak_hours: Option<Vec<TimeWindow>>,
}

impl RateBand {
    /// Returns true when `start_month <= month <= end_month`.
    ///
    /// The comparison is literal: a range such as November-March
    /// (`start_month = 11`, `end_month = 3`) contains no month.
    pub fn covers_month(&self, month: u32) -> bool {
        self.start_month <= month && month <= self.end_month
    }

    /// The mid-peak rate and its windows, if both are configured.
    pub fn mid_peak(&self) -> Option<(Decimal, &[TimeWindow])> {
        match (self.mid_peak_rate, self.mid_peak_hours.as_deref()) {
            (Some(rate), Some(hours)) if !hours.is_empty() => Some((rate, hours)),
            _ => None,
        }
    }

    /// Checks the band, returning non-fatal findings as warnings.
    ///
    /// Months outside 1-12 and negative rates are errors. Bands that are
    /// well-typed but can never take effect as written are reported as
    /// warnings.
    pub fn validate(&self, index: usize) -> EngineResult<Vec<ScheduleWarning>> {
        for (name, month) in [("startMonth", self.start_month), ("endMonth", self.end_month)] {
            if !(1..=12).contains(&month) {
                return Err(EngineError::InvalidRateBand {
                    index,
                    message: format!("{name} must be between 1 and 12, got {month}"),
                });
            }
        }

        let rates = [
            ("peakRate", Some(self.peak_rate)),
            ("offPeakRate", Some(self.off_peak_rate)),
            ("midPeakRate", self.mid_peak_rate),
        ];
        for (name, rate) in rates {
            if let Some(rate) = rate.filter(|r| *r < Decimal::ZERO) {
                return Err(EngineError::InvalidRateBand {
                    index,
                    message: format!("{name} must not be negative, got {rate}"),
                });
            }
        }

        let mut warnings = Vec::new();

        if self.start_month > self.end_month {
            warnings.push(ScheduleWarning::new(
                index,
                "wrapping_month_range",
                format!(
                    "months {}-{} wrap around the year end and match no month; split the band in two",
                    self.start_month, self.end_month
                ),
            ));
        }

        let windows = self
            .peak_hours
            .iter()
            .chain(&self.off_peak_hours)
            .chain(self.mid_peak_hours.iter().flatten());
        for window in windows.filter(|w| w.is_inverted()) {
            warnings.push(ScheduleWarning::new(
                index,
                "inverted_time_window",
                format!(
                    "window {}-{} crosses midnight and matches no time; split it in two",
                    window.start, window.end
                ),
            ));
        }

        let has_mid_peak_hours = self.mid_peak_hours.as_ref().is_some_and(|h| !h.is_empty());
        match (self.mid_peak_rate.is_some(), has_mid_peak_hours) {
            (true, false) => warnings.push(ScheduleWarning::new(
                index,
                "mid_peak_rate_without_hours",
                "midPeakRate is set but midPeakHours is empty; mid-peak never applies".to_string(),
            )),
            (false, true) => warnings.push(ScheduleWarning::new(
                index,
                "mid_peak_hours_without_rate",
                "midPeakHours is set without midPeakRate; those hours are billed off-peak"
                    .to_string(),
            )),
            _ => {}
        }

        Ok(warnings)
    }
}

/// A schedule problem that does not prevent resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWarning {
    /// Zero-based position of the band in the schedule.
    pub band_index: usize,
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

impl ScheduleWarning {
    fn new(band_index: usize, code: &str, message: String) -> Self {
        Self {
            band_index,
            code: code.to_string(),
            message,
        }
    }
}

/// Validates every band of a schedule.
///
/// Stops at the first invalid band. Warnings from all bands are returned in
/// schedule order.
pub fn validate_schedule(schedule: &[RateBand]) -> EngineResult<Vec<ScheduleWarning>> {
    let mut warnings = Vec::new();
    for (index, band) in schedule.iter().enumerate() {
        warnings.extend(band.validate(index)?);
    }
    Ok(warnings)
}
