//! Seasonal rate band selection.

use crate::models::RateBand;

/// Finds the rate band active in `month` (1-12).
///
/// Bands are scanned in schedule order and the first one whose month range
/// covers `month` wins, so a schedule with overlapping bands resolves the
/// same way every time. Returns the band together with its position.
///
/// # Example
///
/// ```
/// use ev_tariff_engine::models::RateBand;
/// use ev_tariff_engine::tariff::select_rate_band;
/// use rust_decimal::Decimal;
///
/// let band = |start_month, end_month| RateBand {
///     start_month,
///     end_month,
///     peak_rate: Decimal::ONE,
///     off_peak_rate: Decimal::ONE,
///     mid_peak_rate: None,
///     peak_hours: vec![],
///     off_peak_hours: vec![],
///     mid_peak_hours: None,
/// };
/// let schedule = vec![band(1, 6), band(7, 12)];
///
/// let (index, selected) = select_rate_band(&schedule, 7).unwrap();
/// assert_eq!(index, 1);
/// assert_eq!(selected.start_month, 7);
/// ```
pub fn select_rate_band(schedule: &[RateBand], month: u32) -> Option<(usize, &RateBand)> {
    schedule
        .iter()
        .enumerate()
        .find(|(_, band)| band.covers_month(month))
}
