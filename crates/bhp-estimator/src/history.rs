//! Illustrative price history
//!
//! Produces a short month-by-month trend ending at the current month. Each
//! point scales the current price by a factor that climbs 1% per month from
//! 0.97, plus up to ±0.5% jitter. This is display data, not a forecast.

use chrono::{Datelike, Local};
use rand::Rng;
use serde::Serialize;

/// Months generated when no count is given
pub const DEFAULT_HISTORY_MONTHS: usize = 6;

/// Longest history that stays within 10% of the current price
pub const MAX_HISTORY_MONTHS: u8 = 12;

/// Calendar month abbreviations
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const START_FACTOR: f64 = 0.97;
const MONTHLY_STEP: f64 = 0.01;
const JITTER: f64 = 0.005;

/// One month of history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    /// Month abbreviation
    pub month: &'static str,
    /// Price for that month
    pub price: f64,
}

/// Generate `months` points ending at the current local month
#[must_use]
pub fn generate_history(current_price: f64, months: usize) -> Vec<PricePoint> {
    let current_month = Local::now().month0();
    generate_history_from(current_price, months, current_month, &mut rand::rng())
}

/// Generate `months` points ending at `current_month0` (0 = January)
///
/// Prices are clamped to be non-negative.
pub fn generate_history_from<R: Rng>(
    current_price: f64,
    months: usize,
    current_month0: u32,
    rng: &mut R,
) -> Vec<PricePoint> {
    let current = i64::from(current_month0 % 12);
    let span = i64::try_from(months).unwrap_or(i64::MAX);

    (0..months)
        .map(|i| {
            let step = i64::try_from(i).unwrap_or(i64::MAX);
            let index = (current - (span - 1) + step).rem_euclid(12);
            let month = MONTH_NAMES[usize::try_from(index).unwrap_or(0)];

            let jitter = rng.random_range(-JITTER..JITTER);
            let factor = START_FACTOR + (i as f64) * MONTHLY_STEP + jitter;

            PricePoint {
                month,
                price: (current_price * factor).max(0.0),
            }
        })
        .collect()
}
