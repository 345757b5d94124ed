//! Simple Moving Average (SMA).

use super::mean;

/// Average of the trailing `period` prices.
///
/// A series shorter than `period` shrinks the window to the whole series.
/// An empty series averages to 0.
pub fn sma(prices: &[f64], period: usize) -> f64 {
    let window = period.min(prices.len());
    mean(&prices[prices.len() - window..])
}
