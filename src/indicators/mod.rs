//! Stateless technical indicators over a chronological price slice.
//!
//! Every function here is total: short or empty input degrades to a
//! documented fallback instead of panicking or dividing by zero.

pub mod levels;
pub mod momentum;
pub mod rsi;
pub mod sma;
pub mod volatility;

pub use levels::SupportResistance;
pub use momentum::rate_of_change;
pub use rsi::{rsi, DEFAULT_RSI_PERIOD};
pub use sma::sma;
pub use volatility::return_std_dev;

/// Round to `decimals` places, halves going toward positive infinity.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

/// Arithmetic mean, defined as 0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(-2.25, 1), -2.2);
        assert_eq!(round_to(79.04, 1), 79.0);
        assert_eq!(round_to(1.005, 0), 1.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }
}
