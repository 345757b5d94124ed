//! Realized volatility of simple period returns.

use super::mean;

/// Simple returns `(p[i] - p[i-1]) / p[i-1]`.
pub fn period_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect()
}

/// Population standard deviation of period returns.
///
/// Fewer than two prices means no returns, which is treated as zero
/// volatility.
pub fn return_std_dev(prices: &[f64]) -> f64 {
    let returns = period_returns(prices);
    let avg = mean(&returns);
    let variance = mean(
        &returns
            .iter()
            .map(|r| (r - avg).powi(2))
            .collect::<Vec<_>>(),
    );
    variance.sqrt()
}
