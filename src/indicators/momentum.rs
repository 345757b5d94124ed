//! Rate-of-change momentum.

/// Lookback used for the rate of change.
pub const ROC_PERIOD: usize = 5;

/// Percentage change between the latest price and the price
/// `min(5, len - 1)` steps earlier. A series of one price (or none) has no
/// change and yields 0.
pub fn rate_of_change(prices: &[f64]) -> f64 {
    let Some(&current) = prices.last() else {
        return 0.0;
    };
    let period = ROC_PERIOD.min(prices.len() - 1);
    let past = prices[prices.len() - 1 - period];

    (current - past) / past * 100.0
}
