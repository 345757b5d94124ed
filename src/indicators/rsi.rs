//! Relative Strength Index (RSI).

/// Default lookback in price changes.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI over the last `period` price changes.
///
/// Average gain and loss are plain means over the window rather than
/// Wilder's recursive smoothing. A series shorter than `period + 1`
/// shrinks the window to the changes available. With no losses in the
/// window (including the degenerate no-change case) RSI is 100.
///
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let period = period.min(changes.len());
    if period == 0 {
        return 100.0;
    }

    let window = &changes[changes.len() - period..];
    let gain: f64 = window.iter().filter(|c| **c > 0.0).sum();
    let loss: f64 = window.iter().filter(|c| **c < 0.0).map(|c| -c).sum();

    let avg_gain = gain / period as f64;
    let avg_loss = loss / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
