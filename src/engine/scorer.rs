//! Maps raw indicator readings to signed scores and combines them.
//!
//! Positive = bullish, negative = bearish. Breakpoints are checked from
//! the most extreme bucket inward with strict comparisons.

use crate::config::EngineConfig;
use crate::indicators::sma;

/// Relative weight of each component in the combined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub trend: f64,
    pub momentum: f64,
    pub pcr: f64,
    pub rsi: f64,
    pub volatility: f64,
}

/// Fixed weight table. Sums to 1.0 and is applied as-is.
pub const WEIGHTS: ScoreWeights = ScoreWeights {
    trend: 0.25,
    momentum: 0.20,
    pcr: 0.30,
    rsi: 0.15,
    volatility: 0.10,
};

/// Per-component scores for one evaluation. `rsi` holds the normalized
/// score, not the raw RSI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub trend: f64,
    pub momentum: f64,
    pub pcr: f64,
    pub rsi: f64,
    pub volatility: f64,
}

impl ComponentScores {
    /// Weighted sum at full precision.
    pub fn total(&self, weights: &ScoreWeights) -> f64 {
        self.trend * weights.trend
            + self.momentum * weights.momentum
            + self.pcr * weights.pcr
            + self.rsi * weights.rsi
            + self.volatility * weights.volatility
    }
}

/// Moving-average alignment: SMA5 vs SMA10 (±30), SMA10 vs SMA20 (±40)
/// and last price vs SMA20 (±30). Ties count as bearish.
pub fn trend_score(prices: &[f64]) -> f64 {
    let sma5 = sma(prices, 5);
    let sma10 = sma(prices, 10);
    let sma20 = sma(prices, 20);
    let current = prices.last().copied().unwrap_or(0.0);

    let mut score = 0.0;
    score += if sma5 > sma10 { 30.0 } else { -30.0 };
    score += if sma10 > sma20 { 40.0 } else { -40.0 };
    score += if current > sma20 { 30.0 } else { -30.0 };
    score
}

/// Step function over the rate of change (percent).
pub fn momentum_score(roc: f64) -> f64 {
    if roc > 2.0 {
        100.0
    } else if roc > 1.0 {
        70.0
    } else if roc > 0.5 {
        40.0
    } else if roc > 0.0 {
        20.0
    } else if roc > -0.5 {
        -20.0
    } else if roc > -1.0 {
        -40.0
    } else if roc > -2.0 {
        -70.0
    } else {
        -100.0
    }
}

/// Turbulent markets lean bearish; calm ones get a small bonus.
pub fn volatility_score(std_dev: f64) -> f64 {
    if std_dev > 0.02 {
        -30.0
    } else if std_dev > 0.01 {
        -10.0
    } else {
        10.0
    }
}

/// Put/call ratio score.
///
/// Below the bullish threshold the score starts at +60 and grows as the
/// ratio falls; above the bearish threshold it starts at -60 and keeps
/// falling. Neither side is clamped. In between the ratio is read around
/// parity, so the score jumps at both thresholds.
pub fn pcr_score(pcr: f64, config: &EngineConfig) -> f64 {
    if pcr < config.pcr_bullish_threshold {
        60.0 + (config.pcr_bullish_threshold - pcr) * 50.0
    } else if pcr > config.pcr_bearish_threshold {
        -60.0 - (pcr - config.pcr_bearish_threshold) * 30.0
    } else {
        (1.0 - pcr) * 30.0
    }
}

/// Piecewise RSI normalization into [-80, 80].
pub fn normalize_rsi(rsi: f64) -> f64 {
    if rsi > 70.0 {
        80.0
    } else if rsi > 60.0 {
        50.0
    } else if rsi > 50.0 {
        30.0
    } else if rsi > 40.0 {
        -30.0
    } else if rsi > 30.0 {
        -50.0
    } else {
        -80.0
    }
}
