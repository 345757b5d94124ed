//! Support and resistance from the recent trading range.

use serde::Serialize;

use super::round_to;

/// Trailing window the levels are taken over.
pub const LEVEL_WINDOW: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResistance {
    pub support: f64,
    pub resistance: f64,
    /// Percent the latest price would need to rise to touch resistance.
    pub distance_to_resistance: f64,
    /// Percent the latest price sits above support.
    pub distance_to_support: f64,
}

impl SupportResistance {
    /// Low and high of the last 20 prices (or all of them if fewer), with
    /// every field rounded to 2 decimals. `None` for an empty series.
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        let current = *prices.last()?;
        let recent = &prices[prices.len().saturating_sub(LEVEL_WINDOW)..];

        let support = recent.iter().copied().fold(f64::INFINITY, f64::min);
        let resistance = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            support: round_to(support, 2),
            resistance: round_to(resistance, 2),
            distance_to_resistance: round_to((resistance - current) / current * 100.0, 2),
            distance_to_support: round_to((current - support) / current * 100.0, 2),
        })
    }
}
