use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// One sample of the underlying's price. The timestamp is passed through
/// untouched; the engine never parses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub timestamp: String,
}

impl PricePoint {
    pub fn new(price: f64, timestamp: impl Into<String>) -> Self {
        Self {
            price,
            timestamp: timestamp.into(),
        }
    }
}

/// Pull the raw prices out of a series, oldest first.
pub fn closing_prices(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.price).collect()
}

/// Read a JSON array of `{price, timestamp}` objects. The series is
/// returned whole, in file order.
pub fn load_series(path: &str) -> Result<Vec<PricePoint>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read price series: {}", path))?;
    let points: Vec<PricePoint> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse price series: {}", path))?;
    Ok(points)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionContract {
    pub strike: f64,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<f64>,
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    #[serde(default)]
    pub last_price: Option<f64>,
}

impl OptionContract {
    /// Activity weight used for the put/call ratio: volume when quoted,
    /// otherwise open interest, otherwise nothing.
    pub fn activity(&self) -> f64 {
        self.volume.or(self.open_interest).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionChainSnapshot {
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}
