use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Three-way market call, plus the short-circuit for short series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Prediction {
    Bullish,
    Bearish,
    Neutral,
    InsufficientData,
}

impl Prediction {
    /// Classify a combined score. Boundaries are exclusive: exactly ±20 is
    /// neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 20.0 {
            Prediction::Bullish
        } else if score < -20.0 {
            Prediction::Bearish
        } else {
            Prediction::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Prediction::Bullish => "BULLISH",
            Prediction::Bearish => "BEARISH",
            Prediction::Neutral => "NEUTRAL",
            Prediction::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five-step label for trend and momentum scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalLabel {
    #[serde(rename = "Strong Bullish")]
    StrongBullish,
    Bullish,
    Neutral,
    Bearish,
    #[serde(rename = "Strong Bearish")]
    StrongBearish,
}

impl SignalLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 60.0 {
            SignalLabel::StrongBullish
        } else if score > 30.0 {
            SignalLabel::Bullish
        } else if score > -30.0 {
            SignalLabel::Neutral
        } else if score > -60.0 {
            SignalLabel::Bearish
        } else {
            SignalLabel::StrongBearish
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalLabel::StrongBullish => "Strong Bullish",
            SignalLabel::Bullish => "Bullish",
            SignalLabel::Neutral => "Neutral",
            SignalLabel::Bearish => "Bearish",
            SignalLabel::StrongBearish => "Strong Bearish",
        }
    }
}

/// Sentiment read from the put/call ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PcrSignal {
    Bullish,
    Neutral,
    Bearish,
}

impl PcrSignal {
    pub fn label(&self) -> &'static str {
        match self {
            PcrSignal::Bullish => "Bullish",
            PcrSignal::Neutral => "Neutral",
            PcrSignal::Bearish => "Bearish",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RsiSignal {
    Overbought,
    Oversold,
    Bullish,
    Bearish,
}

impl RsiSignal {
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > 70.0 {
            RsiSignal::Overbought
        } else if rsi < 30.0 {
            RsiSignal::Oversold
        } else if rsi > 50.0 {
            RsiSignal::Bullish
        } else {
            RsiSignal::Bearish
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RsiSignal::Overbought => "Overbought",
            RsiSignal::Oversold => "Oversold",
            RsiSignal::Bullish => "Bullish",
            RsiSignal::Bearish => "Bearish",
        }
    }
}

/// Volatility label. A positive volatility score (calm market) maps to
/// `High` and a non-positive one to `Low`; dashboards rely on this mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VolatilitySignal {
    High,
    Low,
}

impl VolatilitySignal {
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            VolatilitySignal::High
        } else {
            VolatilitySignal::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolatilitySignal::High => "High",
            VolatilitySignal::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signals {
    pub trend: SignalLabel,
    pub momentum: SignalLabel,
    pub pcr: PcrSignal,
    pub rsi: RsiSignal,
    pub volatility: VolatilitySignal,
}

/// Raw indicator readings reported alongside the verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    /// RSI rounded to 1 decimal.
    pub rsi: f64,
    pub pcr: f64,
    pub support: f64,
    pub resistance: f64,
    pub distance_to_support: f64,
    pub distance_to_resistance: f64,
}

/// Outcome of one engine evaluation.
///
/// On the insufficient-data path only `prediction`, `confidence`, `reason`
/// and `timestamp` are populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub prediction: Prediction,
    /// `round(min(|score|, 100))`.
    pub confidence: u8,
    /// Combined score rounded to 1 decimal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<Signals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub analysis: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl PredictionResult {
    pub fn insufficient_data(min_points: usize) -> Self {
        Self {
            prediction: Prediction::InsufficientData,
            confidence: 0,
            score: None,
            signals: None,
            indicators: None,
            analysis: Vec::new(),
            reason: Some(format!("Need at least {} data points", min_points)),
            timestamp: Utc::now(),
        }
    }
}
