//! Prediction engine: indicators → component scores → verdict.

pub mod scorer;
pub mod types;
pub mod validate;
pub mod verdict;

use chrono::Utc;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::data::types::{closing_prices, PricePoint};
use crate::indicators::{
    rate_of_change, return_std_dev, round_to, rsi, SupportResistance, DEFAULT_RSI_PERIOD,
};
use scorer::{
    momentum_score, normalize_rsi, pcr_score, trend_score, volatility_score, ComponentScores,
    WEIGHTS,
};
use types::{IndicatorSnapshot, Prediction, PredictionResult};
use validate::{validate_inputs, ValidationError};
use verdict::{build_analysis, build_signals, AnalysisInput};

/// Shortest series the engine will give a verdict for.
pub const MIN_DATA_POINTS: usize = 10;

/// Reserved per-call options. Accepted by [`PredictionEngine::predict`]
/// but not consulted.
#[derive(Debug, Clone, Default)]
pub struct PredictOptions {}

/// Scores a price series and put/call ratio into a market verdict.
///
/// The engine owns its thresholds; callers may change them between calls
/// through [`PredictionEngine::config_mut`]. Each call is a pure function
/// of the inputs and the current config.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    config: EngineConfig,
}

impl PredictionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Evaluate a chronological price series against the current PCR.
    ///
    /// Fewer than [`MIN_DATA_POINTS`] points yields
    /// [`Prediction::InsufficientData`] without computing any indicator.
    pub fn predict(
        &self,
        points: &[PricePoint],
        current_pcr: f64,
        _options: &PredictOptions,
    ) -> PredictionResult {
        if points.len() < MIN_DATA_POINTS {
            debug!("Only {} data points, skipping prediction", points.len());
            return PredictionResult::insufficient_data(MIN_DATA_POINTS);
        }

        let prices = closing_prices(points);
        let Some(levels) = SupportResistance::from_prices(&prices) else {
            return PredictionResult::insufficient_data(MIN_DATA_POINTS);
        };
        let rsi_value = rsi(&prices, DEFAULT_RSI_PERIOD);

        let scores = ComponentScores {
            trend: trend_score(&prices),
            momentum: momentum_score(rate_of_change(&prices)),
            pcr: pcr_score(current_pcr, &self.config),
            rsi: normalize_rsi(rsi_value),
            volatility: volatility_score(return_std_dev(&prices)),
        };
        let total = scores.total(&WEIGHTS);

        debug!(
            "Component scores: trend={} momentum={} pcr={:.2} rsi={} volatility={} total={:.3}",
            scores.trend, scores.momentum, scores.pcr, scores.rsi, scores.volatility, total
        );

        let prediction = Prediction::from_score(total);
        let confidence = total.abs().min(100.0).round() as u8;

        let analysis = build_analysis(
            &AnalysisInput {
                scores: &scores,
                rsi: rsi_value,
                pcr: current_pcr,
                levels: &levels,
            },
            &self.config,
        );

        info!(
            "Prediction: {} (score={:.1}, confidence={}%)",
            prediction, total, confidence
        );

        PredictionResult {
            prediction,
            confidence,
            score: Some(round_to(total, 1)),
            signals: Some(build_signals(&scores, rsi_value, current_pcr, &self.config)),
            indicators: Some(IndicatorSnapshot {
                rsi: round_to(rsi_value, 1),
                pcr: current_pcr,
                support: levels.support,
                resistance: levels.resistance,
                distance_to_support: levels.distance_to_support,
                distance_to_resistance: levels.distance_to_resistance,
            }),
            analysis,
            reason: None,
            timestamp: Utc::now(),
        }
    }

    /// Like [`predict`](Self::predict), but rejects malformed numeric input
    /// first instead of letting it propagate through the indicators.
    pub fn predict_checked(
        &self,
        points: &[PricePoint],
        current_pcr: f64,
        options: &PredictOptions,
    ) -> Result<PredictionResult, ValidationError> {
        validate_inputs(points, current_pcr)?;
        Ok(self.predict(points, current_pcr, options))
    }
}
