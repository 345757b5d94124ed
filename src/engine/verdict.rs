//! Turns component scores into labels and human-readable insight lines.

use crate::config::EngineConfig;
use crate::engine::scorer::ComponentScores;
use crate::engine::types::{PcrSignal, RsiSignal, SignalLabel, Signals, VolatilitySignal};
use crate::indicators::{round_to, SupportResistance};

/// Inputs the analysis lines are written from.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisInput<'a> {
    pub scores: &'a ComponentScores,
    pub rsi: f64,
    pub pcr: f64,
    pub levels: &'a SupportResistance,
}

pub fn pcr_signal(pcr: f64, config: &EngineConfig) -> PcrSignal {
    if pcr < config.pcr_bullish_threshold {
        PcrSignal::Bullish
    } else if pcr > config.pcr_bearish_threshold {
        PcrSignal::Bearish
    } else {
        PcrSignal::Neutral
    }
}

pub fn build_signals(scores: &ComponentScores, rsi: f64, pcr: f64, config: &EngineConfig) -> Signals {
    Signals {
        trend: SignalLabel::from_score(scores.trend),
        momentum: SignalLabel::from_score(scores.momentum),
        pcr: pcr_signal(pcr, config),
        rsi: RsiSignal::from_rsi(rsi),
        volatility: VolatilitySignal::from_score(scores.volatility),
    }
}

/// Insight lines in fixed order: trend, PCR, RSI, momentum (only when
/// strong), support/resistance.
pub fn build_analysis(input: &AnalysisInput<'_>, config: &EngineConfig) -> Vec<String> {
    let mut insights = Vec::with_capacity(5);
    let scores = input.scores;
    let pcr = round_to(input.pcr, 2);
    let rsi = round_to(input.rsi, 1);

    if scores.trend > 50.0 {
        insights.push("📈 Strong uptrend detected across multiple timeframes".to_string());
    } else if scores.trend < -50.0 {
        insights.push("📉 Strong downtrend detected across multiple timeframes".to_string());
    } else {
        insights.push("➡️ Market showing mixed signals on trend".to_string());
    }

    match pcr_signal(input.pcr, config) {
        PcrSignal::Bullish => insights.push(format!(
            "🟢 PCR at {:.2} suggests bullish sentiment (more calls)",
            pcr
        )),
        PcrSignal::Bearish => insights.push(format!(
            "🔴 PCR at {:.2} suggests bearish sentiment (more puts)",
            pcr
        )),
        PcrSignal::Neutral => insights.push(format!(
            "⚪ PCR at {:.2} shows neutral market sentiment",
            pcr
        )),
    }

    if input.rsi > 70.0 {
        insights.push(format!("⚠️ RSI at {:.1} indicates overbought conditions", rsi));
    } else if input.rsi < 30.0 {
        insights.push(format!("⚠️ RSI at {:.1} indicates oversold conditions", rsi));
    } else {
        insights.push(format!("✓ RSI at {:.1} is in healthy range", rsi));
    }

    if scores.momentum > 50.0 {
        insights.push("🚀 Strong positive momentum detected".to_string());
    } else if scores.momentum < -50.0 {
        insights.push("⚡ Strong negative momentum detected".to_string());
    }

    insights.push(format!(
        "📊 Support: {currency}{} | Resistance: {currency}{}",
        input.levels.support,
        input.levels.resistance,
        currency = config.currency_symbol,
    ));

    insights
}
