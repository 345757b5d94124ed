use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

/// Thresholds owned by a prediction engine instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// PCR below this reads as call-heavy (bullish).
    #[serde(default = "default_bullish_threshold")]
    pub pcr_bullish_threshold: f64,
    /// PCR above this reads as put-heavy (bearish).
    #[serde(default = "default_bearish_threshold")]
    pub pcr_bearish_threshold: f64,
    /// Prefix for price levels in the analysis text.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pcr_bullish_threshold: default_bullish_threshold(),
            pcr_bearish_threshold: default_bearish_threshold(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bullish = self.pcr_bullish_threshold;
        let bearish = self.pcr_bearish_threshold;

        if !bullish.is_finite() || !bearish.is_finite() {
            return Err(ConfigError::NonFiniteThreshold);
        }
        if bullish >= bearish {
            return Err(ConfigError::ThresholdsInverted(bullish, bearish));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("PCR thresholds must be finite numbers")]
    NonFiniteThreshold,

    #[error("PCR bullish threshold {0} must be below bearish threshold {1}")]
    ThresholdsInverted(f64, f64),
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default = "default_start_price")]
    pub start_price: f64,
    /// Mean move per tick, percent.
    #[serde(default = "default_drift")]
    pub drift_pct: f64,
    /// Max random move per tick either way, percent.
    #[serde(default = "default_volatility")]
    pub volatility_pct: f64,
    #[serde(default = "default_base_pcr")]
    pub base_pcr: f64,
    #[serde(default = "default_pcr_jitter")]
    pub pcr_jitter: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            points: default_points(),
            start_price: default_start_price(),
            drift_pct: default_drift(),
            volatility_pct: default_volatility(),
            base_pcr: default_base_pcr(),
            pcr_jitter: default_pcr_jitter(),
            seed: None,
        }
    }
}

fn default_bullish_threshold() -> f64 { 0.7 }
fn default_bearish_threshold() -> f64 { 1.3 }
fn default_currency_symbol() -> String { "₹".to_string() }
fn default_capacity() -> usize { 60 }
fn default_true() -> bool { true }
fn default_points() -> usize { 30 }
fn default_start_price() -> f64 { 100.0 }
fn default_drift() -> f64 { 0.05 }
fn default_volatility() -> f64 { 0.4 }
fn default_base_pcr() -> f64 { 1.0 }
fn default_pcr_jitter() -> f64 { 0.4 }

/// Overrides read from the environment (and `.env`).
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub pcr_bullish_threshold: Option<f64>,
    pub pcr_bearish_threshold: Option<f64>,
    pub input_path: Option<String>,
    pub input_pcr: Option<f64>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::warn!("Config file {} not found, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Apply environment overrides, then validate the engine thresholds.
    pub fn apply_env(&mut self, env: &EnvConfig) -> Result<()> {
        if let Some(threshold) = env.pcr_bullish_threshold {
            self.engine.pcr_bullish_threshold = threshold;
        }
        if let Some(threshold) = env.pcr_bearish_threshold {
            self.engine.pcr_bearish_threshold = threshold;
        }
        self.engine.validate().context("Invalid engine configuration")?;
        Ok(())
    }
}

impl EnvConfig {
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            pcr_bullish_threshold: parse_env("PCR_BULLISH_THRESHOLD")?,
            pcr_bearish_threshold: parse_env("PCR_BEARISH_THRESHOLD")?,
            input_path: std::env::var("PREDICTOR_INPUT").ok(),
            input_pcr: parse_env("PREDICTOR_PCR")?,
        })
    }
}

fn parse_env(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{} is not a number: {}", key, raw))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.pcr_bullish_threshold, 0.7);
        assert_eq!(config.pcr_bearish_threshold, 1.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse(
            r#"
            [engine]
            pcr_bullish_threshold = 0.8

            [simulator]
            points = 50
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.pcr_bullish_threshold, 0.8);
        assert_eq!(config.engine.pcr_bearish_threshold, 1.3);
        assert_eq!(config.engine.currency_symbol, "₹");
        assert_eq!(config.history.capacity, 60);
        assert_eq!(config.simulator.points, 50);
        assert_eq!(config.simulator.seed, Some(7));
        assert!(config.simulator.enabled);
    }

    #[test]
    fn test_parse_empty_file() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let config = EngineConfig {
            pcr_bullish_threshold: 1.3,
            pcr_bearish_threshold: 0.7,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ThresholdsInverted(1.3, 0.7)));

        let config = EngineConfig {
            pcr_bearish_threshold: f64::NAN,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonFiniteThreshold));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let env = EnvConfig {
            pcr_bullish_threshold: Some(0.6),
            pcr_bearish_threshold: Some(1.5),
            ..EnvConfig::default()
        };

        config.apply_env(&env).unwrap();
        assert_eq!(config.engine.pcr_bullish_threshold, 0.6);
        assert_eq!(config.engine.pcr_bearish_threshold, 1.5);

        let bad = EnvConfig {
            pcr_bullish_threshold: Some(2.0),
            ..EnvConfig::default()
        };
        assert!(config.apply_env(&bad).is_err());
    }
}
