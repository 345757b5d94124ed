//! Options-market prediction engine.
//!
//! Combines trend, momentum, volatility, RSI and the put/call ratio into a
//! bullish/bearish/neutral verdict with a confidence score and rationale.

pub mod config;
pub mod data;
pub mod engine;
pub mod indicators;
pub mod simulator;

pub use config::{Config, EngineConfig, EnvConfig};
pub use data::history::PriceHistory;
pub use data::types::PricePoint;
pub use engine::types::{Prediction, PredictionResult};
pub use engine::{PredictOptions, PredictionEngine, MIN_DATA_POINTS};
