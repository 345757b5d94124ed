use anyhow::{Context, Result};
use pcr_predictor::config::{Config, EnvConfig};
use pcr_predictor::data::types::{load_series, PricePoint};
use pcr_predictor::simulator::QuoteSimulator;
use pcr_predictor::{PredictOptions, PredictionEngine, PriceHistory};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("🚀 PCR predictor starting...");

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PREDICTOR_CONFIG").ok())
        .unwrap_or_else(|| "config.toml".to_string());
    tracing::info!("Loading configuration from {}", config_path);

    let mut config = Config::load_or_default(&config_path)?;
    let env_config = EnvConfig::load()?;
    config.apply_env(&env_config)?;

    let engine = PredictionEngine::new(config.engine.clone());
    tracing::info!(
        "PCR thresholds: bullish < {}, bearish > {}",
        engine.config().pcr_bullish_threshold,
        engine.config().pcr_bearish_threshold
    );

    let (points, pcr): (Vec<PricePoint>, f64) = match &env_config.input_path {
        Some(path) => {
            tracing::info!("Reading price series from {}", path);
            let points = load_series(path)?;
            let pcr = env_config
                .input_pcr
                .context("PREDICTOR_PCR must be set when PREDICTOR_INPUT is used")?;
            (points, pcr)
        }
        None => {
            if !config.simulator.enabled {
                anyhow::bail!("No PREDICTOR_INPUT given and the simulator is disabled");
            }
            let mut simulator = QuoteSimulator::new(config.simulator.clone());
            let mut history = PriceHistory::new(config.history.capacity);
            history.extend(simulator.series(config.simulator.points));

            tracing::info!(
                "Simulated {} of {} points (ready: {}), last price {:.2}",
                history.len(),
                history.capacity(),
                history.ready(),
                history.latest().map(|p| p.price).unwrap_or_default()
            );
            (history.points(), simulator.next_pcr())
        }
    };

    tracing::info!("Evaluating {} points, PCR {:.2}", points.len(), pcr);

    let result = engine.predict_checked(&points, pcr, &PredictOptions::default())?;

    if let Some(signals) = &result.signals {
        tracing::info!(
            "Signals: trend={} momentum={} pcr={} rsi={} volatility={}",
            signals.trend.label(),
            signals.momentum.label(),
            signals.pcr.label(),
            signals.rsi.label(),
            signals.volatility.label()
        );
    }
    for line in &result.analysis {
        tracing::info!("{}", line);
    }
    if let Some(reason) = &result.reason {
        tracing::warn!("{}", reason);
    }

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
