use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::SimulatorConfig;
use crate::data::types::PricePoint;

/// Lowest put/call ratio the simulator will report.
const MIN_PCR: f64 = 0.05;

/// Random-walk quote feed standing in for live price and option-chain
/// polling.
pub struct QuoteSimulator {
    config: SimulatorConfig,
    rng: StdRng,
    price: f64,
    tick: i64,
}

impl QuoteSimulator {
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let price = config.start_price;
        info!(
            "Quote simulator initialized at {:.2} (drift {:.2}%, volatility {:.2}%)",
            price, config.drift_pct, config.volatility_pct
        );

        Self {
            config,
            rng,
            price,
            tick: 0,
        }
    }

    /// Advance one tick and return the new quote.
    pub fn next_point(&mut self) -> PricePoint {
        let shock = if self.config.volatility_pct > 0.0 {
            self.rng
                .gen_range(-self.config.volatility_pct..=self.config.volatility_pct)
        } else {
            0.0
        };
        let change_pct = self.config.drift_pct + shock;
        // Never let the walk reach zero or below
        self.price = (self.price * (1.0 + change_pct / 100.0)).max(0.01);

        let timestamp = Utc::now() + Duration::seconds(self.tick);
        self.tick += 1;

        PricePoint::new(self.price, timestamp.to_rfc3339())
    }

    /// `count` consecutive quotes, oldest first.
    pub fn series(&mut self, count: usize) -> Vec<PricePoint> {
        (0..count).map(|_| self.next_point()).collect()
    }

    /// Current put/call ratio snapshot.
    pub fn next_pcr(&mut self) -> f64 {
        let jitter = if self.config.pcr_jitter > 0.0 {
            self.rng
                .gen_range(-self.config.pcr_jitter..=self.config.pcr_jitter)
        } else {
            0.0
        };
        (self.config.base_pcr + jitter).max(MIN_PCR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> SimulatorConfig {
        SimulatorConfig {
            seed: Some(seed),
            ..SimulatorConfig::default()
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a: Vec<f64> = QuoteSimulator::new(seeded(42))
            .series(20)
            .iter()
            .map(|p| p.price)
            .collect();
        let b: Vec<f64> = QuoteSimulator::new(seeded(42))
            .series(20)
            .iter()
            .map(|p| p.price)
            .collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_pure_drift_is_monotonic() {
        let config = SimulatorConfig {
            drift_pct: 0.5,
            volatility_pct: 0.0,
            ..seeded(1)
        };
        let mut sim = QuoteSimulator::new(config);
        let points = sim.series(15);

        for pair in points.windows(2) {
            assert!(pair[1].price > pair[0].price);
        }
        let last = points.last().map(|p| p.price).unwrap_or_default();
        assert!((last - 100.0 * 1.005f64.powi(15)).abs() < 1e-6);
    }

    #[test]
    fn test_pcr_stays_in_range() {
        let config = SimulatorConfig {
            base_pcr: 0.1,
            pcr_jitter: 0.5,
            ..seeded(9)
        };
        let mut sim = QuoteSimulator::new(config);

        for _ in 0..200 {
            let pcr = sim.next_pcr();
            assert!((MIN_PCR..=0.6).contains(&pcr), "pcr out of range: {}", pcr);
        }
    }
}
