use crate::data::types::OptionChainSnapshot;
use crate::indicators::round_to;

/// Aggregate put/call ratio for a chain snapshot.
///
/// Each contract contributes its volume, falling back to open interest when
/// no volume is quoted. Returns `None` when there is no call activity.
pub fn put_call_ratio(chain: &OptionChainSnapshot) -> Option<f64> {
    let call_sum: f64 = chain.calls.iter().map(|c| c.activity()).sum();
    let put_sum: f64 = chain.puts.iter().map(|p| p.activity()).sum();

    if call_sum == 0.0 {
        return None;
    }

    Some(round_to(put_sum / call_sum, 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::OptionContract;

    fn contract(strike: f64, volume: Option<f64>, open_interest: Option<f64>) -> OptionContract {
        OptionContract {
            strike,
            volume,
            open_interest,
            implied_volatility: None,
            last_price: None,
        }
    }

    #[test]
    fn test_pcr_from_volume() {
        let chain = OptionChainSnapshot {
            calls: vec![contract(100.0, Some(200.0), None), contract(105.0, Some(100.0), None)],
            puts: vec![contract(95.0, Some(150.0), None)],
        };

        assert_eq!(put_call_ratio(&chain), Some(0.5));
    }

    #[test]
    fn test_pcr_falls_back_to_open_interest() {
        let chain = OptionChainSnapshot {
            calls: vec![contract(100.0, None, Some(300.0))],
            puts: vec![contract(100.0, Some(100.0), Some(9999.0))],
        };

        // Put side has volume so its open interest is ignored
        assert_eq!(put_call_ratio(&chain), Some(0.3333));
    }

    #[test]
    fn test_pcr_no_call_activity() {
        let chain = OptionChainSnapshot {
            calls: vec![contract(100.0, None, None)],
            puts: vec![contract(100.0, Some(50.0), None)],
        };

        assert_eq!(put_call_ratio(&chain), None);
        assert_eq!(put_call_ratio(&OptionChainSnapshot::default()), None);
    }
}
