use crate::data::types::PricePoint;
use tracing::warn;

/// Inputs rejected by the strict validation layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Price at index {0} is not a finite number")]
    NonFinitePrice(usize),

    #[error("Price at index {0} must be positive, got {1}")]
    NonPositivePrice(usize, f64),

    #[error("Put/call ratio must be a finite non-negative number, got {0}")]
    InvalidPcr(f64),
}

/// Check a price series and PCR before they reach the indicators.
///
/// Series length is not checked here; short series are reported through
/// the prediction itself.
pub fn validate_inputs(points: &[PricePoint], pcr: f64) -> Result<(), ValidationError> {
    for (index, point) in points.iter().enumerate() {
        if !point.price.is_finite() {
            warn!("Rejecting series: non-finite price at index {}", index);
            return Err(ValidationError::NonFinitePrice(index));
        }
        if point.price <= 0.0 {
            warn!("Rejecting series: price {} at index {}", point.price, index);
            return Err(ValidationError::NonPositivePrice(index, point.price));
        }
    }

    if !pcr.is_finite() || pcr < 0.0 {
        warn!("Rejecting put/call ratio {}", pcr);
        return Err(ValidationError::InvalidPcr(pcr));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, p)| PricePoint::new(*p, i.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_inputs() {
        assert!(validate_inputs(&series(&[100.0, 101.0]), 0.0).is_ok());
        assert!(validate_inputs(&[], 1.0).is_ok());
    }

    #[test]
    fn test_rejects_bad_prices() {
        assert_eq!(
            validate_inputs(&series(&[100.0, f64::NAN]), 1.0),
            Err(ValidationError::NonFinitePrice(1))
        );
        assert_eq!(
            validate_inputs(&series(&[100.0, 101.0, 0.0]), 1.0),
            Err(ValidationError::NonPositivePrice(2, 0.0))
        );
        assert_eq!(
            validate_inputs(&series(&[f64::INFINITY]), 1.0),
            Err(ValidationError::NonFinitePrice(0))
        );
    }

    #[test]
    fn test_rejects_bad_pcr() {
        let points = series(&[100.0]);
        assert!(matches!(
            validate_inputs(&points, -0.1),
            Err(ValidationError::InvalidPcr(_))
        ));
        assert!(matches!(
            validate_inputs(&points, f64::NAN),
            Err(ValidationError::InvalidPcr(_))
        ));
    }
}
