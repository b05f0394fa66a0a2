//! Validated control-chart parameters.
//!
//! Both constructors reject values that would make the statistic meaningless,
//! so an evaluation never has to re-check them.

use crate::error::{Result, StatisticError};

/// Smoothing weight and starting value of an EWMA statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EwmaParams {
    lambda: f64,
    baseline: f64,
}

impl EwmaParams {
    /// `lambda` must be finite and lie in (0, 1]. `baseline` is the value the
    /// statistic takes before any observation (`x0`).
    pub fn new(lambda: f64, baseline: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda <= 0.0 || lambda > 1.0 {
            return Err(StatisticError::parameter(
                "lambda",
                format!("must lie in (0, 1], got {lambda}"),
            ));
        }
        Ok(Self { lambda, baseline })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }
}

/// Window width of a moving-average statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverageParams {
    window: usize,
}

impl MovingAverageParams {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(StatisticError::parameter("window", "must be at least 1, got 0"));
        }
        Ok(Self { window })
    }

    /// Accepts a host integer, which may be negative.
    pub fn from_signed(window: i64) -> Result<Self> {
        let width = usize::try_from(window).map_err(|_| {
            StatisticError::parameter("window", format!("must be at least 1, got {window}"))
        })?;
        Self::new(width)
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lambda_bounds() {
        assert!(EwmaParams::new(1.0, 0.0).is_ok());
        assert!(EwmaParams::new(1e-9, 0.0).is_ok());
        for bad in [0.0, -0.2, 1.000_001, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    EwmaParams::new(bad, 0.0),
                    Err(StatisticError::InvalidParameter { name: "lambda", .. })
                ),
                "lambda {bad} should be rejected"
            );
        }
    }

    #[test]
    fn window_bounds() {
        assert_eq!(MovingAverageParams::new(3).unwrap().window(), 3);
        assert!(MovingAverageParams::new(0).is_err());
        assert!(MovingAverageParams::from_signed(-4).is_err());
        assert!(MovingAverageParams::from_signed(0).is_err());
        assert_eq!(MovingAverageParams::from_signed(7).unwrap().window(), 7);
    }
}
