use serde::Deserialize;

use crate::config::EvalOptions;
use crate::error::Result;
use crate::ewma::Ewma;
use crate::moving_average::MovingAverage;
use crate::params::{EwmaParams, MovingAverageParams};

/// A point statistic evaluated at caller-chosen offsets into a series.
///
/// Offset `k` means "after `k` observations": the latest value seen is
/// `series[k - 1]`. Output has one value per offset, in offset order.
pub trait Statistic: Send + Sync {
    fn name(&self) -> &'static str;

    fn evaluate(&self, series: &[f64], offsets: &[i64], options: &EvalOptions) -> Result<Vec<f64>>;
}

/// Statistic description as supplied by a host, e.g.
/// `{"kind":"ewma","lambda":0.2,"baseline":10.0}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatisticSpec {
    Ewma { lambda: f64, baseline: f64 },
    MovingAverage { window: i64 },
}

impl StatisticSpec {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn build(&self) -> Result<Box<dyn Statistic>> {
        let stat: Box<dyn Statistic> = match *self {
            Self::Ewma { lambda, baseline } => Box::new(Ewma::new(EwmaParams::new(lambda, baseline)?)),
            Self::MovingAverage { window } => {
                Box::new(MovingAverage::new(MovingAverageParams::from_signed(window)?))
            }
        };
        Ok(stat)
    }
}
