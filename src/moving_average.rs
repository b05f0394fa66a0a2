//! Fixed-window moving average.
//!
//! At offset `k` the statistic is the mean of the last `min(k, ω)`
//! observations strictly before the query point, so the window shrinks at
//! the start of the series instead of padding. Offset 0 has no observations
//! and fails with [`StatisticError::UndefinedStatistic`].
//!
//! [`StatisticError::UndefinedStatistic`]: crate::StatisticError::UndefinedStatistic

use crate::config::{EvalOptions, Strategy};
use crate::error::Result;
use crate::offsets::{self, ZeroOffset};
use crate::params::MovingAverageParams;
use crate::parallel;
use crate::recurrence;
use crate::statistic::Statistic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    params: MovingAverageParams,
}

impl MovingAverage {
    pub fn new(params: MovingAverageParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MovingAverageParams {
        &self.params
    }
}

impl Statistic for MovingAverage {
    fn name(&self) -> &'static str {
        "moving_average"
    }

    fn evaluate(&self, series: &[f64], offsets: &[i64], options: &EvalOptions) -> Result<Vec<f64>> {
        options.validate()?;
        let checked = offsets::check(offsets, series.len(), ZeroOffset::Undefined)?;
        let window = self.params.window();
        log::debug!(
            "moving average: {} offsets over {} observations, window={window}, {:?} x{}",
            checked.len(),
            series.len(),
            options.strategy,
            options.threads
        );

        Ok(match options.strategy {
            Strategy::Direct => {
                parallel::map_offsets(&checked, options.threads, |k| {
                    recurrence::window_mean(series, k, window)
                })
            }
            Strategy::Recursive => {
                let upto = checked.iter().copied().max().unwrap_or(0);
                let means = recurrence::window_means(series, upto, window);
                checked.iter().map(|&k| means[k - 1]).collect()
            }
        })
    }
}

/// Moving average of `series` over the last `window` observations at each of
/// `offsets`.
pub fn moving_average_statistic(series: &[f64], offsets: &[i64], window: usize) -> Result<Vec<f64>> {
    MovingAverage::new(MovingAverageParams::new(window)?).evaluate(
        series,
        offsets,
        &EvalOptions::default(),
    )
}
