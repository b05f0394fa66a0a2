//! EWMA statistic evaluated independently at each offset.
//!
//! ```text
//! z(k) = x0 (1 - λ)^k + λ Σ_{j=0}^{k-1} (1 - λ)^j x[k-1-j]
//! ```
//!
//! This is the unrolled recurrence `z_m = λ x_{m-1} + (1 - λ) z_{m-1}`,
//! `z_0 = x0`. `z(0)` is exactly `x0`; with `λ = 1` only the last
//! observation survives.

use crate::config::{EvalOptions, Strategy};
use crate::error::Result;
use crate::offsets::{self, ZeroOffset};
use crate::params::EwmaParams;
use crate::parallel;
use crate::recurrence;
use crate::statistic::Statistic;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ewma {
    params: EwmaParams,
}

impl Ewma {
    pub fn new(params: EwmaParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EwmaParams {
        &self.params
    }
}

impl Statistic for Ewma {
    fn name(&self) -> &'static str {
        "ewma"
    }

    fn evaluate(&self, series: &[f64], offsets: &[i64], options: &EvalOptions) -> Result<Vec<f64>> {
        options.validate()?;
        let checked = offsets::check(offsets, series.len(), ZeroOffset::Allowed)?;
        let lambda = self.params.lambda();
        let baseline = self.params.baseline();
        log::debug!(
            "ewma: {} offsets over {} observations, lambda={lambda}, {:?} x{}",
            checked.len(),
            series.len(),
            options.strategy,
            options.threads
        );

        Ok(match options.strategy {
            Strategy::Direct => parallel::map_offsets(&checked, options.threads, |k| {
                ewma_at(series, k, lambda, baseline)
            }),
            Strategy::Recursive => {
                let upto = checked.iter().copied().max().unwrap_or(0);
                let path = recurrence::ewma_path(series, upto, lambda, baseline);
                checked.iter().map(|&k| path[k]).collect()
            }
        })
    }
}

/// Closed form at a single offset. `k` must not exceed `series.len()`.
fn ewma_at(series: &[f64], k: usize, lambda: f64, baseline: f64) -> f64 {
    let decay = 1.0 - lambda;
    let mut weight = 1.0;
    let mut sum = 0.0;
    for &x in series[..k].iter().rev() {
        sum += weight * x;
        weight *= decay;
    }
    // weight is now (1 - λ)^k
    baseline * weight + lambda * sum
}

/// EWMA statistic of `series` at each of `offsets`.
///
/// Fails with `InvalidParameter` unless `lambda` is in (0, 1], and with
/// `InvalidOffset` for any offset outside `0..=series.len()`.
pub fn ewma_statistic(series: &[f64], offsets: &[i64], lambda: f64, baseline: f64) -> Result<Vec<f64>> {
    Ewma::new(EwmaParams::new(lambda, baseline)?).evaluate(series, offsets, &EvalOptions::default())
}
