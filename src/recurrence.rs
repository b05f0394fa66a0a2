//! Sequential EWMA and window-sum kernels.
//!
//! Used when a whole batch of offsets is answered from one pass over the
//! series instead of re-summing the history for every offset.
//!
//! Window means are always summed from the window itself, never from
//! differences of running sums.

/// One EWMA update: weight `lambda` on the new value, `1 - lambda` on the
/// previous statistic.
#[inline(always)]
pub fn ewma_step(prev: f64, value: f64, lambda: f64) -> f64 {
    lambda * value + (1.0 - lambda) * prev
}

/// EWMA statistic after `0..=upto` observations; entry 0 is the baseline.
pub fn ewma_path(series: &[f64], upto: usize, lambda: f64, baseline: f64) -> Vec<f64> {
    let mut path = Vec::with_capacity(upto + 1);
    let mut z = baseline;
    path.push(z);
    for &x in series.iter().take(upto) {
        z = ewma_step(z, x, lambda);
        path.push(z);
    }
    path
}

/// Mean of `series[k - min(k, window)..k]`. Requires `1 <= k <= series.len()`.
pub fn window_mean(series: &[f64], k: usize, window: usize) -> f64 {
    let span = &series[k.saturating_sub(window)..k];
    span.iter().sum::<f64>() / span.len() as f64
}

/// [`window_mean`] for `k = 1..=upto`; entry `k - 1` belongs to offset `k`.
pub fn window_means(series: &[f64], upto: usize, window: usize) -> Vec<f64> {
    (1..=upto).map(|k| window_mean(series, k, window)).collect()
}
