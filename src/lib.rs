//! Point statistics for univariate control charts.
//!
//! Two pure functions evaluate a statistic at arbitrary offsets into a
//! series: [`ewma_statistic`] and [`moving_average_statistic`]. Offset `k`
//! counts the observations seen so far, so the latest value at offset `k`
//! is `series[k - 1]`. Every call validates its offsets and parameters up
//! front and either returns one value per offset, in order, or fails whole.
//!
//! With the `python` feature the crate builds as the `chartstat` extension
//! module taking numpy arrays.

mod config;
mod error;
mod ewma;
mod moving_average;
mod offsets;
mod parallel;
mod params;
pub mod recurrence;
mod statistic;

#[cfg(feature = "python")]
mod python;

pub use config::{EvalOptions, Strategy};
pub use error::{Result, StatisticError};
pub use ewma::{ewma_statistic, Ewma};
pub use moving_average::{moving_average_statistic, MovingAverage};
pub use params::{EwmaParams, MovingAverageParams};
pub use statistic::{Statistic, StatisticSpec};
