use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyIndexError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::config::EvalOptions;
use crate::error::StatisticError;
use crate::moving_average::MovingAverage;
use crate::params::MovingAverageParams;
use crate::statistic::{Statistic, StatisticSpec};

impl From<StatisticError> for PyErr {
    fn from(err: StatisticError) -> PyErr {
        let msg = err.to_string();
        match err {
            StatisticError::InvalidOffset { .. } => PyIndexError::new_err(msg),
            StatisticError::UndefinedStatistic { .. } => PyZeroDivisionError::new_err(msg),
            StatisticError::InvalidParameter { .. } | StatisticError::Spec(_) => {
                PyValueError::new_err(msg)
            }
        }
    }
}

/// EWMA statistic of `x` at each offset in `t`.
#[pyfunction]
pub fn ewma_statistic<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    t: PyReadonlyArray1<'py, i64>,
    lam: f64,
    x0: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let series = x.as_slice()?;
    let offsets = t.as_slice()?;
    let out = py.allow_threads(|| crate::ewma::ewma_statistic(series, offsets, lam, x0))?;
    Ok(out.into_pyarray(py))
}

/// Moving average of the last `omega` observations at each offset in `t`.
#[pyfunction]
pub fn ma_statistic<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    t: PyReadonlyArray1<'py, i64>,
    omega: i64,
) -> PyResult<&'py PyArray1<f64>> {
    let series = x.as_slice()?;
    let offsets = t.as_slice()?;
    let stat = MovingAverage::new(MovingAverageParams::from_signed(omega)?);
    let out = py.allow_threads(|| stat.evaluate(series, offsets, &EvalOptions::default()))?;
    Ok(out.into_pyarray(py))
}

/// Evaluates a JSON statistic spec, optionally forcing `"direct"` or
/// `"recursive"` evaluation.
#[pyfunction]
#[pyo3(signature = (spec, x, t, strategy=None))]
pub fn evaluate<'py>(
    py: Python<'py>,
    spec: &str,
    x: PyReadonlyArray1<'py, f64>,
    t: PyReadonlyArray1<'py, i64>,
    strategy: Option<&str>,
) -> PyResult<&'py PyArray1<f64>> {
    let stat = StatisticSpec::from_json(spec)?.build()?;
    let mut options = EvalOptions::default();
    if let Some(name) = strategy {
        options.strategy = name.parse()?;
    }
    let series = x.as_slice()?;
    let offsets = t.as_slice()?;
    let out = py.allow_threads(|| stat.evaluate(series, offsets, &options))?;
    Ok(out.into_pyarray(py))
}

#[pymodule]
fn chartstat(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ewma_statistic, m)?)?;
    m.add_function(wrap_pyfunction!(ma_statistic, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    Ok(())
}
