use thiserror::Error;

/// Failure of a statistic evaluation. A failing call never returns partial output.
#[derive(Debug, Error)]
pub enum StatisticError {
    /// Offset outside `0..=len` of the series.
    #[error("offset {offset} at position {index} is outside 0..={len}")]
    InvalidOffset { index: usize, offset: i64, len: usize },

    /// Moving average requested before any observation exists (offset 0).
    #[error("moving average at position {index} has no observations (offset 0)")]
    UndefinedStatistic { index: usize },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("malformed statistic spec: {0}")]
    Spec(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatisticError>;

impl StatisticError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
