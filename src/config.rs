//! Evaluation options shared by every statistic.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Result, StatisticError};

fn available_threads() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

/// How a batch of offsets is turned into statistic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Closed form recomputed for every offset; offsets may run in parallel.
    #[default]
    Direct,
    /// One sequential pass up to the largest offset, then lookups.
    Recursive,
}

impl FromStr for Strategy {
    type Err = StatisticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "direct" => Ok(Self::Direct),
            "recursive" => Ok(Self::Recursive),
            other => Err(StatisticError::parameter(
                "strategy",
                format!("expected \"direct\" or \"recursive\", got {other:?}"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    pub strategy: Strategy,
    /// Worker threads for [`Strategy::Direct`]; ignored by the recursive pass.
    pub threads: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            threads: available_threads(),
        }
    }
}

impl EvalOptions {
    pub fn sequential() -> Self {
        Self {
            strategy: Strategy::Direct,
            threads: 1,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(StatisticError::parameter("threads", "must be at least 1, got 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_direct_with_workers() {
        let options = EvalOptions::default();
        assert_eq!(options.strategy, Strategy::Direct);
        assert!(options.threads >= 1);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn parses_from_json_with_missing_fields() {
        let options: EvalOptions = serde_json::from_str(r#"{"strategy":"recursive"}"#).unwrap();
        assert_eq!(options.strategy, Strategy::Recursive);
        assert_eq!(options.threads, available_threads());

        let options: EvalOptions = serde_json::from_str(r#"{"threads":3}"#).unwrap();
        assert_eq!(options, EvalOptions::default().with_threads(3));
    }

    #[test]
    fn strategy_names() {
        assert_eq!("direct".parse::<Strategy>().unwrap(), Strategy::Direct);
        assert_eq!("recursive".parse::<Strategy>().unwrap(), Strategy::Recursive);
        assert!("fast".parse::<Strategy>().is_err());
    }

    #[test]
    fn zero_threads_rejected() {
        assert!(matches!(
            EvalOptions::sequential().with_threads(0).validate(),
            Err(StatisticError::InvalidParameter { name: "threads", .. })
        ));
    }
}
