use crate::error::{Result, StatisticError};

/// Whether offset 0 is a meaningful query point for a statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZeroOffset {
    Allowed,
    Undefined,
}

/// Converts host offsets into series positions, rejecting the first bad one.
///
/// Offsets are checked in order so the reported error is always the earliest
/// offending position, whichever kind of failure it is.
pub(crate) fn check(offsets: &[i64], len: usize, zero: ZeroOffset) -> Result<Vec<usize>> {
    offsets
        .iter()
        .enumerate()
        .map(|(index, &offset)| {
            let k = usize::try_from(offset)
                .ok()
                .filter(|&k| k <= len)
                .ok_or(StatisticError::InvalidOffset { index, offset, len })?;
            if k == 0 && zero == ZeroOffset::Undefined {
                return Err(StatisticError::UndefinedStatistic { index });
            }
            Ok(k)
        })
        .collect()
}
