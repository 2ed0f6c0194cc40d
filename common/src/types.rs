use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// OHLCV bar data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Ordered values, one per bar index.
///
/// `None` marks an index where the producing computation does not have
/// enough history yet (warm-up). It is never an error and never NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Option<f64>>);

impl Series {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }

    /// Series of `len` indices with no value anywhere
    pub fn none(len: usize) -> Self {
        Self(vec![None; len])
    }

    /// Series where every index holds a value
    pub fn from_values(values: &[f64]) -> Self {
        Self(values.iter().copied().map(Some).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `idx`, `None` when out of range or in warm-up
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.get(idx).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Option<f64>> {
        self.0
    }

    pub fn first_valid_index(&self) -> Option<usize> {
        self.0.iter().position(Option::is_some)
    }

    /// Length of the leading run of missing values
    pub fn warmup_len(&self) -> usize {
        self.first_valid_index().unwrap_or(self.0.len())
    }

    pub fn last(&self) -> Option<f64> {
        self.0.last().copied().flatten()
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }
}

impl FromIterator<Option<f64>> for Series {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The aligned `high`, `low` and `close` inputs of a price indicator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OhlcSeries {
    high: Series,
    low: Series,
    close: Series,
}

impl OhlcSeries {
    /// Build from raw price columns, which must all have the same length
    pub fn new(high: &[f64], low: &[f64], close: &[f64]) -> Result<Self> {
        let expected = high.len();
        for actual in [low.len(), close.len()] {
            if actual != expected {
                return Err(IndicatorError::LengthMismatch { expected, actual });
            }
        }

        Ok(Self {
            high: Series::from_values(high),
            low: Series::from_values(low),
            close: Series::from_values(close),
        })
    }

    pub fn from_bars(bars: &[Bar]) -> Self {
        Self {
            high: bars.iter().map(|b| Some(b.high)).collect(),
            low: bars.iter().map(|b| Some(b.low)).collect(),
            close: bars.iter().map(|b| Some(b.close)).collect(),
        }
    }

    pub fn high(&self) -> &Series {
        &self.high
    }

    pub fn low(&self) -> &Series {
        &self.low
    }

    pub fn close(&self) -> &Series {
        &self.close
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }
}
