use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};

/// Default lookback shared by the volatility indicators
pub const DEFAULT_PERIOD: i64 = 14;

/// `DEFAULT_PERIOD` as a validated window length
pub const DEFAULT_WINDOW: usize = 14;

/// Built-in smoothing operators an average can be configured with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovingAverageKind {
    /// Wilder's smoothed moving average, alpha = 1/period
    #[default]
    Smoothed,
    /// Rolling arithmetic mean
    Simple,
    /// Exponential moving average, alpha = 2/(period + 1)
    Exponential,
}

impl MovingAverageKind {
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Smoothed => "smma",
            Self::Simple => "sma",
            Self::Exponential => "ema",
        }
    }
}

impl fmt::Display for MovingAverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for MovingAverageKind {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "smoothed" | "smma" | "wilder" => Ok(Self::Smoothed),
            "simple" | "sma" => Ok(Self::Simple),
            "exponential" | "ema" => Ok(Self::Exponential),
            other => Err(IndicatorError::InvalidParameter(format!(
                "unknown moving average: {}",
                other
            ))),
        }
    }
}

/// Value carried by a declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    /// Name of a smoothing operator
    MovingAverage(&'static str),
}

/// Declaration of a single named indicator parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub value: ParamValue,
    pub default: ParamValue,
    pub description: &'static str,
}

/// Check a configured period and convert it to a window length
pub fn validate_period(period: i64) -> Result<usize> {
    if period <= 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    usize::try_from(period).map_err(|_| IndicatorError::InvalidPeriod { period })
}

/// True Range parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrueRangeParams {
    /// Not used by the True Range formula itself; kept so that composing
    /// indicators share the same parameter surface.
    pub period: i64,
}

impl Default for TrueRangeParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
        }
    }
}

impl TrueRangeParams {
    pub fn with_period(mut self, period: i64) -> Self {
        self.period = period;
        self
    }

    /// Parse from a JSON object, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<usize> {
        validate_period(self.period)
    }

    pub fn describe(&self) -> Vec<ParamSpec> {
        vec![ParamSpec {
            name: "period",
            value: ParamValue::Integer(self.period),
            default: ParamValue::Integer(DEFAULT_PERIOD),
            description: "Period to consider",
        }]
    }
}

/// Average True Range parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtrParams {
    /// Smoothing window length
    pub period: i64,
    /// Smoothing operator applied to the true range
    pub ma: MovingAverageKind,
}

impl Default for AtrParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            ma: MovingAverageKind::default(),
        }
    }
}

impl AtrParams {
    pub fn with_period(mut self, period: i64) -> Self {
        self.period = period;
        self
    }

    pub fn with_moving_average(mut self, ma: MovingAverageKind) -> Self {
        self.ma = ma;
        self
    }

    /// Parse from a JSON object, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<usize> {
        validate_period(self.period)
    }

    /// Parameters of the inner True Range
    pub fn true_range(&self) -> TrueRangeParams {
        TrueRangeParams {
            period: self.period,
        }
    }

    pub fn describe(&self) -> Vec<ParamSpec> {
        vec![
            ParamSpec {
                name: "period",
                value: ParamValue::Integer(self.period),
                default: ParamValue::Integer(DEFAULT_PERIOD),
                description: "Period to consider",
            },
            ParamSpec {
                name: "ma",
                value: ParamValue::MovingAverage(self.ma.short_name()),
                default: ParamValue::MovingAverage(MovingAverageKind::default().short_name()),
                description: "Moving average to use",
            },
        ]
    }
}
