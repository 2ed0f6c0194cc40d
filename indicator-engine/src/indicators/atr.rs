//! Average True Range: a moving average of [`TrueRange`], Wilder-smoothed
//! unless another operator is configured.

use std::sync::Arc;

use tracing::debug;

use common::{AtrParams, Bar, OhlcSeries, ParamSpec, ParamValue, Result, Series};

use super::{Indicator, IndicatorOutput, TrueRange, TrueRangeStream, OHLC_INPUTS};
use crate::smoothing::{moving_average, MovingAverage, SmoothingState};

#[derive(Debug, Clone)]
pub struct AverageTrueRange {
    params: AtrParams,
    period: usize,
    true_range: TrueRange,
    ma: Arc<dyn MovingAverage>,
}

impl AverageTrueRange {
    pub const OUTPUT: &'static str = "atr";

    pub fn new(params: AtrParams) -> Result<Self> {
        let period = params.validate()?;
        let true_range = TrueRange::new(params.true_range())?;
        let ma = moving_average(params.ma);

        Ok(Self {
            params,
            period,
            true_range,
            ma,
        })
    }

    /// Replace the smoothing operator with a custom one
    pub fn with_operator(mut self, ma: Arc<dyn MovingAverage>) -> Self {
        self.ma = ma;
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn operator(&self) -> &dyn MovingAverage {
        self.ma.as_ref()
    }

    /// Calculate the `atr` series
    ///
    /// The intermediate `tr` series is computed once and not exposed.
    pub fn calculate(&self, input: &OhlcSeries) -> Result<Series> {
        let tr = self.true_range.calculate(input)?;
        Ok(self.ma.smooth(&tr, self.period))
    }

    /// Start a bar-by-bar evaluation with fresh smoothing state
    pub fn stream(&self) -> AtrStream {
        AtrStream {
            true_range: self.true_range.stream(),
            smoother: self.ma.start(self.period),
        }
    }
}

impl Default for AverageTrueRange {
    fn default() -> Self {
        let params = AtrParams::default();
        Self {
            period: common::DEFAULT_WINDOW,
            true_range: TrueRange::default(),
            ma: moving_average(params.ma),
            params,
        }
    }
}

impl Indicator for AverageTrueRange {
    fn name(&self) -> &'static str {
        "atr"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ATR", "AverageTrueRange"]
    }

    fn group(&self) -> &'static str {
        "volatility"
    }

    fn inputs(&self) -> &'static [&'static str] {
        OHLC_INPUTS
    }

    fn outputs(&self) -> &'static [&'static str] {
        &["atr"]
    }

    fn params(&self) -> Vec<ParamSpec> {
        let mut specs = self.params.describe();
        for spec in specs.iter_mut().filter(|s| s.name == "ma") {
            spec.value = ParamValue::MovingAverage(self.ma.name());
        }
        specs
    }

    fn lookback(&self) -> usize {
        TrueRange::warmup() + self.ma.warmup(self.period)
    }

    fn compute(&self, input: &OhlcSeries) -> Result<IndicatorOutput> {
        debug!(
            indicator = self.name(),
            bars = input.len(),
            period = self.period,
            ma = self.ma.name(),
            "computing"
        );
        let atr = self.calculate(input)?;
        Ok(IndicatorOutput::new().with(Self::OUTPUT, atr))
    }
}

/// Incremental Average True Range, one bar at a time
pub struct AtrStream {
    true_range: TrueRangeStream,
    smoother: Box<dyn SmoothingState>,
}

impl AtrStream {
    pub fn next(&mut self, high: f64, low: f64, close: f64) -> Option<f64> {
        let tr = self.true_range.next(high, low, close);
        self.smoother.update(tr)
    }

    pub fn next_bar(&mut self, bar: &Bar) -> Option<f64> {
        self.next(bar.high, bar.low, bar.close)
    }
}

/// Calculate Average True Range with Wilder's smoothing
///
/// # Arguments
/// * `highs` - Slice of high prices
/// * `lows` - Slice of low prices
/// * `closes` - Slice of closing prices
/// * `period` - ATR period (typically 14)
///
/// # Returns
/// Series of ATR values, missing for the first `period` bars
pub fn calculate_atr(highs: &[f64], lows: &[f64], closes: &[f64], period: i64) -> Result<Series> {
    let input = OhlcSeries::new(highs, lows, closes)?;
    AverageTrueRange::new(AtrParams::default().with_period(period))?.calculate(&input)
}
