//! True Range, as defined by J. Welles Wilder Jr. in *New Concepts in
//! Technical Trading Systems* (1978).
//!
//! `max(high - low, |high - prev_close|, |prev_close - low|)`, which reduces to
//! `max(high, prev_close) - min(low, prev_close)`. The second form is the one
//! computed here.

use tracing::debug;

use common::{Bar, OhlcSeries, ParamSpec, Result, Series, TrueRangeParams};

use super::{Indicator, IndicatorOutput, OHLC_INPUTS};
use crate::series_ops::{clip_lower, clip_upper, shift, subtract};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrueRange {
    params: TrueRangeParams,
}

impl TrueRange {
    pub const OUTPUT: &'static str = "tr";

    /// Fails with `InvalidPeriod` for a non-positive period, even though the
    /// period does not enter the formula.
    pub fn new(params: TrueRangeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn period(&self) -> i64 {
        self.params.period
    }

    /// Index 0 never has a previous close
    pub const fn warmup() -> usize {
        1
    }

    /// Calculate the `tr` series
    pub fn calculate(&self, input: &OhlcSeries) -> Result<Series> {
        let prev_close = shift(input.close(), 1)?;
        let true_high = clip_lower(&prev_close, input.high())?;
        let true_low = clip_upper(&prev_close, input.low())?;
        subtract(&true_high, &true_low)
    }

    /// Start a bar-by-bar evaluation
    pub fn stream(&self) -> TrueRangeStream {
        TrueRangeStream::default()
    }
}

impl Indicator for TrueRange {
    fn name(&self) -> &'static str {
        "truerange"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["TR", "TrueRange", "trange", "TRANGE"]
    }

    fn group(&self) -> &'static str {
        "volatility"
    }

    fn inputs(&self) -> &'static [&'static str] {
        OHLC_INPUTS
    }

    fn outputs(&self) -> &'static [&'static str] {
        &["tr"]
    }

    fn params(&self) -> Vec<ParamSpec> {
        self.params.describe()
    }

    fn lookback(&self) -> usize {
        Self::warmup()
    }

    fn compute(&self, input: &OhlcSeries) -> Result<IndicatorOutput> {
        debug!(indicator = self.name(), bars = input.len(), "computing");
        let tr = self.calculate(input)?;
        Ok(IndicatorOutput::new().with(Self::OUTPUT, tr))
    }
}

/// Incremental True Range, one bar at a time
#[derive(Debug, Clone, Default)]
pub struct TrueRangeStream {
    prev_close: Option<f64>,
}

impl TrueRangeStream {
    pub fn next(&mut self, high: f64, low: f64, close: f64) -> Option<f64> {
        let tr = self
            .prev_close
            .map(|prev_close| prev_close.max(high) - prev_close.min(low));
        self.prev_close = Some(close);
        tr
    }

    pub fn next_bar(&mut self, bar: &Bar) -> Option<f64> {
        self.next(bar.high, bar.low, bar.close)
    }
}

/// Calculate True Range from raw price columns
///
/// # Arguments
/// * `highs` - Slice of high prices
/// * `lows` - Slice of low prices
/// * `closes` - Slice of closing prices
///
/// # Returns
/// Series of True Range values, missing at index 0
pub fn calculate_true_range(highs: &[f64], lows: &[f64], closes: &[f64]) -> Result<Series> {
    let input = OhlcSeries::new(highs, lows, closes)?;
    TrueRange::default().calculate(&input)
}
