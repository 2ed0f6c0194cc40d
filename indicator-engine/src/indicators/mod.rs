pub mod atr;
pub mod true_range;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use common::{OhlcSeries, ParamSpec, Result, Series};

pub use atr::{calculate_atr, AtrStream, AverageTrueRange};
pub use true_range::{calculate_true_range, TrueRange, TrueRangeStream};

/// Input series consumed by the price-range indicators
pub const OHLC_INPUTS: &[&str] = &["high", "low", "close"];

/// A named transform over aligned price series.
///
/// Implementors declare what they read (`inputs`), what they expose
/// (`outputs`) and how they are configured (`params`). The value at index
/// `i` of every output depends only on inputs at indices `<= i`.
pub trait Indicator: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn aliases(&self) -> &'static [&'static str];

    /// Family the indicator belongs to, e.g. "volatility"
    fn group(&self) -> &'static str;

    fn inputs(&self) -> &'static [&'static str];

    /// Names of the series present in the result of [`Indicator::compute`]
    fn outputs(&self) -> &'static [&'static str];

    fn params(&self) -> Vec<ParamSpec>;

    /// Leading indices left without a value when all inputs are present
    fn lookback(&self) -> usize;

    /// Evaluate over the whole input
    fn compute(&self, input: &OhlcSeries) -> Result<IndicatorOutput>;
}

/// Output series of one evaluation, keyed by output name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndicatorOutput {
    outputs: BTreeMap<&'static str, Series>,
}

impl IndicatorOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, series: Series) -> Self {
        self.outputs.insert(name, series);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.outputs.get(name)
    }

    /// Value of output `name` at a specific index
    pub fn get_at(&self, name: &str, idx: usize) -> Option<f64> {
        self.outputs.get(name).and_then(|s| s.get(idx))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outputs.keys().copied()
    }

    pub fn into_series(mut self, name: &str) -> Option<Series> {
        self.outputs.remove(name)
    }
}
