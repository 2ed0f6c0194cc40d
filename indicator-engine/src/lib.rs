pub mod data;
pub mod indicators;
pub mod series_ops;
pub mod smoothing;

pub use data::generate_synthetic_bars;
pub use indicators::{
    calculate_atr, calculate_true_range, AtrStream, AverageTrueRange, Indicator, IndicatorOutput,
    TrueRange, TrueRangeStream,
};
pub use smoothing::{
    moving_average, ExponentialMovingAverage, MovingAverage, SimpleMovingAverage,
    SmoothedMovingAverage, SmoothingState,
};

// Re-export common types
pub use common::{
    AtrParams, Bar, IndicatorError, MovingAverageKind, OhlcSeries, ParamSpec, ParamValue, Result,
    Series, TrueRangeParams,
};
