//! Pluggable moving averages.
//!
//! A [`MovingAverage`] is a stateless strategy. Each evaluation asks it for a
//! fresh [`SmoothingState`] which carries the recursive running value for
//! exactly one output series, so nothing leaks between runs.

pub mod ema;
pub mod sma;
pub mod smma;

use std::fmt;
use std::sync::Arc;

use common::{MovingAverageKind, Series};

pub use ema::ExponentialMovingAverage;
pub use sma::SimpleMovingAverage;
pub use smma::SmoothedMovingAverage;

/// Running memory of one smoothing pass
pub trait SmoothingState: Send {
    /// Feed the next input and return the smoothed value at that index.
    ///
    /// Missing inputs yield a missing output and leave the state untouched.
    fn update(&mut self, value: Option<f64>) -> Option<f64>;
}

/// A smoothing operator: consumes a series and a period, produces a
/// smoothed series of the same length.
///
/// `period` is a validated window length of at least 1.
pub trait MovingAverage: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Start a new pass with its own state
    fn start(&self, period: usize) -> Box<dyn SmoothingState>;

    /// Number of leading outputs left missing when every input is present
    fn warmup(&self, period: usize) -> usize {
        period.saturating_sub(1)
    }

    fn smooth(&self, series: &Series, period: usize) -> Series {
        let mut state = self.start(period);
        series.iter().map(|value| state.update(value)).collect()
    }
}

/// Resolve a configured kind to its operator
pub fn moving_average(kind: MovingAverageKind) -> Arc<dyn MovingAverage> {
    match kind {
        MovingAverageKind::Smoothed => Arc::new(SmoothedMovingAverage),
        MovingAverageKind::Simple => Arc::new(SimpleMovingAverage),
        MovingAverageKind::Exponential => Arc::new(ExponentialMovingAverage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_lookup() {
        assert_eq!(moving_average(MovingAverageKind::Smoothed).name(), "smma");
        assert_eq!(moving_average(MovingAverageKind::Simple).name(), "sma");
        assert_eq!(moving_average(MovingAverageKind::Exponential).name(), "ema");
    }

    #[test]
    fn test_all_seed_with_simple_mean() {
        let input = Series::from_values(&[2.0, 4.0, 6.0, 8.0]);
        for kind in [
            MovingAverageKind::Smoothed,
            MovingAverageKind::Simple,
            MovingAverageKind::Exponential,
        ] {
            let ma = moving_average(kind);
            let out = ma.smooth(&input, 3);
            assert_eq!(out.len(), 4);
            assert_eq!(out.warmup_len(), ma.warmup(3));
            assert_eq!(out.get(2), Some(4.0), "{} seed", ma.name());
        }
    }

    #[test]
    fn test_states_are_independent() {
        let ma = SmoothedMovingAverage;
        let mut first = ma.start(2);
        let mut second = ma.start(2);

        first.update(Some(10.0));
        assert_eq!(first.update(Some(20.0)), Some(15.0));

        // A fresh pass does not see the first pass's history
        assert_eq!(second.update(Some(1.0)), None);
        assert_eq!(second.update(Some(3.0)), Some(2.0));
    }
}
