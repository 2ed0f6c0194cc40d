use tracing::trace;

use super::{MovingAverage, SmoothingState};

/// Exponential Moving Average with an SMA seed
///
/// Uses multiplier `2 / (period + 1)` once the first `period` values have
/// been averaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExponentialMovingAverage;

impl MovingAverage for ExponentialMovingAverage {
    fn name(&self) -> &'static str {
        "ema"
    }

    fn start(&self, period: usize) -> Box<dyn SmoothingState> {
        Box::new(EmaState::new(period))
    }
}

#[derive(Debug, Clone)]
struct EmaState {
    period: usize,
    multiplier: f64,
    seed_sum: f64,
    seen: usize,
    value: Option<f64>,
}

impl EmaState {
    fn new(period: usize) -> Self {
        let period = period.max(1);
        Self {
            period,
            multiplier: 2.0 / (period as f64 + 1.0),
            seed_sum: 0.0,
            seen: 0,
            value: None,
        }
    }
}

impl SmoothingState for EmaState {
    fn update(&mut self, value: Option<f64>) -> Option<f64> {
        let value = value?;

        let next = match self.value {
            Some(prev) => (value - prev) * self.multiplier + prev,
            None => {
                self.seed_sum += value;
                self.seen += 1;
                if self.seen < self.period {
                    return None;
                }
                let seed = self.seed_sum / self.period as f64;
                trace!(period = self.period, seed, "ema seeded");
                seed
            }
        };

        self.value = Some(next);
        Some(next)
    }
}
