use tracing::trace;

use super::{MovingAverage, SmoothingState};

/// Wilder's smoothed moving average
///
/// Seeded with the simple mean of the first `period` values, then
/// `out[i] = out[i-1] + (in[i] - out[i-1]) / period`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmoothedMovingAverage;

impl MovingAverage for SmoothedMovingAverage {
    fn name(&self) -> &'static str {
        "smma"
    }

    fn start(&self, period: usize) -> Box<dyn SmoothingState> {
        Box::new(SmmaState::new(period))
    }
}

#[derive(Debug, Clone)]
struct SmmaState {
    period: usize,
    seed_sum: f64,
    seen: usize,
    value: Option<f64>,
}

impl SmmaState {
    fn new(period: usize) -> Self {
        Self {
            period: period.max(1),
            seed_sum: 0.0,
            seen: 0,
            value: None,
        }
    }
}

impl SmoothingState for SmmaState {
    fn update(&mut self, value: Option<f64>) -> Option<f64> {
        let value = value?;
        let period = self.period as f64;

        let next = match self.value {
            Some(prev) => prev + (value - prev) / period,
            None => {
                self.seed_sum += value;
                self.seen += 1;
                if self.seen < self.period {
                    return None;
                }
                let seed = self.seed_sum / period;
                trace!(period = self.period, seed, "smma seeded");
                seed
            }
        };

        self.value = Some(next);
        Some(next)
    }
}
