use std::collections::VecDeque;

use super::{MovingAverage, SmoothingState};

/// The window grows on demand past this length
const MAX_PREALLOCATED: usize = 1024;

/// Simple Moving Average over the last `period` present values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleMovingAverage;

impl MovingAverage for SimpleMovingAverage {
    fn name(&self) -> &'static str {
        "sma"
    }

    fn start(&self, period: usize) -> Box<dyn SmoothingState> {
        Box::new(SmaState::new(period))
    }
}

#[derive(Debug, Clone)]
struct SmaState {
    period: usize,
    window: VecDeque<f64>,
    sum: f64,
}

impl SmaState {
    fn new(period: usize) -> Self {
        let period = period.max(1);
        Self {
            period,
            window: VecDeque::with_capacity(period.min(MAX_PREALLOCATED)),
            sum: 0.0,
        }
    }
}

impl SmoothingState for SmaState {
    fn update(&mut self, value: Option<f64>) -> Option<f64> {
        let value = value?;

        // Sliding window
        self.window.push_back(value);
        self.sum += value;
        if self.window.len() > self.period {
            if let Some(oldest) = self.window.pop_front() {
                self.sum -= oldest;
            }
        }

        if self.window.len() < self.period {
            return None;
        }
        Some(self.sum / self.period as f64)
    }
}
