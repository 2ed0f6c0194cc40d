use chrono::{DateTime, Duration, TimeZone, Utc};
use common::Bar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a reproducible random-walk price series
///
/// The same `seed` always yields the same bars. Every bar satisfies
/// `low <= min(open, close)` and `high >= max(open, close)`, and consecutive
/// bars may gap away from the previous close.
///
/// A non-positive or non-finite `initial_price` yields no bars.
pub fn generate_synthetic_bars(count: usize, initial_price: f64, seed: u64) -> Vec<Bar> {
    if !(initial_price.is_finite() && initial_price > 0.0) {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut bars = Vec::with_capacity(count);

    let mut price = initial_price;
    let start_date = start_date();

    let daily_volatility = 0.02;
    let drift = 0.0002;

    for i in 0..count {
        let date = start_date + Duration::days(i as i64);

        let random_return: f64 = rng.gen_range(-1.0..1.0);
        let daily_return = drift + daily_volatility * random_return;
        let new_price = price * (1.0 + daily_return);

        // Open away from the previous close now and then
        let gap = if rng.gen_bool(0.1) {
            price * rng.gen_range(-0.03..0.03)
        } else {
            0.0
        };

        let intraday_range = price * rng.gen_range(0.005..0.03);
        let open = price + gap;
        let close = new_price;

        let high = open.max(close) + rng.gen::<f64>() * intraday_range / 2.0;
        let low = open.min(close) - rng.gen::<f64>() * intraday_range / 2.0;

        let volume = rng.gen_range(1_000_000u64..5_000_000);

        bars.push(Bar::new(date, open, high, low, close, volume));

        price = new_price;
    }

    bars
}

fn start_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
