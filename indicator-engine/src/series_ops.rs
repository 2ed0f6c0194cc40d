//! Index-aligned primitives over [`Series`].
//!
//! A missing value at an index in any operand yields a missing value at
//! that index in the result.

use common::{IndicatorError, Result, Series};

/// Shift a series forward by `lag` bars
///
/// `result[i] = series[i - lag]` for `i >= lag`, missing before that.
pub fn shift(series: &Series, lag: i64) -> Result<Series> {
    if lag < 0 {
        return Err(IndicatorError::InvalidLag { lag });
    }
    let lag = usize::try_from(lag).map_err(|_| IndicatorError::InvalidLag { lag })?;

    let n = series.len();
    let lag = lag.min(n);
    let values = series.as_slice();

    Ok(std::iter::repeat(None)
        .take(lag)
        .chain(values[..n - lag].iter().copied())
        .collect())
}

/// Element-wise maximum of `series` and `floor`
pub fn clip_lower(series: &Series, floor: &Series) -> Result<Series> {
    zip_with(series, floor, f64::max)
}

/// Element-wise minimum of `series` and `ceil`
pub fn clip_upper(series: &Series, ceil: &Series) -> Result<Series> {
    zip_with(series, ceil, f64::min)
}

/// Element-wise `a - b`
pub fn subtract(a: &Series, b: &Series) -> Result<Series> {
    zip_with(a, b, |x, y| x - y)
}

fn zip_with(a: &Series, b: &Series, op: impl Fn(f64, f64) -> f64) -> Result<Series> {
    if a.len() != b.len() {
        return Err(IndicatorError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| Some(op(x?, y?)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[Option<f64>]) -> Series {
        Series::new(values.to_vec())
    }

    #[test]
    fn test_shift_by_one() {
        let s = Series::from_values(&[1.0, 2.0, 3.0]);
        let shifted = shift(&s, 1).unwrap();
        assert_eq!(shifted, series(&[None, Some(1.0), Some(2.0)]));
    }

    #[test]
    fn test_shift_zero_is_identity() {
        let s = series(&[None, Some(2.0), Some(3.0)]);
        assert_eq!(shift(&s, 0).unwrap(), s);
    }

    #[test]
    fn test_shift_past_end() {
        let s = Series::from_values(&[1.0, 2.0]);
        assert_eq!(shift(&s, 2).unwrap(), Series::none(2));
        assert_eq!(shift(&s, 10).unwrap(), Series::none(2));
    }

    #[test]
    fn test_shift_negative_lag() {
        let s = Series::from_values(&[1.0]);
        let err = shift(&s, -1).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidLag { lag: -1 }));
    }

    #[test]
    fn test_shift_empty() {
        assert!(shift(&Series::default(), 1).unwrap().is_empty());
    }

    #[test]
    fn test_clip_lower_and_upper() {
        let a = series(&[Some(1.0), Some(5.0), None]);
        let b = series(&[Some(3.0), Some(2.0), Some(4.0)]);

        assert_eq!(clip_lower(&a, &b).unwrap(), series(&[Some(3.0), Some(5.0), None]));
        assert_eq!(clip_upper(&a, &b).unwrap(), series(&[Some(1.0), Some(2.0), None]));
    }

    #[test]
    fn test_subtract_propagates_missing() {
        let a = series(&[None, Some(5.0), Some(7.0)]);
        let b = series(&[Some(1.0), None, Some(2.5)]);
        assert_eq!(subtract(&a, &b).unwrap(), series(&[None, None, Some(4.5)]));
    }

    #[test]
    fn test_length_mismatch() {
        let a = Series::from_values(&[1.0, 2.0, 3.0]);
        let b = Series::from_values(&[1.0, 2.0]);

        for result in [clip_lower(&a, &b), clip_upper(&a, &b), subtract(&a, &b)] {
            assert!(matches!(
                result,
                Err(IndicatorError::LengthMismatch {
                    expected: 3,
                    actual: 2
                })
            ));
        }
    }
}
