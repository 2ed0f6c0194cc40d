pub mod config;
pub mod error;
pub mod types;

pub use config::{
    validate_period, AtrParams, MovingAverageKind, ParamSpec, ParamValue, TrueRangeParams,
    DEFAULT_PERIOD, DEFAULT_WINDOW,
};
pub use error::{IndicatorError, Result};
pub use types::*;
