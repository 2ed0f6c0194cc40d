pub mod synthetic;

pub use synthetic::generate_synthetic_bars;
