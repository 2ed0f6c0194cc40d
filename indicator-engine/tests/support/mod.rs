#![allow(dead_code)]

use std::path::{Path, PathBuf};

use indicator_engine::Bar;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_bars(name: &str) -> anyhow::Result<Vec<Bar>> {
    let mut reader = csv::Reader::from_path(fixture_path(name))?;
    let bars = reader.deserialize().collect::<Result<Vec<Bar>, _>>()?;
    Ok(bars)
}

/// Expected indicator values, one row per bar
#[derive(Debug, Deserialize)]
pub struct ReferenceRow {
    pub timestamp: String,
    pub tr: Option<f64>,
    pub atr: Option<f64>,
}

pub fn load_reference(name: &str) -> anyhow::Result<Vec<ReferenceRow>> {
    let mut reader = csv::Reader::from_path(fixture_path(name))?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<ReferenceRow>, _>>()?;
    Ok(rows)
}
