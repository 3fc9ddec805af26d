//! Speedup pipeline: loads the benchmark timing table written by the
//! simulation runs, derives the speedup of each parallel run relative to
//! the sequential baseline, and renders a strong-scaling chart.

pub mod analysis;
pub mod chart;
pub mod loader;

pub use analysis::compute_speedup;

use crate::config::VizConfig;
use crate::error::VizError;

/// Headerless timing table appended to by every simulation run.
pub const TIMINGS_FILE: &str = "tiempos.csv";

/// Static output artifact.
pub const SPEEDUP_CHART_FILE: &str = "Speedup.png";

/// Execution mode of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Sequential,
    Parallel,
}

/// One row of the timing table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    pub mode: RunMode,
    /// Core count; the sequential run records 1.
    pub cores: u32,
    pub elapsed_ms: f64,
}

/// Derived scaling point, computed fresh each run and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedupPoint {
    pub cores: u32,
    /// Sequential baseline time divided by this run's time.
    pub speedup: f64,
}

/// Run the speedup pipeline end to end. Any failure aborts only this
/// pipeline.
pub fn run(config: &VizConfig) -> Result<(), VizError> {
    let input = config.data_dir.join(TIMINGS_FILE);
    let records = loader::load(&input)?;
    log::info!("Loaded {} timing records from {}", records.len(), input.display());

    let points = compute_speedup(&records)?;
    if points.is_empty() {
        log::warn!("No parallel timing entries in {}; the scaling chart will be empty", input.display());
    }

    let out = config.data_dir.join(SPEEDUP_CHART_FILE);
    chart::render(&points, &out)?;
    log::info!("Speedup chart written: {}", out.display());

    Ok(())
}
