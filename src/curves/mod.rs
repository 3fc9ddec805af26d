//! Epidemic curve pipeline: loads the daily S/I/R series produced by the
//! sequential simulation and renders it as an animated GIF that reveals the
//! curve day by day. When animation encoding fails the pipeline falls back
//! to a static snapshot of the final state instead of propagating the error.

pub mod chart;
pub mod loader;

pub use chart::{render_animation, render_static};

use crate::config::VizConfig;
use crate::error::VizError;

/// CSV artifact written by the sequential simulation.
pub const SEQUENTIAL_RESULTS: &str = "Resultados_Secuencial.csv";

/// Animated output artifact.
pub const ANIMATION_FILE: &str = "Evolucion_SIR.gif";

/// Static fallback artifact, written only when GIF encoding fails.
pub const FINAL_SNAPSHOT_FILE: &str = "Curvas_SIR_Final.png";

/// One row of simulation output: population counts for a single day.
///
/// Rows are ordered by strictly increasing day starting at 0; the animation
/// relies on index order matching day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecord {
    pub day: u32,
    pub susceptible: u64,
    pub infected: u64,
    pub recovered: u64,
}

/// Frame title used for the animation and the fallback snapshot.
pub(crate) fn frame_title(day: u32) -> String {
    format!("Evolución de la Epidemia (Día {})", day)
}

/// Run the animation pipeline end to end.
///
/// A missing or malformed input aborts only this pipeline; a rendering
/// failure during GIF encoding is swallowed and degrades to a static
/// snapshot of the final frame.
pub fn run(config: &VizConfig) -> Result<(), VizError> {
    let input = config.data_dir.join(SEQUENTIAL_RESULTS);
    let records = loader::load(&input)?;
    log::info!("Loaded {} daily records from {}", records.len(), input.display());

    let final_day = records.last().map(|r| r.day).unwrap_or(0);
    let gif_path = config.data_dir.join(ANIMATION_FILE);
    match chart::render_animation(&records, config, &gif_path) {
        Ok(()) => {
            log::info!("Animation written: {}", gif_path.display());
        }
        Err(e) => {
            log::warn!("{}; falling back to a static snapshot", e);
            let png_path = config.data_dir.join(FINAL_SNAPSHOT_FILE);
            chart::render_static(&records, config, &frame_title(final_day), &png_path)?;
            log::info!("Snapshot written: {}", png_path.display());
        }
    }

    Ok(())
}
