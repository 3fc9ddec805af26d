//! Static report pipeline: non-animated SIR charts for the sequential
//! results and for every discovered parallel results file.
//!
//! Parallel results files are named `Resultados_Paralelo_<cores>.csv` by the
//! simulation; the core count is taken from the file name only to label and
//! order the charts. Timing is never derived from file names, that stays the
//! exclusive concern of the timing table.

use std::path::{Path, PathBuf};

use crate::config::VizConfig;
use crate::curves::{self, DailyRecord};
use crate::error::VizError;

const PARALLEL_PREFIX: &str = "Resultados_Paralelo_";
const CSV_SUFFIX: &str = ".csv";

/// Run the static report pipeline.
///
/// A missing sequential file skips only that chart; zero discovered
/// parallel files is not an error. A malformed file aborts the pipeline.
pub fn run(config: &VizConfig) -> Result<(), VizError> {
    let seq_path = config.data_dir.join(curves::SEQUENTIAL_RESULTS);
    match curves::loader::load(&seq_path) {
        Ok(records) => {
            let out = config.data_dir.join("Curvas_SIR_Secuencial.png");
            render_report_chart(&records, config, "Curvas SIR - Simulación Secuencial", &out)?;
        }
        Err(VizError::MissingInput(path)) => {
            log::warn!("Input file not found: {}; skipping the sequential chart", path.display());
        }
        Err(e) => return Err(e),
    }

    for (cores, path) in discover_parallel_results(&config.data_dir)? {
        let records = curves::loader::load(&path)?;
        let out = config.data_dir.join(format!("Curvas_SIR_Paralelo_{}.png", cores));
        let title = format!("Curvas SIR - Simulación Paralela ({} cores)", cores);
        render_report_chart(&records, config, &title, &out)?;
    }

    Ok(())
}

fn render_report_chart(records: &[DailyRecord], config: &VizConfig, title: &str, out: &Path) -> Result<(), VizError> {
    curves::render_static(records, config, title, out)?;
    log::info!("Chart written: {}", out.display());
    Ok(())
}

/// Find parallel results files in the data directory, ordered by their
/// embedded core count.
fn discover_parallel_results(data_dir: &Path) -> Result<Vec<(u32, PathBuf)>, VizError> {
    let entries = std::fs::read_dir(data_dir).map_err(|_| VizError::MissingInput(data_dir.to_path_buf()))?;

    let mut results = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        match parse_parallel_cores(name) {
            Some(cores) => results.push((cores, entry.path())),
            None => {
                if name.starts_with(PARALLEL_PREFIX) {
                    log::debug!("Ignoring parallel results file with unrecognized name: {}", name);
                }
            }
        }
    }

    results.sort_by_key(|(cores, _)| *cores);
    Ok(results)
}

/// Extract the core count from a `Resultados_Paralelo_<cores>.csv` name.
fn parse_parallel_cores(file_name: &str) -> Option<u32> {
    let rest = file_name.strip_prefix(PARALLEL_PREFIX)?;
    let cores = rest.strip_suffix(CSV_SUFFIX)?;
    cores.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parallel_cores() {
        assert_eq!(parse_parallel_cores("Resultados_Paralelo_8.csv"), Some(8));
        assert_eq!(parse_parallel_cores("Resultados_Paralelo_16.csv"), Some(16));
    }

    #[test]
    fn test_parse_parallel_cores_rejects_other_names() {
        assert_eq!(parse_parallel_cores("Resultados_Secuencial.csv"), None);
        assert_eq!(parse_parallel_cores("Resultados_Paralelo_abc.csv"), None);
        assert_eq!(parse_parallel_cores("Resultados_Paralelo_8.txt"), None);
        assert_eq!(parse_parallel_cores("tiempos.csv"), None);
    }

    #[test]
    fn test_discovery_orders_by_core_count() {
        let dir = std::env::temp_dir().join("sir_viz_test_discovery");
        std::fs::create_dir_all(&dir).unwrap();
        for name in ["Resultados_Paralelo_8.csv", "Resultados_Paralelo_2.csv", "tiempos.csv"] {
            std::fs::write(dir.join(name), "").unwrap();
        }

        let results = discover_parallel_results(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        let cores: Vec<u32> = results.iter().map(|(c, _)| *c).collect();
        assert_eq!(cores, vec![2, 8]);
    }

    #[test]
    fn test_discovery_missing_directory() {
        let result = discover_parallel_results(Path::new("/nonexistent/datos"));
        assert!(matches!(result, Err(VizError::MissingInput(_))));
    }
}
