//! Speedup derivation from raw timing records.

use super::{RunMode, SpeedupPoint, TimingRecord};
use crate::error::VizError;

/// Compute one speedup point per parallel run, relative to the sequential
/// baseline.
///
/// The baseline is the first sequential record's elapsed time. Results are
/// sorted ascending by core count. Duplicate core counts are kept, not
/// deduplicated; a warning is logged so the operator can spot the
/// ambiguity.
///
/// # Returns
///
/// `MissingBaseline` if no sequential record is present.
pub fn compute_speedup(records: &[TimingRecord]) -> Result<Vec<SpeedupPoint>, VizError> {
    let baseline = records
        .iter()
        .find(|r| r.mode == RunMode::Sequential)
        .ok_or(VizError::MissingBaseline)?
        .elapsed_ms;

    let mut points: Vec<SpeedupPoint> = records
        .iter()
        .filter(|r| r.mode == RunMode::Parallel)
        .map(|r| SpeedupPoint {
            cores: r.cores,
            speedup: baseline / r.elapsed_ms,
        })
        .collect();

    // Stable sort keeps duplicate core counts in input order.
    points.sort_by_key(|p| p.cores);

    for pair in points.windows(2) {
        if pair[0].cores == pair[1].cores {
            log::warn!("Duplicate timing entries for {} cores; plotting both", pair[0].cores);
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(elapsed_ms: f64) -> TimingRecord {
        TimingRecord {
            mode: RunMode::Sequential,
            cores: 1,
            elapsed_ms,
        }
    }

    fn parallel(cores: u32, elapsed_ms: f64) -> TimingRecord {
        TimingRecord {
            mode: RunMode::Parallel,
            cores,
            elapsed_ms,
        }
    }

    #[test]
    fn test_speedup_ratios_and_order() {
        let records = vec![sequential(1000.0), parallel(2, 520.0), parallel(4, 300.0)];
        let points = compute_speedup(&records).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].cores, 2);
        assert!((points[0].speedup - 1000.0 / 520.0).abs() < 1e-12);
        assert!((points[0].speedup - 1.923).abs() < 1e-3);
        assert_eq!(points[1].cores, 4);
        assert!((points[1].speedup - 1000.0 / 300.0).abs() < 1e-12);
        assert!((points[1].speedup - 3.333).abs() < 1e-3);
    }

    #[test]
    fn test_unsorted_input_is_sorted_by_cores() {
        let records = vec![parallel(8, 150.0), sequential(1000.0), parallel(2, 520.0), parallel(4, 300.0)];
        let points = compute_speedup(&records).unwrap();

        let cores: Vec<u32> = points.iter().map(|p| p.cores).collect();
        assert_eq!(cores, vec![2, 4, 8]);
    }

    #[test]
    fn test_missing_baseline_is_an_error() {
        let records = vec![parallel(2, 520.0), parallel(4, 300.0)];
        let result = compute_speedup(&records);
        assert!(matches!(result, Err(VizError::MissingBaseline)));
    }

    #[test]
    fn test_first_sequential_record_is_the_baseline() {
        let records = vec![sequential(1000.0), sequential(2000.0), parallel(2, 500.0)];
        let points = compute_speedup(&records).unwrap();
        assert!((points[0].speedup - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_core_counts_are_kept() {
        let records = vec![sequential(1000.0), parallel(4, 300.0), parallel(4, 280.0)];
        let points = compute_speedup(&records).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].cores, 4);
        assert_eq!(points[1].cores, 4);
        assert!((points[0].speedup - 1000.0 / 300.0).abs() < 1e-12);
        assert!((points[1].speedup - 1000.0 / 280.0).abs() < 1e-12);
    }

    #[test]
    fn test_sequential_only_gives_no_points() {
        let points = compute_speedup(&[sequential(1000.0)]).unwrap();
        assert!(points.is_empty());
    }
}
