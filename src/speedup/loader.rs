//! Load and parse the headerless benchmark timing table.

use std::io::ErrorKind;
use std::path::Path;

use super::{RunMode, TimingRecord};
use crate::error::VizError;

/// Load timing records from a headerless CSV file with three positional
/// columns: `mode,cores,elapsed_ms`.
pub fn load(path: &Path) -> Result<Vec<TimingRecord>, VizError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VizError::MissingInput(path.to_path_buf()),
        _ => VizError::MalformedInput {
            path: path.to_path_buf(),
            line: 0,
            reason: e.to_string(),
        },
    })?;

    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = parse_timing_line(line).map_err(|reason| VizError::MalformedInput {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Parse one timing row. The mode column uses the simulation's own labels:
/// `Secuencial` or `Paralelo`.
fn parse_timing_line(line: &str) -> Result<TimingRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    }

    let mode = match fields[0] {
        "Secuencial" => RunMode::Sequential,
        "Paralelo" => RunMode::Parallel,
        other => return Err(format!("unknown run mode: '{}'", other)),
    };
    let cores: u32 = fields[1].parse().map_err(|_| format!("invalid core count: '{}'", fields[1]))?;
    let elapsed_ms: f64 = fields[2].parse().map_err(|_| format!("invalid elapsed time: '{}'", fields[2]))?;

    Ok(TimingRecord { mode, cores, elapsed_ms })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequential_line() {
        let record = parse_timing_line("Secuencial,1,1000").unwrap();
        assert_eq!(record.mode, RunMode::Sequential);
        assert_eq!(record.cores, 1);
        assert_eq!(record.elapsed_ms, 1000.0);
    }

    #[test]
    fn test_parse_parallel_line_with_fractional_time() {
        let record = parse_timing_line("Paralelo,4,300.5").unwrap();
        assert_eq!(record.mode, RunMode::Parallel);
        assert_eq!(record.cores, 4);
        assert_eq!(record.elapsed_ms, 300.5);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = parse_timing_line("Distributed,4,300").unwrap_err();
        assert!(err.contains("unknown run mode"));
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_timing_line("Paralelo,4").unwrap_err();
        assert!(err.contains("expected 3 fields"));
    }

    #[test]
    fn test_parse_non_numeric_cores() {
        let err = parse_timing_line("Paralelo,four,300").unwrap_err();
        assert!(err.contains("core count"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/tiempos.csv"));
        assert!(matches!(result, Err(VizError::MissingInput(_))));
    }

    #[test]
    fn test_load_reports_offending_line() {
        let path = std::env::temp_dir().join("sir_viz_bad_timing.csv");
        std::fs::write(&path, "Secuencial,1,1000\nParalelo,two,520\n").unwrap();
        let result = load(&path);
        std::fs::remove_file(&path).unwrap();

        match result {
            Err(VizError::MalformedInput { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }
}
