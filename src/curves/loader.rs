//! Load and parse the daily S/I/R CSV artifact.

use std::io::ErrorKind;
use std::path::Path;

use super::DailyRecord;
use crate::error::VizError;

/// Header line the simulation writes before the daily rows.
pub const EXPECTED_HEADER: &str = "Dia,Susceptibles,Infectados,Recuperados";

/// Load an ordered daily series from a CSV file.
///
/// # Returns
///
/// `MissingInput` if the file does not exist, `MalformedInput` if the
/// header or any row does not parse into the four expected columns.
pub fn load(path: &Path) -> Result<Vec<DailyRecord>, VizError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VizError::MissingInput(path.to_path_buf()),
        _ => VizError::MalformedInput {
            path: path.to_path_buf(),
            line: 0,
            reason: e.to_string(),
        },
    })?;

    let mut lines = content.lines();
    let header = lines.next().unwrap_or("").trim();
    if header != EXPECTED_HEADER {
        return Err(VizError::MalformedInput {
            path: path.to_path_buf(),
            line: 1,
            reason: format!("expected header '{}', found '{}'", EXPECTED_HEADER, header),
        });
    }

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = parse_record(line).map_err(|reason| VizError::MalformedInput {
            path: path.to_path_buf(),
            line: index + 2,
            reason,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Parse a single data row of the form `day,susceptible,infected,recovered`.
fn parse_record(line: &str) -> Result<DailyRecord, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    }

    let day = fields[0].parse().map_err(|_| format!("invalid day: '{}'", fields[0]))?;
    let susceptible = fields[1].parse().map_err(|_| format!("invalid susceptible count: '{}'", fields[1]))?;
    let infected = fields[2].parse().map_err(|_| format!("invalid infected count: '{}'", fields[2]))?;
    let recovered = fields[3].parse().map_err(|_| format!("invalid recovered count: '{}'", fields[3]))?;

    Ok(DailyRecord {
        day,
        susceptible,
        infected,
        recovered,
    })
}
