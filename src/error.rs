//! Error type shared by all visualization pipelines.

use std::path::PathBuf;

/// Failure kinds a pipeline can report.
///
/// Every variant is caught at the pipeline boundary in `main`, logged, and
/// confined to the pipeline it occurred in; the run continues with the next
/// pipeline.
#[derive(Debug)]
pub enum VizError {
    /// An expected input file is absent.
    MissingInput(PathBuf),
    /// An input file exists but a line could not be parsed into the
    /// expected columns. `line` is 1-based; 0 means the file as a whole.
    MalformedInput { path: PathBuf, line: usize, reason: String },
    /// The timing table contains no sequential entry to normalize against.
    MissingBaseline,
    /// Chart or animation encoding failed.
    Rendering(String),
}

impl std::fmt::Display for VizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VizError::MissingInput(path) => write!(f, "Input file not found: {}", path.display()),
            VizError::MalformedInput { path, line, reason } => {
                if *line == 0 {
                    write!(f, "Malformed input {}: {}", path.display(), reason)
                } else {
                    write!(f, "Malformed input {} (line {}): {}", path.display(), line, reason)
                }
            }
            VizError::MissingBaseline => write!(f, "No sequential timing entry to use as speedup baseline"),
            VizError::Rendering(msg) => write!(f, "Rendering failed: {}", msg),
        }
    }
}

impl std::error::Error for VizError {}
