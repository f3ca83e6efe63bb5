//! CLI errors and their exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error, including malformed points and ranges
//! - 10: invalid setup (grid, field, seeds, options, source, view)
//! - 11: a line stagnated under `--reject-degenerate`
//! - 12: I/O error (output file, snapshot)
//! - 13: bad name or JSON argument (colormap, color-by, `--params`, `--options`)
//! - 14: output serialization error

use std::path::PathBuf;
use streamline_core::TraceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Inputs were rejected before any integration ran.
    #[error("{0}")]
    Setup(TraceError),

    /// Tracing stopped at a zero-magnitude sample.
    #[error("trace aborted: {0}")]
    Degenerate(TraceError),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// I/O failure reported by the renderer.
    #[error("{0}")]
    Io(TraceError),

    #[error("unknown {kind} '{name}' (expected one of: {})", expected.join(", "))]
    UnknownName {
        kind: &'static str,
        name: String,
        expected: &'static [&'static str],
    },

    #[error("invalid {flag} JSON: {source}")]
    Json {
        flag: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Setup(_) => 10,
            CliError::Degenerate(_) => 11,
            CliError::Write { .. } | CliError::Io(_) => 12,
            CliError::UnknownName { .. } | CliError::Json { .. } => 13,
            CliError::Serialization(_) => 14,
        }
    }

    /// Short machine-readable category for `--json` error output.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Setup(_) => "setup",
            CliError::Degenerate(_) => "degenerate",
            CliError::Write { .. } | CliError::Io(_) => "io",
            CliError::UnknownName { .. } | CliError::Json { .. } => "input",
            CliError::Serialization(_) => "serialization",
        }
    }
}

impl From<TraceError> for CliError {
    fn from(e: TraceError) -> Self {
        match e {
            TraceError::DegenerateDirection { .. } => CliError::Degenerate(e),
            TraceError::Io(_) => CliError::Io(e),
            _ => CliError::Setup(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagnation_is_distinct_from_bad_setup() {
        let stalled = CliError::from(TraceError::DegenerateDirection { seed: 3, step: 9 });
        let shape = CliError::from(TraceError::ShapeMismatch {
            what: "field u",
            expected: 9,
            got: 8,
        });
        assert_eq!(stalled.exit_code(), 11);
        assert_eq!(stalled.kind(), "degenerate");
        assert!(stalled.to_string().starts_with("trace aborted"));
        assert!(stalled.to_string().contains("seed 3"));
        assert_eq!(shape.exit_code(), 10);
        assert_eq!(shape.kind(), "setup");
    }

    #[test]
    fn oversized_requests_are_setup_errors() {
        assert_eq!(CliError::from(TraceError::StepCountOverflow(7)).exit_code(), 10);
        let lattice = TraceError::LatticeTooLarge { nx: 1, ny: 2, nz: 3 };
        assert_eq!(CliError::from(lattice).exit_code(), 10);
    }

    #[test]
    fn snapshot_io_routes_to_io() {
        let err = CliError::from(TraceError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn write_error_names_the_path() {
        let err = CliError::Write {
            path: PathBuf::from("out/lines.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.exit_code(), 12);
        let msg = err.to_string();
        assert!(msg.contains("out/lines.json"), "{msg}");
        assert!(msg.contains("no such directory"), "{msg}");
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let err = CliError::UnknownName {
            kind: "colormap",
            name: "rainbow".into(),
            expected: &["viridis", "gray"],
        };
        assert_eq!(err.exit_code(), 13);
        assert_eq!(
            err.to_string(),
            "unknown colormap 'rainbow' (expected one of: viridis, gray)"
        );
    }

    #[test]
    fn bad_flag_json_names_the_flag() {
        let source = serde_json::from_str::<serde_json::Value>("{steps").unwrap_err();
        let err = CliError::Json {
            flag: "--options",
            source,
        };
        assert_eq!(err.exit_code(), 13);
        assert_eq!(err.kind(), "input");
        assert!(err.to_string().starts_with("invalid --options JSON"));
    }
}
