//! Error types for the Rollmap generation pipeline.
//!
//! - [`CsvError`] - loading the source CSV
//! - [`MappingError`] - loading a column mapping file
//! - [`RenderError`] - writing the generated site
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Conversion is via `From`, so `?` works across the boundaries.
//! Per-row defects (no name, short rows) are never errors; the
//! normalizer skips or pads them.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// CSV Loading Errors
// =============================================================================

/// Errors while loading the source CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV.
    #[error("Invalid CSV at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Header row has no usable column names.
    #[error("No headers found in CSV")]
    NoHeaders,
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CsvError::Io(io),
            kind => CsvError::Parse {
                line,
                message: format!("{:?}", kind),
            },
        }
    }
}

// =============================================================================
// Mapping Errors
// =============================================================================

/// Errors while loading a column mapping file.
#[derive(Debug, Error)]
pub enum MappingError {
    /// IO error.
    #[error("Failed to read mapping: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("Invalid mapping JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The mapping has no candidate column for the name field.
    #[error("Mapping has no source column for the name field")]
    NoNameSource,
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors while writing the generated site.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to create a directory or write a file.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the raw data dump.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the error type returned by [`crate::transform::pipeline::generate_site`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV loading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Mapping error.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Render error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
