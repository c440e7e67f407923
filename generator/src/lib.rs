//! # Rollmap - cinnamon roll listings to a static site
//!
//! Rollmap turns a scraped CSV of cinnamon roll shops (Google Maps export)
//! into a static HTML site: one index page with a card per shop and one
//! detail page per shop, ready for GitHub Pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Normalizer │────▶│   Renderer  │
//! │  (UTF8/Big5)│     │  (auto-enc) │     │ (map + slug)│     │ (HTML site) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rollmap::{generate_site, GenerateOptions};
//! use std::path::Path;
//!
//! let report = generate_site(Path::new("google-2025-12-12.csv"), &GenerateOptions::default())?;
//! println!("Generated {} pages", report.entries.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`logs`] - Leveled log helpers over `tracing`
//! - [`models`] - Domain model (Entry)
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Cleaning, column mapping, slugs and pipeline
//! - [`render`] - HTML templates and site writer

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Rendering
pub mod render;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, MappingError, PipelineError, PipelineResult, RenderError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Entry, PLACEHOLDER_IMAGE};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_bytes,
    parse_csv_file,
    parse_csv_file_with,
    ParseResult,
    RawDump,
    RawRecord,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    clean_text,
    normalize_all,
    normalize_record,
    slugify,
    ColumnMapping,
    NormalizeResult,
    SkippedRow,
    SlugRegistry,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    build_entries,
    generate_site,
    input_from_env,
    CsvInfo,
    GenerateOptions,
    GenerateReport,
};

// =============================================================================
// Re-exports - Render
// =============================================================================

pub use render::{render_entry, render_index, write_site, SiteMeta};
