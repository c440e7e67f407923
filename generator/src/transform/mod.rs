//! Transformation module.
//!
//! This module turns raw CSV rows into site entries:
//! - Clean: text cleanup shared by every field
//! - Mapping: which source columns feed which entry field
//! - Normalizer: raw rows to entries
//! - Slug: URL-safe, run-unique page names
//! - Pipeline: the full CSV to site run

pub mod clean;
pub mod mapping;
pub mod normalizer;
pub mod pipeline;
pub mod slug;

pub use clean::{clean_optional, clean_review_count, clean_text};
pub use mapping::{ColumnMapping, Field, FieldSource};
pub use normalizer::{normalize_all, normalize_record, NormalizeResult, SkippedRow};
pub use pipeline::*;
pub use slug::{slugify, SlugRegistry, FALLBACK_SLUG};
