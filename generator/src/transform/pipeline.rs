//! High-level generation pipeline.
//!
//! Combines every stage in one call: load the CSV, normalize rows into
//! entries, assign slugs, render pages and write the site.
//!
//! # Example
//!
//! ```rust,ignore
//! use rollmap::transform::pipeline::{generate_site, GenerateOptions};
//! use std::path::Path;
//!
//! let report = generate_site(Path::new("google-2025-12-12.csv"), &GenerateOptions::default())?;
//! println!("Wrote {} pages", report.written.len());
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use super::mapping::ColumnMapping;
use super::normalizer::{normalize_all, NormalizeResult, SkippedRow};
use super::slug::SlugRegistry;
use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::Entry;
use crate::parser::{parse_csv_file_with, ParseResult, RawDump, RawRecord};
use crate::render::{write_site, SiteMeta};

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "google-2025-12-12.csv";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT: &str = "docs";

/// Environment variables consulted by [`GenerateOptions::from_env`].
pub const ENV_INPUT: &str = "ROLLMAP_INPUT";
pub const ENV_OUTPUT: &str = "ROLLMAP_OUTPUT";
pub const ENV_MAPPING: &str = "ROLLMAP_MAPPING";

/// Options for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory the site is written to
    pub output_dir: PathBuf,

    /// Column mapping file; the Google Maps layout when absent
    pub mapping_path: Option<PathBuf>,

    /// Force a delimiter instead of detecting it
    pub delimiter: Option<char>,

    /// Also write `data/rolls.json` with the raw rows
    pub write_json: bool,

    /// Order entries by name instead of source order
    pub sort_by_name: bool,

    /// Override the site title
    pub title: Option<String>,

    /// Print the generation date in the index footer
    pub stamp_date: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT),
            mapping_path: None,
            delimiter: None,
            write_json: false,
            sort_by_name: false,
            title: None,
            stamp_date: true,
        }
    }
}

impl GenerateOptions {
    /// Defaults, overridden by `ROLLMAP_OUTPUT` and `ROLLMAP_MAPPING`.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(output) = env::var(ENV_OUTPUT) {
            options.output_dir = PathBuf::from(output);
        }
        if let Ok(mapping) = env::var(ENV_MAPPING) {
            options.mapping_path = Some(PathBuf::from(mapping));
        }
        options
    }
}

/// Input path from `ROLLMAP_INPUT`, or [`DEFAULT_INPUT`].
pub fn input_from_env() -> PathBuf {
    env::var(ENV_INPUT)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT))
}

/// CSV file information
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub delimiter: char,
    pub headers: Vec<String>,
    pub row_count: usize,
}

impl CsvInfo {
    fn from_parse(result: &ParseResult) -> Self {
        Self {
            encoding: result.encoding.clone(),
            delimiter: result.delimiter,
            headers: result.headers.clone(),
            row_count: result.records.len(),
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Entries rendered, in page order
    pub entries: Vec<Entry>,
    /// Rows dropped for lack of a name
    pub skipped: Vec<SkippedRow>,
    /// Every file written, index first
    pub written: Vec<PathBuf>,
    /// Mapping columns the input header lacks
    pub missing_columns: Vec<String>,
    pub csv_info: CsvInfo,
}

/// Normalize records and assign slugs with a fresh registry.
///
/// With `sort_by_name`, entries are ordered by name (stable) before slugs
/// are handed out, so collision suffixes follow the page order.
pub fn build_entries(
    records: &[RawRecord],
    mapping: &ColumnMapping,
    sort_by_name: bool,
) -> NormalizeResult {
    let mut result = normalize_all(records, mapping);

    if sort_by_name {
        result.entries.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let mut slugs = SlugRegistry::new();
    for entry in &mut result.entries {
        entry.slug = slugs.assign(&entry.name);
    }

    result
}

/// Run the whole pipeline for `input`.
pub fn generate_site(input: &Path, options: &GenerateOptions) -> PipelineResult<GenerateReport> {
    log_info(format!("📖 Reading {}", input.display()));
    let parsed = parse_csv_file_with(input, options.delimiter)?;
    let csv_info = CsvInfo::from_parse(&parsed);
    log_success(format!(
        "{} rows, {} columns (encoding {}, delimiter '{}')",
        csv_info.row_count,
        csv_info.headers.len(),
        csv_info.encoding,
        format_delimiter(csv_info.delimiter)
    ));

    let mapping = match &options.mapping_path {
        Some(path) => {
            log_info(format!("Using column mapping: {}", path.display()));
            ColumnMapping::from_file(path)?
        }
        None => ColumnMapping::default(),
    };

    let missing_columns = mapping.missing_columns(&parsed.headers);
    if !missing_columns.is_empty() {
        log_warning(format!(
            "{} mapped column(s) not in input: {}",
            missing_columns.len(),
            missing_columns.join(", ")
        ));
    }

    log_info("⚙️  Normalizing rows...");
    let normalized = build_entries(&parsed.records, &mapping, options.sort_by_name);
    log_success(normalized.summary());
    print_skipped(&normalized.skipped);

    let dump = options.write_json.then(|| RawDump::from_parse(&parsed));

    let meta = site_meta(input, options);

    log_info(format!("🖨️  Writing site to {}", options.output_dir.display()));
    let written = write_site(&options.output_dir, &normalized.entries, &meta, dump.as_ref())?;
    log_success(format!("{} files written", written.len()));

    Ok(GenerateReport {
        entries: normalized.entries,
        skipped: normalized.skipped,
        written,
        missing_columns,
        csv_info,
    })
}

fn site_meta(input: &Path, options: &GenerateOptions) -> SiteMeta {
    let mut meta = SiteMeta {
        source: input
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string),
        ..SiteMeta::default()
    };

    if let Some(title) = &options.title {
        meta.title = title.clone();
    }
    if options.stamp_date {
        meta.generated_on = Some(chrono::Local::now().format("%Y-%m-%d").to_string());
    }

    meta
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn print_skipped(skipped: &[SkippedRow]) {
    if skipped.is_empty() {
        return;
    }

    let sample: Vec<String> = skipped.iter().take(5).map(|s| (s.row + 1).to_string()).collect();
    let more = if skipped.len() > 5 {
        format!(" ... +{}", skipped.len() - 5)
    } else {
        String::new()
    };
    log_info_indent(
        format!("skipped rows without a name: {}{}", sample.join(", "), more),
        1,
    );
}
