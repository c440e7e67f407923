//! CSV loader with encoding and delimiter auto-detection.
//!
//! Turns the scraper export into [`RawRecord`]s keyed by the header row,
//! verbatim. Rows shorter than the header are padded with empty strings so
//! every record carries every header key. No shop-specific logic here.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// Delimiters considered by [`detect_delimiter`], in tie-break order.
const CANDIDATE_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

/// Title used in the raw dump when a row's title column is empty.
const UNTITLED_PREFIX: &str = "肉桂捲 #";

// =============================================================================
// RawRecord
// =============================================================================

/// One unprocessed source row: column key -> cell text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRecord {
    values: BTreeMap<String, String>,
}

impl RawRecord {
    /// Build a record by zipping headers with cells, padding missing cells.
    pub fn from_row(headers: &[String], cells: &[&str]) -> Self {
        let values = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let cell = cells.get(i).copied().unwrap_or("");
                (header.clone(), cell.to_string())
            })
            .collect();
        Self { values }
    }

    /// Build a record from explicit key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Cell text for `key`, or `""` if the column does not exist.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records, one per data row
    pub records: Vec<RawRecord>,
    /// Detected encoding
    pub encoding: String,
    /// Detected or forced delimiter
    pub delimiter: char,
    /// Column headers, verbatim
    pub headers: Vec<String>,
}

// =============================================================================
// Detection
// =============================================================================

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as UTF-8 outright; anything else goes to chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "big5" => "big5".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding, lossily.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).into_owned(),
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        "big5" => encoding_rs::BIG5.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Falls back to a comma when no candidate appears.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &CANDIDATE_DELIMITERS {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a CSV file with auto-detection of encoding and delimiter.
///
/// A missing or unreadable file is fatal.
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    parse_csv_file_with(path, None)
}

/// Parse a CSV file, optionally forcing the delimiter.
pub fn parse_csv_file_with<P: AsRef<Path>>(
    path: P,
    delimiter: Option<char>,
) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_with(&bytes, delimiter)
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    parse_bytes_with(bytes, None)
}

/// Parse CSV bytes, optionally forcing the delimiter.
pub fn parse_bytes_with(bytes: &[u8], delimiter: Option<char>) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    parse_str(&content, delimiter, encoding)
}

/// Parse decoded CSV text with an explicit delimiter.
pub fn parse_str(content: &str, delimiter: char, encoding: String) -> CsvResult<ParseResult> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let delimiter_byte = u8::try_from(delimiter).map_err(|_| CsvError::Parse {
        line: 1,
        message: format!("delimiter '{}' is not a single byte", delimiter),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = reader.records();

    let header_row = rows.next().ok_or(CsvError::EmptyFile)??;
    let headers: Vec<String> = header_row.iter().map(str::to_string).collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();
    for row in rows {
        let row = row?;
        let cells: Vec<&str> = row.iter().collect();
        records.push(RawRecord::from_row(&headers, &cells));
    }

    Ok(ParseResult {
        records,
        encoding,
        delimiter,
        headers,
    })
}

// =============================================================================
// Raw dump
// =============================================================================

/// Machine-readable dump of the source headers and rows.
///
/// Each row carries the raw cells plus `_id` (1-based row number) and
/// `_title` (the second column's text, or a numbered fallback).
#[derive(Debug, Clone, Serialize)]
pub struct RawDump {
    pub headers: Vec<String>,
    pub rows: Vec<Map<String, Value>>,
}

impl RawDump {
    pub fn from_parse(result: &ParseResult) -> Self {
        let title_key = result.headers.get(1);

        let rows = result
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let id = idx + 1;
                let mut row: Map<String, Value> = record
                    .iter()
                    .map(|(k, v)| (k.to_string(), json!(v)))
                    .collect();

                let title = title_key
                    .map(|key| record.get(key).trim())
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{}{}", UNTITLED_PREFIX, id));

                row.insert("_id".to_string(), json!(id));
                row.insert("_title".to_string(), json!(title));
                row
            })
            .collect();

        Self {
            headers: result.headers.clone(),
            rows,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
