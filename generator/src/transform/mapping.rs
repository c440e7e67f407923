//! Column mapping definition
//!
//! The scraper names its columns with opaque generated tokens (`qBF1Pd`,
//! `W4Efsd (3)`, ...). A [`ColumnMapping`] lists, for each semantic field,
//! the candidate columns to read in order. Mappings are plain data: the
//! default matches the Google Maps export, and a JSON file can replace it
//! when the input has a different shape.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::clean::{clean_text, is_blank};
use crate::error::{MappingError, MappingResult};
use crate::parser::RawRecord;

fn default_version() -> String {
    "1.0".to_string()
}

// =============================================================================
// Field
// =============================================================================

/// Semantic single-valued fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Rating,
    ReviewCount,
    Category,
    Address,
    Status,
    Hours,
    Phone,
    Price,
    ImageUrl,
    MapUrl,
    OrderUrl,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Name,
        Field::Rating,
        Field::ReviewCount,
        Field::Category,
        Field::Address,
        Field::Status,
        Field::Hours,
        Field::Phone,
        Field::Price,
        Field::ImageUrl,
        Field::MapUrl,
        Field::OrderUrl,
    ];

    /// Key used for this field in mapping JSON.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Rating => "rating",
            Field::ReviewCount => "review_count",
            Field::Category => "category",
            Field::Address => "address",
            Field::Status => "status",
            Field::Hours => "hours",
            Field::Phone => "phone",
            Field::Price => "price",
            Field::ImageUrl => "image_url",
            Field::MapUrl => "map_url",
            Field::OrderUrl => "order_url",
        }
    }
}

// =============================================================================
// FieldSource
// =============================================================================

/// Ordered candidate columns for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSource {
    pub columns: Vec<String>,
}

impl FieldSource {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// First candidate whose cleaned value is non-empty.
    pub fn first_non_empty(&self, record: &RawRecord) -> Option<String> {
        self.columns
            .iter()
            .map(|column| clean_text(record.get(column)))
            .find(|value| !is_blank(value))
    }

    /// Every non-empty cleaned candidate, deduplicated, first-seen order.
    pub fn collect_distinct(&self, record: &RawRecord) -> Vec<String> {
        let mut seen = HashSet::new();
        self.columns
            .iter()
            .map(|column| clean_text(record.get(column)))
            .filter(|value| !is_blank(value))
            .filter(|value| seen.insert(value.clone()))
            .collect()
    }
}

// =============================================================================
// ColumnMapping
// =============================================================================

/// Candidate source columns for every entry field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Version of the mapping format
    #[serde(default = "default_version")]
    pub version: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    pub name: FieldSource,
    #[serde(default)]
    pub rating: FieldSource,
    #[serde(default)]
    pub review_count: FieldSource,
    #[serde(default)]
    pub category: FieldSource,
    #[serde(default)]
    pub address: FieldSource,
    #[serde(default)]
    pub status: FieldSource,
    #[serde(default)]
    pub hours: FieldSource,
    #[serde(default)]
    pub phone: FieldSource,
    #[serde(default)]
    pub price: FieldSource,
    #[serde(default)]
    pub image_url: FieldSource,
    #[serde(default)]
    pub map_url: FieldSource,
    #[serde(default)]
    pub order_url: FieldSource,

    /// Columns gathered (not first-wins) into the highlight list
    #[serde(default)]
    pub highlights: FieldSource,
}

impl ColumnMapping {
    /// Mapping for the Google Maps scraper export.
    pub fn google_maps() -> Self {
        Self {
            version: default_version(),
            description: "Google Maps listing export (scraper-generated column names)".to_string(),
            name: FieldSource::new(["qBF1Pd"]),
            rating: FieldSource::new(["MW4etd"]),
            review_count: FieldSource::new(["UY7F9"]),
            category: FieldSource::new(["W4Efsd"]),
            address: FieldSource::new(["W4Efsd (3)", "W4Efsd (6)"]),
            status: FieldSource::new(["W4Efsd (4)"]),
            hours: FieldSource::new(["W4Efsd (5)"]),
            phone: FieldSource::new(["UsdlK"]),
            price: FieldSource::new(["AJB7ye (2)", "AJB7ye"]),
            image_url: FieldSource::new(["FQ2IWe src", "Jn12ke src"]),
            map_url: FieldSource::new(["hfpxzc href"]),
            order_url: FieldSource::new(["A1zNzb href", "A1zNzb href (2)"]),
            highlights: FieldSource::new([
                "ah5Ghc",
                "ah5Ghc (2)",
                "ah5Ghc (3)",
                "ah5Ghc (4)",
                "ah5Ghc (5)",
                "J8zHNe",
                "bbPy1",
                "AJB7ye",
                "AJB7ye (2)",
                "W4Efsd (6)",
                "W4Efsd (7)",
                "W4Efsd (8)",
                "doJOZc",
            ]),
        }
    }

    /// Candidate columns for a single-valued field.
    pub fn source(&self, field: Field) -> &FieldSource {
        match field {
            Field::Name => &self.name,
            Field::Rating => &self.rating,
            Field::ReviewCount => &self.review_count,
            Field::Category => &self.category,
            Field::Address => &self.address,
            Field::Status => &self.status,
            Field::Hours => &self.hours,
            Field::Phone => &self.phone,
            Field::Price => &self.price,
            Field::ImageUrl => &self.image_url,
            Field::MapUrl => &self.map_url,
            Field::OrderUrl => &self.order_url,
        }
    }

    /// Parse and validate a mapping from a JSON string
    pub fn from_json(json: &str) -> MappingResult<Self> {
        let mapping: Self = serde_json::from_str(json)?;
        mapping.validate()?;
        Ok(mapping)
    }

    /// Load and validate a mapping file
    pub fn from_file(path: &Path) -> MappingResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// A mapping without a name column can never produce an entry.
    pub fn validate(&self) -> MappingResult<()> {
        if self.name.is_empty() {
            return Err(MappingError::NoNameSource);
        }
        Ok(())
    }

    /// All source columns referenced, sorted and deduplicated
    pub fn source_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Field::ALL
            .iter()
            .flat_map(|f| self.source(*f).columns.iter().cloned())
            .chain(self.highlights.columns.iter().cloned())
            .collect();

        columns.sort();
        columns.dedup();
        columns
    }

    /// Referenced columns absent from the input header.
    pub fn missing_columns(&self, headers: &[String]) -> Vec<String> {
        self.source_columns()
            .into_iter()
            .filter(|col| !headers.iter().any(|h| h == col))
            .collect()
    }

    /// One line per field, for display.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for field in Field::ALL {
            out.push_str(&format!(
                "{:<13} <- {}\n",
                field.key(),
                self.source(field).columns.join(" | ")
            ));
        }
        out.push_str(&format!(
            "{:<13} <- {}\n",
            "highlights",
            self.highlights.columns.join(" + ")
        ));
        out
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::google_maps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        RawRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_first_non_empty_prefers_primary() {
        let source = FieldSource::new(["W4Efsd (3)", "W4Efsd (6)"]);

        let both = record(&[("W4Efsd (3)", "Primary St"), ("W4Efsd (6)", "Secondary St")]);
        assert_eq!(source.first_non_empty(&both).as_deref(), Some("Primary St"));

        let secondary = record(&[("W4Efsd (3)", "  "), ("W4Efsd (6)", "Secondary St")]);
        assert_eq!(source.first_non_empty(&secondary).as_deref(), Some("Secondary St"));

        let neither = record(&[("W4Efsd (3)", ""), ("W4Efsd (6)", "·")]);
        assert_eq!(source.first_non_empty(&neither), None);
    }

    #[test]
    fn test_first_non_empty_tolerates_missing_columns() {
        let source = FieldSource::new(["absent", "present"]);
        let rec = record(&[("present", "x")]);
        assert_eq!(source.first_non_empty(&rec).as_deref(), Some("x"));
    }

    #[test]
    fn test_collect_distinct_dedups_in_order() {
        let source = FieldSource::new(["a", "b", "c", "d", "e"]);
        let rec = record(&[
            ("a", "Dine-in"),
            ("b", "\"Dine-in\""),
            ("c", "·"),
            ("d", "Takeaway"),
            ("e", ""),
        ]);
        assert_eq!(source.collect_distinct(&rec), vec!["Dine-in", "Takeaway"]);
    }

    #[test]
    fn test_mapping_json_roundtrip_shape() {
        let mapping = ColumnMapping::google_maps();
        let json = mapping.to_json().unwrap();
        assert!(json.contains("\"address\": [\n    \"W4Efsd (3)\",\n    \"W4Efsd (6)\"\n  ]"));

        let parsed = ColumnMapping::from_json(&json).unwrap();
        assert_eq!(parsed, mapping);
    }

    #[test]
    fn test_partial_mapping_defaults_other_fields() {
        let mapping = ColumnMapping::from_json(r#"{ "name": ["Shop"], "address": ["Addr"] }"#).unwrap();
        assert_eq!(mapping.version, "1.0");
        assert_eq!(mapping.address.columns, vec!["Addr"]);
        assert!(mapping.rating.is_empty());
        assert!(mapping.highlights.is_empty());
    }

    #[test]
    fn test_mapping_without_name_rejected() {
        let err = ColumnMapping::from_json(r#"{ "name": [] }"#).unwrap_err();
        assert!(matches!(err, MappingError::NoNameSource));

        let err = ColumnMapping::from_json(r#"{ "rating": ["x"] }"#).unwrap_err();
        assert!(matches!(err, MappingError::Json(_)));
    }

    #[test]
    fn test_missing_columns() {
        let mapping = ColumnMapping::from_json(r#"{ "name": ["Shop"], "phone": ["Tel", "Phone"] }"#).unwrap();
        let headers = vec!["Shop".to_string(), "Tel".to_string()];
        assert_eq!(mapping.missing_columns(&headers), vec!["Phone"]);
    }

    #[test]
    fn test_source_columns_deduplicated() {
        let mapping = ColumnMapping::google_maps();
        let columns = mapping.source_columns();
        let occurrences = columns.iter().filter(|c| c.as_str() == "AJB7ye").count();
        assert_eq!(occurrences, 1);
        assert!(columns.contains(&"qBF1Pd".to_string()));
    }

    #[test]
    fn test_describe_lists_every_field() {
        let text = ColumnMapping::google_maps().describe();
        for field in Field::ALL {
            assert!(text.contains(field.key()));
        }
        assert!(text.contains("highlights"));
    }
}
