//! Normalizer
//!
//! Maps [`RawRecord`]s onto [`Entry`]s through a [`ColumnMapping`]. Rows
//! whose name is empty after cleaning are skipped and reported; every other
//! defect just leaves a field absent. Slugs are assigned later, in source
//! order, by the pipeline.

use super::clean::clean_review_count;
use super::mapping::{ColumnMapping, Field};
use crate::models::{Entry, PLACEHOLDER_IMAGE};
use crate::parser::RawRecord;

/// Result of normalizing a whole dataset
#[derive(Debug, Default)]
pub struct NormalizeResult {
    /// Entries in source order, slugs not yet assigned
    pub entries: Vec<Entry>,
    /// Rows dropped because they had no name
    pub skipped: Vec<SkippedRow>,
}

/// A row that produced no entry
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 0-based data row index
    pub row: usize,
    pub reason: String,
}

impl NormalizeResult {
    /// Summary line for logs
    pub fn summary(&self) -> String {
        format!(
            "Normalized: {} entries, {} skipped",
            self.entries.len(),
            self.skipped.len()
        )
    }
}

/// Normalize every record, keeping source order.
pub fn normalize_all(records: &[RawRecord], mapping: &ColumnMapping) -> NormalizeResult {
    let mut result = NormalizeResult::default();

    for (row, record) in records.iter().enumerate() {
        match normalize_record(record, mapping) {
            Some(entry) => result.entries.push(entry),
            None => result.skipped.push(SkippedRow {
                row,
                reason: "Missing name".to_string(),
            }),
        }
    }

    result
}

/// Normalize one record, or `None` if it has no name.
pub fn normalize_record(record: &RawRecord, mapping: &ColumnMapping) -> Option<Entry> {
    let pick = |field: Field| mapping.source(field).first_non_empty(record);

    let name = pick(Field::Name)?;

    let review_count = mapping
        .review_count
        .columns
        .iter()
        .map(|column| clean_review_count(record.get(column)))
        .find(|value| !value.is_empty());

    Some(Entry {
        name,
        slug: String::new(),
        rating: pick(Field::Rating),
        review_count,
        category: pick(Field::Category),
        address: pick(Field::Address),
        status: pick(Field::Status),
        hours: pick(Field::Hours),
        phone: pick(Field::Phone),
        price: pick(Field::Price),
        image_url: pick(Field::ImageUrl).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        map_url: pick(Field::MapUrl),
        order_url: pick(Field::OrderUrl),
        highlights: mapping.highlights.collect_distinct(record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        RawRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_normalize_full_row() {
        let rec = record(&[
            ("qBF1Pd", " Roll Café "),
            ("MW4etd", "4.8"),
            ("UY7F9", "(1,024)"),
            ("W4Efsd", "Bakery"),
            ("W4Efsd (3)", "\u{e0c8} 1 Main St"),
            ("W4Efsd (4)", "Open"),
            ("W4Efsd (5)", " · Closes 6 PM"),
            ("UsdlK", "02 2345 6789"),
            ("AJB7ye", "$"),
            ("FQ2IWe src", "https://img/1.jpg"),
            ("hfpxzc href", "https://maps/1"),
            ("A1zNzb href (2)", "https://order/1"),
            ("ah5Ghc", "\"Great rolls\""),
        ]);

        let entry = normalize_record(&rec, &ColumnMapping::default()).unwrap();
        assert_eq!(entry.name, "Roll Café");
        assert_eq!(entry.rating.as_deref(), Some("4.8"));
        assert_eq!(entry.review_count.as_deref(), Some("1,024"));
        assert_eq!(entry.category.as_deref(), Some("Bakery"));
        assert_eq!(entry.address.as_deref(), Some("1 Main St"));
        assert_eq!(entry.status.as_deref(), Some("Open"));
        assert_eq!(entry.hours.as_deref(), Some("Closes 6 PM"));
        assert_eq!(entry.phone.as_deref(), Some("02 2345 6789"));
        assert_eq!(entry.price.as_deref(), Some("$"));
        assert_eq!(entry.image_url, "https://img/1.jpg");
        assert_eq!(entry.map_url.as_deref(), Some("https://maps/1"));
        assert_eq!(entry.order_url.as_deref(), Some("https://order/1"));
        assert_eq!(entry.highlights, vec!["Great rolls", "$"]);
        assert!(entry.slug.is_empty());
    }

    #[test]
    fn test_blank_name_is_skipped() {
        let mapping = ColumnMapping::default();
        assert!(normalize_record(&record(&[("qBF1Pd", "")]), &mapping).is_none());
        assert!(normalize_record(&record(&[("qBF1Pd", "   ")]), &mapping).is_none());
        assert!(normalize_record(&record(&[("qBF1Pd", " \" · \" ")]), &mapping).is_none());
        assert!(normalize_record(&record(&[("MW4etd", "4.0")]), &mapping).is_none());
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let entry = normalize_record(&record(&[("qBF1Pd", "Bare")]), &ColumnMapping::default()).unwrap();
        assert_eq!(entry.rating, None);
        assert_eq!(entry.review_count, None);
        assert_eq!(entry.address, None);
        assert_eq!(entry.map_url, None);
        assert_eq!(entry.order_url, None);
        assert!(entry.highlights.is_empty());
    }

    #[test]
    fn test_address_fallback_chain() {
        let mapping = ColumnMapping::default();

        let both = record(&[("qBF1Pd", "A"), ("W4Efsd (3)", "Primary"), ("W4Efsd (6)", "Secondary")]);
        assert_eq!(normalize_record(&both, &mapping).unwrap().address.as_deref(), Some("Primary"));

        let secondary = record(&[("qBF1Pd", "A"), ("W4Efsd (3)", ""), ("W4Efsd (6)", "Secondary")]);
        assert_eq!(normalize_record(&secondary, &mapping).unwrap().address.as_deref(), Some("Secondary"));

        let neither = record(&[("qBF1Pd", "A"), ("W4Efsd (3)", ""), ("W4Efsd (6)", "")]);
        assert_eq!(normalize_record(&neither, &mapping).unwrap().address, None);
    }

    #[test]
    fn test_image_fallback_and_placeholder() {
        let mapping = ColumnMapping::default();

        let secondary = record(&[("qBF1Pd", "A"), ("Jn12ke src", "https://img/2.jpg")]);
        assert_eq!(normalize_record(&secondary, &mapping).unwrap().image_url, "https://img/2.jpg");

        let none = record(&[("qBF1Pd", "A"), ("FQ2IWe src", ""), ("Jn12ke src", " ")]);
        assert_eq!(normalize_record(&none, &mapping).unwrap().image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_price_prefers_second_column() {
        let rec = record(&[("qBF1Pd", "A"), ("AJB7ye", "$"), ("AJB7ye (2)", "$200-400")]);
        let entry = normalize_record(&rec, &ColumnMapping::default()).unwrap();
        assert_eq!(entry.price.as_deref(), Some("$200-400"));
    }

    #[test]
    fn test_repeated_highlight_kept_once() {
        let rec = record(&[
            ("qBF1Pd", "A"),
            ("ah5Ghc", "Cozy seating"),
            ("ah5Ghc (2)", "·"),
            ("ah5Ghc (3)", " Cozy seating "),
            ("J8zHNe", "Dine-in"),
        ]);
        let entry = normalize_record(&rec, &ColumnMapping::default()).unwrap();
        assert_eq!(entry.highlights, vec!["Cozy seating", "Dine-in"]);
    }

    #[test]
    fn test_normalize_all_reports_skips_in_order() {
        let records = vec![
            record(&[("qBF1Pd", "First")]),
            record(&[("qBF1Pd", "")]),
            record(&[("qBF1Pd", "Third")]),
        ];

        let result = normalize_all(&records, &ColumnMapping::default());
        let names: Vec<&str> = result.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
        assert_eq!(result.skipped, vec![SkippedRow { row: 1, reason: "Missing name".into() }]);
        assert_eq!(result.summary(), "Normalized: 2 entries, 1 skipped");
    }

    #[test]
    fn test_custom_mapping() {
        let mapping = ColumnMapping::from_json(
            r#"{ "name": ["Shop"], "address": ["Street"], "highlights": ["Note 1", "Note 2"] }"#,
        )
        .unwrap();
        let rec = record(&[("Shop", "Kanelbulle"), ("Street", "Storgatan 1"), ("Note 1", "Cardamom"), ("Note 2", "Cardamom")]);

        let entry = normalize_record(&rec, &mapping).unwrap();
        assert_eq!(entry.name, "Kanelbulle");
        assert_eq!(entry.address.as_deref(), Some("Storgatan 1"));
        assert_eq!(entry.highlights, vec!["Cardamom"]);
    }
}
