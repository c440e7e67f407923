//! Domain models for the Rollmap pipeline.
//!
//! - [`Entry`] - one normalized shop, ready for rendering
//! - [`PLACEHOLDER_IMAGE`] - image used when a row has none

use serde::{Deserialize, Serialize};

/// Image shown for entries whose row carries no image URL.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/640x360?text=Cinnamon+Roll";

/// Separator used between status and hours, and in card meta lines.
pub const MIDDLE_DOT_SEPARATOR: &str = " · ";

// =============================================================================
// Entry
// =============================================================================

/// A normalized cinnamon-roll shop.
///
/// Optional fields stay `None` when every candidate column was empty; the
/// renderer decides what to display in their place. `image_url` is the one
/// field defaulted at normalization time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Display name (never empty).
    pub name: String,
    /// URL-safe identifier, unique within one generation run.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Business-open state ("Open", "Closed", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Opening hours text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_url: Option<String>,
    /// Feature and review snippets, deduplicated, in source column order.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Entry {
    /// Create an entry with only a name; everything else absent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            ..Default::default()
        }
    }

    /// Highlights joined into one paragraph.
    pub fn description(&self) -> Option<String> {
        if self.highlights.is_empty() {
            None
        } else {
            Some(self.highlights.join(" "))
        }
    }

    /// Status and hours joined with a middle dot, skipping absent parts.
    pub fn status_line(&self) -> Option<String> {
        let parts: Vec<&str> = [self.status.as_deref(), self.hours.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(MIDDLE_DOT_SEPARATOR))
        }
    }

    /// Whether the image is the placeholder rather than a scraped photo.
    pub fn has_placeholder_image(&self) -> bool {
        self.image_url == PLACEHOLDER_IMAGE
    }
}
