//! HTML templates for the index and detail pages.
//!
//! Markup is built with `maud`, which escapes every interpolated value, in
//! text and attribute position alike. Missing optional fields are replaced
//! here with display placeholders; the entries themselves keep `None`.

use maud::{html, Markup, DOCTYPE};

use super::assets::{ASSETS_DIR, STYLESHEET_FILE};
use crate::models::{Entry, MIDDLE_DOT_SEPARATOR};

/// Characters of description shown on an index card.
pub const SNIPPET_CHARS: usize = 80;

const LANG: &str = "zh-Hant";

const NO_RATING: &str = "N/A";
const NO_REVIEWS: &str = "尚無評論";
const NO_CATEGORY: &str = "未分類";
const NO_ADDRESS: &str = "地址未提供";
const NO_STATUS: &str = "尚未提供營業資訊";
const NO_VALUE: &str = "—";
const NO_SNIPPET: &str = "這裡有好吃的肉桂捲，快來看看！";
const NO_HIGHLIGHTS: &str = "還沒有額外的重點資訊。";

const BACK_TO_INDEX: &str = "← 回到列表";
const MAP_LINK: &str = "地圖 / 導航";
const ORDER_LINK: &str = "線上點餐 / 連結";
const HIGHLIGHTS_HEADING: &str = "重點與留言";

/// Site-wide text shared by every page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMeta {
    pub title: String,
    pub tagline: String,
    /// Source file name, shown in the index footer
    pub source: Option<String>,
    /// Generation date, shown in the index footer
    pub generated_on: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "肉桂捲地圖".to_string(),
            tagline: "在 GitHub Pages 上快速瀏覽每一款肉桂捲資訊。".to_string(),
            source: None,
            generated_on: None,
        }
    }
}

fn layout(title: &str, asset_prefix: &str, body: Markup) -> Markup {
    let stylesheet = format!("{}{}/{}", asset_prefix, ASSETS_DIR, STYLESHEET_FILE);
    html! {
        (DOCTYPE)
        html lang=(LANG) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                (body)
            }
        }
    }
}

/// "4.8 ★ · 1,024 則評論", with placeholders for missing parts.
fn rating_summary(entry: &Entry) -> String {
    let rating = entry.rating.as_deref().unwrap_or(NO_RATING);
    match entry.review_count.as_deref() {
        Some(count) => format!("{} ★{}{} 則評論", rating, MIDDLE_DOT_SEPARATOR, count),
        None => format!("{} ★{}{}", rating, MIDDLE_DOT_SEPARATOR, NO_REVIEWS),
    }
}

/// Description cut to [`SNIPPET_CHARS`] characters.
pub fn snippet(entry: &Entry) -> String {
    let Some(description) = entry.description() else {
        return NO_SNIPPET.to_string();
    };

    if description.chars().count() <= SNIPPET_CHARS {
        description
    } else {
        let cut: String = description.chars().take(SNIPPET_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}

/// Labelled facts for the detail page, placeholders included.
fn facts(entry: &Entry) -> Vec<(&'static str, String)> {
    let or = |value: &Option<String>, placeholder: &str| {
        value.clone().unwrap_or_else(|| placeholder.to_string())
    };

    vec![
        ("評分", rating_summary(entry)),
        ("分類", or(&entry.category, NO_CATEGORY)),
        ("地址", or(&entry.address, NO_ADDRESS)),
        ("營業狀態", entry.status_line().unwrap_or_else(|| NO_STATUS.to_string())),
        ("電話", or(&entry.phone, NO_VALUE)),
        ("價位 / 備註", or(&entry.price, NO_VALUE)),
    ]
}

fn card(entry: &Entry) -> Markup {
    let href = format!("{}/", entry.slug);
    html! {
        article.card {
            a href=(href) {
                img src=(entry.image_url) alt=(entry.name) loading="lazy";
            }
            div.content {
                div {
                    span.chip { (rating_summary(entry)) }
                    span.chip { (entry.category.as_deref().unwrap_or(NO_CATEGORY)) }
                }
                h2 {
                    a href=(href) { (entry.name) }
                }
                p.meta { (entry.address.as_deref().unwrap_or(NO_ADDRESS)) }
                p.snippet { (snippet(entry)) }
            }
        }
    }
}

/// Render the index page: one card per entry, in the given order.
pub fn render_index(entries: &[Entry], meta: &SiteMeta) -> String {
    let body = html! {
        header.site-header {
            h1 { (meta.title) }
            p { (meta.tagline) }
        }
        main.grid {
            @for entry in entries {
                (card(entry))
            }
        }
        footer.site-footer {
            "共 " (entries.len()) " 間店家"
            @if let Some(source) = &meta.source {
                (MIDDLE_DOT_SEPARATOR) "資料來源 " (source)
            }
            @if let Some(date) = &meta.generated_on {
                (MIDDLE_DOT_SEPARATOR) "更新於 " (date)
            }
        }
    };

    layout(&meta.title, "", body).into_string()
}

/// Render the detail page for one entry.
///
/// The page lives in `<slug>/index.html`, so links to the index and the
/// shared assets go one level up.
pub fn render_entry(entry: &Entry, meta: &SiteMeta) -> String {
    let page_title = format!("{}{}{}", entry.name, MIDDLE_DOT_SEPARATOR, meta.title);
    let has_actions = entry.map_url.is_some() || entry.order_url.is_some();

    let body = html! {
        header.site-header {
            p {
                a href="../" { (BACK_TO_INDEX) }
            }
        }
        div.page {
            div.hero-image {
                img src=(entry.image_url) alt=(entry.name);
            }
            h1 { (entry.name) }
            @if has_actions {
                div.button-row {
                    @if let Some(url) = &entry.map_url {
                        a.button href=(url) target="_blank" rel="noopener" { (MAP_LINK) }
                    }
                    @if let Some(url) = &entry.order_url {
                        a.button.secondary href=(url) target="_blank" rel="noopener" { (ORDER_LINK) }
                    }
                }
            }
            section.facts {
                @for (label, value) in facts(entry) {
                    div.fact {
                        strong { (label) }
                        (value)
                    }
                }
            }
            h2 { (HIGHLIGHTS_HEADING) }
            ul.list {
                @for item in &entry.highlights {
                    li { (item) }
                }
                @if entry.highlights.is_empty() {
                    li { (NO_HIGHLIGHTS) }
                }
            }
            a.back-link href="../" { (BACK_TO_INDEX) }
        }
    };

    layout(&page_title, "../", body).into_string()
}
