//! Static HTML rendering.
//!
//! - `templates`: index and detail pages
//! - `assets`: the shared stylesheet
//! - `site`: output directory layout and file writing

pub mod assets;
pub mod site;
pub mod templates;

pub use assets::STYLESHEET;
pub use site::{entry_page_path, write_assets, write_site};
pub use templates::{render_entry, render_index, snippet, SiteMeta, SNIPPET_CHARS};
