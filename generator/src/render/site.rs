//! Writes the generated site to disk.
//!
//! ```text
//! <output>/
//! ├── index.html
//! ├── assets/styles.css
//! ├── data/rolls.json        (only with a raw dump)
//! └── <slug>/index.html      (one per entry)
//! ```
//!
//! Every file is overwritten unconditionally; directories are created as
//! needed. Pages left over from earlier runs are not removed.

use std::fs;
use std::path::{Path, PathBuf};

use super::assets::{ASSETS_DIR, STYLESHEET, STYLESHEET_FILE};
use super::templates::{render_entry, render_index, SiteMeta};
use crate::error::{RenderError, RenderResult};
use crate::models::Entry;
use crate::parser::RawDump;

const PAGE_FILE: &str = "index.html";
const DATA_DIR: &str = "data";
const DUMP_FILE: &str = "rolls.json";

fn write_file(path: &Path, content: &str) -> RenderResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| RenderError::io(path, e))
}

/// Write the stylesheet asset, returning its path.
pub fn write_assets(output_dir: &Path) -> RenderResult<PathBuf> {
    let path = output_dir.join(ASSETS_DIR).join(STYLESHEET_FILE);
    write_file(&path, STYLESHEET)?;
    Ok(path)
}

/// Path of an entry's detail page under `output_dir`.
pub fn entry_page_path(output_dir: &Path, entry: &Entry) -> PathBuf {
    output_dir.join(&entry.slug).join(PAGE_FILE)
}

/// Write the whole site and return every path written, index first.
pub fn write_site(
    output_dir: &Path,
    entries: &[Entry],
    meta: &SiteMeta,
    dump: Option<&RawDump>,
) -> RenderResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(entries.len() + 3);

    let index_path = output_dir.join(PAGE_FILE);
    write_file(&index_path, &render_index(entries, meta))?;
    written.push(index_path);

    written.push(write_assets(output_dir)?);

    for entry in entries {
        let path = entry_page_path(output_dir, entry);
        write_file(&path, &render_entry(entry, meta))?;
        written.push(path);
    }

    if let Some(dump) = dump {
        let path = output_dir.join(DATA_DIR).join(DUMP_FILE);
        write_file(&path, &dump.to_json()?)?;
        written.push(path);
    }

    Ok(written)
}
