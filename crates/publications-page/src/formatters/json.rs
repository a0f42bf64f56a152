//! JSON output of the grouped catalog.

use serde_json::{Value, json};

use crate::catalog::Catalog;
use crate::error::BuildResult;
use crate::models::Entry;

/// Create a compact entry representation for JSON output.
///
/// Empty optional fields are left out; passthrough columns appear under `extra`.
#[must_use]
pub fn compact_entry(entry: &Entry) -> Value {
    let mut obj = json!({
        "section": entry.section,
        "title": entry.title,
        "sortYear": entry.sort_year,
    });

    let optional = [
        ("year", &entry.year),
        ("status", &entry.status),
        ("authors", &entry.authors),
        ("venue", &entry.venue),
        ("paperUrl", &entry.paper_url),
        ("slidesUrl", &entry.slides_url),
        ("doiUrl", &entry.doi_url),
        ("abstract", &entry.r#abstract),
        ("bibtex", &entry.bibtex),
        ("comment", &entry.comment),
        ("paperLabel", &entry.paper_label),
    ];
    for (key, value) in optional {
        if !value.is_empty() {
            obj[key] = json!(value);
        }
    }

    if !entry.media.is_empty() {
        obj["media"] = json!(entry.media);
    }

    if !entry.extra.is_empty() {
        obj["extra"] = json!(entry.extra);
    }

    obj
}

/// Create the JSON document for a whole catalog.
#[must_use]
pub fn catalog_json(catalog: &Catalog) -> Value {
    let sections: Vec<Value> = catalog
        .groups()
        .iter()
        .map(|group| {
            json!({
                "section": group.section,
                "heading": group.section.heading(),
                "entries": group.entries.iter().map(compact_entry).collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "sections": sections,
        "total": catalog.len(),
        "skipped": catalog.skipped(),
    })
}

/// Render a catalog as pretty-printed JSON with a trailing newline.
pub fn render_json(catalog: &Catalog) -> BuildResult<String> {
    let mut out = serde_json::to_string_pretty(&catalog_json(catalog))?;
    out.push('\n');
    Ok(out)
}
