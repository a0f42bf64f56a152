//! Build pipeline: locate the CSV, classify, render, write.

use std::fs;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::BuildResult;
use crate::formatters;
use crate::models::Section;
use crate::reader;

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// File that was written.
    pub output: PathBuf,

    /// Number of entries on the page.
    pub entries: usize,

    /// Rows dropped under the skip policy.
    pub skipped: usize,

    /// Entry count per rendered section, in page order.
    pub sections: Vec<(Section, usize)>,
}

/// Read, classify and render without touching the output file.
pub fn render_document(config: &Config) -> BuildResult<(Catalog, String)> {
    let records = reader::read_rows_from_path(&config.input)?;
    let catalog = Catalog::build(records, config.row_policy)?;
    let document = formatters::render(&catalog, config.format, &config.page)?;
    Ok((catalog, document))
}

/// Build the publications page described by `config`.
///
/// The output file is written in one go, and only once rendering has
/// succeeded; a failed build leaves any previous output untouched.
pub fn build(config: &Config) -> BuildResult<BuildSummary> {
    tracing::info!(
        input = %config.input.display(),
        format = ?config.format,
        policy = ?config.row_policy,
        "Building publications page"
    );

    let (catalog, document) = render_document(config)?;
    fs::write(&config.output, document)?;

    let summary = BuildSummary {
        output: config.output.clone(),
        entries: catalog.len(),
        skipped: catalog.skipped(),
        sections: catalog.groups().iter().map(|g| (g.section, g.entries.len())).collect(),
    };

    for (section, count) in &summary.sections {
        tracing::debug!(%section, count, "Rendered section");
    }
    if summary.skipped > 0 {
        tracing::warn!(skipped = summary.skipped, "Some rows were skipped");
    }

    Ok(summary)
}
