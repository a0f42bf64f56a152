//! Output formatters for HTML and JSON.

mod html;
mod json;

pub use self::json::*;
pub use html::*;

use crate::catalog::Catalog;
use crate::config::PageOptions;
use crate::error::BuildResult;
use crate::models::OutputFormat;

/// Render a catalog in the requested format.
pub fn render(catalog: &Catalog, format: OutputFormat, page: &PageOptions) -> BuildResult<String> {
    match format {
        OutputFormat::Html => Ok(render_page(catalog, page)),
        OutputFormat::Json => render_json(catalog),
    }
}
